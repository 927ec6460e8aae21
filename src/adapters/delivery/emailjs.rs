use crate::config::DeliveryConfig;
use crate::domain::DeliveryPayload;
use crate::services::delivery::{DeliveryError, DeliveryProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

/// Sends messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsProvider {
    client: Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
    private_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a DeliveryPayload,
}

impl EmailJsProvider {
    #[must_use]
    pub fn new(client: Client, config: &DeliveryConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            private_key: config.private_key.clone(),
        }
    }

    /// Builds a provider with its own HTTP client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn from_config(config: &DeliveryConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(concat!("portfolio-contact/", env!("CARGO_PKG_VERSION"))).build()?;
        Ok(Self::new(client, config))
    }
}

#[async_trait]
impl DeliveryProvider for EmailJsProvider {
    #[tracing::instrument(level = "debug", skip_all, fields(service_id = %self.service_id, template_id = %self.template_id))]
    async fn deliver(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        let request = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            access_token: self.private_key.as_deref(),
            template_params: payload,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| DeliveryError::Other(anyhow::Error::new(e).context("Failed to reach delivery service")))?;

        let status = response.status();
        // The body is informational on success ("OK") and carries the reason on failure.
        let detail = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(status = status.as_u16(), error = %e, "Failed to read delivery service response body");
                String::new()
            }
        };

        if status.is_success() {
            tracing::debug!(status = status.as_u16(), response = %detail, "Delivery service accepted message");
            return Ok(());
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!(status = status.as_u16(), response = %detail, "Delivery service refused credentials");
                Err(DeliveryError::Unauthorized { status: status.as_u16() })
            }
            _ => Err(DeliveryError::Rejected { status: status.as_u16(), detail }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let payload = DeliveryPayload {
            from_name: "Alice".to_string(),
            from_email: "a@x.com".to_string(),
            to_email: "owner@example.com".to_string(),
            message: "Hi".to_string(),
            timestamp: "10/19/2026, 3:04:05 PM".to_string(),
        };
        let request = SendRequest {
            service_id: "service_1",
            template_id: "template_1",
            user_id: "public_1",
            access_token: None,
            template_params: &payload,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["service_id"], "service_1");
        assert_eq!(value["user_id"], "public_1");
        assert!(value.get("accessToken").is_none());
        assert_eq!(value["template_params"]["from_email"], "a@x.com");
        assert_eq!(value["template_params"]["to_email"], "owner@example.com");
    }
}
