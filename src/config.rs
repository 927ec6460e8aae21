use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Send one contact message through the delivery service
    Send {
        /// Sender name
        #[arg(long)]
        name: String,

        /// Sender email address
        #[arg(long)]
        email: String,

        /// Message body
        #[arg(long)]
        message: String,
    },
    /// Print the locally stored submission history, newest first
    History,
}

impl Cli {
    pub fn load() -> Self {
        Self::parse()
    }
}

#[derive(Clone, Debug, Default, Args)]
pub struct Config {
    #[command(flatten)]
    pub delivery: DeliveryConfig,

    #[command(flatten)]
    pub history: HistoryConfig,

    #[command(flatten)]
    pub notice: NoticeConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct DeliveryConfig {
    /// Delivery service endpoint
    #[arg(
        long = "delivery-endpoint",
        env = "PORTFOLIO_CONTACT_DELIVERY_ENDPOINT",
        default_value = "https://api.emailjs.com/api/v1.0/email/send"
    )]
    pub endpoint: String,

    /// Service identifier registered with the delivery service
    #[arg(long, env = "PORTFOLIO_CONTACT_SERVICE_ID", default_value = "")]
    pub service_id: String,

    /// Template identifier registered with the delivery service
    #[arg(long, env = "PORTFOLIO_CONTACT_TEMPLATE_ID", default_value = "")]
    pub template_id: String,

    /// Public credential required by the delivery service
    #[arg(long, env = "PORTFOLIO_CONTACT_PUBLIC_KEY", default_value = "")]
    pub public_key: String,

    /// Optional private access token for the delivery service
    #[arg(long, env = "PORTFOLIO_CONTACT_PRIVATE_KEY")]
    pub private_key: Option<String>,

    /// Fixed destination address every message is delivered to
    #[arg(long, env = "PORTFOLIO_CONTACT_TO_EMAIL", default_value = "")]
    pub to_email: String,

    /// Upper bound on a single outbound delivery call
    #[arg(long = "delivery-timeout-secs", env = "PORTFOLIO_CONTACT_DELIVERY_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.emailjs.com/api/v1.0/email/send".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            private_key: None,
            to_email: String::new(),
            timeout_secs: 15,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct HistoryConfig {
    /// Directory holding the persisted key/value files
    #[arg(long = "history-dir", env = "PORTFOLIO_CONTACT_HISTORY_DIR", default_value = ".portfolio-contact")]
    pub dir: String,

    /// Storage key the history list lives under
    #[arg(long = "history-key", env = "PORTFOLIO_CONTACT_HISTORY_KEY", default_value = "contact_history")]
    pub key: String,

    /// Maximum number of records retained (0 keeps everything)
    #[arg(long = "history-max-records", env = "PORTFOLIO_CONTACT_HISTORY_MAX_RECORDS", default_value_t = 100)]
    pub max_records: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { dir: ".portfolio-contact".to_string(), key: "contact_history".to_string(), max_records: 100 }
    }
}

#[derive(Clone, Debug, Args)]
pub struct NoticeConfig {
    /// How long a success or failure notice stays visible
    #[arg(long = "notice-display-ms", env = "PORTFOLIO_CONTACT_NOTICE_DISPLAY_MS", default_value_t = 3000)]
    pub display_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self { display_ms: 3000 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "PORTFOLIO_CONTACT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP collector endpoint; traces and metrics are exported only when set
    #[arg(long, env = "PORTFOLIO_CONTACT_OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}
