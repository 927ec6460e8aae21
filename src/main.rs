#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stderr)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]

use portfolio_contact::config::{Cli, Command};
use portfolio_contact::domain::DraftField;
use portfolio_contact::services::SubmitOutcome;
use portfolio_contact::{AppBuilder, telemetry};
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::load();
    let telemetry_guard = telemetry::init_telemetry(&cli.config.telemetry)?;

    let form = AppBuilder::new(cli.config.clone()).build().instrument(tracing::info_span!("boot")).await?;

    let result = match cli.command {
        Command::Send { name, email, message } => {
            form.set_field(DraftField::Name, name);
            form.set_field(DraftField::Email, email);
            form.set_field(DraftField::Message, message);

            if form.draft().is_complete() {
                match form.submit().await {
                    SubmitOutcome::Delivered(record) => {
                        println!("Message sent at {}", record.timestamp);
                        Ok(())
                    }
                    SubmitOutcome::Failed { reason } => Err(anyhow::anyhow!(reason)),
                    SubmitOutcome::AlreadySubmitting => Err(anyhow::anyhow!("a submission is already in flight")),
                }
            } else {
                Err(anyhow::anyhow!("name, email and message are all required"))
            }
        }
        Command::History => {
            let records = form.history().list().await;
            if records.is_empty() {
                println!("No messages sent yet.");
            }
            for record in records {
                println!("[{}] {} <{}>\n  {}", record.timestamp, record.name, record.email, record.message);
            }
            Ok(())
        }
    };

    telemetry_guard.shutdown();
    result
}
