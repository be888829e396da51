use std::io;

use burstsms::{BurstSmsClient, Config, MessageText, Msisdn, SendOptions, SendSms};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let to = std::env::var("BURSTSMS_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "BURSTSMS_TO environment variable is required",
        )
    })?;
    let message = std::env::var("BURSTSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the burstsms send_sms demo.".to_owned());

    let client = BurstSmsClient::new(Config::from_env()?);
    let recipients = to
        .split(',')
        .map(Msisdn::new)
        .collect::<Result<Vec<_>, _>>()?;
    let request = SendSms::to_numbers(recipients, MessageText::new(message)?, SendOptions::default())?;

    let response = client.send_sms(request).await?;
    println!("message_id: {}", response["message_id"]);

    Ok(())
}
