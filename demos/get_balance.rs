use burstsms::{BurstSmsClient, BurstSmsError, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = BurstSmsClient::new(Config::from_env()?);
    match client.get_balance().await {
        Ok(body) => println!("balance: {} {}", body["balance"], body["currency"]),
        Err(BurstSmsError::Api(err)) if err.code.is_auth_failure() => {
            eprintln!("check BURSTSMS_USERNAME / BURSTSMS_PASSWORD: {err}");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
