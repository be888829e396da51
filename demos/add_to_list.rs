use std::io;

use burstsms::{AddToList, BurstSmsClient, Config, CustomFields, ListId, MemberDetails, Msisdn};
use tracing_subscriber::EnvFilter;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let list_id: u64 = required("BURSTSMS_LIST_ID")?.parse()?;
    let msisdn = Msisdn::new(required("BURSTSMS_MSISDN")?)?;

    let mut fields = CustomFields::new();
    if let Ok(tier) = std::env::var("BURSTSMS_TIER") {
        fields.insert("1", tier)?;
    }

    let client = BurstSmsClient::new(Config::from_env()?);
    let request = AddToList {
        details: MemberDetails {
            first_name: std::env::var("BURSTSMS_FIRST_NAME").ok(),
            fields,
            ..Default::default()
        },
        ..AddToList::new(ListId::new(list_id), msisdn)
    };

    let response = client.add_to_list(request).await?;
    println!("{response:#}");

    Ok(())
}
