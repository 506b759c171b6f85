use std::io;

use onewaysms::{ClientConfig, CheckTransactionStatus, MtId, OneWayClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::new(
        &required_env("ONEWAYSMS_BASE_URL")?,
        required_env("ONEWAYSMS_USERNAME")?,
        required_env("ONEWAYSMS_PASSWORD")?,
        required_env("ONEWAYSMS_SENDER_ID")?,
    )?;
    let mt_id = MtId::new(required_env("ONEWAYSMS_MT_ID")?.trim().parse::<i64>()?)?;

    let client = OneWayClient::new(config);
    let response = client.check_transaction_status(CheckTransactionStatus::new(mt_id))?;
    println!("mt {mt_id}: {:?}", response.status);

    Ok(())
}
