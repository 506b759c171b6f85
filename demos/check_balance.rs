use std::io;
use std::time::Duration;

use onewaysms::{ClientConfig, OneWayClient};

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

    let client = OneWayClient::builder(config)
        .timeout(Duration::from_secs(10))
        .build()?;
    match client.check_credit_balance() {
        Ok(response) => println!("balance: {}", response.balance),
        Err(err) => {
            if let Some(code) = err.gateway_code() {
                eprintln!("gateway rejected request: {code}");
            }
            return Err(err.into());
        }
    }

    Ok(())
}
