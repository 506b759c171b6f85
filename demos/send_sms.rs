use std::io;

use onewaysms::{ClientConfig, MessageText, MobileNumber, OneWayClient, SendSms};

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
    let phones_raw = required_env("ONEWAYSMS_PHONES")?;
    let message = std::env::var("ONEWAYSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the onewaysms example.".to_owned());

    let recipients = phones_raw
        .split(',')
        .map(MobileNumber::new)
        .collect::<Result<Vec<_>, _>>()?;
    let mut request = SendSms::new(recipients, MessageText::new(message)?)?;
    if let Ok(code) = std::env::var("ONEWAYSMS_LANGUAGE_TYPE") {
        request = request.with_language_code(&code)?;
    }

    let client = OneWayClient::new(config);
    let response = client.send_sms(request)?;
    println!("mt ids: {:?}", response.mt_ids);

    Ok(())
}
