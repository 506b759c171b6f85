use serde::Deserialize;
use url::Url;

use crate::domain::{ApiPassword, ApiUsername, SenderId, ValidationError};

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawClientConfig")]
/// Static settings shared by every call of a [`crate::OneWayClient`].
///
/// Deserializing runs the same validation as [`ClientConfig::new`].
pub struct ClientConfig {
    base_url: Url,
    api_username: ApiUsername,
    api_password: ApiPassword,
    sender_id: SenderId,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClientConfig {
    base_url: String,
    api_username: String,
    api_password: String,
    sender_id: String,
}

impl TryFrom<RawClientConfig> for ClientConfig {
    type Error = ValidationError;

    fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
        Self::new(
            &raw.base_url,
            raw.api_username,
            raw.api_password,
            raw.sender_id,
        )
    }
}

impl ClientConfig {
    /// Validate and bundle the gateway base URL, credentials, and default sender id.
    ///
    /// `base_url` must be an absolute `http`/`https` URL, e.g.
    /// `https://gateway.onewaysms.sg:10002`. Any query or fragment is dropped.
    pub fn new(
        base_url: &str,
        api_username: impl Into<String>,
        api_password: impl Into<String>,
        sender_id: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_username: ApiUsername::new(api_username)?,
            api_password: ApiPassword::new(api_password)?,
            sender_id: SenderId::new(sender_id)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_username(&self) -> &ApiUsername {
        &self.api_username
    }

    pub fn api_password(&self) -> &ApiPassword {
        &self.api_password
    }

    pub fn sender_id(&self) -> &SenderId {
        &self.sender_id
    }

    pub(crate) fn push_credentials(&self, params: &mut Vec<(String, String)>) {
        params.push((
            ApiUsername::FIELD.to_owned(),
            self.api_username.as_str().to_owned(),
        ));
        params.push((
            ApiPassword::FIELD.to_owned(),
            self.api_password.as_str().to_owned(),
        ));
    }

    /// `<base_url>/<path>?<params>` with form-urlencoded params.
    pub(crate) fn endpoint_url(&self, path: &str, params: &[(String, String)]) -> Url {
        let mut url = self.base_url.clone();
        // Always `Ok`: cannot-be-a-base URLs are rejected in `parse_base_url`.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(path);
        }
        url.query_pairs_mut().clear().extend_pairs(params);
        url
    }
}

fn parse_base_url(input: &str) -> Result<Url, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidBaseUrl {
        input: input.to_owned(),
        reason: reason.to_owned(),
    };

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field: "base_url" });
    }

    let mut url = Url::parse(trimmed).map_err(|err| invalid(&err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be used as a base"));
    }
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
