//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod config;
mod error;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    CheckTransactionStatus, CheckTransactionStatusResponse, CreditBalanceResponse, ErrorCode,
    SendSms, SendSmsResponse,
};
use crate::transport;

pub use config::ClientConfig;
pub use error::{GatewayError, OneWayError};

/// `User-Agent` sent by [`ReqwestTransport`] unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("onewaysms-rust/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status and body of one HTTP response.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one blocking HTTP GET.
///
/// Implement this to plug in a different HTTP client; deadlines and proxies are
/// the implementation's business.
pub trait HttpTransport: Send + Sync {
    fn get(&self, url: &Url) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
/// Default [`HttpTransport`] backed by a blocking `reqwest` client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
    user_agent: String,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::blocking::Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }
}

impl Default for ReqwestTransport {
    /// Panics where `reqwest::blocking::Client::new` does; see [`OneWayClient::new`].
    fn default() -> Self {
        Self::new(reqwest::blocking::Client::new(), DEFAULT_USER_AGENT)
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Clone)]
/// Builder for [`OneWayClient`].
///
/// `timeout` and `user_agent` configure the default [`ReqwestTransport`] and are
/// ignored when a custom transport is supplied.
pub struct OneWayClientBuilder {
    config: ClientConfig,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl OneWayClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport instead of `reqwest`.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> Result<OneWayClient, OneWayError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::blocking::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|err| OneWayError::Transport(Box::new(err)))?;
                let user_agent = self
                    .user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());
                Arc::new(ReqwestTransport::new(client, user_agent)) as Arc<dyn HttpTransport>
            }
        };

        Ok(OneWayClient {
            config: self.config,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level OneWaySMS client.
///
/// Every call is one blocking GET against `<base_url>/<endpoint>`:
/// - `api.aspx` for [`OneWayClient::send_sms`],
/// - `bulktrx.aspx` for [`OneWayClient::check_transaction_status`],
/// - `bulkcredit.aspx` for [`OneWayClient::check_credit_balance`].
///
/// The client holds no mutable state and can be shared across threads.
pub struct OneWayClient {
    config: ClientConfig,
    http: Arc<dyn HttpTransport>,
}

impl OneWayClient {
    /// Create a client with the default `reqwest` transport.
    ///
    /// # Panics
    ///
    /// `reqwest`'s blocking client panics when created inside an async runtime or
    /// when the TLS backend cannot be initialized. Use [`OneWayClient::builder`],
    /// whose `build` returns that failure as [`OneWayError::Transport`], or
    /// [`OneWayClient::with_transport`] from async code.
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::default())
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: impl HttpTransport + 'static) -> Self {
        Self {
            config,
            http: Arc::new(transport),
        }
    }

    pub fn builder(config: ClientConfig) -> OneWayClientBuilder {
        OneWayClientBuilder::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send an SMS to every recipient of `request`.
    ///
    /// Unicode messages (explicit or detected) are sent as hex codepoints.
    ///
    /// Errors:
    /// - [`OneWayError::Transport`] when the request could not be made,
    /// - [`OneWayError::Gateway`] with [`ErrorCode::RequestFailure`] for a non-200 status,
    /// - [`OneWayError::Gateway`] with the mapped code when the body is an error code.
    pub fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, OneWayError> {
        let mut params = Vec::<(String, String)>::new();
        self.config.push_credentials(&mut params);
        params.extend(transport::encode_send_sms_query(
            self.config.sender_id(),
            &request,
        ));

        let response = self.get(transport::SEND_SMS_PATH, &params)?;
        if response.status != 200 {
            return Err(rejected(
                transport::SEND_SMS_PATH,
                ErrorCode::RequestFailure,
                response.status,
            ));
        }

        let parsed = transport::decode_send_sms_response(&response.body)
            .map_err(|code| rejected(transport::SEND_SMS_PATH, code, response.status))?;
        tracing::debug!(count = parsed.mt_ids.len(), "OneWaySMS accepted message");
        Ok(parsed)
    }

    /// Check the delivery status of an MT id returned by [`OneWayClient::send_sms`].
    ///
    /// The HTTP status is not checked; it is reported on any resulting
    /// [`GatewayError`].
    pub fn check_transaction_status(
        &self,
        request: CheckTransactionStatus,
    ) -> Result<CheckTransactionStatusResponse, OneWayError> {
        let params = transport::encode_check_status_query(&request);
        let response = self.get(transport::CHECK_STATUS_PATH, &params)?;

        transport::decode_check_status_response(&response.body)
            .map_err(|code| rejected(transport::CHECK_STATUS_PATH, code, response.status))
    }

    /// Fetch the remaining credit balance of the configured account.
    pub fn check_credit_balance(&self) -> Result<CreditBalanceResponse, OneWayError> {
        let mut params = Vec::<(String, String)>::new();
        self.config.push_credentials(&mut params);
        let response = self.get(transport::CREDIT_BALANCE_PATH, &params)?;

        transport::decode_credit_balance_response(&response.body)
            .map_err(|code| rejected(transport::CREDIT_BALANCE_PATH, code, response.status))
    }

    fn get(
        &self,
        endpoint: &'static str,
        params: &[(String, String)],
    ) -> Result<HttpResponse, OneWayError> {
        let url = self.config.endpoint_url(endpoint, params);
        // The query holds credentials; log the endpoint only.
        tracing::debug!(endpoint, "sending OneWaySMS request");

        let response = self.http.get(&url).map_err(|err| {
            tracing::debug!(endpoint, error = %err, "OneWaySMS transport failure");
            OneWayError::Transport(err)
        })?;

        tracing::debug!(endpoint, status = response.status, "received OneWaySMS response");
        Ok(response)
    }
}

fn rejected(endpoint: &'static str, code: ErrorCode, status: u16) -> OneWayError {
    tracing::warn!(endpoint, %code, status, "OneWaySMS request failed");
    GatewayError::new(code, status).into()
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use httpmock::prelude::*;

    use crate::domain::{
        LanguageType, MessageText, MobileNumber, MtId, TransactionStatus, ValidationError,
    };

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        requests: Vec<Url>,
        response_status: u16,
        response_body: String,
        fail: bool,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    requests: Vec::new(),
                    response_status,
                    response_body: response_body.into(),
                    fail: false,
                })),
            }
        }

        fn failing() -> Self {
            let transport = Self::new(0, "");
            transport.state.lock().unwrap().fail = true;
            transport
        }

        fn requests(&self) -> Vec<Url> {
            self.state.lock().unwrap().requests.clone()
        }

        fn last_request(&self) -> (String, Vec<(String, String)>) {
            let requests = self.requests();
            let url = requests.last().expect("no request recorded").clone();
            let params = url.query_pairs().into_owned().collect();
            let mut without_query = url;
            without_query.set_query(None);
            (without_query.to_string(), params)
        }
    }

    impl HttpTransport for FakeTransport {
        fn get(&self, url: &Url) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
            let mut state = self.state.lock().unwrap();
            state.requests.push(url.clone());
            if state.fail {
                return Err(Box::new(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )));
            }
            Ok(HttpResponse {
                status: state.response_status,
                body: state.response_body.clone(),
            })
        }
    }

    fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    fn config(base_url: &str) -> ClientConfig {
        ClientConfig::new(base_url, "user", "pass", "ACME").unwrap()
    }

    fn make_client(transport: FakeTransport) -> OneWayClient {
        OneWayClient::with_transport(config("https://gateway.example.invalid"), transport)
    }

    fn hello_request() -> SendSms {
        SendSms::new(
            vec![MobileNumber::new("60123456789").unwrap()],
            MessageText::new("Hello World").unwrap(),
        )
        .unwrap()
    }

    fn assert_gateway(err: OneWayError, code: ErrorCode, status: u16) {
        match err {
            OneWayError::Gateway(err) => {
                assert_eq!(err.code(), code);
                assert_eq!(err.status(), status);
                assert_eq!(err.message(), code.message());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn send_sms_builds_query_and_parses_single_id() {
        let transport = FakeTransport::new(200, "145712468");
        let client = make_client(transport.clone());

        let response = client.send_sms(hello_request()).unwrap();
        assert_eq!(response.mt_ids, vec![145_712_468]);

        let (url, params) = transport.last_request();
        assert_eq!(url, "https://gateway.example.invalid/api.aspx");
        assert_eq!(
            params,
            vec![
                ("apiusername".to_owned(), "user".to_owned()),
                ("apipassword".to_owned(), "pass".to_owned()),
                ("senderid".to_owned(), "ACME".to_owned()),
                ("mobileno".to_owned(), "60123456789".to_owned()),
                ("languagetype".to_owned(), "1".to_owned()),
                ("message".to_owned(), "Hello World".to_owned()),
            ]
        );
    }

    #[test]
    fn send_sms_parses_multiple_ids() {
        let transport = FakeTransport::new(200, "145712468,145712469");
        let client = make_client(transport.clone());

        let request = SendSms::new(
            vec![
                MobileNumber::new("60123456789").unwrap(),
                MobileNumber::new("6581234567").unwrap(),
            ],
            MessageText::new("Hello World").unwrap(),
        )
        .unwrap();
        let response = client.send_sms(request).unwrap();
        assert_eq!(response.mt_ids, vec![145_712_468, 145_712_469]);

        let (_, params) = transport.last_request();
        assert_param(&params, "mobileno", "60123456789,6581234567");
    }

    #[test]
    fn send_sms_hex_encodes_detected_unicode() {
        let transport = FakeTransport::new(200, "1");
        let client = make_client(transport.clone());

        let request = SendSms::new(
            vec![MobileNumber::new("60123456789").unwrap()],
            MessageText::new("Helló").unwrap(),
        )
        .unwrap();
        client.send_sms(request).unwrap();

        let (_, params) = transport.last_request();
        assert_param(&params, "languagetype", "2");
        assert_param(&params, "message", "00480065006C006C00F3");
    }

    #[test]
    fn send_sms_honors_explicit_language() {
        let transport = FakeTransport::new(200, "1");
        let client = make_client(transport.clone());

        client
            .send_sms(hello_request().with_language(LanguageType::Unicode))
            .unwrap();
        let (_, params) = transport.last_request();
        assert_param(&params, "languagetype", "2");
        assert_param(&params, "message", "00480065006C006C006F00200057006F0072006C0064");
    }

    #[test]
    fn send_sms_maps_non_200_to_request_failure() {
        let transport = FakeTransport::new(500, "145712468");
        let client = make_client(transport);

        let err = client.send_sms(hello_request()).unwrap_err();
        assert_gateway(err, ErrorCode::RequestFailure, 500);
    }

    #[test]
    fn send_sms_maps_error_codes() {
        let cases = [
            ("-100", ErrorCode::InvalidCredentials),
            ("-200", ErrorCode::InvalidSenderId),
            ("-300", ErrorCode::InvalidMobileNo),
            ("-400", ErrorCode::InvalidLanguageType),
            ("-500", ErrorCode::InvalidMessageCharacters),
            ("-600", ErrorCode::InsufficientCreditBalance),
            ("-999", ErrorCode::UnknownError),
            ("not a number", ErrorCode::UnknownError),
        ];
        for (body, code) in cases {
            let client = make_client(FakeTransport::new(200, body));
            let err = client.send_sms(hello_request()).unwrap_err();
            assert_gateway(err, code, 200);
        }
    }

    #[test]
    fn send_sms_propagates_transport_error_unchanged() {
        let transport = FakeTransport::failing();
        let client = make_client(transport.clone());

        let err = client.send_sms(hello_request()).unwrap_err();
        match err {
            OneWayError::Transport(inner) => {
                let io_err = inner.downcast_ref::<io::Error>().expect("io error");
                assert_eq!(io_err.kind(), io::ErrorKind::ConnectionRefused);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn invalid_inputs_fail_before_any_request() {
        assert!(matches!(
            MessageText::new(""),
            Err(ValidationError::Empty { .. })
        ));
        assert!(matches!(
            SendSms::new(Vec::new(), MessageText::new("Hello World").unwrap()),
            Err(ValidationError::Empty { .. })
        ));
        assert!(matches!(MtId::new(0), Err(ValidationError::ZeroMtId)));

        let err: OneWayError = hello_request().with_language_code("invalid").unwrap_err().into();
        assert!(matches!(err, OneWayError::Validation(_)));
    }

    #[test]
    fn check_transaction_status_sends_mt_id_only() {
        let transport = FakeTransport::new(200, "0");
        let client = make_client(transport.clone());

        let response = client
            .check_transaction_status(CheckTransactionStatus::new(MtId::new(145_712_468).unwrap()))
            .unwrap();
        assert_eq!(response.status, TransactionStatus::Success);

        let (url, params) = transport.last_request();
        assert_eq!(url, "https://gateway.example.invalid/bulktrx.aspx");
        assert_eq!(params, vec![("mtid".to_owned(), "145712468".to_owned())]);
    }

    #[test]
    fn check_transaction_status_maps_bodies() {
        let request = CheckTransactionStatus::new(MtId::new(1).unwrap());

        let client = make_client(FakeTransport::new(200, "100"));
        assert_eq!(
            client.check_transaction_status(request).unwrap().status,
            TransactionStatus::TelcoDelivered
        );

        let client = make_client(FakeTransport::new(200, "-100"));
        let err = client.check_transaction_status(request).unwrap_err();
        assert_gateway(err, ErrorCode::MtInvalidNotFound, 200);

        let client = make_client(FakeTransport::new(200, "-200"));
        let err = client.check_transaction_status(request).unwrap_err();
        assert_gateway(err, ErrorCode::MessageDeliveryFailure, 200);

        let client = make_client(FakeTransport::new(200, "7"));
        let err = client.check_transaction_status(request).unwrap_err();
        assert_gateway(err, ErrorCode::UnknownError, 200);
    }

    #[test]
    fn check_transaction_status_reports_actual_http_status() {
        let client = make_client(FakeTransport::new(502, "Bad Gateway"));
        let err = client
            .check_transaction_status(CheckTransactionStatus::new(MtId::new(1).unwrap()))
            .unwrap_err();
        assert_gateway(err, ErrorCode::UnknownError, 502);
    }

    #[test]
    fn check_credit_balance_sends_credentials() {
        let transport = FakeTransport::new(200, "6500.5");
        let client = make_client(transport.clone());

        let response = client.check_credit_balance().unwrap();
        assert_eq!(response.balance, 6500.5);

        let (url, params) = transport.last_request();
        assert_eq!(url, "https://gateway.example.invalid/bulkcredit.aspx");
        assert_eq!(
            params,
            vec![
                ("apiusername".to_owned(), "user".to_owned()),
                ("apipassword".to_owned(), "pass".to_owned()),
            ]
        );
    }

    #[test]
    fn check_credit_balance_maps_negative_values() {
        let client = make_client(FakeTransport::new(200, "-100"));
        assert_gateway(
            client.check_credit_balance().unwrap_err(),
            ErrorCode::InvalidCredentials,
            200,
        );

        let client = make_client(FakeTransport::new(401, "-42"));
        assert_gateway(
            client.check_credit_balance().unwrap_err(),
            ErrorCode::UnknownError,
            401,
        );
    }

    #[test]
    fn reqwest_transport_sends_get_with_query_and_user_agent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api.aspx")
                .query_param("apiusername", "user")
                .query_param("apipassword", "pass")
                .query_param("senderid", "ACME")
                .query_param("mobileno", "60123456789")
                .query_param("languagetype", "1")
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(200).body("145712468");
        });

        let client = OneWayClient::new(config(&server.base_url()));
        let response = client.send_sms(hello_request()).unwrap();

        mock.assert();
        assert_eq!(response.mt_ids, vec![145_712_468]);
    }

    #[test]
    fn builder_applies_user_agent_override() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/bulkcredit.aspx")
                .header("user-agent", "acme-notifier/2.0");
            then.status(200).body("12.50");
        });

        let client = OneWayClient::builder(config(&server.base_url()))
            .user_agent("acme-notifier/2.0")
            .build()
            .unwrap();
        let response = client.check_credit_balance().unwrap();

        mock.assert();
        assert_eq!(response.balance, 12.5);
    }

    #[test]
    fn builder_timeout_surfaces_as_transport_error() {
        let server = MockServer::start();
        let _mock = server.mock(|when, then| {
            when.method(GET).path("/bulkcredit.aspx");
            then.status(200)
                .body("1")
                .delay(Duration::from_millis(500));
        });

        let client = OneWayClient::builder(config(&server.base_url()))
            .timeout(Duration::from_millis(50))
            .build()
            .unwrap();
        let err = client.check_credit_balance().unwrap_err();
        match err {
            OneWayError::Transport(inner) => {
                let reqwest_err = inner.downcast_ref::<reqwest::Error>().expect("reqwest error");
                assert!(reqwest_err.is_timeout());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn builder_prefers_custom_transport() {
        let transport = FakeTransport::new(200, "3");
        let client = OneWayClient::builder(config("https://gateway.example.invalid"))
            .timeout(Duration::from_secs(1))
            .transport(transport.clone())
            .build()
            .unwrap();

        assert_eq!(client.check_credit_balance().unwrap().balance, 3.0);
        assert_eq!(transport.requests().len(), 1);
    }
}
