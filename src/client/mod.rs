//! Client layer: request engine and one typed method per Burst SMS operation.

mod config;
mod http;

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

pub use config::{Config, ConfigError, DEFAULT_API_URL};
pub use http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport};

use crate::domain::{
    AddClient, AddEmail, AddFieldToList, AddKeyword, AddList, AddToList, ApiError, CancelSms,
    DeleteEmail, DeleteFromList, EditClient, EditKeyword, EditListMember, FormatNumber,
    GetBalance, GetClient, GetClients, GetKeywords, GetList, GetLists, GetNumber, GetNumbers,
    GetSms, GetSmsResponses, GetSmsSent, GetSmsStats, GetTransaction, GetTransactions,
    GetUserSmsResponses, LeaseNumber, OptoutListMember, RemoveList, ResponseCode, SendSms,
    ValidationError,
};
use crate::transport::{Endpoint, Query, classify};
use http::{ReqwestTransport, build_request};

const DEFAULT_USER_AGENT: &str = concat!("burstsms/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`BurstSmsClient`].
pub enum BurstSmsError {
    /// The HTTP primitive failed (DNS, TLS, timeout, ...). Passed through untouched.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Non-2xx response, classified from its body.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A 2xx response whose non-empty body is not JSON.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// A request constructor rejected its input before anything was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl BurstSmsError {
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Provider error code, for [`BurstSmsError::Api`] only.
    pub fn response_code(&self) -> Option<ResponseCode> {
        self.api_error().map(|err| err.code)
    }
}

#[derive(Clone)]
/// Builder for [`BurstSmsClient`].
///
/// Use this when you need timeouts, a custom user-agent, or your own
/// [`HttpTransport`].
pub struct BurstSmsClientBuilder {
    config: Config,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl BurstSmsClientBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            timeout: None,
            connect_timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Timeout for the whole request, applied by the HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Override the `User-Agent` header (default `burstsms/<version>`).
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom HTTP primitive. Timeout and user-agent settings are then
    /// the transport's responsibility.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<BurstSmsClient, BurstSmsError> {
        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder().user_agent(
                    self.user_agent
                        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
                );
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|err| BurstSmsError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(BurstSmsClient {
            config: Arc::new(self.config),
            http,
        })
    }
}

#[derive(Clone)]
/// Typed Burst SMS client.
///
/// Every method builds one authenticated GET, sends it through the HTTP
/// transport, and returns the decoded JSON body of a 2xx response
/// (`Value::Null` when that body is empty). Anything else becomes a
/// [`BurstSmsError`]. There are no retries.
///
/// Requests validate themselves when constructed, so a method is only ever
/// called with a request that is structurally valid. Clones share the
/// transport; concurrent calls never share request state.
pub struct BurstSmsClient {
    config: Arc<Config>,
    http: Arc<dyn HttpTransport>,
}

impl BurstSmsClient {
    /// Client with a default reqwest transport.
    ///
    /// For timeouts or a custom transport, use [`BurstSmsClient::builder`].
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    pub fn builder(config: Config) -> BurstSmsClientBuilder {
        BurstSmsClientBuilder::new(config)
    }

    /// A client with new settings (for example rotated credentials) that
    /// shares this client's transport. `self` keeps its own settings.
    pub fn with_config(&self, config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: Arc::clone(&self.http),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn call<E: Endpoint>(&self, endpoint: &E) -> Result<Value, BurstSmsError> {
        self.execute(&endpoint.query()).await
    }

    async fn execute(&self, query: &Query) -> Result<Value, BurstSmsError> {
        let request = build_request(&self.config, query);
        debug!(
            path = query.path(),
            url = %request.redacted_url(),
            "sending Burst SMS request"
        );

        let response = self
            .http
            .get(&request)
            .await
            .map_err(BurstSmsError::Transport)?;
        debug!(path = query.path(), status = response.status, "Burst SMS response received");

        if !(200..=299).contains(&response.status) {
            return Err(BurstSmsError::Api(classify(
                response.status,
                response.body.as_deref(),
            )));
        }

        let body = response
            .body
            .ok_or_else(|| BurstSmsError::Parse("response body is missing".into()))?;
        // 204 and friends carry nothing to decode.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&body).map_err(|err| BurstSmsError::Parse(Box::new(err)))
    }

    // SMS

    /// Send a message to numbers and/or a list (`send-sms`).
    pub async fn send_sms(&self, request: SendSms) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// Normalise a number into international format (`format-number`).
    pub async fn format_number(&self, request: FormatNumber) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn get_sms(&self, request: GetSms) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// Delivery statistics for a sent message.
    pub async fn get_sms_stats(&self, request: GetSmsStats) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// Replies to a message or keyword.
    pub async fn get_sms_responses(
        &self,
        request: GetSmsResponses,
    ) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// All replies received by the account, optionally within a time frame.
    pub async fn get_user_sms_responses(
        &self,
        request: GetUserSmsResponses,
    ) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// Recipients of a sent message.
    pub async fn get_sms_sent(&self, request: GetSmsSent) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// Cancel a scheduled message.
    pub async fn cancel_sms(&self, request: CancelSms) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    // Numbers

    pub async fn get_number(&self, request: GetNumber) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn get_numbers(&self, request: GetNumbers) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// Lease a virtual number; without a number, the provider picks one.
    pub async fn lease_number(&self, request: LeaseNumber) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    // Keywords

    pub async fn add_keyword(&self, request: AddKeyword) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn edit_keyword(&self, request: EditKeyword) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn get_keywords(&self, request: GetKeywords) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    // Lists

    pub async fn remove_list(&self, request: RemoveList) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn get_list(&self, request: GetList) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn get_lists(&self, request: GetLists) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn add_list(&self, request: AddList) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn add_to_list(&self, request: AddToList) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn add_field_to_list(
        &self,
        request: AddFieldToList,
    ) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn delete_from_list(
        &self,
        request: DeleteFromList,
    ) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// Opt a member out of a list without deleting them.
    pub async fn optout_list_member(
        &self,
        request: OptoutListMember,
    ) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn edit_list_member(
        &self,
        request: EditListMember,
    ) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    // Email-to-SMS

    /// Authorise an address for email-to-SMS.
    pub async fn add_email(&self, request: AddEmail) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn delete_email(&self, request: DeleteEmail) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    // Resellers

    pub async fn get_client(&self, request: GetClient) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn get_clients(&self, request: GetClients) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn add_client(&self, request: AddClient) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn edit_client(&self, request: EditClient) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn get_transactions(
        &self,
        request: GetTransactions,
    ) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    pub async fn get_transaction(
        &self,
        request: GetTransaction,
    ) -> Result<Value, BurstSmsError> {
        self.call(&request).await
    }

    /// Account balance.
    pub async fn get_balance(&self) -> Result<Value, BurstSmsError> {
        self.call(&GetBalance).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use crate::domain::{
        AddKeyword, CountryCode, GetSmsResponses, Keyword, KeywordOptions, KeywordSettings,
        ListId, MessageId, MessageText, Msisdn, SendOptions, SmsResponsesOptions,
    };

    use super::*;

    type Responder = dyn Fn(&HttpRequest) -> Result<HttpResponse, BoxError> + Send + Sync;

    #[derive(Clone)]
    struct FakeTransport {
        requests: Arc<Mutex<Vec<HttpRequest>>>,
        responder: Arc<Responder>,
    }

    impl FakeTransport {
        fn new(status: u16, body: Option<&str>) -> Self {
            let body = body.map(|body| body.as_bytes().to_vec());
            Self::with(move |_| {
                Ok(HttpResponse {
                    status,
                    body: body.clone(),
                })
            })
        }

        fn with(
            responder: impl Fn(&HttpRequest) -> Result<HttpResponse, BoxError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                requests: Arc::new(Mutex::new(Vec::new())),
                responder: Arc::new(responder),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn last_request(&self) -> HttpRequest {
            self.requests().pop().expect("no request was sent")
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            request: &'a HttpRequest,
        ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
            Box::pin(async move {
                self.requests.lock().unwrap().push(request.clone());
                (self.responder)(request)
            })
        }
    }

    #[derive(Debug)]
    struct ConnectionReset;

    impl std::fmt::Display for ConnectionReset {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("connection reset by peer")
        }
    }

    impl std::error::Error for ConnectionReset {}

    fn config() -> Config {
        Config::new("user", "pass")
            .unwrap()
            .with_api_url("https://example.invalid")
            .unwrap()
    }

    fn make_client(transport: FakeTransport) -> BurstSmsClient {
        BurstSmsClient::builder(config())
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    fn query_pairs(request: &HttpRequest) -> Vec<(String, String)> {
        request.url.query_pairs().into_owned().collect()
    }

    fn msisdn(value: &str) -> Msisdn {
        Msisdn::new(value).unwrap()
    }

    #[tokio::test]
    async fn send_sms_builds_authenticated_get_and_returns_body() {
        let transport = FakeTransport::new(200, Some(r#"{"message_id": 123, "cost": 0.07}"#));
        let client = make_client(transport.clone());

        let request = SendSms::to_numbers(
            vec![msisdn("61400000001"), msisdn("0400000002")],
            MessageText::new("Hi there").unwrap(),
            SendOptions {
                country_code: Some(CountryCode::Au),
                ..Default::default()
            },
        )
        .unwrap();
        let body = client.send_sms(request).await.unwrap();
        assert_eq!(body, json!({"message_id": 123, "cost": 0.07}));

        let sent = transport.last_request();
        assert_eq!(sent.url.path(), "/send-sms.json");
        assert_eq!(
            query_pairs(&sent),
            vec![
                ("message".to_owned(), "Hi there".to_owned()),
                ("to".to_owned(), "61400000001,0400000002".to_owned()),
                ("countrycode".to_owned(), "AU".to_owned()),
            ]
        );
        assert_eq!(sent.header("Accept"), Some("application/json"));
        assert_eq!(sent.header("Authorization"), Some("Basic dXNlcjpwYXNz"));
    }

    #[tokio::test]
    async fn parameterless_call_has_no_query_string() {
        let transport = FakeTransport::new(200, Some(r#"{"balance": 10.5}"#));
        let client = make_client(transport.clone());

        let body = client.get_balance().await.unwrap();
        assert_eq!(body["balance"], json!(10.5));
        assert_eq!(
            transport.last_request().url.as_str(),
            "https://example.invalid/get-balance.json"
        );
    }

    #[tokio::test]
    async fn base_url_prefix_is_preserved() {
        let transport = FakeTransport::new(200, Some("{}"));
        let client = BurstSmsClient::builder(
            config().with_api_url("https://proxy.invalid/burst/").unwrap(),
        )
        .transport(Arc::new(transport.clone()))
        .build()
        .unwrap();

        client
            .get_sms(GetSms {
                message_id: MessageId::new(5),
            })
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().url.as_str(),
            "https://proxy.invalid/burst/get-sms.json?message_id=5"
        );
    }

    #[tokio::test]
    async fn classifies_known_error_code() {
        let transport = FakeTransport::new(
            404,
            Some(r#"{"error": {"code": "NOT_FOUND", "description": "List not found"}}"#),
        );
        let client = make_client(transport);

        let err = client
            .remove_list(RemoveList {
                list_id: ListId::new(404),
            })
            .await
            .unwrap_err();
        assert_eq!(err.response_code(), Some(ResponseCode::NotFound));
        let api = err.api_error().unwrap();
        assert_eq!(api.description, "List not found");
        assert_eq!(api.http_status, 404);
    }

    #[tokio::test]
    async fn auth_failure_is_classified() {
        let transport = FakeTransport::new(
            401,
            Some(r#"{"error": {"code": "AUTH_FAILED", "description": "Bad credentials"}}"#),
        );
        let client = make_client(transport);

        let err = client.get_balance().await.unwrap_err();
        assert!(err.response_code().unwrap().is_auth_failure());
    }

    #[tokio::test]
    async fn non_json_error_body_becomes_unknown_with_raw_text() {
        let html = "<html><body>Bad Gateway</body></html>";
        let transport = FakeTransport::new(500, Some(html));
        let client = make_client(transport);

        let err = client.get_balance().await.unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.code, ResponseCode::Unknown);
        assert_eq!(api.description, html);
        assert_eq!(api.http_status, 500);
    }

    #[tokio::test]
    async fn empty_or_unreadable_error_body_uses_placeholder() {
        for body in [Some(""), Some("   "), None] {
            let client = make_client(FakeTransport::new(503, body));
            let err = client.get_balance().await.unwrap_err();
            let api = err.api_error().unwrap();
            assert_eq!(api.code, ResponseCode::Unknown);
            assert_eq!(api.description, "An unexpected error occurred");
            assert_eq!(api.http_status, 503);
        }
    }

    #[tokio::test]
    async fn unknown_error_code_keeps_raw_body() {
        let body = r#"{"error": {"code": "TEAPOT", "description": "short and stout"}}"#;
        let client = make_client(FakeTransport::new(418, Some(body)));

        let err = client.get_balance().await.unwrap_err();
        let api = err.api_error().unwrap();
        assert_eq!(api.code, ResponseCode::Unknown);
        assert_eq!(api.description, body);
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let client = make_client(FakeTransport::with(|_| Err(Box::new(ConnectionReset) as BoxError)));

        let err = client.get_balance().await.unwrap_err();
        match err {
            BurstSmsError::Transport(source) => {
                assert!(source.downcast_ref::<ConnectionReset>().is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_success_body_is_parse_error() {
        for body in [Some("{ not json }"), None] {
            let client = make_client(FakeTransport::new(200, body));
            let err = client.get_balance().await.unwrap_err();
            assert!(matches!(err, BurstSmsError::Parse(_)), "got {err:?}");
        }
    }

    #[tokio::test]
    async fn only_2xx_statuses_succeed() {
        for (status, success) in [
            (199, false),
            (200, true),
            (201, true),
            (299, true),
            (300, false),
        ] {
            let client = make_client(FakeTransport::new(status, Some("{}")));
            let result = client.get_balance().await;
            if success {
                assert_eq!(result.unwrap(), json!({}), "status {status}");
            } else {
                let err = result.unwrap_err();
                let api = err.api_error().unwrap_or_else(|| panic!("status {status}: {err:?}"));
                assert_eq!(api.code, ResponseCode::Unknown);
                assert_eq!(api.http_status, status);
            }
        }
    }

    #[tokio::test]
    async fn empty_success_body_is_null() {
        for (status, body) in [(204, ""), (200, " \n")] {
            let client = make_client(FakeTransport::new(status, Some(body)));
            assert_eq!(client.get_balance().await.unwrap(), Value::Null);
        }
    }

    async fn responses_for(
        client: &BurstSmsClient,
        options: SmsResponsesOptions,
    ) -> Result<Value, BurstSmsError> {
        let request = GetSmsResponses::new(None, None, options)?;
        client.get_sms_responses(request).await
    }

    #[tokio::test]
    async fn validation_failure_sends_nothing() {
        let transport = FakeTransport::new(200, Some("{}"));
        let client = make_client(transport.clone());

        let err = responses_for(&client, SmsResponsesOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BurstSmsError::Validation(ValidationError::MissingOneOf { .. })
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn keyword_forwarding_lists_are_comma_joined() {
        let transport = FakeTransport::new(200, Some(r#"{"success": true}"#));
        let client = make_client(transport.clone());

        let settings = KeywordSettings::new(
            Keyword::new("JOIN").unwrap(),
            msisdn("61400000000"),
            KeywordOptions {
                forward_sms: Some(vec![msisdn("61400000001"), msisdn("61400000002")]),
                forward_email: Some(Vec::new()),
                ..Default::default()
            },
        )
        .unwrap();
        client.add_keyword(AddKeyword(settings)).await.unwrap();

        let pairs = query_pairs(&transport.last_request());
        assert!(pairs.contains(&("forward_sms".to_owned(), "61400000001,61400000002".to_owned())));
        assert!(pairs.contains(&("forward_email".to_owned(), String::new())));
    }

    #[tokio::test]
    async fn concurrent_calls_do_not_share_request_state() {
        let transport = FakeTransport::with(|request| {
            let body = json!({ "path": request.url.path(), "query": request.url.query() });
            Ok(HttpResponse {
                status: 200,
                body: Some(body.to_string().into_bytes()),
            })
        });
        let client = make_client(transport.clone());

        let (sms, list, balance) = tokio::join!(
            client.get_sms(GetSms {
                message_id: MessageId::new(1),
            }),
            client.get_list(GetList::new(ListId::new(2))),
            client.get_balance(),
        );

        assert_eq!(
            sms.unwrap(),
            json!({"path": "/get-sms.json", "query": "message_id=1"})
        );
        assert_eq!(
            list.unwrap(),
            json!({"path": "/get-list.json", "query": "list_id=2"})
        );
        assert_eq!(
            balance.unwrap(),
            json!({"path": "/get-balance.json", "query": null})
        );
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn clones_work_across_tasks() {
        let transport = FakeTransport::new(200, Some("{}"));
        let client = make_client(transport.clone());

        let handles = (1..=8)
            .map(|id| {
                let client = client.clone();
                tokio::spawn(async move {
                    client
                        .cancel_sms(CancelSms {
                            message_id: MessageId::new(id),
                        })
                        .await
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids = transport
            .requests()
            .iter()
            .map(|request| request.url.query().unwrap().to_owned())
            .collect::<Vec<_>>();
        ids.sort();
        assert_eq!(ids.len(), 8);
        assert_eq!(ids[0], "message_id=1");
        assert_eq!(ids[7], "message_id=8");
    }

    #[tokio::test]
    async fn with_config_rotates_credentials_without_touching_original() {
        let transport = FakeTransport::new(200, Some("{}"));
        let client = make_client(transport.clone());
        let rotated = client.with_config(Config::new("other", "secret").unwrap());

        rotated.get_balance().await.unwrap();
        client.get_balance().await.unwrap();

        let requests = transport.requests();
        // base64("other:secret")
        assert_eq!(
            requests[0].header("Authorization"),
            Some("Basic b3RoZXI6c2VjcmV0")
        );
        assert_eq!(
            requests[0].url.as_str(),
            "https://api.transmitsms.com/get-balance.json"
        );
        assert_eq!(requests[1].header("Authorization"), Some("Basic dXNlcjpwYXNz"));
        assert_eq!(client.config().username().as_str(), "user");
    }

    #[test]
    fn builder_without_transport_uses_reqwest() {
        let client = BurstSmsClient::builder(config())
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(2))
            .user_agent("burstsms-tests")
            .build()
            .unwrap();
        assert_eq!(
            client.config().api_url().as_str(),
            "https://example.invalid/"
        );
    }
}
