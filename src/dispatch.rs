//! Single round-trip HTTP dispatch against the Honeycomb API.
//!
//! Every request gets the same three headers (user agent, content type, team
//! key), caller headers are appended after them, and only the statuses in
//! [`ACCEPTED_STATUS`] count as success. In dry-run mode the request is
//! rendered instead of sent.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use url::Url;

use crate::config::RuntimeConfig;
use crate::error::HoneyError;

pub const APP_NAME: &str = "honeybadger";

/// Set by CI through `HONEYBADGER_BUILD_ID` at compile time.
pub const BUILD_ID: &str = match option_env!("HONEYBADGER_BUILD_ID") {
    Some(id) => id,
    None => "dev",
};

pub const TEAM_HEADER: &str = "X-Honeycomb-Team";

pub const ACCEPTED_STATUS: [u16; 10] = [200, 201, 202, 203, 204, 205, 206, 207, 208, 226];

pub fn user_agent() -> String {
    format!("{APP_NAME}/{BUILD_ID}")
}

/// Builds `/seg/seg/...` with every segment percent-encoded on its own.
pub fn api_path<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|s| format!("/{}", urlencoding::encode(s.as_ref())))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Connect,
    Options,
    Trace,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Connect,
        Method::Options,
        Method::Trace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
        }
    }

    fn to_http(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Connect => reqwest::Method::CONNECT,
            Method::Options => reqwest::Method::OPTIONS,
            Method::Trace => reqwest::Method::TRACE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = HoneyError;

    /// Case-sensitive, like the HTTP method token itself.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| HoneyError::validation(format!("Invalid method {s}")))
    }
}

/// One request, built per command and used once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchRequest {
    pub method: String,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl DispatchRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get.as_str(), path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post.as_str(), path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put.as_str(), path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch.as_str(), path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete.as_str(), path)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json_body<T: Serialize>(self, value: &T) -> Result<Self, HoneyError> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| HoneyError::serialization(format!("failed to encode request body: {e}")))?;
        Ok(self.body(bytes))
    }

    /// Request context for error records. Never includes the API key.
    pub fn to_log_value(&self) -> Value {
        let body = self.body.as_ref().map(|b| {
            serde_json::from_slice::<Value>(b)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(b).into_owned()))
        });
        json!({
            "method": self.method,
            "path": self.path,
            "headers": self.headers,
            "body": body,
        })
    }
}

/// Outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Decoded(T),
    /// 2xx with no body (typical for DELETE and HEAD).
    Empty,
    /// Dry-run rendering of the request that was not sent.
    DryRun(String),
}

pub struct Dispatcher {
    client: reqwest::Client,
    base: Url,
    api_key: String,
    dry_run: bool,
}

impl Dispatcher {
    pub fn new(cfg: &RuntimeConfig) -> Result<Self, HoneyError> {
        let client = reqwest::Client::builder()
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| HoneyError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base: cfg.api_host.clone(),
            api_key: cfg.api_key.clone(),
            dry_run: cfg.dry_run,
        })
    }

    fn url_for(&self, path: &str) -> Result<Url, HoneyError> {
        if self.base.cannot_be_a_base() {
            return Err(HoneyError::config(format!(
                "Failed to parse URL {}",
                self.base
            )));
        }
        let mut url = self.base.clone();
        url.set_path(path);
        Ok(url)
    }

    /// Mandatory headers first, then the caller's, in send order.
    fn header_lines(&self, req: &DispatchRequest) -> Vec<(String, String)> {
        let mut lines = vec![
            ("User-Agent".to_string(), user_agent()),
            ("Content-Type".to_string(), "application/json".to_string()),
            (TEAM_HEADER.to_string(), self.api_key.clone()),
        ];
        lines.extend(req.headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        lines
    }

    fn header_map(lines: &[(String, String)]) -> Result<HeaderMap, HoneyError> {
        let mut map = HeaderMap::new();
        for (name, value) in lines {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| HoneyError::transport(format!("invalid header name {name:?}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| HoneyError::transport(format!("invalid value for header {name}: {e}")))?;
            // append keeps the mandatory value when a caller repeats the name
            map.append(name, value);
        }
        Ok(map)
    }

    fn render(method: Method, url: &Url, lines: &[(String, String)], body: Option<&[u8]>) -> String {
        let mut out = String::from("Would have sent the following request:\n---\n");
        out.push_str(&format!("{method} {url}\n"));
        for (name, value) in lines {
            out.push_str(&format!("{name}: {value}\n"));
        }
        out.push('\n');
        if let Some(body) = body {
            out.push_str(&String::from_utf8_lossy(body));
        }
        out
    }

    /// Sends `req` and decodes a non-empty response body into `T`.
    pub async fn send<T: DeserializeOwned>(
        &self,
        req: &DispatchRequest,
    ) -> Result<Reply<T>, HoneyError> {
        let method = req.method.parse::<Method>()?;
        let url = self.url_for(&req.path)?;
        let lines = self.header_lines(req);
        let headers = Self::header_map(&lines)?;

        if self.dry_run {
            tracing::debug!(%method, %url, "dry run, request not sent");
            return Ok(Reply::DryRun(Self::render(
                method,
                &url,
                &lines,
                req.body.as_deref(),
            )));
        }

        tracing::debug!(%method, %url, "sending request");

        let mut builder = self
            .client
            .request(method.to_http(), url.clone())
            .headers(headers);
        if let Some(body) = &req.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HoneyError::transport(format!("{method} {url} timed out: {e}"))
            } else {
                HoneyError::transport(format!("{method} {url} failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                HoneyError::transport(format!("{method} {url} timed out reading the body: {e}"))
            } else {
                HoneyError::transport(format!("failed to read response body: {e}"))
            }
        })?;

        tracing::debug!(status, bytes = bytes.len(), "received response");

        if !ACCEPTED_STATUS.contains(&status) {
            return Err(HoneyError::protocol(
                status,
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Reply::Empty);
        }

        serde_json::from_slice(&bytes)
            .map(Reply::Decoded)
            .map_err(|e| HoneyError::serialization(format!("failed to decode response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::ErrorKind;

    fn dispatcher(host: &str, dry_run: bool) -> Dispatcher {
        dispatcher_with_timeout(host, dry_run, Duration::from_secs(5))
    }

    fn dispatcher_with_timeout(host: &str, dry_run: bool, timeout: Duration) -> Dispatcher {
        let cfg = RuntimeConfig {
            api_key: "test-key".to_string(),
            api_host: Url::parse(host).expect("url"),
            dry_run,
            timeout,
        };
        Dispatcher::new(&cfg).expect("dispatcher")
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Echo {
        name: String,
        #[serde(default)]
        description: String,
        column_layout: String,
    }

    #[test]
    fn methods_outside_the_allow_list_are_rejected() {
        for bad in ["get", "FETCH", "", "PURGE", "Post"] {
            let err = bad.parse::<Method>().expect_err(bad);
            assert_eq!(err.kind, ErrorKind::ValidationError);
        }
        for m in Method::ALL {
            assert_eq!(m.as_str().parse::<Method>().expect("valid"), m);
        }
    }

    #[test]
    fn api_path_encodes_each_segment() {
        assert_eq!(api_path(["1", "boards"]), "/1/boards");
        assert_eq!(api_path(["1", "markers", "__all__"]), "/1/markers/__all__");
        assert_eq!(api_path(["1", "datasets", "My Data/set"]), "/1/datasets/My%20Data%2Fset");
    }

    #[test]
    fn user_agent_names_app_and_build() {
        assert_eq!(user_agent(), format!("honeybadger/{BUILD_ID}"));
    }

    #[tokio::test]
    async fn invalid_method_never_reaches_the_server() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let d = dispatcher(&server.uri(), false);
        let err = d
            .send::<Value>(&DispatchRequest::new("FETCH", "/1/auth"))
            .await
            .expect_err("invalid method");
        assert_eq!(err.kind, ErrorKind::ValidationError);
        assert!(err.message.contains("FETCH"));
    }

    #[tokio::test]
    async fn invalid_method_fails_even_in_dry_run() {
        let d = dispatcher("https://api.honeycomb.io/", true);
        let err = d
            .send::<Value>(&DispatchRequest::new("BREW", "/1/auth"))
            .await
            .expect_err("invalid method");
        assert_eq!(err.kind, ErrorKind::ValidationError);
    }

    #[tokio::test]
    async fn dry_run_renders_method_url_and_headers() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let d = dispatcher(&server.uri(), true);
        let req = DispatchRequest::put("/1/datasets/web")
            .header("X-Extra", "1")
            .json_body(&json!({"description": "x"}))
            .expect("body");

        let reply = d.send::<Value>(&req).await.expect("dry run");
        let Reply::DryRun(text) = reply else {
            panic!("expected dry run, got {reply:?}");
        };

        assert!(text.starts_with("Would have sent the following request:"));
        assert!(text.contains(&format!("PUT {}/1/datasets/web", server.uri())));
        assert!(text.contains(&format!("User-Agent: {}", user_agent())));
        assert!(text.contains("Content-Type: application/json"));
        assert!(text.contains("X-Honeycomb-Team: test-key"));
        assert!(text.contains("X-Extra: 1"));
        assert!(text.ends_with("{\"description\":\"x\"}"));
    }

    #[tokio::test]
    async fn sends_standard_headers_and_decodes_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1/auth"))
            .and(header("user-agent", user_agent().as_str()))
            .and(header("content-type", "application/json"))
            .and(header("x-honeycomb-team", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"team": {"slug": "t"}})))
            .expect(1)
            .mount(&server)
            .await;

        let d = dispatcher(&server.uri(), false);
        let reply = d
            .send::<Value>(&DispatchRequest::get("/1/auth"))
            .await
            .expect("send");
        assert_eq!(reply, Reply::Decoded(json!({"team": {"slug": "t"}})));
    }

    #[tokio::test]
    async fn caller_headers_do_not_replace_mandatory_ones() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let d = dispatcher(&server.uri(), false);
        let req = DispatchRequest::get("/1/auth")
            .header("User-Agent", "impostor/1.0")
            .header(TEAM_HEADER, "other-key");
        d.send::<Value>(&req).await.expect("send");

        let received = server.received_requests().await.expect("recording");
        assert_eq!(received.len(), 1);
        let agents: Vec<_> = received[0]
            .headers
            .get_all("user-agent")
            .iter()
            .map(|v| v.to_str().unwrap_or_default().to_string())
            .collect();
        assert!(agents.contains(&user_agent()), "{agents:?}");
        assert!(agents.contains(&"impostor/1.0".to_string()), "{agents:?}");

        let teams: Vec<_> = received[0]
            .headers
            .get_all("x-honeycomb-team")
            .iter()
            .map(|v| v.to_str().unwrap_or_default().to_string())
            .collect();
        assert!(teams.contains(&"test-key".to_string()), "{teams:?}");
    }

    #[tokio::test]
    async fn every_non_accepted_status_is_a_protocol_error() {
        let server = MockServer::start().await;
        for code in [209u16, 225, 227, 400, 401, 403, 404, 409, 429, 500, 503] {
            let p = format!("/status/{code}");
            Mock::given(path(p.as_str()))
                .respond_with(ResponseTemplate::new(code).set_body_string("nope"))
                .mount(&server)
                .await;
        }

        let d = dispatcher(&server.uri(), false);
        for code in [209u16, 225, 227, 400, 401, 403, 404, 409, 429, 500, 503] {
            let err = d
                .send::<Value>(&DispatchRequest::get(format!("/status/{code}")))
                .await
                .expect_err("non-accepted status");
            assert_eq!(err.kind, ErrorKind::ProtocolError, "{code}");
            assert_eq!(err.status(), Some(code));
            assert!(err.message.contains(&code.to_string()));
        }
    }

    #[tokio::test]
    async fn accepted_statuses_with_empty_bodies_are_empty_replies() {
        let server = MockServer::start().await;
        for code in ACCEPTED_STATUS {
            let p = format!("/status/{code}");
            Mock::given(path(p.as_str()))
                .respond_with(ResponseTemplate::new(code))
                .mount(&server)
                .await;
        }

        let d = dispatcher(&server.uri(), false);
        for code in ACCEPTED_STATUS {
            let reply = d
                .send::<Value>(&DispatchRequest::delete(format!("/status/{code}")))
                .await
                .unwrap_or_else(|e| panic!("{code}: {e}"));
            assert_eq!(reply, Reply::Empty, "{code}");
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_a_serialization_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let d = dispatcher(&server.uri(), false);
        let err = d
            .send::<Value>(&DispatchRequest::get("/1/boards"))
            .await
            .expect_err("decode");
        assert_eq!(err.kind, ErrorKind::SerializationError);
    }

    #[tokio::test]
    async fn record_round_trips_through_an_echo() {
        let original = Echo {
            name: "release".to_string(),
            description: String::new(),
            column_layout: "2".to_string(),
        };

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/1/boards"))
            .and(body_json(&original))
            .respond_with(ResponseTemplate::new(201).set_body_json(&original))
            .expect(1)
            .mount(&server)
            .await;

        let d = dispatcher(&server.uri(), false);
        let req = DispatchRequest::post("/1/boards")
            .json_body(&original)
            .expect("body");
        let echoed = d.send::<Echo>(&req).await.expect("send");
        assert_eq!(echoed, Reply::Decoded(original));
    }

    #[tokio::test]
    async fn slow_response_is_a_transport_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1/auth"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let d = dispatcher_with_timeout(&server.uri(), false, Duration::from_secs(1));
        let err = d
            .send::<Value>(&DispatchRequest::get("/1/auth"))
            .await
            .expect_err("timeout");
        assert_eq!(err.kind, ErrorKind::TransportError);
        assert!(err.message.contains("timed out"), "{}", err.message);
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Bind then drop a listener so the port is very likely closed.
        let addr = {
            let l = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
            l.local_addr().expect("addr")
        };
        let d = dispatcher(&format!("http://{addr}/"), false);
        let err = d
            .send::<Value>(&DispatchRequest::get("/1/auth"))
            .await
            .expect_err("connect");
        assert_eq!(err.kind, ErrorKind::TransportError);
    }

    #[test]
    fn log_value_keeps_request_context_without_the_key() {
        let req = DispatchRequest::post("/1/markers/prod")
            .json_body(&json!({"message": "deploy"}))
            .expect("body");
        let v = req.to_log_value();
        assert_eq!(v.pointer("/method").and_then(|v| v.as_str()), Some("POST"));
        assert_eq!(v.pointer("/path").and_then(|v| v.as_str()), Some("/1/markers/prod"));
        assert_eq!(v.pointer("/body/message").and_then(|v| v.as_str()), Some("deploy"));
    }
}
