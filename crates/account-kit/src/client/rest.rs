//! Low-level envelope transport for the accounts API.
//!
//! The service wraps every payload in a `{"data": ..., "links": ...}`
//! envelope and signals failures with an `{"error_message": "..."}` body
//! that may arrive under any HTTP status code. [`RestClient`] owns that
//! convention so resource clients never touch raw JSON.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// API root used when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://accountapi:8080/v1/organisation/accounts";

/// Timeout applied to the whole exchange when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Connection settings for a [`RestClient`].
///
/// Read-only once a client has been constructed; build a new client to
/// change either field.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the accounts resource collection.
    pub base_url: String,
    /// Upper bound on connect + send + receive for a single call.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Configuration with the given base URL and the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Wire envelope carried by both requests and responses.
///
/// Requests put the outgoing payload under `data` and omit `links`;
/// responses may carry either field. Absent fields decode as JSON `null`.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    links: Option<Value>,
}

/// Error envelope probed out of every response body.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error_message: Option<String>,
}

/// Result of screening a response body before any typed decoding.
#[derive(Debug, PartialEq)]
enum BodyScreen {
    /// The body carried a non-empty `error_message`.
    ApiError(String),
    /// No error signal; the body may be decoded further.
    Clear,
}

/// Probe a body for the error envelope.
///
/// The probe is best-effort: a body that is not JSON, or JSON of a
/// different shape, is not itself an error at this stage. Only a decoded,
/// non-empty `error_message` counts.
fn screen_body(body: &[u8]) -> BodyScreen {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error_message: Some(message),
        }) if !message.is_empty() => BodyScreen::ApiError(message),
        _ => BodyScreen::Clear,
    }
}

/// Decode a success body: envelope first, then `data` and `links` into the
/// caller's types.
///
/// The two-phase decode (body to [`Envelope`] of raw values, raw value to
/// destination type) is what lets one transport serve any resource shape.
/// Unlike the error probe, failures here are fatal — a success body that
/// does not match the contract is a contract violation, not tolerated.
fn split_envelope<T, L>(body: &[u8]) -> Result<(T, L), Error>
where
    T: DeserializeOwned,
    L: DeserializeOwned,
{
    let envelope: Envelope<Value> = serde_json::from_slice(body)?;
    let data = serde_json::from_value(envelope.data.unwrap_or(Value::Null))?;
    let links = serde_json::from_value(envelope.links.unwrap_or(Value::Null))?;
    Ok((data, links))
}

/// Serialize a payload into the request envelope.
fn wrap_payload<P: Serialize>(payload: &P) -> Result<String, Error> {
    let envelope = Envelope {
        data: Some(payload),
        links: None,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// A decoded API reply.
///
/// Carries the HTTP status alongside the payload because a non-2xx status
/// with no error envelope is a valid outcome the caller must branch on.
#[derive(Clone, Debug)]
pub struct ApiResponse<T, L> {
    /// Decoded `data` field of the response envelope.
    pub data: T,
    /// Decoded `links` field of the response envelope.
    pub links: L,
    /// Status code of the HTTP response.
    pub status: StatusCode,
}

/// Envelope-aware HTTP transport.
///
/// Holds one pooled `reqwest::Client`; cloning a `RestClient` shares the
/// pool rather than duplicating the network resource. All methods are safe
/// to call concurrently — there is no mutable state beyond the pool itself.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl RestClient {
    /// Create a transport from the given configuration. Never fails: the
    /// timeout is stored and applied per request rather than baked into the
    /// connection pool.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            timeout: config.timeout,
        }
    }

    /// Base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET and decode the response envelope into `T` and `L`.
    pub async fn get<T, L>(&self, url: &str) -> Result<ApiResponse<T, L>, Error>
    where
        T: DeserializeOwned,
        L: DeserializeOwned,
    {
        let (status, body) = self.perform(Method::GET, url, None).await?;
        let (data, links) = split_envelope(&body)?;
        Ok(ApiResponse {
            data,
            links,
            status,
        })
    }

    /// Issue a GET carrying an enveloped body.
    ///
    /// A body on GET is unusual; the contract supports it uniformly with
    /// POST, so the transport does too.
    pub async fn get_with_body<P, T, L>(
        &self,
        url: &str,
        payload: &P,
    ) -> Result<ApiResponse<T, L>, Error>
    where
        P: Serialize,
        T: DeserializeOwned,
        L: DeserializeOwned,
    {
        let (status, body) = self
            .perform(Method::GET, url, Some(wrap_payload(payload)?))
            .await?;
        let (data, links) = split_envelope(&body)?;
        Ok(ApiResponse {
            data,
            links,
            status,
        })
    }

    /// Issue a POST with the payload wrapped under `data`, then decode the
    /// response envelope into `T` and `L`.
    pub async fn post<P, T, L>(&self, url: &str, payload: &P) -> Result<ApiResponse<T, L>, Error>
    where
        P: Serialize,
        T: DeserializeOwned,
        L: DeserializeOwned,
    {
        let (status, body) = self
            .perform(Method::POST, url, Some(wrap_payload(payload)?))
            .await?;
        let (data, links) = split_envelope(&body)?;
        Ok(ApiResponse {
            data,
            links,
            status,
        })
    }

    /// Issue a DELETE with no body and no response decoding.
    ///
    /// Returns the status code even when it is non-2xx, as long as the body
    /// carried no error envelope — a 404 with an empty body is `Ok(404)`.
    pub async fn delete(&self, url: &str) -> Result<StatusCode, Error> {
        let (status, _body) = self.perform(Method::DELETE, url, None).await?;
        Ok(status)
    }

    /// Execute one HTTP exchange and screen the body for an API error.
    ///
    /// Ordered decision procedure:
    /// 1. send the request; transport failures short-circuit
    /// 2. read the full body
    /// 3. probe the body for an error envelope, ignoring probe failures
    /// 4. a non-empty `error_message` wins over everything else
    /// 5. otherwise hand the body back for optional typed decoding
    async fn perform(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<(StatusCode, Vec<u8>), Error> {
        let mut request = self
            .http
            .request(method, url)
            .timeout(self.timeout)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();

        match screen_body(&body) {
            BodyScreen::ApiError(message) => Err(Error::Api { status, message }),
            BodyScreen::Clear => Ok((status, body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // ClientConfig tests
    // ========================================================================

    #[test]
    fn config_default_matches_api_root() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_millis(5000));
    }

    #[test]
    fn config_builder_overrides_timeout() {
        let config = ClientConfig::new("http://localhost:8080/v1/accounts")
            .timeout(Duration::from_millis(250));
        assert_eq!(config.base_url, "http://localhost:8080/v1/accounts");
        assert_eq!(config.timeout, Duration::from_millis(250));
    }

    #[test]
    fn client_exposes_configured_base_url() {
        let client = RestClient::new(ClientConfig::new("http://example.com/accounts"));
        assert_eq!(client.base_url(), "http://example.com/accounts");
    }

    // ========================================================================
    // screen_body tests
    // ========================================================================

    #[test]
    fn screen_flags_error_message() {
        let body = br#"{"error_message": "Error occurred"}"#;
        assert_eq!(
            screen_body(body),
            BodyScreen::ApiError("Error occurred".to_string())
        );
    }

    #[test]
    fn screen_prefers_error_over_payload() {
        // error_message wins even when data/links are also present
        let body = br#"{"error_message": "boom", "data": {"id": "1"}, "links": {}}"#;
        assert_eq!(screen_body(body), BodyScreen::ApiError("boom".to_string()));
    }

    #[test]
    fn screen_ignores_empty_error_message() {
        let body = br#"{"error_message": ""}"#;
        assert_eq!(screen_body(body), BodyScreen::Clear);
    }

    #[test]
    fn screen_ignores_missing_error_field() {
        let body = br#"{"data": {"id": "1"}}"#;
        assert_eq!(screen_body(body), BodyScreen::Clear);
    }

    #[test]
    fn screen_tolerates_non_json_bodies() {
        assert_eq!(screen_body(b"not json at all"), BodyScreen::Clear);
        assert_eq!(screen_body(b""), BodyScreen::Clear);
    }

    #[test]
    fn screen_tolerates_schema_mismatch() {
        // error_message of the wrong type fails the probe, which is ignored
        let body = br#"{"error_message": 42}"#;
        assert_eq!(screen_body(body), BodyScreen::Clear);
    }

    // ========================================================================
    // Envelope tests
    // ========================================================================

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Widget {
        id: String,
        count: u32,
    }

    #[test]
    fn wrap_puts_payload_under_data() {
        let widget = Widget {
            id: "w1".to_string(),
            count: 3,
        };
        let body = wrap_payload(&widget).unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["data"]["id"], "w1");
        assert_eq!(value["data"]["count"], 3);
        // links must be omitted entirely, not serialized as null
        assert!(value.get("links").is_none());
    }

    #[test]
    fn split_decodes_data_and_links_together() {
        let body = br#"{"data": {"id": "w1", "count": 3}, "links": {"self": "/widgets/w1"}}"#;
        let (widget, links): (Widget, Value) = split_envelope(body).unwrap();
        assert_eq!(
            widget,
            Widget {
                id: "w1".to_string(),
                count: 3
            }
        );
        assert_eq!(links["self"], "/widgets/w1");
    }

    #[test]
    fn split_missing_links_decodes_as_none() {
        let body = br#"{"data": {"id": "w1", "count": 3}}"#;
        let (_, links): (Widget, Option<Value>) = split_envelope(body).unwrap();
        assert!(links.is_none());
    }

    #[test]
    fn split_missing_data_fails_for_concrete_destination() {
        let body = br#"{"links": {"self": "/widgets"}}"#;
        let result: Result<(Widget, Value), Error> = split_envelope(body);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn split_mismatched_data_is_a_decode_error() {
        // data is a string where the destination expects an object
        let body = br#"{"data": "oops", "links": {}}"#;
        let result: Result<(Widget, Value), Error> = split_envelope(body);
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn split_non_json_body_is_a_decode_error() {
        let result: Result<(Widget, Value), Error> = split_envelope(b"<html>504</html>");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn envelope_round_trips_payload() {
        let widget = Widget {
            id: "w9".to_string(),
            count: 7,
        };
        let body = wrap_payload(&widget).unwrap();
        let (back, _): (Widget, Option<Value>) = split_envelope(body.as_bytes()).unwrap();
        assert_eq!(back, widget);
    }
}
