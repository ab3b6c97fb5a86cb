use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Method, Request, StatusCode, Uri};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use serde_json::Value;
use tracing::debug;

use super::auth::basic_auth_header;
use super::errors::ClientError;
use crate::shared::config::ClientConfig;

/// Carries one JSON request to an endpoint and hands back the decoded JSON
/// reply. `body == None` means a bodiless GET.
pub trait Transport {
    fn perform(&self, endpoint: &str, body: Option<&Value>) -> Result<Value, ClientError>;
}

/// Blocking HTTP/1 transport. Owns a tokio runtime so callers stay
/// synchronous.
pub struct HttpTransport {
    base_url: String,
    auth_header: String,
    timeout: Duration,
    runtime: tokio::runtime::Runtime,
    http_client: Client<HttpConnector, Full<Bytes>>,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let base_url = config.base_url();
        base_url
            .parse::<Uri>()
            .map_err(|e| ClientError::InvalidConfig(format!("bad base url {}: {}", base_url, e)))?;

        let runtime = tokio::runtime::Runtime::new()?;
        let http_client: Client<HttpConnector, Full<Bytes>> =
            Client::builder(TokioExecutor::new()).build_http();

        Ok(Self {
            base_url,
            auth_header: basic_auth_header(&config.username, &config.password),
            timeout: config.timeout(),
            runtime,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request(
        &self,
        endpoint: &str,
        body: Option<&Value>,
    ) -> Result<Request<Full<Bytes>>, ClientError> {
        let uri = format!("{}{}", self.base_url, endpoint)
            .parse::<Uri>()
            .map_err(|e| ClientError::InvalidArgument(format!("bad endpoint {}: {}", endpoint, e)))?;

        let (method, payload) = match body {
            Some(json) => (Method::POST, Bytes::from(json.to_string())),
            None => (Method::GET, Bytes::new()),
        };

        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header.as_str())
            .body(Full::new(payload))
            .map_err(|e| ClientError::InvalidArgument(format!("failed to build request: {}", e)))
    }
}

impl Transport for HttpTransport {
    fn perform(&self, endpoint: &str, body: Option<&Value>) -> Result<Value, ClientError> {
        let req = self.build_request(endpoint, body)?;
        debug!(target: "iotdb_rest::transport", endpoint, method = %req.method(), "Sending request");

        let (status, bytes) = self.runtime.block_on(async {
            let exchange = async {
                let res = self
                    .http_client
                    .request(req)
                    .await
                    .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;
                let status = res.status();
                let bytes = res
                    .collect()
                    .await
                    .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?
                    .to_bytes();
                Ok::<_, ClientError>((status, bytes))
            };

            tokio::time::timeout(self.timeout, exchange)
                .await
                .map_err(|_| {
                    ClientError::ConnectionFailed(format!(
                        "no response from {} within {:?}",
                        endpoint, self.timeout
                    ))
                })?
        })?;

        debug!(target: "iotdb_rest::transport", endpoint, status = status.as_u16(), bytes = bytes.len(), "Received response");
        decode_response(status, &bytes)
    }
}

/// A JSON body is handed back whenever it is meaningful: on success, or when
/// the server explains the failure with a `code`. Anything else is surfaced
/// as a remote error carrying the HTTP status.
pub(crate) fn decode_response(status: StatusCode, bytes: &[u8]) -> Result<Value, ClientError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) if status.is_success() || value.get("code").is_some() => Ok(value),
        Ok(_) => Err(remote_error(status, bytes)),
        Err(e) if status.is_success() => Err(ClientError::MalformedResponse(format!(
            "invalid JSON from server: {}",
            e
        ))),
        Err(_) => Err(remote_error(status, bytes)),
    }
}

fn remote_error(status: StatusCode, bytes: &[u8]) -> ClientError {
    ClientError::RemoteError {
        code: i64::from(status.as_u16()),
        message: String::from_utf8_lossy(bytes).into_owned(),
    }
}
