use crate::errors::{ApiError, Result, TransportError};
use likes_core::{
    extract_data, mask_key, rejection_message, ApiKeyInfo, HealthStatus, LikesError,
    SendLikesRequest, TokenInfo,
};
use log::{debug, error, info, trace};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use url::Url;

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

/// Header carrying the session API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Trait for providing configuration to the API client
/// This allows the CLI to implement config without the API crate depending on it
pub trait ApiConfig {
    type Error;

    /// Get the base URL for the API (optional, defaults to `DEFAULT_BASE_URL`)
    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }

    /// Get a previously issued API key to seed the session with (optional)
    fn get_api_key(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }
}

/// HTTP client for the Free Fire Likes API.
///
/// Holds an immutable base URL and the session API key. The key starts out
/// empty, is filled in by [`LikesApiClient::generate_api_key`] and is
/// attached as `x-api-key` to every authenticated call afterwards.
#[derive(Debug, Clone)]
pub struct LikesApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl LikesApiClient {
    /// Create a new API client without an API key
    pub fn new(base_url: Option<String>) -> Result<Self> {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_base_url(&base_url)?;

        debug!("Creating LikesApiClient");
        debug!("  Base URL: {}", base_url);

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: None,
        })
    }

    /// Seed the session with an already issued API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        debug!("Seeding session with API key: {}", mask_key(&api_key));
        self.api_key = Some(api_key);
        self
    }

    /// Create API client from any configuration implementing ApiConfig trait
    pub fn from_config<C>(config: &C) -> std::result::Result<Self, C::Error>
    where
        C: ApiConfig,
        C::Error: From<ApiError>,
    {
        debug!("Creating LikesApiClient from config");
        let base_url = config.get_base_url()?;

        if let Some(ref url) = base_url {
            debug!("Got custom base URL from config: {}", url);
        } else {
            debug!("Using default base URL");
        }

        let mut client = Self::new(base_url)?;
        if let Some(api_key) = config.get_api_key()? {
            client = client.with_api_key(api_key);
        }

        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The cached session key, if one has been generated or seeded
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Forget the cached session key
    pub fn clear_api_key(&mut self) {
        debug!("Clearing cached API key");
        self.api_key = None;
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            error!("Authenticated call attempted without an API key");
            ApiError::NotAuthenticated
        })
    }

    /// Make a GET request
    async fn get(&self, endpoint: &str, api_key: Option<&str>) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        debug!("HTTP GET request to: {}", url);

        let request = with_credentials(self.client.get(&url), api_key);
        let response = request.send().await.map_err(|e| {
            error!("GET request failed: {:?}", e);
            TransportError::Request(e)
        })?;

        debug!("Response status: {}", response.status());

        self.handle_response(response).await
    }

    /// Make a POST request
    async fn post(
        &self,
        endpoint: &str,
        body: Option<&Value>,
        api_key: Option<&str>,
    ) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        debug!("HTTP POST request to: {}", url);

        let mut request = with_credentials(self.client.post(&url), api_key);

        if let Some(body) = body {
            trace!("  Content-Type: application/json");
            trace!(
                "Request body: {}",
                serde_json::to_string_pretty(&redact_body(body))
                    .unwrap_or_else(|_| "Invalid JSON".to_string())
            );
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!("POST request failed: {:?}", e);
            TransportError::Request(e)
        })?;

        debug!("Response status: {}", response.status());

        self.handle_response(response).await
    }

    /// Decode the body of a 2xx response, convert anything else into a transport error
    async fn handle_response(&self, response: Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await.map_err(TransportError::Request)?;

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            trace!("Response body: {}", text);
            let body: Value = serde_json::from_str(&text).map_err(|e| {
                error!("Response body is not valid JSON: {}", e);
                TransportError::InvalidResponse(LikesError::Serde(e))
            })?;
            return Ok(body);
        }

        error!("Request failed with status: {}", status);
        debug!("Error response body: {}", text);

        // The service wraps errors in `{ success: false, message }`; fall back to the raw text
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
            .unwrap_or(text);

        let transport_error = match status {
            StatusCode::UNAUTHORIZED => {
                error!("Authentication failed (401 Unauthorized)");
                TransportError::AuthenticationFailed(message)
            }
            StatusCode::FORBIDDEN => {
                error!("Invalid API key (403 Forbidden)");
                TransportError::InvalidApiKey(message)
            }
            StatusCode::TOO_MANY_REQUESTS => {
                error!("Rate limited (429 Too Many Requests)");
                TransportError::RateLimited(message)
            }
            StatusCode::SERVICE_UNAVAILABLE => {
                error!("Service unavailable (503)");
                TransportError::ServiceUnavailable(message)
            }
            StatusCode::REQUEST_TIMEOUT => {
                error!("Request timeout (408)");
                TransportError::Timeout(message)
            }
            _ => TransportError::Status {
                status: status.as_u16(),
                message,
            },
        };

        Err(ApiError::Transport(transport_error))
    }

    /// Generate a new API key and cache it for later calls.
    ///
    /// Returns the full `data` object, including the creation timestamp.
    pub async fn generate_api_key_info(&mut self) -> Result<ApiKeyInfo> {
        debug!("Generating API key");
        let body = self.post("generate-api-key", None, None).await?;
        let body = ensure_success(body)?;
        let key_info: ApiKeyInfo = extract_data(&body).map_err(TransportError::InvalidResponse)?;

        info!("Generated API key: {}", mask_key(&key_info.api_key));
        self.api_key = Some(key_info.api_key.clone());

        Ok(key_info)
    }

    /// Generate a new API key, cache it, and return it
    pub async fn generate_api_key(&mut self) -> Result<String> {
        Ok(self.generate_api_key_info().await?.api_key)
    }

    /// Send likes to a player. `uid` and `region` are passed through unvalidated.
    ///
    /// Returns the full decoded response payload.
    pub async fn send_likes(&self, uid: &str, region: &str, access_token: &str) -> Result<Value> {
        let api_key = self.require_api_key()?;

        debug!("Sending likes");
        debug!("  uid: {}", uid);
        debug!("  region: {}", region);

        let body = SendLikesRequest::new(uid, region, access_token).to_json();

        let response = self.post("send-likes", Some(&body), Some(api_key)).await?;
        let response = ensure_success(response)?;

        info!("Successfully sent likes to uid {}", uid);

        Ok(response)
    }

    /// Retrieve the stored access token together with its expiry data
    pub async fn get_token_info(&self) -> Result<TokenInfo> {
        let api_key = self.require_api_key()?;

        debug!("Fetching saved token");
        let body = self.get("get-token", Some(api_key)).await?;
        let body = ensure_success(body)?;
        let token: TokenInfo = extract_data(&body).map_err(TransportError::InvalidResponse)?;

        info!("Successfully fetched saved token");

        Ok(token)
    }

    /// Retrieve the stored access token
    pub async fn get_token(&self) -> Result<String> {
        Ok(self.get_token_info().await?.access_token)
    }

    /// Check service health
    pub async fn check_health(&self) -> Result<HealthStatus> {
        debug!("Checking API health");
        let body = self.get("health", None).await?;
        let body = ensure_success(body)?;
        let health: HealthStatus = serde_json::from_value(body)
            .map_err(|e| TransportError::InvalidResponse(LikesError::Serde(e)))?;

        info!(
            "API health: status={} uptime={}",
            health.status, health.uptime
        );

        Ok(health)
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url).map_err(|e| {
        error!("Invalid base URL {}: {}", base_url, e);
        TransportError::InvalidBaseUrl(format!("{}: {}", base_url, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(TransportError::InvalidBaseUrl(format!(
            "{}: unsupported scheme '{}'",
            base_url, scheme
        ))
        .into()),
    }
}

fn with_credentials(request: RequestBuilder, api_key: Option<&str>) -> RequestBuilder {
    match api_key {
        Some(key) => {
            trace!("Request headers:");
            trace!("  {}: {}", API_KEY_HEADER, mask_key(key));
            request.header(API_KEY_HEADER, key)
        }
        None => request,
    }
}

fn redact_body(body: &Value) -> Value {
    let mut redacted = body.clone();
    if let Some(token) = redacted.get_mut("accessToken") {
        if let Some(raw) = token.as_str() {
            *token = Value::String(mask_key(raw));
        }
    }
    redacted
}

fn ensure_success(body: Value) -> Result<Value> {
    match rejection_message(&body) {
        Some(message) => {
            error!("Request rejected: {}", message);
            Err(ApiError::RemoteRejected { message })
        }
        None => Ok(body),
    }
}
