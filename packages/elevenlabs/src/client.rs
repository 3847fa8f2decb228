use crate::endpoints::admin::voice::GetVoices;
use crate::endpoints::{ElevenLabsEndpoint, RequestBody};
use crate::error::Error;
use reqwest::{Method, RequestBuilder, header::CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

const XI_API_KEY_HEADER: &str = "xi-api-key";
const APPLICATION_JSON: &str = "application/json";
const API_KEY_VARS: [&str; 3] = [
    "ELEVENLABS_API_KEY",
    "ELEVEN_API_KEY",
    "ELEVEN_LABS_API_KEY",
];

/// ElevenLabs client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Total request timeout, including the audio body download
    pub timeout: Duration,
    /// TCP/TLS connect timeout
    pub connect_timeout: Duration,
    /// Idle pooled connections are dropped after this long
    pub pool_idle_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

#[derive(Clone)]
pub struct ElevenLabsClient {
    inner: reqwest::Client,
    api_key: String,
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("api_key", &mask_key(&self.api_key))
            .finish()
    }
}

impl ElevenLabsClient {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_config(ClientConfig::default())
    }

    pub fn from_env_with_config(config: ClientConfig) -> Result<Self> {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
            .ok_or(Error::MissingApiKey)?;

        debug!(
            api_key = %mask_key(&api_key),
            len = api_key.len(),
            "using ElevenLabs API key from environment"
        );

        Self::new_with_config(api_key, config)
    }

    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::new_with_config(api_key, ClientConfig::default())
    }

    pub fn new_with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .build()
            .map_err(Error::ReqwestError)?;

        Ok(Self {
            inner: client,
            api_key: api_key.into(),
        })
    }

    async fn request<T: ElevenLabsEndpoint>(&self, endpoint: &T) -> Result<RequestBuilder> {
        let url = endpoint.url()?;
        let method = T::METHOD;
        debug!(%method, %url, "sending ElevenLabs request");

        let mut builder = self
            .inner
            .request(method, url)
            .header(XI_API_KEY_HEADER, &self.api_key);

        if matches!(T::METHOD, Method::POST | Method::PATCH) {
            builder = match endpoint.request_body().await? {
                RequestBody::Json(json) => {
                    builder.header(CONTENT_TYPE, APPLICATION_JSON).json(&json)
                }
                RequestBody::Multipart(form) => builder.multipart(form),
                RequestBody::Empty => return Err(Box::new(Error::MissingRequestBody)),
            };
        }

        Ok(builder)
    }

    pub async fn hit<T: ElevenLabsEndpoint>(&self, endpoint: T) -> Result<T::ResponseBody> {
        let resp = self.request(&endpoint).await?.send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .json()
                .await
                .unwrap_or_else(|_| serde_json::json!({ "status": status.as_u16() }));
            return Err(Box::new(Error::HttpError(body)));
        }

        endpoint.response_body(resp).await
    }

    /// Look up a voice id by its display name (case-insensitive)
    pub async fn voice_id_by_name(&self, name: &str) -> Result<String> {
        let voices = self.hit(GetVoices::default()).await?;
        voices
            .find_by_name(name)
            .map(|v| v.voice_id.clone())
            .ok_or_else(|| Error::VoiceNotFound(name.to_string()).into())
    }
}

fn mask_key(key: &str) -> String {
    let head: String = key.chars().take(4).collect();
    format!("{head}…")
}
