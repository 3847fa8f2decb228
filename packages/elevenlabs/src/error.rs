use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
    #[error("serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("http error: {0}")]
    HttpError(Value),
    #[error(
        "No ElevenLabs API key found. Set ELEVENLABS_API_KEY, ELEVEN_API_KEY, or ELEVEN_LABS_API_KEY environment variable"
    )]
    MissingApiKey,
    #[error("request must have a body")]
    MissingRequestBody,
    #[error("voice not found: {0}")]
    VoiceNotFound(String),
}
