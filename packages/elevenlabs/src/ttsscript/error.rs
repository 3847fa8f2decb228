use thiserror::Error;

/// Errors raised while loading, compiling, or rendering a script
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("language '{language}' does not appear in the script (available: {available})")]
    UnknownLanguage { language: String, available: String },
    #[error(
        "invalid pause_after '{spec}' in slide {slide_index} ('{slide_title}'), segment {segment_index}: {reason}"
    )]
    InvalidPause {
        slide_index: usize,
        slide_title: String,
        segment_index: usize,
        spec: String,
        reason: String,
    },
    #[error("markup rendering failed: {0}")]
    Markup(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ScriptResult<T> = std::result::Result<T, ScriptError>;
