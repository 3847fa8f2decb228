//! Types shared across endpoint bindings

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub mod query_params;

/// Path placeholders understood by [`crate::endpoints::ElevenLabsEndpoint::url`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathParam {
    VoiceID,
}

impl PathParam {
    pub fn placeholder(self) -> &'static str {
        match self {
            PathParam::VoiceID => ":voice_id",
        }
    }
}

/// Pairs an id with the placeholder it fills
pub trait AndPathParam {
    fn and_param(&self, param: PathParam) -> (&'static str, &str);
}

impl AndPathParam for String {
    fn and_param(&self, param: PathParam) -> (&'static str, &str) {
        (param.placeholder(), self.as_str())
    }
}

impl AndPathParam for str {
    fn and_param(&self, param: PathParam) -> (&'static str, &str) {
        (param.placeholder(), self)
    }
}

/// Speech synthesis models
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum Model {
    #[strum(serialize = "eleven_multilingual_v2")]
    #[serde(rename = "eleven_multilingual_v2")]
    #[default]
    ElevenMultilingualV2,
    #[strum(serialize = "eleven_flash_v2_5")]
    #[serde(rename = "eleven_flash_v2_5")]
    ElevenFlashV2_5,
    #[strum(serialize = "eleven_turbo_v2_5")]
    #[serde(rename = "eleven_turbo_v2_5")]
    ElevenTurboV2_5,
    #[strum(serialize = "eleven_turbo_v2")]
    #[serde(rename = "eleven_turbo_v2")]
    ElevenTurboV2,
    #[strum(serialize = "eleven_english_v2")]
    #[serde(rename = "eleven_english_v2")]
    ElevenEnglishV2,
}

impl Model {
    /// Whether the model accepts a `language_code` hint
    pub fn supports_language_code(&self) -> bool {
        matches!(self, Model::ElevenFlashV2_5 | Model::ElevenTurboV2_5)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: None,
            use_speaker_boost: None,
            speed: None,
        }
    }
}

impl VoiceSettings {
    pub fn with_stability(mut self, stability: f32) -> Self {
        self.stability = stability;
        self
    }

    pub fn with_similarity_boost(mut self, similarity_boost: f32) -> Self {
        self.similarity_boost = similarity_boost;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }
}
