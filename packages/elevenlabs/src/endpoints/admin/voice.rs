use super::*;
use crate::shared::VoiceSettings;
use std::collections::HashMap;

/// Gets a list of all available voices for a user.
#[derive(Clone, Debug, Default)]
pub struct GetVoices {
    show_legacy: Option<bool>,
}

impl GetVoices {
    pub fn with_legacy(mut self, show_legacy: bool) -> Self {
        self.show_legacy = Some(show_legacy);
        self
    }
}

impl ElevenLabsEndpoint for GetVoices {
    const PATH: &'static str = "v1/voices";

    const METHOD: Method = Method::GET;

    type ResponseBody = GetVoicesResponse;

    fn query_params(&self) -> Option<QueryValues> {
        self.show_legacy
            .map(|legacy| vec![("show_legacy", legacy.to_string())])
    }

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody> {
        Ok(resp.json().await?)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetVoicesResponse {
    pub voices: Vec<VoiceResponse>,
}

impl GetVoicesResponse {
    pub fn find_by_name(&self, name: &str) -> Option<&VoiceResponse> {
        self.voices.iter().find(|v| {
            v.name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }

    pub fn contains_id(&self, voice_id: &str) -> bool {
        self.voices.iter().any(|v| v.voice_id == voice_id)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VoiceResponse {
    pub voice_id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub labels: Option<HashMap<String, String>>,
    pub preview_url: Option<String>,
    pub settings: Option<VoiceSettings>,
}
