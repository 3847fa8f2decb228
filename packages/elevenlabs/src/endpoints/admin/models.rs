use super::*;

/// Gets a list of available models.
#[derive(Clone, Debug, Default)]
pub struct GetModels;

impl ElevenLabsEndpoint for GetModels {
    const PATH: &'static str = "v1/models";

    const METHOD: Method = Method::GET;

    type ResponseBody = Vec<ModelResponse>;

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody> {
        Ok(resp.json().await?)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ModelResponse {
    pub model_id: String,
    pub name: Option<String>,
    pub can_do_text_to_speech: Option<bool>,
    pub max_characters_request_free_user: Option<u32>,
    pub max_characters_request_subscribed_user: Option<u32>,
    #[serde(default)]
    pub languages: Vec<ModelLanguage>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ModelLanguage {
    pub language_id: String,
    pub name: String,
}

impl ModelResponse {
    pub fn supports_language(&self, language_id: &str) -> bool {
        self.languages.iter().any(|l| l.language_id == language_id)
    }
}
