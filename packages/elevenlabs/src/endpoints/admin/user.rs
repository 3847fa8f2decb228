use super::*;

/// Gets extended information about the users subscription
#[derive(Clone, Debug, Default)]
pub struct GetUserSubscription;

impl ElevenLabsEndpoint for GetUserSubscription {
    const PATH: &'static str = "v1/user/subscription";

    const METHOD: Method = Method::GET;

    type ResponseBody = SubscriptionResponse;

    async fn response_body(self, resp: Response) -> Result<Self::ResponseBody> {
        Ok(resp.json().await?)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SubscriptionResponse {
    pub tier: String,
    pub character_count: u64,
    pub character_limit: u64,
    pub can_extend_character_limit: Option<bool>,
    pub next_character_count_reset_unix: Option<i64>,
    pub voice_limit: Option<u32>,
    pub status: Option<String>,
}

impl SubscriptionResponse {
    pub fn remaining_characters(&self) -> u64 {
        self.character_limit.saturating_sub(self.character_count)
    }
}
