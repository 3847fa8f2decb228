use elevenlabs_client::endpoints::ElevenLabsEndpoint;
use elevenlabs_client::endpoints::admin::models::{GetModels, ModelResponse};
use elevenlabs_client::endpoints::admin::user::{GetUserSubscription, SubscriptionResponse};
use elevenlabs_client::endpoints::admin::voice::{GetVoices, GetVoicesResponse};
use elevenlabs_client::endpoints::genai::tts::{TextToSpeech, TextToSpeechBody, TextToSpeechQuery};
use elevenlabs_client::shared::query_params::OutputFormat;
use elevenlabs_client::shared::{Model, VoiceSettings};
use elevenlabs_client::{ClientConfig, ElevenLabsClient};
use std::time::Duration;

#[cfg(test)]
mod url_tests {
    use super::*;

    #[test]
    fn tts_url_fills_voice_and_query() {
        let endpoint = TextToSpeech::new("abc123", TextToSpeechBody::new("hi")).with_query(
            TextToSpeechQuery::default()
                .with_output_format(OutputFormat::Pcm22050Hz)
                .with_logging(false),
        );

        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://api.elevenlabs.io/v1/text-to-speech/abc123?output_format=pcm_22050&enable_logging=false"
        );
    }

    #[test]
    fn tts_url_without_query() {
        let endpoint = TextToSpeech::new("abc123", TextToSpeechBody::new("hi"));
        assert_eq!(
            endpoint.url().unwrap().as_str(),
            "https://api.elevenlabs.io/v1/text-to-speech/abc123"
        );
    }

    #[test]
    fn admin_urls() {
        assert_eq!(
            GetVoices::default().url().unwrap().as_str(),
            "https://api.elevenlabs.io/v1/voices"
        );
        assert_eq!(
            GetVoices::default().with_legacy(true).url().unwrap().as_str(),
            "https://api.elevenlabs.io/v1/voices?show_legacy=true"
        );
        assert_eq!(
            GetModels.url().unwrap().as_str(),
            "https://api.elevenlabs.io/v1/models"
        );
        assert_eq!(
            GetUserSubscription.url().unwrap().as_str(),
            "https://api.elevenlabs.io/v1/user/subscription"
        );
    }
}

#[cfg(test)]
mod body_tests {
    use super::*;

    #[test]
    fn tts_body_skips_unset_fields() {
        let body = TextToSpeechBody::new("Hello");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "Hello" }));
    }

    #[test]
    fn tts_body_full() {
        let body = TextToSpeechBody::new("Hello")
            .with_model_id(Model::ElevenFlashV2_5)
            .with_language_code("de")
            .with_voice_settings(VoiceSettings::default().with_stability(0.3).with_speed(1.1))
            .with_seed(7)
            .with_previous_text("Before")
            .with_next_text("After");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model_id"], "eleven_flash_v2_5");
        assert_eq!(json["language_code"], "de");
        assert_eq!(json["seed"], 7);
        assert_eq!(json["previous_text"], "Before");
        assert_eq!(json["next_text"], "After");
        assert!(json["voice_settings"].get("style").is_none());
        assert!((json["voice_settings"]["stability"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn model_names() {
        assert_eq!(Model::default().to_string(), "eleven_multilingual_v2");
        assert_eq!(
            "eleven_turbo_v2_5".parse::<Model>().unwrap(),
            Model::ElevenTurboV2_5
        );
        assert!(Model::ElevenFlashV2_5.supports_language_code());
        assert!(!Model::ElevenMultilingualV2.supports_language_code());
    }
}

#[cfg(test)]
mod response_tests {
    use super::*;

    #[test]
    fn voices_lookup_by_name() {
        let resp: GetVoicesResponse = serde_json::from_str(
            r#"{"voices":[
                {"voice_id":"21m00Tcm4TlvDq8ikWAM","name":"Rachel","category":"premade"},
                {"voice_id":"ErXwobaYiN019PkySvjV","name":"Antoni"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            resp.find_by_name("rachel").map(|v| v.voice_id.as_str()),
            Some("21m00Tcm4TlvDq8ikWAM")
        );
        assert!(resp.find_by_name("Nobody").is_none());
        assert!(resp.contains_id("ErXwobaYiN019PkySvjV"));
    }

    #[test]
    fn models_language_support() {
        let models: Vec<ModelResponse> = serde_json::from_str(
            r#"[{"model_id":"eleven_multilingual_v2","name":"Multilingual v2",
                 "can_do_text_to_speech":true,
                 "languages":[{"language_id":"en","name":"English"},{"language_id":"es","name":"Spanish"}]},
                {"model_id":"eleven_english_v2"}]"#,
        )
        .unwrap();

        assert!(models[0].supports_language("es"));
        assert!(!models[1].supports_language("es"));
    }

    #[test]
    fn subscription_remaining_characters() {
        let sub: SubscriptionResponse = serde_json::from_str(
            r#"{"tier":"creator","character_count":90500,"character_limit":100000,"status":"active"}"#,
        )
        .unwrap();
        assert_eq!(sub.remaining_characters(), 9500);

        let over: SubscriptionResponse = serde_json::from_str(
            r#"{"tier":"free","character_count":12000,"character_limit":10000}"#,
        )
        .unwrap();
        assert_eq!(over.remaining_characters(), 0);
    }
}

#[test]
fn client_builds_with_custom_config() {
    let config = ClientConfig::default()
        .with_timeout(Duration::from_secs(5))
        .with_connect_timeout(Duration::from_secs(1));
    let client = ElevenLabsClient::new_with_config("sk_test_key", config).unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("sk_t"));
    assert!(!debug.contains("sk_test_key"));
}
