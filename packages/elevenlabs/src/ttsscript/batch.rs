//! Sequential batch synthesis driven by a [`BatchManifest`]
//!
//! The runner owns no retry policy: a failed job is recorded in the report and
//! the batch moves on to the next entry.

use super::format::TtsJob;
use super::manifest::BatchManifest;
use crate::client::{ElevenLabsClient, Result};
use crate::endpoints::genai::tts::{TextToSpeech, TextToSpeechBody, TextToSpeechQuery};
use crate::shared::query_params::OutputFormat;
use crate::shared::{Model, VoiceSettings};
use bytes::Bytes;
use std::path::PathBuf;
use tracing::{error, info};

/// Remote audio generation for one job
#[allow(async_fn_in_trait)]
pub trait SpeechSynthesizer {
    async fn synthesize(&self, job: &TtsJob) -> Result<Bytes>;
}

/// Request options applied to every job of a batch
#[derive(Clone, Debug, Default)]
pub struct SynthesisOptions {
    pub model: Model,
    pub output_format: OutputFormat,
    pub voice_settings: Option<VoiceSettings>,
}

/// [`ElevenLabsClient`] bound to [`SynthesisOptions`]
#[derive(Clone, Debug)]
pub struct ElevenLabsSynthesizer {
    client: ElevenLabsClient,
    options: SynthesisOptions,
}

impl ElevenLabsSynthesizer {
    pub fn new(client: ElevenLabsClient, options: SynthesisOptions) -> Self {
        Self { client, options }
    }

    pub fn endpoint(&self, job: &TtsJob) -> TextToSpeech {
        let mut body = TextToSpeechBody::new(job.text.clone()).with_model_id(self.options.model.clone());
        if self.options.model.supports_language_code() && !job.language.is_empty() {
            body = body.with_language_code(job.language.clone());
        }
        if let Some(settings) = &self.options.voice_settings {
            body = body.with_voice_settings(settings.clone());
        }
        let query = TextToSpeechQuery::default().with_output_format(self.options.output_format);
        TextToSpeech::new(job.voice_id.clone(), body).with_query(query)
    }
}

impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, job: &TtsJob) -> Result<Bytes> {
        self.client.hit(self.endpoint(job)).await
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    /// (job index, error message)
    pub failed: Vec<(usize, String)>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct BatchRunner<S> {
    synthesizer: S,
}

impl<S: SpeechSynthesizer> BatchRunner<S> {
    pub fn new(synthesizer: S) -> Self {
        Self { synthesizer }
    }

    pub async fn run(&self, manifest: &BatchManifest) -> Result<BatchReport> {
        tokio::fs::create_dir_all(&manifest.output_dir).await?;
        info!(
            jobs = manifest.len(),
            language = %manifest.language,
            dir = %manifest.output_dir.display(),
            "starting batch"
        );

        let mut report = BatchReport::default();
        for entry in &manifest.entries {
            let path = manifest.full_path(entry);
            let audio = match self.synthesizer.synthesize(&entry.job).await {
                Ok(audio) => audio,
                Err(e) => {
                    error!(index = entry.index, slide = %entry.job.slide_title, "synthesis failed: {e}");
                    report.failed.push((entry.index, e.to_string()));
                    continue;
                }
            };
            match tokio::fs::write(&path, &audio).await {
                Ok(()) => {
                    info!(index = entry.index, path = %path.display(), bytes = audio.len(), "wrote segment");
                    report.written.push(path);
                }
                Err(e) => {
                    error!(index = entry.index, path = %path.display(), "write failed: {e}");
                    report.failed.push((entry.index, format!("{}: {e}", path.display())));
                }
            }
        }

        info!(
            written = report.written.len(),
            failed = report.failed.len(),
            "batch finished"
        );
        Ok(report)
    }
}
