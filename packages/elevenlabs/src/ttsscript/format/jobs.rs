//! ElevenLabs batch jobs, one per voiced segment

use super::Formatter;
use crate::ttsscript::compiler::{CompiledSegment, SkipReason, SkippedSegment};
use crate::ttsscript::duration::format_break_time;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// ElevenLabs rejects `<break>` tags longer than this
pub const MAX_INLINE_BREAK_MS: u64 = 3000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TtsJob {
    /// contiguous job ordinal, used for file naming
    pub index: usize,
    /// position of the source compiled segment
    pub position: usize,
    pub slide_title: String,
    pub language: String,
    pub text: String,
    pub voice_id: String,
    pub pause_ms: u64,
}

impl TtsJob {
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobBatch {
    pub jobs: Vec<TtsJob>,
    /// voiceless segments left out of `jobs`
    pub skipped: Vec<SkippedSegment>,
}

impl JobBatch {
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn total_characters(&self) -> usize {
        self.jobs.iter().map(TtsJob::character_count).sum()
    }
}

#[derive(Clone, Debug, Default)]
pub struct JobFormatter {
    inline_breaks: bool,
}

impl JobFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `<break time="…" />` to job text for segments with a pause
    pub fn with_inline_breaks(mut self, enabled: bool) -> Self {
        self.inline_breaks = enabled;
        self
    }

    fn job_text(&self, segment: &CompiledSegment) -> String {
        if self.inline_breaks && segment.pause_ms > 0 {
            let ms = segment.pause_ms.min(MAX_INLINE_BREAK_MS);
            format!(
                "{} <break time=\"{}\" />",
                segment.text,
                format_break_time(ms)
            )
        } else {
            segment.text.clone()
        }
    }
}

impl Formatter for JobFormatter {
    type Output = JobBatch;

    fn format(&self, segments: &[CompiledSegment]) -> JobBatch {
        let mut batch = JobBatch::default();

        for segment in segments {
            if !segment.has_voice() {
                warn!(
                    slide = %segment.slide_title,
                    position = segment.position,
                    language = %segment.language,
                    "segment has no voice, leaving it out of the batch"
                );
                batch.skipped.push(SkippedSegment {
                    slide_index: segment.slide_index,
                    segment_index: segment.segment_index,
                    slide_title: segment.slide_title.clone(),
                    reason: SkipReason::NoVoice,
                });
                continue;
            }

            batch.jobs.push(TtsJob {
                index: batch.jobs.len(),
                position: segment.position,
                slide_title: segment.slide_title.clone(),
                language: segment.language.clone(),
                text: self.job_text(segment),
                voice_id: segment.voice_id.clone(),
                pause_ms: segment.pause_ms,
            });
        }

        batch
    }
}
