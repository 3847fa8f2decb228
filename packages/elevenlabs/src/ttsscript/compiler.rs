//! Script → per-language compiled segments

use super::duration::parse_pause;
use super::error::{ScriptError, ScriptResult};
use super::pronunciation::{PronunciationResolver, PronunciationTable};
use super::script::{Emphasis, Script, Segment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// How far voice resolution walks before giving up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoiceFallback {
    /// segment override, then the target language's default voice
    #[default]
    LanguageOnly,
    /// additionally fall back to the default language's voice
    DefaultLanguage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledSegment {
    /// ordinal among the compiled segments of one run
    pub position: usize,
    pub slide_index: usize,
    pub segment_index: usize,
    pub slide_title: String,
    pub language: String,
    pub text: String,
    pub pause_ms: u64,
    pub emphasis: Emphasis,
    /// empty when no voice could be resolved
    pub voice_id: String,
}

impl CompiledSegment {
    pub fn has_voice(&self) -> bool {
        !self.voice_id.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// neither the target nor the default language has text
    NoText,
    /// no voice resolved for the segment
    NoVoice,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSegment {
    pub slide_index: usize,
    pub segment_index: usize,
    pub slide_title: String,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compilation {
    pub language: String,
    pub segments: Vec<CompiledSegment>,
    pub skipped: Vec<SkippedSegment>,
}

impl Compilation {
    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Compiler {
    overlay: PronunciationTable,
    voice_fallback: VoiceFallback,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a compiler-local pronunciation; the script's table is untouched
    pub fn add_pronunciation(
        &mut self,
        term: impl Into<String>,
        language: impl Into<String>,
        replacement: impl Into<String>,
    ) {
        self.overlay.insert(term, language, replacement);
    }

    pub fn with_pronunciation(
        mut self,
        term: impl Into<String>,
        language: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.add_pronunciation(term, language, replacement);
        self
    }

    pub fn with_voice_fallback(mut self, fallback: VoiceFallback) -> Self {
        self.voice_fallback = fallback;
        self
    }

    pub fn overlay(&self) -> &PronunciationTable {
        &self.overlay
    }

    pub fn resolver<'a>(&'a self, script: &'a Script) -> PronunciationResolver<'a> {
        PronunciationResolver::new(&script.pronunciations, &self.overlay)
    }

    pub fn compile(&self, script: &Script, language: &str) -> ScriptResult<Compilation> {
        let languages = script.languages();
        if !languages.contains(language) {
            return Err(ScriptError::UnknownLanguage {
                language: language.to_string(),
                available: languages.into_iter().collect::<Vec<_>>().join(", "),
            });
        }

        let resolver = self.resolver(script);
        let mut segments = Vec::new();
        let mut skipped = Vec::new();

        for (slide_index, slide) in script.slides.iter().enumerate() {
            for (segment_index, segment) in slide.segments.iter().enumerate() {
                let pause_ms = match segment.pause_after.as_deref() {
                    Some(spec) => parse_pause(spec).map_err(|reason| ScriptError::InvalidPause {
                        slide_index,
                        slide_title: slide.title.clone(),
                        segment_index,
                        spec: spec.to_string(),
                        reason,
                    })?,
                    None => 0,
                };

                let Some(text) = resolve_text(script, segment, language) else {
                    debug!(
                        slide_index,
                        segment_index, language, "no text for segment, skipping"
                    );
                    skipped.push(SkippedSegment {
                        slide_index,
                        segment_index,
                        slide_title: slide.title.clone(),
                        reason: SkipReason::NoText,
                    });
                    continue;
                };

                segments.push(CompiledSegment {
                    position: segments.len(),
                    slide_index,
                    segment_index,
                    slide_title: slide.title.clone(),
                    language: language.to_string(),
                    text: resolver.resolve(text, language),
                    pause_ms,
                    emphasis: segment.emphasis,
                    voice_id: resolve_voice(script, segment, language, self.voice_fallback)
                        .unwrap_or_default()
                        .to_string(),
                });
            }
        }

        debug!(
            language,
            compiled = segments.len(),
            skipped = skipped.len(),
            "compiled script '{}'",
            script.title
        );

        Ok(Compilation {
            language: language.to_string(),
            segments,
            skipped,
        })
    }

    /// Compile every language the script mentions
    pub fn compile_all(&self, script: &Script) -> ScriptResult<BTreeMap<String, Compilation>> {
        script
            .languages()
            .into_iter()
            .map(|lang| self.compile(script, &lang).map(|c| (lang, c)))
            .collect()
    }
}

fn non_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Target-language text, else default-language text
pub fn resolve_text<'a>(script: &Script, segment: &'a Segment, language: &str) -> Option<&'a str> {
    segment
        .text
        .get(language)
        .filter(|t| non_blank(t))
        .or_else(|| {
            segment
                .text
                .get(&script.default_language)
                .filter(|t| non_blank(t))
        })
        .map(String::as_str)
}

/// Segment override, then the language's default voice, then (when allowed)
/// the default language's voice
pub fn resolve_voice<'a>(
    script: &'a Script,
    segment: &'a Segment,
    language: &str,
    fallback: VoiceFallback,
) -> Option<&'a str> {
    let explicit = segment.voice.as_ref().filter(|v| non_blank(v));
    let by_language = || script.default_voices.get(language).filter(|v| non_blank(v));
    let by_default = || match fallback {
        VoiceFallback::DefaultLanguage => script
            .default_voices
            .get(&script.default_language)
            .filter(|v| non_blank(v)),
        VoiceFallback::LanguageOnly => None,
    };

    explicit
        .or_else(by_language)
        .or_else(by_default)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ttsscript::script::Slide;

    fn script() -> Script {
        Script::new("Demo", "en")
            .with_default_voice("en", "V_EN")
            .with_default_voice("de", "V_DE")
            .with_pronunciation("SQL", "en", "sequel")
            .with_slide(
                Slide::new("One")
                    .with_segment(Segment::new().with_text("en", "Learn SQL").with_text("de", "SQL lernen"))
                    .with_segment(
                        Segment::new()
                            .with_text("en", "Override")
                            .with_voice("V_SEG")
                            .with_emphasis(Emphasis::Strong),
                    ),
            )
            .with_slide(Slide::new("Two").with_segment(Segment::new().with_text("fr", "Bonjour")))
    }

    #[test]
    fn falls_back_to_default_language_text() {
        let out = Compiler::new().compile(&script(), "de").unwrap();
        assert_eq!(out.segments.len(), 2);
        assert_eq!(out.skip_count(), 1);
        assert_eq!(out.segments[0].text, "SQL lernen");
        assert_eq!(out.segments[1].text, "Override");
        assert_eq!(out.segments[1].voice_id, "V_SEG");
        assert_eq!(out.segments[1].emphasis, Emphasis::Strong);
        assert_eq!(out.segments[0].voice_id, "V_DE");
    }

    #[test]
    fn skips_segments_without_text() {
        let out = Compiler::new().compile(&script(), "en").unwrap();
        // slide "Two" only has French
        assert_eq!(out.segments.len(), 2);
        assert_eq!(out.skip_count(), 1);
        assert_eq!(out.skipped[0].reason, SkipReason::NoText);
        assert_eq!(out.skipped[0].slide_title, "Two");
        assert_eq!(out.segments[0].text, "Learn sequel");
    }

    #[test]
    fn voice_fallback_policies() {
        let s = script();
        let seg = &s.slides[0].segments[0];
        assert_eq!(resolve_voice(&s, seg, "fr", VoiceFallback::LanguageOnly), None);
        assert_eq!(
            resolve_voice(&s, seg, "fr", VoiceFallback::DefaultLanguage),
            Some("V_EN")
        );
        assert_eq!(
            resolve_voice(&s, &s.slides[0].segments[1], "fr", VoiceFallback::LanguageOnly),
            Some("V_SEG")
        );
    }

    #[test]
    fn positions_are_contiguous() {
        let out = Compiler::new().compile(&script(), "fr").unwrap();
        let positions: Vec<usize> = out.segments.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn compile_all_covers_every_language() {
        let all = Compiler::new().compile_all(&script()).unwrap();
        let langs: Vec<&str> = all.keys().map(String::as_str).collect();
        assert_eq!(langs, vec!["de", "en", "fr"]);
    }
}
