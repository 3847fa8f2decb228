//! Multilingual narration script document
//!
//! A [`Script`] is a list of [`Slide`]s, each holding ordered [`Segment`]s of
//! localized text. Script-level defaults (language, voices, pronunciations)
//! apply to every segment unless the segment overrides them.

use super::duration::parse_pause;
use super::error::ScriptResult;
use super::pronunciation::PronunciationTable;
use crate::utils::save;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Emphasis {
    #[default]
    None,
    Moderate,
    Strong,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub default_language: String,
    /// language code -> voice id
    #[serde(default)]
    pub default_voices: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "PronunciationTable::is_empty")]
    pub pronunciations: PronunciationTable,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// language code -> localized text
    #[serde(default)]
    pub text: BTreeMap<String, String>,
    /// e.g. `500ms`, `1.5s`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_after: Option<String>,
    #[serde(default, skip_serializing_if = "is_no_emphasis")]
    pub emphasis: Emphasis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
}

fn is_no_emphasis(e: &Emphasis) -> bool {
    *e == Emphasis::None
}

/// Language codes end up in output file names: `[A-Za-z0-9_-]+` only
fn is_language_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn invalid_code(code: &str, location: &str) -> ValidationIssue {
    ValidationIssue::new(
        IssueCategory::InvalidLanguageCode,
        format!("{location}: language code '{code}' may only use letters, digits, '-' and '_'"),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum IssueCategory {
    MissingTitle,
    MissingDefaultLanguage,
    NoSlides,
    EmptySlide,
    EmptySegment,
    EmptyLanguageCode,
    InvalidLanguageCode,
    EmptyPronunciation,
    InvalidPause,
    MissingDefaultVoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Severity {
    Warning,
    Error,
}

impl IssueCategory {
    pub fn severity(self) -> Severity {
        match self {
            IssueCategory::MissingDefaultVoice => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub category: IssueCategory,
    pub message: String,
}

impl ValidationIssue {
    fn new(category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.category.severity()
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.category, self.message)
    }
}

impl Script {
    pub fn new(title: impl Into<String>, default_language: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default_language: default_language.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default_voice(mut self, language: impl Into<String>, voice_id: impl Into<String>) -> Self {
        self.default_voices.insert(language.into(), voice_id.into());
        self
    }

    pub fn with_pronunciation(
        mut self,
        term: impl Into<String>,
        language: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.pronunciations.insert(term, language, replacement);
        self
    }

    pub fn with_slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    /// Every issue found; an empty list means the script is valid
    pub fn validate(&self) -> Vec<ValidationIssue> {
        use IssueCategory::*;
        let mut issues = Vec::new();

        if self.title.trim().is_empty() {
            issues.push(ValidationIssue::new(MissingTitle, "script title is empty"));
        }
        if self.default_language.trim().is_empty() {
            issues.push(ValidationIssue::new(
                MissingDefaultLanguage,
                "default language is empty",
            ));
        } else if !is_language_code(&self.default_language) {
            issues.push(invalid_code(&self.default_language, "default language"));
        }
        if self.slides.is_empty() {
            issues.push(ValidationIssue::new(NoSlides, "script has no slides"));
        }

        for (si, slide) in self.slides.iter().enumerate() {
            if slide.segments.is_empty() {
                issues.push(ValidationIssue::new(
                    EmptySlide,
                    format!("slide {si} ('{}') has no segments", slide.title),
                ));
            }
            for (gi, segment) in slide.segments.iter().enumerate() {
                if segment.text.is_empty() {
                    issues.push(ValidationIssue::new(
                        EmptySegment,
                        format!("slide {si} segment {gi} has no text"),
                    ));
                }
                for lang in segment.text.keys() {
                    if lang.trim().is_empty() {
                        issues.push(ValidationIssue::new(
                            EmptyLanguageCode,
                            format!("slide {si} segment {gi} has an empty language code"),
                        ));
                    } else if !is_language_code(lang) {
                        issues.push(invalid_code(lang, &format!("slide {si} segment {gi}")));
                    }
                }
                if let Some(spec) = &segment.pause_after {
                    if let Err(reason) = parse_pause(spec) {
                        issues.push(ValidationIssue::new(
                            InvalidPause,
                            format!("slide {si} segment {gi} pause_after '{spec}': {reason}"),
                        ));
                    }
                }
            }
        }

        for lang in self.default_voices.keys() {
            if lang.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    EmptyLanguageCode,
                    "default_voices has an empty language code",
                ));
            } else if !is_language_code(lang) {
                issues.push(invalid_code(lang, "default_voices"));
            }
        }

        for (term, langs) in self.pronunciations.iter() {
            for (lang, replacement) in langs {
                if lang.trim().is_empty() {
                    issues.push(ValidationIssue::new(
                        EmptyLanguageCode,
                        format!("pronunciation '{term}' has an empty language code"),
                    ));
                } else if !is_language_code(lang) {
                    issues.push(invalid_code(lang, &format!("pronunciation '{term}'")));
                }
                if replacement.is_empty() {
                    issues.push(ValidationIssue::new(
                        EmptyPronunciation,
                        format!("pronunciation '{term}' ({lang}) has an empty replacement"),
                    ));
                }
            }
        }

        if !self.default_language.trim().is_empty()
            && !self.default_voices.contains_key(&self.default_language)
        {
            issues.push(ValidationIssue::new(
                MissingDefaultVoice,
                format!(
                    "no default voice for default language '{}'",
                    self.default_language
                ),
            ));
        }

        issues
    }

    /// True when validation reports no error-severity issue
    pub fn is_valid(&self) -> bool {
        self.validate()
            .iter()
            .all(|issue| issue.severity() < Severity::Error)
    }

    /// All language codes used by segment text or default voices
    pub fn languages(&self) -> BTreeSet<String> {
        self.slides
            .iter()
            .flat_map(|slide| slide.segments.iter())
            .flat_map(|segment| segment.text.keys())
            .chain(self.default_voices.keys())
            .filter(|lang| !lang.is_empty())
            .cloned()
            .collect()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn segment_count(&self) -> usize {
        self.slides.iter().map(|s| s.segments.len()).sum()
    }

    pub fn to_json(&self) -> ScriptResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ScriptResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ScriptResult<()> {
        save(path, self.to_json()?.as_bytes())?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> ScriptResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            segments: Vec::new(),
        }
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }
}

impl Segment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, language: impl Into<String>, text: impl Into<String>) -> Self {
        self.text.insert(language.into(), text.into());
        self
    }

    pub fn with_pause_after(mut self, spec: impl Into<String>) -> Self {
        self.pause_after = Some(spec.into());
        self
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice = Some(voice_id.into());
        self
    }
}
