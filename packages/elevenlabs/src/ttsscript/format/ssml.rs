//! SSML document renderer
//!
//! Each slide becomes a `<p>`, each segment an `<s>`. Emphasis maps to
//! `<emphasis level>`, pauses to a `<break time>` after the sentence.

use super::Formatter;
use crate::ttsscript::compiler::{CompiledSegment, Compiler};
use crate::ttsscript::duration::format_break_time;
use crate::ttsscript::error::{ScriptError, ScriptResult};
use crate::ttsscript::script::{Emphasis, Script};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

pub const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";

#[derive(Clone, Debug, Default)]
pub struct SsmlFormatter {
    language: Option<String>,
    voice_tags: bool,
    slide_marks: bool,
    indent: bool,
}

impl SsmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `xml:lang` of the document; defaults to the first segment's language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Wrap each sentence in `<voice name="…">`
    pub fn with_voice_tags(mut self, enabled: bool) -> Self {
        self.voice_tags = enabled;
        self
    }

    /// Emit `<mark name="slide-N"/>` at the start of every slide
    pub fn with_slide_marks(mut self, enabled: bool) -> Self {
        self.slide_marks = enabled;
        self
    }

    pub fn with_indent(mut self, enabled: bool) -> Self {
        self.indent = enabled;
        self
    }

    /// Compile `script` for `language` and render it
    pub fn format_script(
        &self,
        compiler: &Compiler,
        script: &Script,
        language: &str,
    ) -> ScriptResult<String> {
        let compilation = compiler.compile(script, language)?;
        let language = self.language.as_deref().unwrap_or(language);
        self.render(&compilation.segments, language)
    }

    fn render(&self, segments: &[CompiledSegment], language: &str) -> ScriptResult<String> {
        let mut writer = if self.indent {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };

        let mut speak = BytesStart::new("speak");
        speak.push_attribute(("version", "1.0"));
        speak.push_attribute(("xmlns", SSML_NAMESPACE));
        if !language.is_empty() {
            speak.push_attribute(("xml:lang", language));
        }
        emit(&mut writer, Event::Start(speak))?;

        let mut open_slide: Option<usize> = None;
        for segment in segments {
            if open_slide != Some(segment.slide_index) {
                if open_slide.is_some() {
                    emit(&mut writer, Event::End(BytesEnd::new("p")))?;
                }
                emit(&mut writer, Event::Start(BytesStart::new("p")))?;
                if self.slide_marks {
                    let name = format!("slide-{}", segment.slide_index + 1);
                    emit(
                        &mut writer,
                        Event::Empty(BytesStart::new("mark").with_attributes([("name", name.as_str())])),
                    )?;
                }
                open_slide = Some(segment.slide_index);
            }
            self.write_segment(&mut writer, segment)?;
        }
        if open_slide.is_some() {
            emit(&mut writer, Event::End(BytesEnd::new("p")))?;
        }

        emit(&mut writer, Event::End(BytesEnd::new("speak")))?;

        let doc = String::from_utf8(writer.into_inner())
            .map_err(|e| ScriptError::Markup(e.into()))?;
        debug!(segments = segments.len(), bytes = doc.len(), "rendered ssml");
        Ok(doc)
    }

    fn write_segment(
        &self,
        writer: &mut Writer<Vec<u8>>,
        segment: &CompiledSegment,
    ) -> ScriptResult<()> {
        let voiced = self.voice_tags && segment.has_voice();
        let emphasized = segment.emphasis != Emphasis::None;

        emit(writer, Event::Start(BytesStart::new("s")))?;
        if voiced {
            emit(
                writer,
                Event::Start(
                    BytesStart::new("voice").with_attributes([("name", segment.voice_id.as_str())]),
                ),
            )?;
        }
        if emphasized {
            let level = segment.emphasis.to_string();
            emit(
                writer,
                Event::Start(BytesStart::new("emphasis").with_attributes([("level", level.as_str())])),
            )?;
        }

        emit(writer, Event::Text(BytesText::new(&segment.text)))?;

        if emphasized {
            emit(writer, Event::End(BytesEnd::new("emphasis")))?;
        }
        if voiced {
            emit(writer, Event::End(BytesEnd::new("voice")))?;
        }
        emit(writer, Event::End(BytesEnd::new("s")))?;

        if segment.pause_ms > 0 {
            let time = format_break_time(segment.pause_ms);
            emit(
                writer,
                Event::Empty(BytesStart::new("break").with_attributes([("time", time.as_str())])),
            )?;
        }
        Ok(())
    }
}

impl Formatter for SsmlFormatter {
    type Output = ScriptResult<String>;

    fn format(&self, segments: &[CompiledSegment]) -> ScriptResult<String> {
        let language = self
            .language
            .as_deref()
            .or_else(|| segments.first().map(|s| s.language.as_str()))
            .unwrap_or_default();
        self.render(segments, language)
    }
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> ScriptResult<()> {
    writer
        .write_event(event)
        .map_err(|e| ScriptError::Markup(e.into()))
}
