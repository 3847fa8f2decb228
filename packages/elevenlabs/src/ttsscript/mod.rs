//! Multilingual narration scripts → ElevenLabs jobs and SSML
//!
//! ```no_run
//! use elevenlabs_client::ttsscript::*;
//!
//! # fn main() -> Result<(), ScriptError> {
//! let script = Script::load("course.json")?;
//! for issue in script.validate() {
//!     eprintln!("{issue}");
//! }
//!
//! let compiler = Compiler::new().with_pronunciation("SQL", "en", "sequel");
//! let compiled = compiler.compile(&script, "en")?;
//!
//! let batch = JobFormatter::new().format(&compiled.segments);
//! let manifest = generate_manifest(&batch.jobs, &BatchConfig::new("out/en"), "en");
//! let ssml = SsmlFormatter::new().format_script(&compiler, &script, "en")?;
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod compiler;
pub mod duration;
pub mod error;
pub mod format;
pub mod manifest;
pub mod pronunciation;
pub mod script;

pub use batch::{BatchReport, BatchRunner, ElevenLabsSynthesizer, SpeechSynthesizer, SynthesisOptions};
pub use compiler::{
    Compilation, CompiledSegment, Compiler, SkipReason, SkippedSegment, VoiceFallback,
    resolve_text, resolve_voice,
};
pub use duration::parse_pause;
pub use error::{ScriptError, ScriptResult};
pub use format::{Formatter, JobBatch, JobFormatter, SsmlFormatter, TtsJob};
pub use manifest::{BatchConfig, BatchManifest, ManifestEntry, generate_manifest};
pub use pronunciation::{PronunciationResolver, PronunciationTable};
pub use script::{Emphasis, IssueCategory, Script, Segment, Severity, Slide, ValidationIssue};
