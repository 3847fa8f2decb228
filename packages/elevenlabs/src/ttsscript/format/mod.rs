//! Renderers over compiled segments
//!
//! Formatters never mutate their input. Adding an output target means adding a
//! [`Formatter`] implementation; the compiler stays untouched.

use super::compiler::CompiledSegment;

pub mod jobs;
pub mod ssml;

pub use jobs::{JobBatch, JobFormatter, TtsJob};
pub use ssml::SsmlFormatter;

pub trait Formatter {
    type Output;

    fn format(&self, segments: &[CompiledSegment]) -> Self::Output;
}
