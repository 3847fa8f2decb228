//! Typed ElevenLabs API client
//!
//! Endpoint bindings implement [`endpoints::ElevenLabsEndpoint`] and are sent
//! through [`ElevenLabsClient::hit`]. The [`ttsscript`] module compiles
//! multilingual narration scripts into text-to-speech batch jobs and SSML.
//!
//! # Usage
//!
//! ```no_run
//! use elevenlabs_client::ttsscript::*;
//! use elevenlabs_client::{ElevenLabsClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let script = Script::load("course.json")?;
//!     let compiled = Compiler::new().compile(&script, "en")?;
//!     let batch = JobFormatter::new().format(&compiled.segments);
//!     let manifest = generate_manifest(&batch.jobs, &BatchConfig::new("out"), "en");
//!
//!     let client = ElevenLabsClient::from_env()?;
//!     let runner = BatchRunner::new(ElevenLabsSynthesizer::new(client, SynthesisOptions::default()));
//!     let report = runner.run(&manifest).await?;
//!     println!("{} files written", report.written.len());
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod error;
pub mod shared;
pub mod ttsscript;
pub mod utils;

pub use client::{ClientConfig, ElevenLabsClient, Result};
pub use error::Error;
