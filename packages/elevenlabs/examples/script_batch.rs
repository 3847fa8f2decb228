//! Compiles a narration script into per-language batches and synthesizes them
//!
//! ```sh
//! ELEVENLABS_API_KEY=... cargo run --example script_batch -- examples/data/welcome.json out
//! ```
//!
//! Pass `--dry-run` as a third argument to stop after writing manifests and SSML.

use elevenlabs_client::endpoints::admin::user::GetUserSubscription;
use elevenlabs_client::shared::Model;
use elevenlabs_client::ttsscript::*;
use elevenlabs_client::{ElevenLabsClient, Result};
use std::path::PathBuf;
use tracing::{info, warn};

fn init_tracing() -> Result<()> {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("elevenlabs_client=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .unwrap_or_else(|| "examples/data/welcome.json".to_string());
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "output".to_string()));
    let dry_run = args.next().is_some_and(|a| a == "--dry-run");

    let script = Script::load(&script_path)?;
    for issue in script.validate() {
        warn!("{issue}");
    }
    if !script.is_valid() {
        return Err(format!("{script_path} has validation errors").into());
    }

    let compiler = Compiler::new().with_pronunciation("JSON", "es", "yei-son");
    let compilations = compiler.compile_all(&script)?;

    let mut manifests = Vec::new();
    for (language, compiled) in &compilations {
        for skipped in &compiled.skipped {
            info!(%language, slide = %skipped.slide_title, "skipped segment: {:?}", skipped.reason);
        }

        let batch = JobFormatter::new().format(&compiled.segments);
        let lang_dir = out_dir.join(language);
        let manifest = generate_manifest(&batch.jobs, &BatchConfig::new(&lang_dir), language);
        manifest.save(lang_dir.join("manifest.json"))?;

        let ssml = SsmlFormatter::new()
            .with_slide_marks(true)
            .format(&compiled.segments)?;
        elevenlabs_client::utils::save(lang_dir.join("script.ssml"), ssml.as_bytes())?;

        info!(
            %language,
            jobs = manifest.len(),
            skipped = batch.skip_count(),
            characters = manifest.total_characters(),
            "prepared batch"
        );
        manifests.push(manifest);
    }

    if dry_run {
        return Ok(());
    }

    let client = ElevenLabsClient::from_env()?;
    let needed: usize = manifests.iter().map(BatchManifest::total_characters).sum();
    let subscription = client.hit(GetUserSubscription).await?;
    if (subscription.remaining_characters() as usize) < needed {
        return Err(format!(
            "batch needs {needed} characters, {} remaining on the {} tier",
            subscription.remaining_characters(),
            subscription.tier
        )
        .into());
    }

    let runner = BatchRunner::new(ElevenLabsSynthesizer::new(
        client,
        SynthesisOptions {
            model: Model::ElevenFlashV2_5,
            ..Default::default()
        },
    ));
    for manifest in &manifests {
        let report = runner.run(manifest).await?;
        if !report.is_complete() {
            warn!(language = %manifest.language, failed = report.failed.len(), "batch incomplete");
        }
    }
    Ok(())
}
