//! Deterministic job → output file mapping for one batch run

use super::error::ScriptResult;
use super::format::TtsJob;
use crate::utils::save;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub output_dir: PathBuf,
    pub file_prefix: String,
    /// without the leading dot
    pub extension: String,
    /// zero-padded width of the job index
    pub index_width: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            file_prefix: "segment".to_string(),
            extension: "mp3".to_string(),
            index_width: 3,
        }
    }
}

impl BatchConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn with_index_width(mut self, width: usize) -> Self {
        self.index_width = width;
        self
    }

    /// `{prefix}_{index}_{language}.{extension}`, relative to `output_dir`
    ///
    /// Characters outside `[A-Za-z0-9_-]` in the prefix, language and
    /// extension become `_`, so a name never leaves `output_dir`.
    pub fn file_name(&self, index: usize, language: &str) -> String {
        let width = self.index_width;
        let language = path_component(language);
        let stem = if self.file_prefix.is_empty() {
            format!("{index:0width$}_{language}")
        } else {
            format!("{}_{index:0width$}_{language}", path_component(&self.file_prefix))
        };
        if self.extension.is_empty() {
            stem
        } else {
            format!("{stem}.{}", path_component(&self.extension))
        }
    }
}

fn path_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub index: usize,
    /// relative to the manifest's output directory
    pub path: String,
    pub job: TtsJob,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchManifest {
    pub output_dir: PathBuf,
    pub language: String,
    pub entries: Vec<ManifestEntry>,
}

impl BatchManifest {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn full_path(&self, entry: &ManifestEntry) -> PathBuf {
        self.output_dir.join(&entry.path)
    }

    pub fn total_characters(&self) -> usize {
        self.entries.iter().map(|e| e.job.character_count()).sum()
    }

    pub fn to_json(&self) -> ScriptResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ScriptResult<()> {
        save(path, self.to_json()?.as_bytes())?;
        Ok(())
    }
}

/// Pair each job with its output path; no filesystem access
///
/// Entries are numbered by their position in `jobs`, so paths are unique
/// within one manifest whatever the jobs' own indices are.
pub fn generate_manifest(jobs: &[TtsJob], config: &BatchConfig, language: &str) -> BatchManifest {
    let entries = jobs
        .iter()
        .enumerate()
        .map(|(index, job)| ManifestEntry {
            index,
            path: config.file_name(index, language),
            job: job.clone(),
        })
        .collect();

    BatchManifest {
        output_dir: config.output_dir.clone(),
        language: language.to_string(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(index: usize) -> TtsJob {
        TtsJob {
            index,
            position: index,
            slide_title: "S".into(),
            language: "en".into(),
            text: "hi".into(),
            voice_id: "V".into(),
            pause_ms: 0,
        }
    }

    #[test]
    fn file_names_are_zero_padded() {
        let config = BatchConfig::new("out");
        assert_eq!(config.file_name(7, "en"), "segment_007_en.mp3");
        assert_eq!(config.file_name(1234, "en"), "segment_1234_en.mp3");

        let bare = BatchConfig::new("out")
            .with_file_prefix("")
            .with_extension(".wav")
            .with_index_width(5);
        assert_eq!(bare.file_name(3, "es"), "00003_es.wav");
    }

    #[test]
    fn manifest_follows_job_order() {
        let jobs: Vec<TtsJob> = (0..3).map(job).collect();
        let manifest = generate_manifest(&jobs, &BatchConfig::new("/tmp/x"), "en");

        let paths: Vec<&str> = manifest.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["segment_000_en.mp3", "segment_001_en.mp3", "segment_002_en.mp3"]
        );
        assert_eq!(
            manifest.full_path(&manifest.entries[1]),
            PathBuf::from("/tmp/x/segment_001_en.mp3")
        );
        assert_eq!(manifest.total_characters(), 6);
    }

    #[test]
    fn duplicate_job_indices_get_distinct_paths() {
        let jobs = vec![job(0), job(0), job(5)];
        let manifest = generate_manifest(&jobs, &BatchConfig::new("out"), "en");

        let paths: Vec<&str> = manifest.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["segment_000_en.mp3", "segment_001_en.mp3", "segment_002_en.mp3"]
        );
        assert_eq!(manifest.entries[2].job.index, 5);
    }

    #[test]
    fn file_names_stay_inside_output_dir() {
        let config = BatchConfig::new("out");
        let name = config.file_name(0, "x/../../../etc");
        assert_eq!(name, "segment_000_x__________etc.mp3");

        let manifest = generate_manifest(&[job(0)], &config, "../up");
        let full = manifest.full_path(&manifest.entries[0]);
        assert_eq!(full.parent(), Some(Path::new("out")));

        let odd = BatchConfig::new("out")
            .with_file_prefix("../seg")
            .with_extension("mp3/../x");
        assert!(!odd.file_name(1, "en").contains('/'));
    }
}
