use std::fs::{self, File};
use std::io::prelude::*;
use std::path::Path;
use tracing::debug;

/// Save bytes to a file, creating missing parent directories
pub fn save(filename: impl AsRef<Path>, data: &[u8]) -> std::io::Result<()> {
    let path = filename.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data)?;
    debug!(path = %path.display(), bytes = data.len(), "saved file");
    Ok(())
}
