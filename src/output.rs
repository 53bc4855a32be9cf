use std::fs::{self, File};
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use camino::Utf8Path;

const WRITE_BUFFER: usize = 1 << 20;

/// Ensure a directory exists, creating it recursively if needed.
pub fn ensure_dir(path: &Utf8Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| format!("creating directory {}", path))?;
    }
    Ok(())
}

/// Create or truncate `path` and stream the fixture body produced by `fill` into it.
///
/// The file is flushed and synced before returning; the result is its size on disk.
pub fn write_fixture<F>(path: &Utf8Path, fill: F) -> Result<u64>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).with_context(|| format!("creating {}", path))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER, file);
    fill(&mut writer).with_context(|| format!("writing {}", path))?;

    let file = writer
        .into_inner()
        .map_err(|err| err.into_error())
        .with_context(|| format!("flushing {}", path))?;
    file.sync_all()
        .with_context(|| format!("syncing {}", path))?;
    let bytes = file
        .metadata()
        .with_context(|| format!("reading metadata for {}", path))?
        .len();

    tracing::debug!(path = %path, bytes, "fixture written");
    Ok(bytes)
}
