//! This is a collection of file utilities used around the engines.

use crate::core::error::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes the whole of \p content to \p path, replacing the file. The
/// content goes to a temporary file in the same directory first, which is
/// then renamed over \p path, so a failed write never leaves a truncated
/// document behind.
pub fn save_to_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut f = NamedTempFile::new_in(dir).map_err(|e| Error::io(path, e))?;
    f.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    f.persist(path).map_err(|e| Error::io(path, e.error))?;
    log::info!("Wrote {}", path.display());
    Result::Ok(())
}

/// Returns the file next to \p input that has the same base name and the
/// extension \p ext. For example "site/rack1.csv" -> "site/rack1.dot".
pub fn sibling_path(input: &Path, ext: &str) -> PathBuf {
    input.with_extension(ext)
}
