//! Request-scoped temporary storage for uploaded files. One uniquely named
//! file per in-flight upload, written fully before parsing begins and
//! deleted after parsing completes or fails.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use tracing::debug;
use uuid::Uuid;

/// Writes uploaded bytes to a uniquely named temp file under `upload_dir`,
/// preserving the original extension so the extractor can dispatch on it.
/// Uniqueness comes from the uuid prefix plus `tempfile`'s randomized naming.
pub fn save_upload(upload_dir: &Path, data: &Bytes, filename: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(upload_dir)
        .with_context(|| format!("failed to create upload dir {}", upload_dir.display()))?;

    let suffix = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix(&format!("{}-", Uuid::new_v4()))
        .suffix(&suffix)
        .tempfile_in(upload_dir)
        .context("failed to create temp file")?;
    file.write_all(data).context("failed to write upload")?;

    // keep() so the file survives this scope; the handler deletes it once
    // parsing is done.
    let (_, path) = file.keep().context("failed to persist temp file")?;
    Ok(path)
}

/// Best-effort deletion. Failure to delete is swallowed, never surfaced.
pub fn cleanup(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        debug!("Failed to remove temp file {}: {e}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_preserves_extension_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let data = Bytes::from_static(b"%PDF-1.4 fake");
        let path = save_upload(dir.path(), &data, "My Resume.PDF").unwrap();

        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "pdf");
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 fake");
    }

    #[test]
    fn test_concurrent_saves_get_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let data = Bytes::from_static(b"x");
        let a = save_upload(dir.path(), &data, "resume.pdf").unwrap();
        let b = save_upload(dir.path(), &data, "resume.pdf").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cleanup_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_upload(dir.path(), &Bytes::from_static(b"x"), "r.docx").unwrap();
        cleanup(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_missing_file_is_silent() {
        cleanup(Path::new("/nonexistent/upload.pdf"));
    }
}
