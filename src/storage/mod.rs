/// Upload storage
///
/// Handles the on-disk side of the gallery:
/// - Resolving and creating the per-user upload directory
/// - Copying picked files into it, keyed by original filename
/// - Best-effort removal when an image is deleted
/// - Scanning the directory for files the catalog does not know about
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// File extensions accepted by the picker and the storage layer
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Storage failures carry message strings so they stay cheap to clone
/// through the message loop.
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    #[error("file has no usable name: {0:?}")]
    MissingFileName(PathBuf),
    #[error("not a supported image type: {0:?}")]
    UnsupportedType(PathBuf),
    #[error("i/o error: {0}")]
    Io(String),
}

/// A file successfully copied into the upload directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    /// Filename inside the upload directory
    pub filename: String,
    /// Pixel dimensions, when the file decodes as an image
    pub dimensions: Option<(u32, u32)>,
}

/// Get the upload directory, creating it if needed.
/// Returns ~/.local/share/image-gallery/uploads on Linux.
pub fn default_upload_dir() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .expect("Could not determine user data directory");

    path.push("image-gallery");
    path.push("uploads");

    std::fs::create_dir_all(&path).expect("Failed to create upload directory");

    path
}

/// Whether the path has one of the accepted image extensions
pub fn is_accepted(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}

/// Copy `source` into the upload directory under its original filename.
///
/// An existing file with the same name is overwritten; uploads are keyed
/// by filename alone. Dimensions are probed after the copy and are None
/// for files the image crate cannot read.
pub async fn store_file(source: PathBuf, upload_dir: PathBuf) -> Result<StoredUpload, UploadError> {
    if !is_accepted(&source) {
        return Err(UploadError::UnsupportedType(source));
    }

    let filename = source
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| UploadError::MissingFileName(source.clone()))?;

    let data = tokio::fs::read(&source)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    let destination = upload_dir.join(&filename);
    tokio::fs::write(&destination, data)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    let dimensions = image::image_dimensions(&destination).ok();

    Ok(StoredUpload {
        filename,
        dimensions,
    })
}

/// Delete an uploaded file by filename. Failures are logged and swallowed;
/// a missing file is not an error.
pub fn remove_file(upload_dir: &Path, filename: &str) {
    let path = upload_dir.join(filename);
    if !path.exists() {
        return;
    }
    if let Err(e) = std::fs::remove_file(&path) {
        eprintln!("⚠️  Error deleting file {}: {}", path.display(), e);
    }
}

/// List the image files sitting in the upload directory.
///
/// Used at startup to adopt files that are on disk but missing from the
/// catalog (copied in by hand, or left over from a lost database).
pub fn scan_upload_dir(upload_dir: &Path) -> Vec<StoredUpload> {
    let mut found = Vec::new();

    for entry in WalkDir::new(upload_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_accepted(path) {
            continue;
        }

        let filename = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None => continue,
        };

        found.push(StoredUpload {
            filename,
            dimensions: image::image_dimensions(path).ok(),
        });
    }

    // WalkDir order is platform-dependent; keep adoption deterministic
    found.sort_by(|a, b| a.filename.cmp(&b.filename));
    found
}
