/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the storage layer and the UI layer.
use std::path::{Path, PathBuf};

/// A single image shown in the gallery.
///
/// Seed images are demo records baked into the app; uploaded images
/// resolve their display path against the upload directory at render time.
/// The two variants share no identity beyond their position in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRecord {
    /// Demo record shown before any upload
    Seed {
        /// Display name (e.g., "Mountain Vista")
        name: String,
        /// Opaque asset reference for the placeholder artwork
        url: String,
    },
    /// A file the user imported into the gallery
    Uploaded {
        /// Display name, initially the original filename
        name: String,
        /// Filename inside the upload directory
        filename: String,
    },
}

impl ImageRecord {
    pub fn seed(name: &str, url: &str) -> Self {
        ImageRecord::Seed {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    pub fn uploaded(name: &str, filename: &str) -> Self {
        ImageRecord::Uploaded {
            name: name.to_string(),
            filename: filename.to_string(),
        }
    }

    /// Display name shown on the card and in the lightbox
    pub fn name(&self) -> &str {
        match self {
            ImageRecord::Seed { name, .. } => name,
            ImageRecord::Uploaded { name, .. } => name,
        }
    }

    /// Path to the image file on disk, if this record is backed by one.
    ///
    /// Seed records have no file; the grid draws a placeholder for them.
    pub fn file_path(&self, upload_dir: &Path) -> Option<PathBuf> {
        match self {
            ImageRecord::Seed { .. } => None,
            ImageRecord::Uploaded { filename, .. } => Some(upload_dir.join(filename)),
        }
    }

    /// Filename inside the upload directory, for uploaded records only
    pub fn upload_filename(&self) -> Option<&str> {
        match self {
            ImageRecord::Seed { .. } => None,
            ImageRecord::Uploaded { filename, .. } => Some(filename),
        }
    }
}

/// The six demo records shown on first load, before any upload.
pub fn seed_images() -> Vec<ImageRecord> {
    vec![
        ImageRecord::seed("Mountain Vista", "placeholder"),
        ImageRecord::seed("City at Night", "placeholder"),
        ImageRecord::seed("Abstract Art", "placeholder"),
        ImageRecord::seed("Forest Trail", "placeholder"),
        ImageRecord::seed("Ocean Sunset", "placeholder"),
        ImageRecord::seed("Modern Architecture", "placeholder"),
    ]
}
