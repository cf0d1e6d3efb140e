/// The Catalog manages the SQLite database of uploaded images.
///
/// The browser original forgot its upload list on every reload even though
/// the files stayed on disk; here the catalog is read back at startup so the
/// gallery survives restarts.
use std::path::{Path, PathBuf};

use rusqlite::{Connection, Result as SqlResult};

use super::data::ImageRecord;

/// One row of the uploads table
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRow {
    pub id: i64,
    /// Filename inside the upload directory (unique)
    pub filename: String,
    /// Display name, initially the original filename
    pub name: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl UploadRow {
    /// Convert to the record type the view-state holds
    pub fn record(&self) -> ImageRecord {
        ImageRecord::uploaded(&self.name, &self.filename)
    }
}

pub struct Catalog {
    conn: Connection,
    db_path: PathBuf,
}

impl Catalog {
    /// Open (or create) the catalog at the given path and initialize the
    /// schema. The parent directory is created if missing.
    pub fn open(db_path: PathBuf) -> SqlResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .expect("Failed to create application data directory");
        }

        let conn = Connection::open(&db_path)?;
        let catalog = Catalog { conn, db_path };
        catalog.init_schema()?;

        Ok(catalog)
    }

    /// Open the catalog at its default per-user location:
    /// - Linux: ~/.local/share/image-gallery/gallery.db
    /// - macOS: ~/Library/Application Support/image-gallery/gallery.db
    /// - Windows: %APPDATA%\image-gallery\gallery.db
    pub fn open_default() -> SqlResult<Self> {
        Self::open(Self::default_path())
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");

        path.push("image-gallery");
        path.push("gallery.db");
        path
    }

    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS uploads (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                filename        TEXT NOT NULL UNIQUE,
                name            TEXT NOT NULL,
                width           INTEGER,
                height          INTEGER,
                uploaded_at     INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_uploads_uploaded_at
             ON uploads(uploaded_at)",
            [],
        )?;

        Ok(())
    }

    /// Get the path to the database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Register an uploaded file. Re-uploading the same filename overwrites
    /// the earlier row, matching the file-on-disk overwrite.
    pub fn insert_upload(
        &self,
        filename: &str,
        name: &str,
        dimensions: Option<(u32, u32)>,
    ) -> SqlResult<i64> {
        let (width, height) = match dimensions {
            Some((w, h)) => (Some(w), Some(h)),
            None => (None, None),
        };

        self.conn.execute(
            "INSERT INTO uploads (filename, name, width, height, uploaded_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(filename) DO UPDATE SET
                name = excluded.name,
                width = excluded.width,
                height = excluded.height,
                uploaded_at = excluded.uploaded_at",
            rusqlite::params![filename, name, width, height, chrono::Utc::now().timestamp()],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// All uploads in upload order (oldest first, matching append order)
    pub fn all_uploads(&self) -> SqlResult<Vec<UploadRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, filename, name, width, height
             FROM uploads ORDER BY uploaded_at ASC, id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(UploadRow {
                id: row.get(0)?,
                filename: row.get(1)?,
                name: row.get(2)?,
                width: row.get(3)?,
                height: row.get(4)?,
            })
        })?;

        let mut uploads = Vec::new();
        for row in rows {
            uploads.push(row?);
        }

        Ok(uploads)
    }

    /// Forget an upload by filename. Returns true if a row was removed.
    pub fn remove_upload(&self, filename: &str) -> SqlResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM uploads WHERE filename = ?1", [filename])?;
        Ok(removed > 0)
    }

    /// Whether a filename is already cataloged (used by the startup
    /// reconciliation scan)
    pub fn contains(&self, filename: &str) -> SqlResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM uploads WHERE filename = ?1",
            [filename],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Number of cataloged uploads
    pub fn upload_count(&self) -> SqlResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM uploads", [], |row| row.get(0))
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("db_path", &self.db_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_temp_catalog(dir: &Path) -> Catalog {
        Catalog::open(dir.join("gallery.db")).expect("failed to open catalog")
    }

    #[test]
    fn test_insert_list_remove_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let catalog = open_temp_catalog(dir.path());

        catalog
            .insert_upload("sunset.jpg", "sunset.jpg", Some((1920, 1080)))
            .unwrap();
        catalog
            .insert_upload("cat.png", "cat.png", None)
            .unwrap();

        let uploads = catalog.all_uploads().unwrap();
        assert_eq!(uploads.len(), 2);
        assert_eq!(uploads[0].filename, "sunset.jpg");
        assert_eq!(uploads[0].width, Some(1920));
        assert_eq!(uploads[1].filename, "cat.png");
        assert_eq!(uploads[1].width, None);

        assert!(catalog.remove_upload("sunset.jpg").unwrap());
        assert!(!catalog.remove_upload("sunset.jpg").unwrap());
        assert_eq!(catalog.upload_count().unwrap(), 1);
    }

    #[test]
    fn test_reinsert_overwrites_instead_of_duplicating() {
        let dir = tempdir().expect("failed to create temp dir");
        let catalog = open_temp_catalog(dir.path());

        catalog.insert_upload("a.png", "a.png", None).unwrap();
        catalog
            .insert_upload("a.png", "a.png", Some((640, 480)))
            .unwrap();

        let uploads = catalog.all_uploads().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].width, Some(640));
    }

    #[test]
    fn test_contains_reflects_catalog_contents() {
        let dir = tempdir().expect("failed to create temp dir");
        let catalog = open_temp_catalog(dir.path());

        assert!(!catalog.contains("a.png").unwrap());
        catalog.insert_upload("a.png", "a.png", None).unwrap();
        assert!(catalog.contains("a.png").unwrap());
    }

    #[test]
    fn test_record_conversion() {
        let row = UploadRow {
            id: 1,
            filename: "dog.webp".to_string(),
            name: "dog.webp".to_string(),
            width: None,
            height: None,
        };
        assert_eq!(row.record().upload_filename(), Some("dog.webp"));
        assert_eq!(row.record().name(), "dog.webp");
    }
}
