mod queries;

use std::fs;
use std::path::PathBuf;

use paleo_snap_application::{ApplicationError, PhotoStore};
use paleo_snap_domain::PhotoRecord;
use rusqlite::Connection;

use crate::migrations::{MIGRATIONS, SCHEMA_VERSION};

pub const DEFAULT_DB_FILE: &str = "paleontology.sqlite3";

#[derive(Debug, Clone)]
pub struct SqlitePhotoStore {
    path: PathBuf,
}

impl SqlitePhotoStore {
    pub fn new(path: String) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    // Each operation opens its own connection and upgrades the schema idempotently.
    fn open_prepared(&self) -> Result<Connection, rusqlite::Error> {
        let conn = Connection::open(&self.path)?;
        conn.execute_batch("PRAGMA foreign_keys=ON; PRAGMA journal_mode=WAL;")?;
        for migration in MIGRATIONS {
            conn.execute_batch(migration)?;
        }
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        Ok(conn)
    }
}

impl PhotoStore for SqlitePhotoStore {
    fn initialize(&self) -> Result<(), ApplicationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "store path must not be empty".to_string(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|error| ApplicationError::Io(error.to_string()))?;
            }
        }

        self.open_prepared().map_err(|error| {
            ApplicationError::StorageWrite(format!("Erro ao abrir o banco de dados: {error}"))
        })?;
        Ok(())
    }

    fn put(&self, record: &PhotoRecord) -> Result<(), ApplicationError> {
        let conn = self.open_prepared().map_err(|error| {
            ApplicationError::StorageWrite(format!("Erro ao abrir o banco de dados: {error}"))
        })?;
        queries::insert_photo(&conn, record)
            .map_err(|error| ApplicationError::StorageWrite(error.to_string()))
    }

    fn read_all(&self) -> Result<Vec<PhotoRecord>, ApplicationError> {
        let conn = self.open_prepared().map_err(|error| {
            ApplicationError::StorageRead(format!("Erro ao abrir o banco de dados: {error}"))
        })?;
        queries::list_photos(&conn)
            .map_err(|error| ApplicationError::StorageRead(error.to_string()))
    }
}
