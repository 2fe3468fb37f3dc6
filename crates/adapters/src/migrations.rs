pub const SCHEMA_VERSION: i32 = 1;

pub const MIGRATIONS: &[&str] = &["CREATE TABLE IF NOT EXISTS photos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    mime TEXT NOT NULL,
    photo BLOB NOT NULL,
    latitude REAL NOT NULL,
    longitude REAL NOT NULL,
    captured_at TEXT NOT NULL
);"];
