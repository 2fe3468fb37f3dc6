use paleo_snap_domain::{EncodedImage, GeoPoint, PhotoRecord};
use rusqlite::{params, Connection, Result};

pub fn insert_photo(conn: &Connection, record: &PhotoRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO photos (title, mime, photo, latitude, longitude, captured_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.title,
            record.photo.mime,
            record.photo.bytes,
            record.location.latitude,
            record.location.longitude,
            record.timestamp,
        ],
    )?;
    Ok(())
}

pub fn list_photos(conn: &Connection) -> Result<Vec<PhotoRecord>> {
    let mut stmt = conn.prepare(
        "SELECT title, mime, photo, latitude, longitude, captured_at
         FROM photos
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(PhotoRecord {
            title: row.get(0)?,
            photo: EncodedImage {
                mime: row.get(1)?,
                bytes: row.get(2)?,
            },
            location: GeoPoint {
                latitude: row.get(3)?,
                longitude: row.get(4)?,
            },
            timestamp: row.get(5)?,
        })
    })?;

    rows.collect()
}
