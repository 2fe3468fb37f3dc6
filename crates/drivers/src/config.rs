use paleo_snap_adapters::DEFAULT_DB_FILE;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: String,
    pub frames_root: String,
    pub page_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_FILE.to_string(),
            frames_root: "frames".to_string(),
            page_path: "gallery.html".to_string(),
        }
    }
}
