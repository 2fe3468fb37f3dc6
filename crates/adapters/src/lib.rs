pub mod content;
pub mod fs;
pub mod geo;
pub mod html;
pub mod migrations;
pub mod presenters;
pub mod sqlite;

pub use content::BuiltinReferenceContent;
pub use fs::{FolderCamera, SystemClock, FRAME_MIME};
pub use geo::EnvLocationProvider;
pub use html::{image_data_url, map_embed_url, HtmlRenderTarget};
pub use presenters::{
    present_capture, present_position, present_recent_row, present_site_row, present_spot_row,
    TITLE_PROMPT,
};
pub use sqlite::{SqlitePhotoStore, DEFAULT_DB_FILE};
