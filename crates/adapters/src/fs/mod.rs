mod camera;
mod clock;

pub use camera::{FolderCamera, FRAME_MIME};
pub use clock::SystemClock;
