use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::ImageFormat;
use paleo_snap_application::{ApplicationError, CameraDevice};
use paleo_snap_domain::{EncodedImage, Facing};
use walkdir::WalkDir;

pub const FRAME_MIME: &str = "image/jpeg";

const FRAME_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

// Stands in for a hardware camera: each facing mode is a folder of still
// frames, and capture cycles through them.
#[derive(Debug)]
pub struct FolderCamera {
    frames_root: PathBuf,
    frames: Vec<PathBuf>,
    cursor: usize,
}

impl FolderCamera {
    pub fn new(frames_root: String) -> Self {
        Self {
            frames_root: PathBuf::from(frames_root),
            frames: Vec::new(),
            cursor: 0,
        }
    }
}

impl CameraDevice for FolderCamera {
    fn start_stream(&mut self, facing: Facing) -> Result<(), ApplicationError> {
        let stream_dir = self.frames_root.join(facing.as_str());
        if !stream_dir.is_dir() {
            return Err(ApplicationError::Device(format!(
                "no {} camera mounted at {}",
                facing.as_str(),
                stream_dir.display()
            )));
        }

        let mut frames: Vec<PathBuf> = WalkDir::new(&stream_dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.path().to_path_buf())
            .filter(|path| is_frame(path))
            .collect();
        frames.sort();

        if frames.is_empty() {
            return Err(ApplicationError::Device(format!(
                "{} camera has no frames at {}",
                facing.as_str(),
                stream_dir.display()
            )));
        }

        self.frames = frames;
        self.cursor = 0;
        Ok(())
    }

    fn capture_frame(&mut self) -> Result<EncodedImage, ApplicationError> {
        if self.frames.is_empty() {
            return Err(ApplicationError::Device(
                "camera stream is not running".to_string(),
            ));
        }

        let frame_path = self.frames[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.frames.len();

        let frame = ImageReader::open(&frame_path)
            .map_err(|error| ApplicationError::Io(error.to_string()))?
            .with_guessed_format()
            .map_err(|error| ApplicationError::Device(error.to_string()))?
            .decode()
            .map_err(|error| ApplicationError::Device(error.to_string()))?;

        let mut bytes = Cursor::new(Vec::new());
        frame
            .to_rgb8()
            .write_to(&mut bytes, ImageFormat::Jpeg)
            .map_err(|error| ApplicationError::Device(error.to_string()))?;

        Ok(EncodedImage {
            mime: FRAME_MIME.to_string(),
            bytes: bytes.into_inner(),
        })
    }
}

fn is_frame(path: &Path) -> bool {
    let extension = path
        .extension()
        .and_then(|part| part.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    FRAME_EXTENSIONS.contains(&extension.as_str())
}
