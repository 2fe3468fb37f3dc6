mod error;
mod photo;
mod recent;
mod reference;

pub use error::DomainError;
pub use photo::{EncodedImage, Facing, GeoPoint, PhotoRecord, PhotoTitle};
pub use recent::{RecentPhotos, DEFAULT_LIVE_CAP, DEFAULT_RELOAD_CAP};
pub use reference::{FossilSite, PhotoSpot};
