use paleo_snap_domain::{EncodedImage, Facing, FossilSite, GeoPoint, PhotoRecord, PhotoSpot};

use crate::error::LocationError;
use crate::ApplicationError;

pub trait PhotoStore {
    fn initialize(&self) -> Result<(), ApplicationError>;

    fn put(&self, record: &PhotoRecord) -> Result<(), ApplicationError>;

    fn read_all(&self) -> Result<Vec<PhotoRecord>, ApplicationError>;
}

pub trait CameraDevice {
    fn start_stream(&mut self, facing: Facing) -> Result<(), ApplicationError>;

    fn capture_frame(&mut self) -> Result<EncodedImage, ApplicationError>;
}

pub trait LocationProvider {
    fn current_position(&self) -> Result<GeoPoint, LocationError>;
}

pub trait Clock {
    fn now_iso8601(&self) -> String;
}

pub trait ReferenceContent {
    fn fossil_sites(&self) -> Vec<FossilSite>;

    fn photo_spots(&self) -> Vec<PhotoSpot>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapEmbed {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone)]
pub enum GalleryView<'a> {
    Image(&'a EncodedImage),
    TitleLine(String),
    CoordinatesLine(String),
    MapEmbed(MapEmbed),
}

pub trait RenderTarget {
    fn is_attached(&self) -> bool;

    fn clear(&mut self);

    fn append(&mut self, view: GalleryView<'_>);

    fn present(&mut self);
}
