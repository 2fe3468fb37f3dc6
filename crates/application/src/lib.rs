mod error;
mod gallery;
mod ports;
mod service;
mod use_cases;

pub use error::{ApplicationError, LocationError};
pub use gallery::{GalleryRenderer, MAP_ZOOM, MISSING_TITLE_LABEL};
pub use ports::{
    CameraDevice, Clock, GalleryView, LocationProvider, MapEmbed, PhotoStore, ReferenceContent,
    RenderTarget,
};
pub use service::{ApplicationService, CaptureReport};
pub use use_cases::{
    CapturePhotoCommand, InitializeStoreCommand, PreviewLocationCommand, ReferenceCardsQuery,
    ReloadGalleryCommand, SelectPhotoSpotCommand, SwitchDeviceCommand,
};
