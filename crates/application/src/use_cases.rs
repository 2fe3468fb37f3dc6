#[derive(Debug, Clone, Default)]
pub struct InitializeStoreCommand;

#[derive(Debug, Clone)]
pub struct CapturePhotoCommand {
    pub title: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReloadGalleryCommand;

#[derive(Debug, Clone, Default)]
pub struct SwitchDeviceCommand;

#[derive(Debug, Clone, Default)]
pub struct PreviewLocationCommand;

#[derive(Debug, Clone, Copy)]
pub struct SelectPhotoSpotCommand {
    pub index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceCardsQuery;
