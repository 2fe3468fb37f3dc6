use paleo_snap_domain::{
    Facing, FossilSite, GeoPoint, PhotoRecord, PhotoSpot, PhotoTitle, RecentPhotos,
};

use crate::{
    ApplicationError, CameraDevice, CapturePhotoCommand, Clock, GalleryRenderer,
    InitializeStoreCommand, LocationProvider, PhotoStore, PreviewLocationCommand,
    ReferenceCardsQuery, ReferenceContent, ReloadGalleryCommand, RenderTarget,
    SelectPhotoSpotCommand, SwitchDeviceCommand,
};

#[derive(Debug, Clone)]
pub struct CaptureReport {
    pub title: String,
    pub location: GeoPoint,
    pub timestamp: String,
    pub durable: bool,
}

pub struct ApplicationService {
    store: Box<dyn PhotoStore>,
    camera: Box<dyn CameraDevice>,
    location: Box<dyn LocationProvider>,
    clock: Box<dyn Clock>,
    content: Box<dyn ReferenceContent>,
    target: Box<dyn RenderTarget>,
    renderer: GalleryRenderer,
    recent: RecentPhotos,
    facing: Facing,
}

impl ApplicationService {
    pub fn new(
        store: Box<dyn PhotoStore>,
        camera: Box<dyn CameraDevice>,
        location: Box<dyn LocationProvider>,
        clock: Box<dyn Clock>,
        content: Box<dyn ReferenceContent>,
        target: Box<dyn RenderTarget>,
    ) -> Self {
        Self {
            store,
            camera,
            location,
            clock,
            content,
            target,
            renderer: GalleryRenderer,
            recent: RecentPhotos::new(),
            facing: Facing::User,
        }
    }

    pub fn initialize_store(&self, _command: InitializeStoreCommand) -> Result<(), ApplicationError> {
        self.store.initialize()
    }

    pub fn start_stream(&mut self) -> Result<(), ApplicationError> {
        match self.camera.start_stream(self.facing) {
            Ok(()) => Ok(()),
            Err(error) => {
                log::error!("Ocorreu um erro. {error}");
                Err(error)
            }
        }
    }

    pub fn capture_photo(
        &mut self,
        command: CapturePhotoCommand,
    ) -> Result<CaptureReport, ApplicationError> {
        let title = PhotoTitle::parse(&command.title)?;

        let frame = match self.camera.capture_frame() {
            Ok(frame) => frame,
            Err(error) => {
                log::error!("{error}");
                return Err(error);
            }
        };

        let position = match self.location.current_position() {
            Ok(position) => position,
            Err(code) => {
                let error = ApplicationError::Location(code);
                log::error!("{error}");
                return Err(error);
            }
        };

        let record = PhotoRecord {
            title: title.into_string(),
            photo: frame,
            location: position,
            timestamp: self.clock.now_iso8601(),
        };

        self.recent.append(record.clone());

        let durable = match self.store.put(&record) {
            Ok(()) => true,
            Err(error) => {
                log::error!("{error}");
                false
            }
        };

        self.render_gallery();

        Ok(CaptureReport {
            title: record.title,
            location: record.location,
            timestamp: record.timestamp,
            durable,
        })
    }

    pub fn reload_gallery(&mut self, _command: ReloadGalleryCommand) -> Result<usize, ApplicationError> {
        let stored = match self.store.read_all() {
            Ok(records) => records,
            Err(error) => {
                log::error!("{error}");
                return Err(error);
            }
        };

        self.recent.refresh_from(stored);
        self.render_gallery();
        Ok(self.recent.len())
    }

    pub fn switch_device(&mut self, _command: SwitchDeviceCommand) -> Result<Facing, ApplicationError> {
        self.facing = self.facing.toggle();
        self.start_stream()?;
        Ok(self.facing)
    }

    pub fn preview_location(
        &self,
        _command: PreviewLocationCommand,
    ) -> Result<GeoPoint, ApplicationError> {
        match self.location.current_position() {
            Ok(position) => Ok(position),
            Err(code) => {
                let error = ApplicationError::Location(code);
                log::error!("{error}");
                Err(error)
            }
        }
    }

    pub fn reference_cards(
        &self,
        _query: ReferenceCardsQuery,
    ) -> (Vec<FossilSite>, Vec<PhotoSpot>) {
        (self.content.fossil_sites(), self.content.photo_spots())
    }

    pub fn select_photo_spot(
        &self,
        command: SelectPhotoSpotCommand,
    ) -> Result<PhotoSpot, ApplicationError> {
        self.content
            .photo_spots()
            .into_iter()
            .nth(command.index)
            .ok_or_else(|| {
                ApplicationError::NotFound(format!(
                    "photo spot not found for index={}",
                    command.index
                ))
            })
    }

    pub fn recent_records(&self) -> &[PhotoRecord] {
        self.recent.records()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    fn render_gallery(&mut self) {
        self.renderer
            .render(self.target.as_mut(), self.recent.records());
    }
}
