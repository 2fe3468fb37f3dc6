use paleo_snap_domain::PhotoRecord;

use crate::ports::{GalleryView, MapEmbed, RenderTarget};

pub const MAP_ZOOM: u8 = 15;
pub const MISSING_TITLE_LABEL: &str = "Sem título";

#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryRenderer;

impl GalleryRenderer {
    pub fn render(&self, target: &mut dyn RenderTarget, records: &[PhotoRecord]) {
        if !target.is_attached() {
            return;
        }

        target.clear();

        for record in records {
            let title = if record.title.is_empty() {
                MISSING_TITLE_LABEL
            } else {
                record.title.as_str()
            };

            target.append(GalleryView::Image(&record.photo));
            target.append(GalleryView::TitleLine(format!("Título: {title}")));
            target.append(GalleryView::CoordinatesLine(format!(
                "Latitude: {}, Longitude: {}",
                record.location.latitude, record.location.longitude
            )));
            target.append(GalleryView::MapEmbed(MapEmbed {
                latitude: record.location.latitude,
                longitude: record.location.longitude,
                zoom: MAP_ZOOM,
            }));
        }

        target.present();
    }
}
