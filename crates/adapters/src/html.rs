use std::fs;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use paleo_snap_application::{GalleryView, MapEmbed, RenderTarget, MAP_ZOOM};
use paleo_snap_domain::{EncodedImage, FossilSite, PhotoSpot};

pub fn map_embed_url(embed: &MapEmbed) -> String {
    format!(
        "https://www.google.com/maps?q={},{}&z={}&output=embed",
        embed.latitude, embed.longitude, embed.zoom
    )
}

pub fn image_data_url(image: &EncodedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.mime,
        STANDARD.encode(&image.bytes)
    )
}

// Renders the journal as a static page: reference cards, the spot map,
// and whatever gallery fragments were appended since the last clear.
pub struct HtmlRenderTarget {
    page_path: PathBuf,
    sites: Vec<FossilSite>,
    spots: Vec<PhotoSpot>,
    gallery: Vec<String>,
}

impl HtmlRenderTarget {
    pub fn new(page_path: String, sites: Vec<FossilSite>, spots: Vec<PhotoSpot>) -> Self {
        Self {
            page_path: PathBuf::from(page_path),
            sites,
            spots,
            gallery: Vec::new(),
        }
    }

    fn render_page(&self) -> String {
        let mut page = String::new();
        page.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n<title>Paleo Snap</title>\n");
        page.push_str("</head>\n<body>\n<h1>Paleo Snap</h1>\n");

        page.push_str("<h2>Sítios Fossilíferos</h2>\n<div id=\"cards-container\">\n");
        for site in &self.sites {
            page.push_str(&format!(
                "<div class=\"fossil-card\"><h3>{}</h3><p>{}</p></div>\n",
                escape_html(&site.title),
                escape_html(&site.description)
            ));
        }
        page.push_str("</div>\n");

        page.push_str("<h2>Locais para Fotos</h2>\n<div id=\"photo-cards\">\n");
        for (index, spot) in self.spots.iter().enumerate() {
            page.push_str(&format!(
                "<div class=\"photo-card\" onclick=\"showSpot({index})\"><img src=\"{}\" alt=\"Foto com localização\"></div>\n",
                escape_html(&spot.image_url)
            ));
        }
        page.push_str("</div>\n");

        let initial_map = self
            .spots
            .first()
            .map(|spot| {
                map_embed_url(&MapEmbed {
                    latitude: spot.location.latitude,
                    longitude: spot.location.longitude,
                    zoom: MAP_ZOOM,
                })
            })
            .unwrap_or_default();
        page.push_str(&format!(
            "<iframe id=\"photo-map\" src=\"{initial_map}\" width=\"100%\" height=\"300\" frameborder=\"0\" style=\"border:0\" allowfullscreen></iframe>\n"
        ));

        page.push_str("<h2>Últimas Fotos</h2>\n<section id=\"photo-gallery\">\n");
        for fragment in &self.gallery {
            page.push_str(fragment);
            page.push('\n');
        }
        page.push_str("</section>\n");

        let spots_json = match serde_json::to_string(&self.spots) {
            Ok(json) => json,
            Err(error) => {
                log::error!("failed to encode photo spots: {error}");
                "[]".to_string()
            }
        };
        page.push_str("<script>\n");
        page.push_str(&format!("const photoSpots = {spots_json};\n"));
        page.push_str("function showSpot(index) {\n  const spot = photoSpots[index];\n");
        page.push_str(&format!(
            "  document.getElementById(\"photo-map\").src = `https://www.google.com/maps?q=${{spot.latitude}},${{spot.longitude}}&z={MAP_ZOOM}&output=embed`;\n"
        ));
        page.push_str("}\n</script>\n</body>\n</html>\n");
        page
    }
}

impl RenderTarget for HtmlRenderTarget {
    fn is_attached(&self) -> bool {
        !self.page_path.as_os_str().is_empty()
    }

    fn clear(&mut self) {
        self.gallery.clear();
    }

    fn append(&mut self, view: GalleryView<'_>) {
        let fragment = match view {
            GalleryView::Image(image) => format!(
                "<img class=\"photo-preview\" src=\"{}\">",
                image_data_url(image)
            ),
            GalleryView::TitleLine(line) => format!("<h3>{}</h3>", escape_html(&line)),
            GalleryView::CoordinatesLine(line) => format!("<p>{}</p>", escape_html(&line)),
            GalleryView::MapEmbed(embed) => format!(
                "<iframe src=\"{}\" width=\"100%\" height=\"300\" frameborder=\"0\" style=\"border:0\" allowfullscreen></iframe>",
                map_embed_url(&embed)
            ),
        };
        self.gallery.push(fragment);
    }

    fn present(&mut self) {
        let page = self.render_page();
        if let Err(error) = fs::write(&self.page_path, page) {
            log::error!(
                "failed to write gallery page {}: {error}",
                self.page_path.display()
            );
        }
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use paleo_snap_domain::GeoPoint;
    use tempfile::TempDir;

    use super::*;

    fn sample_spot() -> PhotoSpot {
        PhotoSpot {
            title: "La Brea".to_string(),
            location: GeoPoint {
                latitude: 34.06391766107107,
                longitude: -118.35643237991897,
            },
            image_url: "https://www.latlong.net/photos/la-brea.jpg".to_string(),
        }
    }

    fn sample_site() -> FossilSite {
        FossilSite {
            title: "Hell Creek Formation".to_string(),
            description: "Um dos locais mais ricos em fósseis do período Cretáceo.".to_string(),
        }
    }

    #[test]
    fn map_embed_url_matches_the_shared_format() {
        let url = map_embed_url(&MapEmbed {
            latitude: 10.5,
            longitude: -20.25,
            zoom: 15,
        });

        assert_eq!(url, "https://www.google.com/maps?q=10.5,-20.25&z=15&output=embed");
    }

    #[test]
    fn image_data_url_embeds_the_mime_and_base64_payload() {
        let image = EncodedImage {
            mime: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
        };

        assert_eq!(image_data_url(&image), "data:image/jpeg;base64,AQID");
    }

    #[test]
    fn markup_is_escaped() {
        assert_eq!(
            escape_html("<b>\"x\"&'y'</b>"),
            "&lt;b&gt;&quot;x&quot;&amp;&#39;y&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn empty_page_path_means_detached() {
        let target = HtmlRenderTarget::new(String::new(), Vec::new(), Vec::new());

        assert!(!target.is_attached());
    }

    #[test]
    fn present_writes_the_full_page() {
        let dir = TempDir::new().expect("tempdir");
        let page_path = dir.path().join("gallery.html");
        let mut target = HtmlRenderTarget::new(
            page_path.to_string_lossy().to_string(),
            vec![sample_site()],
            vec![sample_spot()],
        );

        let image = EncodedImage {
            mime: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
        };
        target.clear();
        target.append(GalleryView::Image(&image));
        target.append(GalleryView::TitleLine("Título: T-Rex jaw".to_string()));
        target.append(GalleryView::CoordinatesLine(
            "Latitude: 10.5, Longitude: -20.25".to_string(),
        ));
        target.append(GalleryView::MapEmbed(MapEmbed {
            latitude: 10.5,
            longitude: -20.25,
            zoom: 15,
        }));
        target.present();

        let page = std::fs::read_to_string(&page_path).expect("page");
        assert!(page.contains("<img class=\"photo-preview\" src=\"data:image/jpeg;base64,AQID\">"));
        assert!(page.contains("<h3>Título: T-Rex jaw</h3>"));
        assert!(page.contains("<p>Latitude: 10.5, Longitude: -20.25</p>"));
        assert!(page.contains("https://www.google.com/maps?q=10.5,-20.25&z=15&output=embed"));
        assert!(page.contains("Hell Creek Formation"));
        assert!(page.contains("showSpot(0)"));
        assert!(page.contains("id=\"photo-map\""));
        assert!(page.contains("\"latitude\":34.06391766107107"));
        assert!(page.contains("\"image\":\"https://www.latlong.net/photos/la-brea.jpg\""));
    }

    #[test]
    fn clear_drops_previous_gallery_fragments() {
        let dir = TempDir::new().expect("tempdir");
        let page_path = dir.path().join("gallery.html");
        let mut target = HtmlRenderTarget::new(
            page_path.to_string_lossy().to_string(),
            Vec::new(),
            Vec::new(),
        );

        target.append(GalleryView::TitleLine("Título: first".to_string()));
        target.clear();
        target.append(GalleryView::TitleLine("Título: second".to_string()));
        target.present();

        let page = std::fs::read_to_string(&page_path).expect("page");
        assert!(!page.contains("Título: first"));
        assert!(page.contains("Título: second"));
    }
}
