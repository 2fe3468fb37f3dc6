use paleo_snap_application::CaptureReport;
use paleo_snap_domain::{FossilSite, GeoPoint, PhotoRecord, PhotoSpot};

pub const TITLE_PROMPT: &str = "Por favor, insira um título antes de tirar a foto.";

pub fn present_capture(report: &CaptureReport) -> String {
    let durability = if report.durable { "saved" } else { "buffer-only" };
    format!(
        "{}\t{}\t{}\t{}",
        report.title,
        report.timestamp,
        present_position(&report.location),
        durability
    )
}

pub fn present_recent_row(index: usize, record: &PhotoRecord) -> String {
    format!(
        "{}\t{}\t{}\t{} bytes",
        index,
        record.title,
        record.timestamp,
        record.photo.bytes.len()
    )
}

pub fn present_site_row(site: &FossilSite) -> String {
    format!("{}\t{}", site.title, site.description)
}

pub fn present_spot_row(index: usize, spot: &PhotoSpot) -> String {
    format!(
        "{}\t{}\t{}",
        index,
        spot.title,
        present_position(&spot.location)
    )
}

pub fn present_position(position: &GeoPoint) -> String {
    format!(
        "Latitude: {}, Longitude: {}",
        position.latitude, position.longitude
    )
}
