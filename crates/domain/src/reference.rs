use serde::Serialize;

use crate::GeoPoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FossilSite {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoSpot {
    pub title: String,
    #[serde(flatten)]
    pub location: GeoPoint,
    #[serde(rename = "image")]
    pub image_url: String,
}
