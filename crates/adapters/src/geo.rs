use std::env;

use paleo_snap_application::{LocationError, LocationProvider};
use paleo_snap_domain::GeoPoint;

pub const LATITUDE_VAR: &str = "PALEO_SNAP_LAT";
pub const LONGITUDE_VAR: &str = "PALEO_SNAP_LON";

#[derive(Debug, Clone)]
pub struct EnvLocationProvider {
    latitude_var: String,
    longitude_var: String,
    fallback: Option<GeoPoint>,
}

impl EnvLocationProvider {
    pub fn new(fallback: Option<GeoPoint>) -> Self {
        Self::with_vars(LATITUDE_VAR, LONGITUDE_VAR, fallback)
    }

    pub fn with_vars(latitude_var: &str, longitude_var: &str, fallback: Option<GeoPoint>) -> Self {
        Self {
            latitude_var: latitude_var.to_string(),
            longitude_var: longitude_var.to_string(),
            fallback,
        }
    }

    fn read_axis(&self, var: &str) -> Result<Option<f64>, LocationError> {
        match env::var(var) {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| LocationError::Unknown),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(LocationError::Unknown),
        }
    }
}

impl LocationProvider for EnvLocationProvider {
    fn current_position(&self) -> Result<GeoPoint, LocationError> {
        let latitude = self.read_axis(&self.latitude_var)?;
        let longitude = self.read_axis(&self.longitude_var)?;

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(GeoPoint {
                latitude,
                longitude,
            }),
            (None, None) => self.fallback.ok_or(LocationError::PositionUnavailable),
            _ => Err(LocationError::Unknown),
        }
    }
}
