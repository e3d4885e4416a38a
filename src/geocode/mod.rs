use crate::geocode::error::GeocodeError;

pub mod arcgis;
pub mod error;

/// A resolved address: the provider's normalized match plus coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResult {
    pub match_addr: String,
    pub lat: f64,
    pub lon: f64
}

/// Synchronous geocoding capability. One single-line query in, one location
/// (or a failure) out. The provider's transport and authentication stay
/// behind this seam.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<GeocodeResult, GeocodeError>;
}
