use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NearestPointRequestBody {
    pub lat: f64,
    pub lon: f64,
    /// `[lon, lat]` pairs.
    pub line_coords: Vec<[f64; 2]>,
}
