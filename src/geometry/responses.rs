use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct NearestPointResponse {
    pub nearest_lat: f64,
    pub nearest_lon: f64,
}
