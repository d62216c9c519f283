use crate::scoring::consts::EARTH_RADIUS_KM;

/// Great-circle distance between two points given in degrees, using the haversine formula on a
/// sphere of radius [`EARTH_RADIUS_KM`].
pub fn distance_km(lat_1: f64, lon_1: f64, lat_2: f64, lon_2: f64) -> f64 {
    let phi_1 = lat_1.to_radians();
    let phi_2 = lat_2.to_radians();
    // Absolute deltas keep the result bitwise symmetric in its arguments.
    let delta_phi = (lat_2 - lat_1).abs().to_radians();
    let delta_lambda = (lon_2 - lon_1).abs().to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` slightly above 1 for antipodal points.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn is_valid_latitude(latitude: f64) -> bool {
    latitude.is_finite() && (-90.0..=90.0).contains(&latitude)
}

pub fn is_valid_longitude(longitude: f64) -> bool {
    longitude.is_finite() && (-180.0..=180.0).contains(&longitude)
}
