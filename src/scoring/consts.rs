pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// A guess strictly closer than this completes the task.
pub const SUCCESS_RADIUS_KM: f64 = 100.0;
/// A guess at most this far away earns [`BONUS_POINTS`].
pub const BONUS_RADIUS_KM: f64 = 10.0;
pub const BONUS_POINTS: u64 = 50;
