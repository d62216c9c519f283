use crate::errors::GameError;
use crate::scoring::distance::{is_valid_latitude, is_valid_longitude};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CheckTaskRequestBody {
    pub latitude: f64,
    pub longitude: f64,
    pub task_name: String,
}

impl CheckTaskRequestBody {
    pub fn validate(&self) -> Result<(), GameError> {
        if !is_valid_latitude(self.latitude) {
            return Err(GameError::Validation(format!(
                "`latitude` must be within [-90, 90], got {}.",
                self.latitude
            )));
        }
        if !is_valid_longitude(self.longitude) {
            return Err(GameError::Validation(format!(
                "`longitude` must be within [-180, 180], got {}.",
                self.longitude
            )));
        }
        Ok(())
    }
}
