use crate::scoring::verdict::Verdict;
use crate::tasks::models::Task;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub location_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        TaskResponse {
            location_name: task.name.clone(),
            latitude: task.latitude,
            longitude: task.longitude,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckTaskResponse {
    pub success: bool,
    pub message: String,
    pub distance_km: f64,
    pub bonus_points: u64,
}

impl From<Verdict> for CheckTaskResponse {
    fn from(verdict: Verdict) -> Self {
        CheckTaskResponse {
            success: verdict.success,
            message: verdict.message,
            distance_km: verdict.distance_km,
            bonus_points: verdict.bonus_points,
        }
    }
}
