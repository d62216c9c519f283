use serde::Deserialize;
use serde_json::Value;

/// Point fields stay loosely typed so that bad values surface as a validation error naming the
/// field.
#[derive(Debug, Deserialize)]
pub struct UpdateScoreRequestBody {
    pub nickname: String,
    pub points: Value,
    /// Zero when absent. An explicit `null` is kept and rejected during validation.
    #[serde(default = "default_bonus_points")]
    pub bonus_points: Value,
    #[serde(default)]
    pub correct: bool,
}

fn default_bonus_points() -> Value {
    Value::from(0)
}
