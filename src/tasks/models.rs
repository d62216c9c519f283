use serde::{Deserialize, Serialize};

/// A landmark a player has to locate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
