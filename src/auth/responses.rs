use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub traveler_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
    pub traveler_id: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub nickname: String,
    pub traveler_id: String,
    pub total_score: u64,
    pub correct_locations: u64,
}
