use crate::players::models::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerScoreResponse {
    pub nickname: String,
    pub total_score: u64,
    pub correct_locations: u64,
}

impl From<&Player> for PlayerScoreResponse {
    fn from(player: &Player) -> Self {
        PlayerScoreResponse {
            nickname: player.nickname.clone(),
            total_score: player.total_score,
            correct_locations: player.correct_locations,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Starts at 1.
    pub rank: usize,
    pub nickname: String,
    pub total_score: u64,
    pub correct_locations: u64,
}
