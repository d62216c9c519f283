use crate::errors::GameError;
use crate::players::consts::MAX_NICKNAME_LENGTH;
use crate::scoring::award::ScoreAward;
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub nickname: String,
    pub traveler_id: String,
    pub total_score: u64,
    pub correct_locations: u64,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl Player {
    pub fn new(nickname: String, password_hash: String) -> Self {
        Player {
            nickname,
            traveler_id: Uuid::new_v4().to_string(),
            total_score: 0,
            correct_locations: 0,
            password_hash,
        }
    }

    /// Either applies the whole award or leaves the player untouched.
    pub fn apply_score(&mut self, award: &ScoreAward) -> Result<(), GameError> {
        let total_score = self
            .total_score
            .checked_add(award.total()?)
            .ok_or_else(|| GameError::Validation(String::from("Total score would overflow.")))?;
        self.total_score = total_score;
        if award.correct {
            self.correct_locations = self.correct_locations.saturating_add(1);
        }
        Ok(())
    }
}

/// Trims the nickname and checks it is non-empty and not too long.
pub fn normalize_nickname(raw: &str) -> Result<String, GameError> {
    let nickname = raw.trim();
    if nickname.is_empty() {
        return Err(GameError::Validation(String::from(
            "Nickname must not be empty.",
        )));
    }
    let length = nickname.graphemes(true).count();
    if length > MAX_NICKNAME_LENGTH {
        return Err(GameError::Validation(format!(
            "Nickname is {length} symbols long, at most {MAX_NICKNAME_LENGTH} are allowed."
        )));
    }
    Ok(nickname.to_string())
}
