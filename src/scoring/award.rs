use crate::errors::GameError;
use serde_json::Value;

/// Points a player earns for one task, already validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreAward {
    pub points: u64,
    pub bonus_points: u64,
    pub correct: bool,
}

impl ScoreAward {
    /// Builds an award from loosely typed client input. Point fields take a non-negative integer
    /// or a string holding one.
    pub fn parse(points: &Value, bonus_points: &Value, correct: bool) -> Result<Self, GameError> {
        let points = parse_points("points", points)?;
        let bonus_points = parse_points("bonus_points", bonus_points)?;
        let award = ScoreAward {
            points,
            bonus_points,
            correct,
        };
        award.total()?;
        Ok(award)
    }

    pub fn total(&self) -> Result<u64, GameError> {
        self.points.checked_add(self.bonus_points).ok_or_else(|| {
            GameError::Validation(String::from("`points` plus `bonus_points` is too large."))
        })
    }
}

fn parse_points(field: &str, value: &Value) -> Result<u64, GameError> {
    let parsed = match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        GameError::Validation(format!(
            "`{field}` must be a non-negative integer, got {value}."
        ))
    })
}
