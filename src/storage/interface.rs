use crate::errors::GameError;
use crate::players::models::Player;
use crate::scoring::award::ScoreAward;

/// Everything the HTTP layer needs from a player store.
pub trait IPlayerStorage:
    PlayerRepo + PlayerScoreRepo + LeaderboardRepo + Clone + Send + Sync + 'static
{
}

pub trait PlayerRepo {
    /// Inserts a new player, failing with `Conflict` if the nickname is taken. The uniqueness
    /// check and the insert happen atomically.
    async fn create(&self, player: Player) -> Result<Player, GameError>;

    async fn find_by_nickname(&self, nickname: &str) -> Option<Player>;

    async fn find_by_traveler_id(&self, traveler_id: &str) -> Option<Player>;

    async fn list_all(&self) -> Vec<Player>;
}

pub trait PlayerScoreRepo {
    /// Adds the award to the stored player in place and returns the updated record. Concurrent
    /// calls for the same player never lose an increment.
    async fn apply_score(&self, nickname: &str, award: &ScoreAward) -> Result<Player, GameError>;
}

pub trait LeaderboardRepo: PlayerRepo {
    /// Best players first; equal scores are ordered by nickname.
    async fn top_by_score(&self, limit: usize) -> Vec<Player>;
}
