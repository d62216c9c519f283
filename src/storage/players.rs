use crate::errors::GameError;
use crate::players::models::Player;
use crate::scoring::award::ScoreAward;
use crate::storage::interface::{IPlayerStorage, LeaderboardRepo, PlayerRepo, PlayerScoreRepo};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Players keyed by nickname.
#[derive(Clone, Default)]
pub struct HashMapPlayersStorage {
    storage: Arc<RwLock<HashMap<String, Player>>>,
}

impl IPlayerStorage for HashMapPlayersStorage {}

impl PlayerRepo for HashMapPlayersStorage {
    async fn create(&self, player: Player) -> Result<Player, GameError> {
        let mut storage_guard = self.storage.write().await;
        if storage_guard.contains_key(&player.nickname) {
            return Err(GameError::Conflict(String::from("Username already exists")));
        }
        storage_guard.insert(player.nickname.clone(), player.clone());
        Ok(player)
    }

    async fn find_by_nickname(&self, nickname: &str) -> Option<Player> {
        self.storage.read().await.get(nickname).cloned()
    }

    async fn find_by_traveler_id(&self, traveler_id: &str) -> Option<Player> {
        self.storage
            .read()
            .await
            .values()
            .find(|player| player.traveler_id == traveler_id)
            .cloned()
    }

    async fn list_all(&self) -> Vec<Player> {
        self.storage.read().await.values().cloned().collect()
    }
}

impl PlayerScoreRepo for HashMapPlayersStorage {
    async fn apply_score(&self, nickname: &str, award: &ScoreAward) -> Result<Player, GameError> {
        let mut storage_guard = self.storage.write().await;
        let player = storage_guard
            .get_mut(nickname)
            .ok_or_else(|| GameError::NotFound(String::from("Player not found")))?;
        player.apply_score(award)?;
        Ok(player.clone())
    }
}

impl LeaderboardRepo for HashMapPlayersStorage {
    async fn top_by_score(&self, limit: usize) -> Vec<Player> {
        let mut players = self.list_all().await;
        players.sort_by(|a, b| {
            b.total_score
                .cmp(&a.total_score)
                .then_with(|| a.nickname.cmp(&b.nickname))
        });
        players.truncate(limit);
        players
    }
}
