use crate::app_context::AppContext;
use crate::errors::GameError;
use crate::players::consts::LEADERBOARD_SIZE;
use crate::players::requests::UpdateScoreRequestBody;
use crate::players::responses::{LeaderboardEntry, PlayerScoreResponse};
use crate::scoring::award::ScoreAward;
use crate::storage::interface::IPlayerStorage;

pub struct PlayersHttpHandler<PS: IPlayerStorage> {
    app_context: AppContext<PS>,
}

impl<PS> PlayersHttpHandler<PS>
where
    PS: IPlayerStorage,
{
    pub fn new(app_context: AppContext<PS>) -> Self {
        Self { app_context }
    }

    pub async fn update_score(
        &self,
        request_body: UpdateScoreRequestBody,
    ) -> Result<PlayerScoreResponse, GameError> {
        let award = ScoreAward::parse(
            &request_body.points,
            &request_body.bonus_points,
            request_body.correct,
        )?;
        let player = self
            .app_context
            .players
            .apply_score(request_body.nickname.trim(), &award)
            .await?;
        tracing::info!(
            task = "score_updated",
            nickname = %player.nickname,
            points = award.points,
            bonus_points = award.bonus_points,
            correct = award.correct,
            total_score = player.total_score,
        );
        Ok(PlayerScoreResponse::from(&player))
    }

    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.app_context
            .players
            .top_by_score(LEADERBOARD_SIZE)
            .await
            .into_iter()
            .enumerate()
            .map(|(index, player)| LeaderboardEntry {
                rank: index + 1,
                nickname: player.nickname,
                total_score: player.total_score,
                correct_locations: player.correct_locations,
            })
            .collect()
    }
}
