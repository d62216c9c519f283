use crate::app_context::AppContext;
use crate::errors::GameError;
use crate::http::extractors::ValidJson;
use crate::players::requests::UpdateScoreRequestBody;
use crate::players::responses::{LeaderboardEntry, PlayerScoreResponse};
use crate::players::services::PlayersHttpHandler;
use crate::storage::players::HashMapPlayersStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn update_score(
    State(app_context): State<AppContext<HashMapPlayersStorage>>,
    ValidJson(request_body): ValidJson<UpdateScoreRequestBody>,
) -> Result<Json<PlayerScoreResponse>, GameError> {
    let response = PlayersHttpHandler::new(app_context)
        .update_score(request_body)
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn leaderboard(
    State(app_context): State<AppContext<HashMapPlayersStorage>>,
) -> Json<Vec<LeaderboardEntry>> {
    let response = PlayersHttpHandler::new(app_context).leaderboard().await;
    Json(response)
}
