use crate::app_context::AppContext;
use crate::auth::extractors::Traveler;
use crate::auth::requests::CredentialsRequestBody;
use crate::auth::responses::{LoginResponse, ProfileResponse, RegisterResponse};
use crate::auth::services::AuthHttpHandler;
use crate::errors::GameError;
use crate::http::extractors::ValidJson;
use crate::storage::players::HashMapPlayersStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn register(
    State(app_context): State<AppContext<HashMapPlayersStorage>>,
    ValidJson(credentials): ValidJson<CredentialsRequestBody>,
) -> Result<Json<RegisterResponse>, GameError> {
    let response = AuthHttpHandler::new(app_context)
        .register(credentials)
        .await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn login(
    State(app_context): State<AppContext<HashMapPlayersStorage>>,
    ValidJson(credentials): ValidJson<CredentialsRequestBody>,
) -> Result<Json<LoginResponse>, GameError> {
    let response = AuthHttpHandler::new(app_context).login(credentials).await?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn me(
    traveler: Traveler,
    State(app_context): State<AppContext<HashMapPlayersStorage>>,
) -> Result<Json<ProfileResponse>, GameError> {
    let response = AuthHttpHandler::new(app_context).profile(traveler).await?;
    Ok(Json(response))
}
