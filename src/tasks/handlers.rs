use crate::app_context::AppContext;
use crate::errors::GameError;
use crate::http::extractors::ValidJson;
use crate::storage::players::HashMapPlayersStorage;
use crate::tasks::models::Task;
use crate::tasks::requests::CheckTaskRequestBody;
use crate::tasks::responses::{CheckTaskResponse, TaskResponse};
use crate::tasks::services::TasksHttpHandler;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn get_task(
    State(app_context): State<AppContext<HashMapPlayersStorage>>,
) -> Json<TaskResponse> {
    Json(TasksHttpHandler::new(app_context).random_task())
}

#[axum::debug_handler]
pub async fn check_task(
    State(app_context): State<AppContext<HashMapPlayersStorage>>,
    ValidJson(request_body): ValidJson<CheckTaskRequestBody>,
) -> Result<Json<CheckTaskResponse>, GameError> {
    let response = TasksHttpHandler::new(app_context).check_task(request_body)?;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn locations(
    State(app_context): State<AppContext<HashMapPlayersStorage>>,
) -> Json<Vec<Task>> {
    Json(TasksHttpHandler::new(app_context).locations())
}
