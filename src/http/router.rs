use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::storage::players::HashMapPlayersStorage;
use crate::{auth, geometry, health, players, tasks};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapPlayersStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));

    Router::new()
        .route("/get_task", get(tasks::handlers::get_task))
        .route("/check-task", post(tasks::handlers::check_task))
        .route("/locations", get(tasks::handlers::locations))
        .route("/update-score", post(players::handlers::update_score))
        .route("/leaderboard", get(players::handlers::leaderboard))
        .route("/register", post(auth::handlers::register))
        .route("/login", post(auth::handlers::login))
        .route("/me", get(auth::handlers::me))
        .route("/nearest-point", post(geometry::handlers::nearest_point))
        .nest("/health", health_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
