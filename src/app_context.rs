use crate::auth::tokens::TokenKeys;
use crate::cli::Args;
use crate::errors::StartupError;
use crate::storage::interface::IPlayerStorage;
use crate::storage::players::HashMapPlayersStorage;
use crate::tasks::catalog::TaskCatalog;
use axum::extract::FromRef;
use std::sync::Arc;

/// Services shared by every request handler.
#[derive(Clone)]
pub struct AppContext<PS: IPlayerStorage> {
    pub catalog: Arc<TaskCatalog>,
    pub players: PS,
    pub tokens: TokenKeys,
}

impl<PS: IPlayerStorage> FromRef<AppContext<PS>> for TokenKeys {
    fn from_ref(app_context: &AppContext<PS>) -> Self {
        app_context.tokens.clone()
    }
}

pub fn init(args: &Args) -> Result<AppContext<HashMapPlayersStorage>, StartupError> {
    let catalog = match &args.locations {
        Some(path) => TaskCatalog::from_ndjson(path)?,
        None => TaskCatalog::seeded()?,
    };
    Ok(AppContext {
        catalog: Arc::new(catalog),
        players: HashMapPlayersStorage::default(),
        tokens: TokenKeys::new(&args.jwt_signing_key)?,
    })
}
