use crate::errors::GameError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::response::Json;
use serde::de::DeserializeOwned;

/// Like [`Json`], but a body that fails to parse becomes a [`GameError::Validation`] with the
/// parser's explanation.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GameError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(request, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(GameError::Validation(rejection.body_text())),
        }
    }
}
