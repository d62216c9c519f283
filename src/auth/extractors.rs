use crate::auth::tokens::TokenKeys;
use crate::errors::GameError;
use async_trait::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// The player a request was made on behalf of, taken from an `Authorization: Bearer` header.
pub struct Traveler {
    pub traveler_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for Traveler
where
    TokenKeys: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = GameError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Err(GameError::Unauthorized(String::from(
                "No `Authorization` header provided.",
            )));
        };
        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| {
                GameError::Unauthorized(String::from("Expected a bearer access token."))
            })?;
        let claims = TokenKeys::from_ref(state).verify(token.trim())?;
        Ok(Traveler {
            traveler_id: claims.traveler_id,
        })
    }
}
