use crate::errors::{GameError, StartupError};
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelerClaims {
    pub traveler_id: String,
    pub nickname: String,
}

/// HMAC-SHA256 key used to issue and check access tokens.
#[derive(Clone)]
pub struct TokenKeys {
    signing_key: Hmac<Sha256>,
}

impl TokenKeys {
    pub fn new(secret: &str) -> Result<Self, StartupError> {
        if secret.is_empty() {
            return Err(StartupError::SigningKey(String::from("the key must not be empty")));
        }
        let signing_key = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|err| StartupError::SigningKey(err.to_string()))?;
        Ok(Self { signing_key })
    }

    pub fn issue(&self, claims: &TravelerClaims) -> Result<String, GameError> {
        claims
            .sign_with_key(&self.signing_key)
            .map_err(|err| GameError::Internal(format!("failed to sign an access token: {err}")))
    }

    pub fn verify(&self, token: &str) -> Result<TravelerClaims, GameError> {
        token
            .verify_with_key(&self.signing_key)
            .map_err(|_err| GameError::Unauthorized(String::from("Invalid access token.")))
    }
}
