use crate::app_context::AppContext;
use crate::auth::extractors::Traveler;
use crate::auth::passwords;
use crate::auth::requests::CredentialsRequestBody;
use crate::auth::responses::{LoginResponse, ProfileResponse, RegisterResponse};
use crate::auth::tokens::TravelerClaims;
use crate::errors::GameError;
use crate::players::models::{normalize_nickname, Player};
use crate::storage::interface::IPlayerStorage;

pub struct AuthHttpHandler<PS: IPlayerStorage> {
    app_context: AppContext<PS>,
}

impl<PS> AuthHttpHandler<PS>
where
    PS: IPlayerStorage,
{
    pub fn new(app_context: AppContext<PS>) -> Self {
        Self { app_context }
    }

    pub async fn register(
        &self,
        credentials: CredentialsRequestBody,
    ) -> Result<RegisterResponse, GameError> {
        let nickname = normalize_nickname(&credentials.nickname)?;
        if credentials.password.is_empty() {
            return Err(GameError::Validation(String::from(
                "Password must not be empty.",
            )));
        }
        // Cheap early exit; `create` repeats the check atomically.
        if self
            .app_context
            .players
            .find_by_nickname(&nickname)
            .await
            .is_some()
        {
            return Err(GameError::Conflict(String::from("Username already exists")));
        }
        let password_hash = hash_off_the_runtime(credentials.password).await?;
        let player = self
            .app_context
            .players
            .create(Player::new(nickname, password_hash))
            .await?;
        tracing::info!(nickname = %player.nickname, "Registered a new player.");
        Ok(RegisterResponse {
            message: String::from("User registered successfully"),
            traveler_id: player.traveler_id,
        })
    }

    pub async fn login(
        &self,
        credentials: CredentialsRequestBody,
    ) -> Result<LoginResponse, GameError> {
        let invalid_credentials = || GameError::Unauthorized(String::from("Invalid credentials"));
        let player = self
            .app_context
            .players
            .find_by_nickname(credentials.nickname.trim())
            .await
            .ok_or_else(invalid_credentials)?;
        let password_hash = player.password_hash.clone();
        let password_matches = tokio::task::spawn_blocking(move || {
            passwords::verify(&credentials.password, &password_hash)
        })
        .await
        .map_err(|err| GameError::Internal(format!("password check panicked: {err}")))?;
        if !password_matches {
            return Err(invalid_credentials());
        }
        let access_token = self.app_context.tokens.issue(&TravelerClaims {
            traveler_id: player.traveler_id.clone(),
            nickname: player.nickname.clone(),
        })?;
        Ok(LoginResponse {
            message: String::from("Login successful"),
            access_token,
            traveler_id: player.traveler_id,
        })
    }

    pub async fn profile(&self, traveler: Traveler) -> Result<ProfileResponse, GameError> {
        let player = self
            .app_context
            .players
            .find_by_traveler_id(&traveler.traveler_id)
            .await
            .ok_or_else(|| GameError::NotFound(String::from("Player not found")))?;
        Ok(ProfileResponse {
            nickname: player.nickname,
            traveler_id: player.traveler_id,
            total_score: player.total_score,
            correct_locations: player.correct_locations,
        })
    }
}

async fn hash_off_the_runtime(password: String) -> Result<String, GameError> {
    tokio::task::spawn_blocking(move || passwords::hash(&password))
        .await
        .map_err(|err| GameError::Internal(format!("password hashing panicked: {err}")))?
}
