use crate::errors::GameError;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

pub fn hash(password: &str) -> Result<String, GameError> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| GameError::Internal(format!("failed to hash a password: {err}")))
}

/// A malformed stored hash never matches.
pub fn verify(password: &str, password_hash: &str) -> bool {
    PasswordHash::new(password_hash)
        .map(|parsed_hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok()
        })
        .unwrap_or(false)
}
