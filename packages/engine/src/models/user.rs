use serde::Deserialize;

use crate::error::EngineError;

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    /// Already hashed by the caller; the engine stores it opaquely.
    pub password_hash: String,
}

pub fn validate_new_user(req: &NewUser) -> Result<(), EngineError> {
    let username = req.username.trim();
    if username.is_empty() || username.chars().count() > 64 {
        return Err(EngineError::Validation(
            "Username must be 1-64 characters".into(),
        ));
    }
    let email = req.email.trim();
    if email.len() < 3 || email.len() > 256 || !email.contains('@') {
        return Err(EngineError::Validation(
            "Email must be a valid address".into(),
        ));
    }
    if req.phone_number.trim().is_empty() || req.phone_number.chars().count() > 20 {
        return Err(EngineError::Validation(
            "Phone number must be 1-20 characters".into(),
        ));
    }
    if req.password_hash.is_empty() {
        return Err(EngineError::Validation(
            "Credential hash must not be empty".into(),
        ));
    }
    Ok(())
}
