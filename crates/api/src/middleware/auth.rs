//! # Authentication Module
//!
//! Guards the administrative listing with HTTP Basic credentials taken from the
//! process configuration. The configured password is hashed with Argon2 when
//! the configuration is loaded and incoming passwords are verified against
//! that hash, so the plain text never outlives startup.

use std::sync::Arc;

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use defensesync_core::errors::ScheduleError;
use eyre::Result;
use tracing::warn;

use crate::{ApiState, middleware::error_handling::AppError};

/// Hashes a password using the Argon2 algorithm
///
/// Returns the password in PHC string format (algorithm, version, parameters,
/// salt and hash).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Username and Argon2 password hash for the admin listing
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: &str, password: &str) -> Result<Self> {
        Ok(Self {
            username: username.to_string(),
            password_hash: hash_password(password)?,
        })
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };

        // Both checks always run
        let password_ok = Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok();
        let username_ok = self.username == username;

        password_ok && username_ok
    }
}

/// Splits an `Authorization: Basic ...` header value into username and password
pub fn parse_basic_authorization(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

/// Middleware admitting only requests carrying the configured admin credentials
pub async fn require_admin(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_basic_authorization);

    let authorized = match (&state.admin, credentials) {
        (Some(admin), Some((username, password))) => admin.verify(&username, &password),
        _ => false,
    };

    if !authorized {
        warn!(path = %request.uri().path(), "Rejected admin request");
        return Err(AppError(ScheduleError::Authentication(
            "Authentication required".to_string(),
        )));
    }

    Ok(next.run(request).await)
}
