//! Session lifecycle manager — signup, login, logout, refresh flows.

use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use ledgerjobs_core::config::AuthConfig;
use ledgerjobs_core::error::AppError;
use ledgerjobs_database::repositories::{SessionRepository, UserRepository};
use ledgerjobs_entity::session::model::{CreateSession, Session};
use ledgerjobs_entity::user::model::{CreateUser, User};

use crate::jwt::encoder::TokenPair;
use crate::jwt::{Claims, JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Result of a successful signup or login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// Created session.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// Connection metadata captured at login.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    /// Client IP address, when known.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

/// Manages the complete session lifecycle.
#[derive(Debug, Clone)]
pub struct SessionManager {
    jwt_encoder: Arc<JwtEncoder>,
    jwt_decoder: Arc<JwtDecoder>,
    users: Arc<UserRepository>,
    sessions: Arc<SessionRepository>,
    password_hasher: Arc<PasswordHasher>,
    auth_config: AuthConfig,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new(
        users: Arc<UserRepository>,
        sessions: Arc<SessionRepository>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            jwt_encoder: Arc::new(JwtEncoder::new(&auth_config)),
            jwt_decoder: Arc::new(JwtDecoder::new(&auth_config)),
            users,
            sessions,
            password_hasher: Arc::new(PasswordHasher::new()),
            auth_config,
        }
    }

    /// Returns the decoder used to validate bearer tokens.
    pub fn decoder(&self) -> Arc<JwtDecoder> {
        Arc::clone(&self.jwt_decoder)
    }

    /// Creates a new account and logs it in.
    ///
    /// A duplicate email surfaces as a conflict error from the repository.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
        client: ClientInfo,
    ) -> Result<LoginResult, AppError> {
        if password.len() < self.auth_config.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.auth_config.password_min_length
            )));
        }

        let password_hash = self.password_hasher.hash_password(password)?;
        let user = self
            .users
            .create(&CreateUser {
                email: email.to_string(),
                password_hash,
                display_name: display_name.map(ToString::to_string),
            })
            .await?;

        info!(user_id = %user.id, "Account created");
        self.open_session(user, client).await
    }

    /// Performs the login flow: verify credentials, open a session,
    /// mint tokens.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        client: ClientInfo,
    ) -> Result<LoginResult, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        let valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Invalid email or password"));
        }

        self.users.update_last_login(user.id).await?;
        let result = self.open_session(user, client).await?;
        info!(
            user_id = %result.user.id,
            session_id = %result.session.id,
            "Login successful"
        );
        Ok(result)
    }

    /// Revokes the session named by the presented claims.
    pub async fn logout(&self, claims: &Claims) -> Result<(), AppError> {
        let revoked = self.sessions.revoke(claims.session_id()).await?;
        if revoked {
            info!(
                user_id = %claims.user_id(),
                session_id = %claims.session_id(),
                "Logout completed"
            );
        }
        Ok(())
    }

    /// Rotates a refresh token into a fresh token pair.
    ///
    /// The presented token must hash to the value stored on its session;
    /// a stale token from before the last rotation is rejected.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let session = self
            .sessions
            .find_by_id(claims.session_id())
            .await?
            .ok_or_else(|| AppError::authentication("Session not found"))?;

        if !session.is_active() {
            return Err(AppError::authentication("Session is no longer active"));
        }
        if session.refresh_token_hash != sha256_hex(refresh_token) {
            return Err(AppError::authentication("Refresh token has been superseded"));
        }

        let user = self
            .users
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("User not found"))?;

        let tokens = self
            .jwt_encoder
            .generate_token_pair(user.id, session.id, &user.email)?;
        self.sessions
            .update_refresh_hash(session.id, &sha256_hex(&tokens.refresh_token))
            .await?;

        info!(user_id = %user.id, session_id = %session.id, "Token refreshed");
        Ok(tokens)
    }

    /// Validates an access token and checks its session is still live.
    pub async fn validate(&self, access_token: &str) -> Result<Claims, AppError> {
        let claims = self.jwt_decoder.decode_access_token(access_token)?;

        let session = self
            .sessions
            .find_by_id(claims.session_id())
            .await?
            .ok_or_else(|| AppError::authentication("Session not found"))?;
        if !session.is_active() {
            return Err(AppError::authentication("Session is no longer active"));
        }

        Ok(claims)
    }

    async fn open_session(&self, user: User, client: ClientInfo) -> Result<LoginResult, AppError> {
        let session_id = Uuid::new_v4();
        let tokens = self
            .jwt_encoder
            .generate_token_pair(user.id, session_id, &user.email)?;

        let session = self
            .sessions
            .create(&CreateSession {
                id: session_id,
                user_id: user.id,
                refresh_token_hash: sha256_hex(&tokens.refresh_token),
                ip_address: client.ip_address,
                user_agent: client.user_agent,
                expires_at: tokens.refresh_expires_at,
            })
            .await?;

        debug_assert!(session.expires_at > Utc::now());
        Ok(LoginResult {
            tokens,
            session,
            user,
        })
    }
}

/// Hex-encoded SHA-256 of the input.
fn sha256_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut out = String::with_capacity(64);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_is_stable() {
        assert_eq!(
            sha256_hex("token"),
            "3c469e9d6c5875d37a43f353d4f88e61fcf812c66eee3457465a40b0da4153e0"
        );
        assert_ne!(sha256_hex("a"), sha256_hex("b"));
    }
}
