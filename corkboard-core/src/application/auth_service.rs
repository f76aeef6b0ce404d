use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::AuthCrypto,
    database::ports::{sessions::SessionsRepository, users::UsersRepository},
    error::{CoreError, Result},
    user::{AuthToken, LoginRequest, RegisterRequest, User, UserSession, Username},
};

/// Session lifetime when none is configured.
pub const DEFAULT_SESSION_TTL_DAYS: i64 = 30;

/// The account and session a bearer token resolved to.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub session: UserSession,
}

/// Account registration, credential checks, and session lifecycle.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UsersRepository>,
    sessions: Arc<dyn SessionsRepository>,
    crypto: Arc<AuthCrypto>,
    session_ttl: Duration,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("crypto", &self.crypto)
            .field("session_ttl", &self.session_ttl)
            .finish_non_exhaustive()
    }
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UsersRepository>,
        sessions: Arc<dyn SessionsRepository>,
        crypto: Arc<AuthCrypto>,
    ) -> Self {
        Self {
            users,
            sessions,
            crypto,
            session_ttl: Duration::days(DEFAULT_SESSION_TTL_DAYS),
        }
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Creates the account and opens its first session.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthToken> {
        request
            .validate()
            .map_err(|err| CoreError::InvalidInput(err.to_string()))?;
        let username = Username::new(&request.username)
            .map_err(|err| CoreError::InvalidInput(err.to_string()))?;

        let display_name = match request.display_name.trim() {
            "" => username.as_str().to_string(),
            name => name.to_string(),
        };

        let password_hash = self.crypto.hash_password(&request.password)?;
        let user = User::new(username, display_name);
        self.users
            .create_user_with_password(&user, &password_hash)
            .await?;

        info!(user_id = %user.id, username = %user.username, "user registered");
        self.open_session(user.id).await
    }

    pub async fn login(&self, request: LoginRequest) -> Result<AuthToken> {
        let username = Username::new(&request.username)
            .map_err(|_| CoreError::InvalidCredentials)?;

        let Some(user) = self.users.get_user_by_username(username.as_str()).await?
        else {
            warn!(username = %username, "login for unknown user");
            return Err(CoreError::InvalidCredentials);
        };

        let Some(stored_hash) = self.users.get_user_password_hash(user.id).await?
        else {
            return Err(CoreError::InvalidCredentials);
        };

        if !self.crypto.verify_password(&request.password, &stored_hash)? {
            warn!(user_id = %user.id, "login with wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        self.open_session(user.id).await
    }

    /// Resolves a raw bearer token. Unknown, expired, or revoked tokens, and
    /// tokens whose user no longer exists, all resolve to `None`.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> Result<Option<AuthenticatedUser>> {
        let token_hash = AuthCrypto::hash_session_token(token);
        let Some(session) = self
            .sessions
            .get_active_session(&token_hash, Utc::now())
            .await?
        else {
            return Ok(None);
        };

        Ok(self
            .users
            .get_user_by_id(session.user_id)
            .await?
            .map(|user| AuthenticatedUser { user, session }))
    }

    /// Revokes the session the request was authenticated with.
    pub async fn logout(&self, session: &UserSession) -> Result<()> {
        self.sessions.revoke_session(&session.token_hash).await?;
        info!(user_id = %session.user_id, session_id = %session.id, "session revoked");
        Ok(())
    }

    async fn open_session(&self, user_id: Uuid) -> Result<AuthToken> {
        let token = self.crypto.generate_session_token()?;
        let now = Utc::now();
        let session = UserSession {
            id: Uuid::now_v7(),
            user_id,
            token_hash: AuthCrypto::hash_session_token(&token),
            created_at: now,
            expires_at: now + self.session_ttl,
            revoked: false,
        };
        self.sessions.create_session(&session).await?;

        Ok(AuthToken {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_at: session.expires_at,
            user_id,
        })
    }
}
