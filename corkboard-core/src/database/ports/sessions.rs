use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::user::UserSession;

#[async_trait]
pub trait SessionsRepository: Send + Sync {
    async fn create_session(&self, session: &UserSession) -> Result<()>;

    /// Unrevoked session with this digest that has not expired at `now`.
    async fn get_active_session(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<UserSession>>;

    async fn revoke_session(&self, token_hash: &str) -> Result<()>;
}
