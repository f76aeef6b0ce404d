use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::user::User;

// User accounts and credentials
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Fails with `CoreError::Conflict` when the username is taken.
    async fn create_user_with_password(
        &self,
        user: &User,
        password_hash: &str,
    ) -> Result<()>;
    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    async fn get_user_password_hash(&self, user_id: Uuid) -> Result<Option<String>>;
}
