use chrono::{DateTime, Utc};
use corkboard_model::UserThemePreferences;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A user account together with its card theme preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub theme: UserThemePreferences,
}

impl User {
    /// New account with an unset theme (all three columns null).
    pub fn new(username: Username, display_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            username: username.into_string(),
            display_name: display_name.into(),
            created_at: now,
            updated_at: now,
            theme: UserThemePreferences::default(),
        }
    }
}

/// Persisted session; the raw token only ever lives with the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

impl UserSession {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.revoked && self.expires_at > now
    }
}

/// Token pair returned after register/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub display_name: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), UsernameError> {
        Username::new(&self.username)?;
        if self.password.len() < 8 {
            return Err(UsernameError::WeakPassword);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Username value object with validation
///
/// - 3-30 characters in length
/// - Alphanumeric characters and underscores only
/// - Normalized to lowercase for consistency
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub fn new(username: impl AsRef<str>) -> Result<Self, UsernameError> {
        let username = username.as_ref().trim().to_lowercase();

        if username.chars().count() < 3 {
            return Err(UsernameError::TooShort);
        }

        if username.chars().count() > 30 {
            return Err(UsernameError::TooLong);
        }

        if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(UsernameError::InvalidCharacters);
        }

        Ok(Self(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("Username too short: minimum 3 characters required")]
    TooShort,

    #[error("Username too long: maximum 30 characters allowed")]
    TooLong,

    #[error(
        "Username contains invalid characters: only alphanumeric and underscore allowed"
    )]
    InvalidCharacters,

    #[error("Password too short: minimum 8 characters required")]
    WeakPassword,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn usernames_are_normalized_and_validated() {
        assert_eq!(Username::new("  Alice_1 ").unwrap().as_str(), "alice_1");
        assert_eq!(Username::new("ab"), Err(UsernameError::TooShort));
        assert_eq!(Username::new("a".repeat(31)), Err(UsernameError::TooLong));
        assert_eq!(
            Username::new("alice@bob"),
            Err(UsernameError::InvalidCharacters)
        );
    }

    #[test]
    fn new_user_starts_with_unset_theme() {
        let user = User::new(Username::new("carol").unwrap(), "Carol");
        assert!(user.theme.is_unset());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn session_activity_respects_expiry_and_revocation() {
        let now = Utc::now();
        let mut session = UserSession {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            token_hash: "abc".into(),
            created_at: now,
            expires_at: now + Duration::minutes(5),
            revoked: false,
        };
        assert!(session.is_active(now));
        assert!(!session.is_active(now + Duration::minutes(6)));
        session.revoked = true;
        assert!(!session.is_active(now));
    }
}
