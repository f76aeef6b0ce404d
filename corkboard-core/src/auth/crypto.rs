use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier,
    Version, password_hash::SaltString,
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{TryRngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// 256 bits of entropy per session token.
pub const SESSION_TOKEN_BYTES: usize = 32;

const SALT_BYTES: usize = 16;

#[derive(Debug, Error)]
pub enum AuthCryptoError {
    #[error("password pepper must not be empty")]
    EmptyPepper,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),

    #[error("secure random generation failed")]
    Random,
}

/// Argon2id password hashing keyed with a server-side pepper, plus session
/// token generation and digesting.
#[derive(Clone)]
pub struct AuthCrypto {
    pepper: Vec<u8>,
}

impl fmt::Debug for AuthCrypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthCrypto")
            .field("pepper", &"<redacted>")
            .finish()
    }
}

impl AuthCrypto {
    pub fn new(pepper: impl AsRef<str>) -> Result<Self, AuthCryptoError> {
        let pepper = pepper.as_ref();
        if pepper.is_empty() {
            return Err(AuthCryptoError::EmptyPepper);
        }
        Ok(Self {
            pepper: pepper.as_bytes().to_vec(),
        })
    }

    fn argon2(&self) -> Result<Argon2<'_>, AuthCryptoError> {
        Argon2::new_with_secret(
            &self.pepper,
            Algorithm::Argon2id,
            Version::V0x13,
            Params::default(),
        )
        .map_err(|err| AuthCryptoError::PasswordHash(err.to_string()))
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AuthCryptoError> {
        let mut salt_bytes = [0u8; SALT_BYTES];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|_| AuthCryptoError::Random)?;
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|err| AuthCryptoError::PasswordHash(err.to_string()))?;

        self.argon2()?
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| AuthCryptoError::PasswordHash(err.to_string()))
    }

    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, AuthCryptoError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|err| AuthCryptoError::MalformedHash(err.to_string()))?;

        match self.argon2()?.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(AuthCryptoError::PasswordHash(err.to_string())),
        }
    }

    /// Fresh URL-safe session token for the client.
    pub fn generate_session_token(&self) -> Result<String, AuthCryptoError> {
        let mut token_bytes = [0u8; SESSION_TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut token_bytes)
            .map_err(|_| AuthCryptoError::Random)?;
        Ok(URL_SAFE_NO_PAD.encode(token_bytes))
    }

    /// Digest stored in place of the raw token.
    pub fn hash_session_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl From<AuthCryptoError> for crate::error::CoreError {
    fn from(err: AuthCryptoError) -> Self {
        crate::error::CoreError::Crypto(err.to_string())
    }
}
