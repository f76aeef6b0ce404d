//! Password hashing and session token primitives.
//!
//! Sessions use opaque random tokens handed to the client once; only their
//! SHA-256 digest is persisted.

pub mod crypto;

pub use crypto::{AuthCrypto, AuthCryptoError, SESSION_TOKEN_BYTES};
