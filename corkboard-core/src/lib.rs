//! # Corkboard Core
//!
//! Core library for Corkboard's per-user card theming.
//!
//! ## Overview
//!
//! - **Theme rendering**: [`theme::render_theme_css`] turns a user's stored
//!   card colors (or the defaults) into a small stylesheet
//! - **User system**: accounts, Argon2 password hashing, and opaque session
//!   tokens stored as SHA-256 digests
//! - **Persistence**: repository ports with a PostgreSQL adapter and an
//!   in-memory adapter for tests and ephemeral dev servers
//!
//! ## Feature Flags
//!
//! - `database`: PostgreSQL/SQLx support and the embedded [`MIGRATOR`]
//! - `db-tests`: enables tests that need a live `DATABASE_URL`
//!
//! ## Examples
//!
//! ```
//! use corkboard_core::theme::render_theme_css;
//! use corkboard_model::UserThemePreferences;
//!
//! let css = render_theme_css(&UserThemePreferences::default());
//! assert!(css.contains("background-color: #f8f9fa !important;"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Versioned API route definitions shared by server and client
pub mod api;
/// Service layer composed from repository ports
pub mod application;
/// Password hashing and session token primitives
pub mod auth;
/// Repository ports and their adapters
pub mod database;
pub mod error;
/// Theme resolution and CSS rendering
pub mod theme;
/// User accounts and sessions
pub mod user;

pub use corkboard_model as model;
pub use error::{CoreError, Result};

#[cfg(feature = "database")]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
