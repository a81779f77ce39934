//! Account management: registration, credential verification, and the
//! active session.
//!
//! This module provides:
//! - `AuthService`: the credential store owning accounts and the session
//! - `AuthError`: recoverable failures with display-ready messages
//! - `IdGenerator`: injectable id assignment (timestamp-derived by default)
//!
//! Accounts and the session are persisted through a [`StoragePort`] and
//! survive restarts.
//!
//! [`StoragePort`]: crate::storage::StoragePort

pub mod error;
pub mod ids;
pub mod service;

pub use error::AuthError;
pub use ids::{IdGenerator, TimestampIds};
pub use service::{validate_display_name, AuthService};
