//! PagePilot account store - local users, credentials, and session.
//!
//! This crate is the account management core for a single-user-per-profile
//! application: registration, credential verification, session persistence,
//! and display-name updates. There is no server and no network; everything
//! lives in a durable local key-value store behind the [`StoragePort`]
//! trait.
//!
//! The session moves through a small state machine: anonymous, then
//! authenticated after a successful signup or login, then anonymous again
//! after logout. Failed operations never change state.
//!
//! ```no_run
//! use pagepilot_auth::{AuthService, StoreConfig};
//!
//! # fn main() -> Result<(), pagepilot_auth::AuthError> {
//! let config = StoreConfig::default();
//! let mut auth = AuthService::open(&config)?;
//! let user = auth.signup("a@x.com", "pw1", "Ann")?;
//! assert_eq!(auth.session()?.user.as_ref(), Some(&user));
//! # Ok(())
//! # }
//! ```
//!
//! Not a hardened authentication system: passwords are kept and compared in
//! plain form, with no hashing, rate limiting, or token expiry. The store
//! is meant for a local profile where the storage directory is already the
//! trust boundary.

pub mod auth;
pub mod config;
pub mod models;
pub mod storage;

pub use auth::{validate_display_name, AuthError, AuthService, IdGenerator, TimestampIds};
pub use config::StoreConfig;
pub use models::{Session, User};
pub use storage::{FileStorage, MemoryStorage, StorageError, StoragePort};
