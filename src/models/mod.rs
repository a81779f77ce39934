//! Data models for the account store.
//!
//! `User` is the profile record keyed by email; `Session` is the single
//! active-login record for the local profile.

pub mod session;
pub mod user;

pub use session::Session;
pub use user::User;
