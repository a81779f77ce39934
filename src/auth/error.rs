use thiserror::Error;

use crate::storage::StorageError;

/// Failures surfaced by the account store. All variants are recoverable and
/// the message is suitable for direct display.
///
/// `InvalidCredentials` deliberately covers both an unknown email and a
/// wrong password with one message, so a caller cannot enumerate accounts.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User already exists with this email")]
    DuplicateUser,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("{0}")]
    Validation(String),

    #[error("Stored record '{key}' is corrupt: {source}")]
    StorageCorrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
