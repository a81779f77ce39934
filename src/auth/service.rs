use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::{AuthError, IdGenerator, TimestampIds};
use crate::config::StoreConfig;
use crate::models::{Session, User};
use crate::storage::{FileStorage, StoragePort};

/// Minimum display-name length the UI contract expects.
const MIN_DISPLAY_NAME_CHARS: usize = 2;

/// One account on file: the profile plus its credential, kept in a single
/// record so the two can never drift apart.
///
/// Passwords are stored and compared in plain form. That is the store's
/// stated threat model (a single local profile, no server); it is not an
/// oversight to fix with hashing here without also changing the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountRecord {
    user: User,
    password: String,
}

/// The credential store: sole owner of the persisted accounts table and the
/// active session.
///
/// All operations are synchronous call/return; mutating ones take
/// `&mut self`, so a single serial caller is enforced in-process. Both
/// accounts and the session are written through the storage port and
/// survive restarts.
pub struct AuthService<S: StoragePort> {
    storage: S,
    ids: Box<dyn IdGenerator>,
    namespace: String,
}

impl AuthService<FileStorage> {
    /// Open a store backed by JSON files in the platform data directory.
    pub fn open(config: &StoreConfig) -> Result<Self, AuthError> {
        let storage = FileStorage::new(config.data_dir()?)?;
        Ok(Self::new(storage, config.namespace()))
    }
}

impl<S: StoragePort> AuthService<S> {
    pub fn new(storage: S, namespace: impl Into<String>) -> Self {
        Self::with_id_generator(storage, namespace, Box::new(TimestampIds))
    }

    /// Construct with an explicit id generator, for deterministic ids in
    /// tests.
    pub fn with_id_generator(
        storage: S,
        namespace: impl Into<String>,
        ids: Box<dyn IdGenerator>,
    ) -> Self {
        Self {
            storage,
            ids,
            namespace: namespace.into(),
        }
    }

    /// Register a new account and sign it in.
    ///
    /// Fails with [`AuthError::DuplicateUser`] when the email already has an
    /// account, leaving all state untouched. On success the new user is
    /// persisted and the session is replaced with it (no separate login step
    /// is needed). Email format is the caller's concern; the email is only a
    /// uniqueness key here.
    pub fn signup(
        &mut self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<User, AuthError> {
        let mut accounts = self.load_accounts()?;
        if accounts.contains_key(email) {
            debug!(email, "signup rejected: email already registered");
            return Err(AuthError::DuplicateUser);
        }

        let user = User {
            id: self.ids.next_id(),
            email: email.to_string(),
            display_name: display_name.to_string(),
        };
        accounts.insert(
            email.to_string(),
            AccountRecord {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        self.save_accounts(&accounts)?;
        self.save_session(&Session::authenticated(user.clone()))?;

        info!(email, user_id = %user.id, "account created");
        Ok(user)
    }

    /// Verify credentials and sign in.
    ///
    /// Unknown email and wrong password fail with the same
    /// [`AuthError::InvalidCredentials`] value so callers cannot tell which
    /// check failed. On success the session is replaced with this user.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let accounts = self.load_accounts()?;
        let user = match accounts.get(email) {
            Some(record) if record.password == password => record.user.clone(),
            _ => {
                debug!(email, "login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        self.save_session(&Session::authenticated(user.clone()))?;
        info!(email, user_id = %user.id, "login");
        Ok(user)
    }

    /// Clear the active session. Idempotent: signing out while anonymous is
    /// a no-op with the same observable result.
    pub fn logout(&mut self) -> Result<(), AuthError> {
        let key = self.session_key();
        self.storage.remove(&key)?;
        info!("logout");
        Ok(())
    }

    /// Change the signed-in user's display name.
    ///
    /// Fails with [`AuthError::NotAuthenticated`] when no session is active.
    /// The name itself is trusted once that precondition holds; callers
    /// validate with [`validate_display_name`] first. The updated user is
    /// written back to the accounts table (same id, same email) and into the
    /// session, so the change is visible immediately and after restart.
    pub fn update_display_name(&mut self, new_display_name: &str) -> Result<User, AuthError> {
        let Session {
            user,
            is_authenticated,
        } = self.session()?;
        let user = match user {
            Some(user) if is_authenticated => user,
            _ => return Err(AuthError::NotAuthenticated),
        };

        let updated = User {
            display_name: new_display_name.to_string(),
            ..user
        };

        let mut accounts = self.load_accounts()?;
        if let Some(record) = accounts.get_mut(&updated.email) {
            record.user = updated.clone();
            self.save_accounts(&accounts)?;
        }
        self.save_session(&Session::authenticated(updated.clone()))?;

        info!(email = %updated.email, "display name updated");
        Ok(updated)
    }

    /// Read the active session. Anonymous when nothing has ever been
    /// written; no side effects.
    pub fn session(&self) -> Result<Session, AuthError> {
        let key = self.session_key();
        match self.storage.get(&key)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|source| AuthError::StorageCorrupt { key, source })
            }
            None => Ok(Session::anonymous()),
        }
    }

    fn accounts_key(&self) -> String {
        format!("{}_accounts", self.namespace)
    }

    fn session_key(&self) -> String {
        format!("{}_session", self.namespace)
    }

    fn load_accounts(&self) -> Result<BTreeMap<String, AccountRecord>, AuthError> {
        let key = self.accounts_key();
        match self.storage.get(&key)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|source| AuthError::StorageCorrupt { key, source })
            }
            None => Ok(BTreeMap::new()),
        }
    }

    fn save_accounts(&mut self, accounts: &BTreeMap<String, AccountRecord>) -> Result<(), AuthError> {
        let key = self.accounts_key();
        let raw = serde_json::to_string_pretty(accounts)
            .map_err(|source| AuthError::StorageCorrupt {
                key: key.clone(),
                source,
            })?;
        self.storage.set(&key, &raw)?;
        Ok(())
    }

    fn save_session(&mut self, session: &Session) -> Result<(), AuthError> {
        let key = self.session_key();
        let raw = serde_json::to_string_pretty(session)
            .map_err(|source| AuthError::StorageCorrupt {
                key: key.clone(),
                source,
            })?;
        self.storage.set(&key, &raw)?;
        Ok(())
    }
}

/// Caller-side display-name check shared by UI layers: at least
/// [`MIN_DISPLAY_NAME_CHARS`] characters after trimming. The store itself
/// does not enforce this.
pub fn validate_display_name(name: &str) -> Result<(), AuthError> {
    if name.trim().chars().count() < MIN_DISPLAY_NAME_CHARS {
        return Err(AuthError::Validation(
            "Display name must be at least 2 characters".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
