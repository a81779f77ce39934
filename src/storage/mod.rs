//! Durable key-value storage behind the account store.
//!
//! This module provides:
//! - `StoragePort`: the get/set/remove abstraction the store persists through
//! - `FileStorage`: JSON files under a local data directory
//! - `MemoryStorage`: in-memory fake for tests and embedding
//!
//! Values are opaque JSON strings; the store owns their shape.

pub mod file;
pub mod memory;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not find a data directory for this platform")]
    NoDataDir,
}

/// Key-value persistence port for the account store.
///
/// Keys are flat string names (`pagepilot_accounts`, `pagepilot_session`);
/// a missing key is `None`, never an error. Mutation takes `&mut self`: the
/// store is single-writer by contract and the borrow checker enforces it
/// in-process.
pub trait StoragePort {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
