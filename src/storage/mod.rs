//! Session persistence
//!
//! The session manager writes through to a [`SessionStore`] on every lifecycle
//! transition (create, refresh, destroy) and restores from it when a client is built.

use crate::application::config::SessionConfig;
use crate::error::AppError;
use crate::model::auth::StoredSession;
use std::sync::Arc;
use tracing::debug;

/// File-backed store
pub mod file;
/// In-memory store
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Backend that keeps the session across client instances
pub trait SessionStore: Send + Sync {
    /// Reads the persisted session, if any
    fn load(&self) -> Result<Option<StoredSession>, AppError>;

    /// Replaces the persisted session
    fn save(&self, session: &StoredSession) -> Result<(), AppError>;

    /// Removes the persisted session; succeeds when nothing is stored
    fn clear(&self) -> Result<(), AppError>;
}

/// Store selected by the configuration: a file when a path is set, memory otherwise
#[must_use]
pub fn from_config(config: &SessionConfig) -> Arc<dyn SessionStore> {
    match &config.file {
        Some(path) => {
            debug!("Persisting session to {}", path);
            Arc::new(FileStore::new(path))
        }
        None => Arc::new(MemoryStore::new()),
    }
}
