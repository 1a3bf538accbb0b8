use crate::error::AppError;
use crate::model::auth::StoredSession;
use crate::storage::SessionStore;
use std::sync::RwLock;

/// Keeps the session for the lifetime of the process only
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: RwLock<Option<StoredSession>>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a session, handy for restoring in tests
    #[must_use]
    pub fn with_session(session: StoredSession) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<StoredSession>, AppError> {
        let guard = self
            .session
            .read()
            .map_err(|e| AppError::Storage(format!("session lock poisoned: {e}")))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &StoredSession) -> Result<(), AppError> {
        let mut guard = self
            .session
            .write()
            .map_err(|e| AppError::Storage(format!("session lock poisoned: {e}")))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        let mut guard = self
            .session
            .write()
            .map_err(|e| AppError::Storage(format!("session lock poisoned: {e}")))?;
        *guard = None;
        Ok(())
    }
}
