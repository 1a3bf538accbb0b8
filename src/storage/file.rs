use crate::error::AppError;
use crate::model::auth::StoredSession;
use crate::storage::SessionStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Persists the session as a JSON file readable only by its owner
///
/// The file holds the `accessToken`, `refreshToken` and `user` keys. Parent directories
/// are created on first save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store writing to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user cache directory: `<cache>/careermate/session.json`
    pub fn in_cache_dir() -> Result<Self, AppError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AppError::Storage("no cache directory on this platform".to_string()))?;
        Ok(Self::new(cache_dir.join("careermate").join("session.json")))
    }

    /// Location of the session file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<StoredSession>, AppError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Storage(format!("Failed to read session: {e}")))?;
        let session: StoredSession = serde_json::from_str(&json)?;
        Ok(Some(session))
    }

    fn save(&self, session: &StoredSession) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!("Failed to create session directory: {e}"))
            })?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
            .map_err(|e| AppError::Storage(format!("Failed to save session: {e}")))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AppError::Storage(format!("Failed to set session file permissions: {e}"))
            })?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| AppError::Storage(format!("Failed to delete session: {e}")))?;
        }
        Ok(())
    }
}
