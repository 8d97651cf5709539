//! Persisted bearer token.
//!
//! The token is the only client-side state that survives a restart. The
//! file store keeps it as a single line; the memory store is for tests and
//! embedders that manage persistence themselves.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum TokenStoreError {
    #[error("token store io failed at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("no home directory; pass an explicit token file")]
    NoHomeDir,
}

pub trait TokenStore: Send + Sync {
    /// Read the stored token. `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<String>, TokenStoreError>;

    /// Replace the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, token: &str) -> Result<(), TokenStoreError>;

    /// Forget the stored token. Removing an absent token is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be modified.
    fn remove(&self) -> Result<(), TokenStoreError>;
}

// =============================================================================
// FILE STORE
// =============================================================================

/// `$HOME/.styleshare/token`.
///
/// # Errors
///
/// Returns [`TokenStoreError::NoHomeDir`] when `HOME` is unset or empty.
pub fn default_token_path() -> Result<PathBuf, TokenStoreError> {
    let home = std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .ok_or(TokenStoreError::NoHomeDir)?;
    Ok(PathBuf::from(home).join(".styleshare").join("token"))
}

/// Owner read/write only; the file holds a bearer credential.
#[cfg(unix)]
const TOKEN_FILE_MODE: u32 = 0o600;

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> TokenStoreError {
        TokenStoreError::Io { path: self.path.clone(), source }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(TOKEN_FILE_MODE);
        }
        let mut file = options.open(&self.path).map_err(|e| self.io_error(e))?;
        // `mode` only applies on create; tighten a file left by an older save.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(TOKEN_FILE_MODE))
                .map_err(|e| self.io_error(e))?;
        }
        writeln!(file, "{}", token.trim()).map_err(|e| self.io_error(e))
    }

    fn remove(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

// =============================================================================
// MEMORY STORE
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        Ok(self.slot().clone())
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        *self.slot() = Some(token.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), TokenStoreError> {
        *self.slot() = None;
        Ok(())
    }
}
