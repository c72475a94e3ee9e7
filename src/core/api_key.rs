//! API key storage: persist the Azure OpenAI key in the config directory.
//!
//! The key is stored in a dedicated file with restrictive permissions (0o600 on Unix).
//! `AZURE_OPENAI_API_KEY` in the environment takes precedence over the stored key.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::core::{app, paths};

/// Errors when storing the API key.
#[derive(Debug, thiserror::Error)]
pub enum ApiKeyError {
    #[error("No config directory available")]
    NoConfigDir,
    #[error("API key is empty")]
    Empty,
    #[error("Failed to store API key: {0}")]
    Io(#[from] io::Error),
}

/// Path to the API key file in the config directory.
pub fn credentials_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join(app::API_KEY_FILE))
}

/// Read a key file. Returns `None` if the file is absent, empty, or unreadable.
pub fn load_api_key_from(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let key = content.trim().to_string();
    if key.is_empty() { None } else { Some(key) }
}

/// Load the stored API key from the config directory.
pub fn load_api_key() -> Option<String> {
    load_api_key_from(&credentials_path()?)
}

/// Write `key` to `path`, creating parent directories. On Unix, sets permissions to 0o600.
pub fn store_api_key_to(path: &Path, key: &str) -> Result<(), ApiKeyError> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(ApiKeyError::Empty);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(trimmed.as_bytes())?;
    file.write_all(b"\n")?;

    #[cfg(unix)]
    {
        let mut perms = file.metadata()?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

/// Store the API key in the config directory. Returns the file path.
pub fn store_api_key(key: &str) -> Result<PathBuf, ApiKeyError> {
    let path = credentials_path().ok_or(ApiKeyError::NoConfigDir)?;
    store_api_key_to(&path, key)?;
    Ok(path)
}
