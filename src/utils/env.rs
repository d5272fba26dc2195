//! Environment handling utilities
//!
//! Loads the optional `.env` file that carries clasp credentials and helper
//! settings, and provides small accessors for environment variables.

use crate::error::{HelperError, Result};
use std::{env, path::Path};
use tracing::{debug, instrument};

/// Where the environment definitions were loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvSource {
    /// The given file was loaded
    File(std::path::PathBuf),
    /// A `.env` found by searching upwards from the current directory
    Discovered(std::path::PathBuf),
    /// No environment file was found
    None,
}

/// Loader for `.env` files
#[derive(Debug)]
pub struct EnvLoader;

impl EnvLoader {
    /// Load `env_file` if it exists, otherwise fall back to the usual `.env`
    /// search from the current directory.
    ///
    /// Variables already present in the process environment are never
    /// overridden. A missing file is not an error; a malformed one is.
    #[instrument]
    pub fn load(env_file: &Path) -> Result<EnvSource> {
        if env_file.is_file() {
            dotenv::from_path(env_file).map_err(|e| HelperError::Config {
                message: format!("Failed to load {}", env_file.display()),
                source: Some(Box::new(e)),
            })?;
            debug!("Loaded environment from {}", env_file.display());
            return Ok(EnvSource::File(env_file.to_path_buf()));
        }

        match dotenv::dotenv() {
            Ok(path) => {
                debug!("Loaded environment from {}", path.display());
                Ok(EnvSource::Discovered(path))
            }
            Err(dotenv::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No environment file found");
                Ok(EnvSource::None)
            }
            Err(e) => Err(HelperError::Config {
                message: "Failed to load .env".to_string(),
                source: Some(Box::new(e)),
            }),
        }
    }
}

/// Environment variable utilities
#[derive(Debug)]
pub struct EnvUtils;

impl EnvUtils {
    /// Get a non-empty environment variable
    pub fn get_var(key: &str) -> Option<String> {
        env::var(key).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Each test uses its own variable names, so parallel tests never race
    fn set_var(key: &str, value: &str) {
        unsafe { env::set_var(key, value) }
    }

    fn remove_var(key: &str) {
        unsafe { env::remove_var(key) }
    }

    #[test]
    fn test_get_var() {
        assert_eq!(EnvUtils::get_var("CLASP_HELPER_TEST_MISSING"), None);

        set_var("CLASP_HELPER_TEST_VAR", "test_value");
        assert_eq!(
            EnvUtils::get_var("CLASP_HELPER_TEST_VAR").as_deref(),
            Some("test_value")
        );

        set_var("CLASP_HELPER_TEST_VAR", "");
        assert_eq!(EnvUtils::get_var("CLASP_HELPER_TEST_VAR"), None);

        remove_var("CLASP_HELPER_TEST_VAR");
    }

    #[test]
    fn test_load_env_file() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        fs::write(&env_file, "CLASP_HELPER_TEST_FROM_FILE=loaded\n").unwrap();

        let source = EnvLoader::load(&env_file).unwrap();

        assert_eq!(source, EnvSource::File(env_file));
        assert_eq!(
            EnvUtils::get_var("CLASP_HELPER_TEST_FROM_FILE").as_deref(),
            Some("loaded")
        );
        remove_var("CLASP_HELPER_TEST_FROM_FILE");
    }

    #[test]
    fn test_load_does_not_override_existing() {
        let dir = TempDir::new().unwrap();
        let env_file = dir.path().join(".env");
        fs::write(&env_file, "CLASP_HELPER_TEST_EXISTING=from_file\n").unwrap();
        set_var("CLASP_HELPER_TEST_EXISTING", "from_process");

        EnvLoader::load(&env_file).unwrap();

        assert_eq!(
            EnvUtils::get_var("CLASP_HELPER_TEST_EXISTING").as_deref(),
            Some("from_process")
        );
        remove_var("CLASP_HELPER_TEST_EXISTING");
    }
}
