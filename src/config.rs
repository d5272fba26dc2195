//! Configuration management for the clasp helper
//!
//! Centralizes path resolution and provides validation.

use crate::{
    cli::Args,
    error::HelperError,
    utils::{EnvLoader, EnvUtils, FileSystemUtils, ProcessRunner},
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directory, relative to the project root, that holds the script sources
pub const SCRIPTS_DIR_NAME: &str = "apps-script";

/// File clasp writes to link a directory with a remote script project
pub const LINK_FILE_NAME: &str = ".clasp.json";

/// Location of the locally installed clasp, relative to the project root
pub const LOCAL_CLASP_PATH: &str = "helper/node_modules/.bin/clasp";

/// Name of the environment-definition file in the project root
pub const ENV_FILE_NAME: &str = ".env";

/// Environment variable that overrides the clasp binary
pub const CLASP_BIN_VAR: &str = "CLASP_BIN";

/// Fallback binary resolved through `PATH`
const CLASP_ON_PATH: &str = "clasp";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Project root; clasp always runs here
    pub project_root: PathBuf,
    /// Managed directory the script sources are synced into
    pub scripts_dir: PathBuf,
    /// Project-link file name
    pub link_file_name: String,
    /// clasp executable
    pub clasp_bin: PathBuf,
    /// Environment-definition file
    pub env_file: PathBuf,
}

impl Config {
    /// Build a configuration rooted at `project_root` with the default layout
    pub fn for_root(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            debug: false,
            scripts_dir: project_root.join(SCRIPTS_DIR_NAME),
            link_file_name: LINK_FILE_NAME.to_string(),
            clasp_bin: PathBuf::from(CLASP_ON_PATH),
            env_file: project_root.join(ENV_FILE_NAME),
            project_root,
        }
    }

    /// Create configuration from command line arguments.
    ///
    /// Loads the environment file before resolving the clasp binary so that
    /// `CLASP_BIN` may be set there.
    pub fn from_args(args: &Args) -> Result<Self, HelperError> {
        let project_root = match &args.project_root {
            Some(root) => root.clone(),
            None => std::env::current_dir().map_err(|e| HelperError::Config {
                message: "Unable to determine the current directory".to_string(),
                source: Some(Box::new(e)),
            })?,
        };

        let mut config = Self {
            debug: args.debug,
            ..Self::for_root(project_root)
        };
        config.validate()?;

        EnvLoader::load(&config.env_file)?;

        config.clasp_bin =
            config.resolve_clasp(args.clasp.as_deref(), EnvUtils::get_var(CLASP_BIN_VAR));
        debug!("Using clasp at {}", config.clasp_bin.display());

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), HelperError> {
        if !self.project_root.is_dir() {
            return Err(HelperError::validation(format!(
                "Project root not found: {}",
                self.project_root.display()
            )));
        }

        if self.link_file_name.is_empty() {
            return Err(HelperError::config("Project-link file name is empty"));
        }

        Ok(())
    }

    /// Pick the clasp binary: explicit flag, then the `CLASP_BIN` value, then
    /// the local install, then whatever `clasp` is on `PATH`
    fn resolve_clasp(&self, explicit: Option<&Path>, from_env: Option<String>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        if let Some(path) = from_env {
            return PathBuf::from(path);
        }

        let local = self.project_root.join(LOCAL_CLASP_PATH);
        if FileSystemUtils::new().is_file(&local) {
            return local;
        }

        if !ProcessRunner::new(self.debug).command_exists(CLASP_ON_PATH) {
            warn!(
                "clasp not found at {} or on PATH; install it with `npm install` in helper/",
                local.display()
            );
        }
        PathBuf::from(CLASP_ON_PATH)
    }

    /// Value passed to clasp's `--rootDir`, relative to the project root
    pub fn root_dir_arg(&self) -> String {
        let name = self
            .scripts_dir
            .strip_prefix(&self.project_root)
            .unwrap_or(&self.scripts_dir);
        format!("./{}", name.display())
    }
}
