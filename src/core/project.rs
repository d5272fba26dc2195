//! Project directory layout
//!
//! Knows where the managed script directory and the project-link file live,
//! and performs the two file-system side effects around `create`/`clone`.

use crate::{
    config::Config,
    error::{HelperError, Result},
    utils::FileSystemUtils,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Paths of a clasp-managed project
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    scripts_dir: PathBuf,
    link_file_name: String,
    fs_utils: FileSystemUtils,
}

impl ProjectLayout {
    /// Create a layout from explicit paths
    pub fn new(
        root: impl Into<PathBuf>,
        scripts_dir: impl Into<PathBuf>,
        link_file_name: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            scripts_dir: scripts_dir.into(),
            link_file_name: link_file_name.into(),
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Layout described by the configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.project_root,
            &config.scripts_dir,
            &config.link_file_name,
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn scripts_dir(&self) -> &Path {
        &self.scripts_dir
    }

    /// Where clasp may leave the link file
    pub fn link_file_in_scripts(&self) -> PathBuf {
        self.scripts_dir.join(&self.link_file_name)
    }

    /// Where the link file belongs
    pub fn link_file_in_root(&self) -> PathBuf {
        self.root.join(&self.link_file_name)
    }

    /// Create the scripts directory, including missing parents, if it does
    /// not exist yet. Returns whether it had to be created.
    #[instrument(skip(self), fields(dir = %self.scripts_dir.display()))]
    pub fn ensure_scripts_dir(&self) -> Result<bool> {
        if self.fs_utils.is_dir(&self.scripts_dir) {
            debug!("Scripts directory already exists");
            return Ok(false);
        }

        self.fs_utils
            .create_dir_all(&self.scripts_dir)
            .map_err(|e| HelperError::file_system("create directory", &self.scripts_dir, e))?;
        info!("Created {}", self.scripts_dir.display());
        Ok(true)
    }

    /// Move the link file from the scripts directory up to the project root,
    /// replacing any link file already there. Returns `false` when clasp did
    /// not write one into the scripts directory.
    #[instrument(skip(self))]
    pub fn relocate_link_file(&self) -> Result<bool> {
        let src = self.link_file_in_scripts();
        if !self.fs_utils.is_file(&src) {
            debug!("No {} in {}", self.link_file_name, self.scripts_dir.display());
            return Ok(false);
        }

        let dst = self.link_file_in_root();
        self.fs_utils
            .move_file(&src, &dst)
            .map_err(|e| HelperError::file_system("move", &src, e))?;
        info!("Moved {} to {}", self.link_file_name, self.root.display());
        Ok(true)
    }
}
