//! Isolated test environment with temp directory.

use super::SluglineCommand;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated test environment with its own config directory.
///
/// Commands built from it never see the user's real configuration. The
/// directory is cleaned up on drop.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Directory standing in for the user's config dir
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_home = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            config_home,
        }
    }

    /// Returns the default config file location inside this environment.
    pub fn default_config_path(&self) -> PathBuf {
        self.config_home.join("slugline").join("config.toml")
    }

    /// Writes the default config file.
    pub fn write_default_config(&self, contents: &str) -> PathBuf {
        let path = self.default_config_path();
        std::fs::create_dir_all(path.parent().expect("config path has a parent"))
            .expect("Failed to create config directory");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.config_home.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a SluglineCommand configured for this test environment.
    pub fn cmd(&self) -> SluglineCommand {
        SluglineCommand::new().config_home(&self.config_home)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
