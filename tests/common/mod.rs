//! Common test utilities for Pagesmith integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test site for integration tests
#[allow(dead_code)]
pub struct TestSite {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to site root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestSite {
    /// Create a new test site with an empty template tree
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("template/config"))
            .expect("Failed to create config directory");
        std::fs::create_dir_all(path.join("template/html"))
            .expect("Failed to create html directory");
        Self { temp, path }
    }

    /// Write a file in the site
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the site
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the site
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parse a saved document for structural assertions
    pub fn load_yaml(&self, path: &str) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read_file(path)).expect("Failed to parse YAML")
    }
}

/// Build a pagesmith command running inside the given site
#[allow(dead_code)]
pub fn pagesmith_cmd(site: &TestSite) -> assert_cmd::Command {
    #[allow(deprecated)]
    let mut cmd = assert_cmd::Command::cargo_bin("pagesmith").expect("binary builds");
    cmd.current_dir(&site.path);
    cmd
}
