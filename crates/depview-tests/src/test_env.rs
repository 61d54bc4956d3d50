//! Hermetic test environment for E2E testing
//!
//! Real files in a temporary workspace, read through the live filesystem
//! provider. Process execution and prompting are mocked so no engine has
//! to be installed and no terminal is needed.

use anyhow::Result;
use depview_lib::application::config::AppConfig;
use depview_lib::application::session::{CommandSession, LiveConfigProvider, LiveFileSystemProvider};
use depview_lib::application::session_mocks::{MockInteractiveProvider, MockProcessProvider};
use depview_lib::depview::OVERRIDE_FILE_NAME;
use depview_lib::display::MockDisplayProvider;
use depview_lib::primitives::TerminalCapsDetectIntent;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Session composition used by the end-to-end tests
pub type HermeticSession =
    CommandSession<LiveFileSystemProvider, MockProcessProvider, LiveConfigProvider, MockInteractiveProvider>;

/// Temporary project directory laid out file by file
pub struct TestWorkspace {
    /// Temporary directory (removed on drop)
    pub temp_dir: TempDir,
    /// Project root inside the temporary directory
    pub root_path: PathBuf,
    /// Directory holding the user settings file
    pub config_path: PathBuf,
}

impl TestWorkspace {
    /// Create an empty project with a `package.json` marker
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root_path = temp_dir.path().join("proj");
        let config_path = temp_dir.path().join("config");

        fs::create_dir_all(&root_path)?;
        fs::create_dir_all(&config_path)?;
        fs::write(root_path.join("package.json"), "{}")?;

        Ok(Self {
            temp_dir,
            root_path,
            config_path,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Absolute path of a project-relative entry
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root_path.join(relative)
    }

    /// Write a project file, creating parent directories
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write the workspace override file
    pub fn write_override(&self, document: &Value) -> Result<PathBuf> {
        self.write(OVERRIDE_FILE_NAME, &serde_json::to_string_pretty(document)?)
    }

    /// Location of the user settings file (may not exist)
    pub fn settings_path(&self) -> PathBuf {
        self.config_path.join("settings.toml")
    }

    pub fn write_settings(&self, toml: &str) -> Result<()> {
        fs::write(self.settings_path(), toml)?;
        Ok(())
    }

    /// Application config pointing at this workspace and its settings file
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            workdir: Some(self.root_path.clone()),
            settings: Some(self.settings_path()),
            color: TerminalCapsDetectIntent::Never,
            ..AppConfig::default()
        }
    }
}

/// Spy handles that outlive the session they were given to
pub struct HermeticHandles {
    pub workspace: TestWorkspace,
    pub display: MockDisplayProvider,
    pub process: MockProcessProvider,
    pub interactive: MockInteractiveProvider,
}

/// Builder for hermetic sessions over a real temporary workspace
pub struct HermeticSessionBuilder {
    workspace: TestWorkspace,
    process: MockProcessProvider,
    interactive: MockInteractiveProvider,
}

impl HermeticSessionBuilder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            workspace: TestWorkspace::new()?,
            process: MockProcessProvider::new(),
            interactive: MockInteractiveProvider::new(),
        })
    }

    pub fn with_file(self, relative: &str, content: &str) -> Result<Self> {
        self.workspace.write(relative, content)?;
        Ok(self)
    }

    pub fn with_override(self, document: Value) -> Result<Self> {
        self.workspace.write_override(&document)?;
        Ok(self)
    }

    pub fn with_settings(self, toml: &str) -> Result<Self> {
        self.workspace.write_settings(toml)?;
        Ok(self)
    }

    pub fn with_process(mut self, process: MockProcessProvider) -> Self {
        self.process = process;
        self
    }

    pub fn with_interactive(mut self, interactive: MockInteractiveProvider) -> Self {
        self.interactive = interactive;
        self
    }

    /// Build the session along with handles to its mocks
    pub fn build(self) -> (HermeticSession, HermeticHandles) {
        let display = MockDisplayProvider::new();
        let session = CommandSession::new_with_providers(
            LiveFileSystemProvider,
            self.process.clone(),
            LiveConfigProvider::new(self.workspace.app_config()),
            self.interactive.clone(),
        )
        .with_display(display.clone());

        let handles = HermeticHandles {
            workspace: self.workspace,
            display,
            process: self.process,
            interactive: self.interactive,
        };
        (session, handles)
    }
}
