//! Per-command sessions
//!
//! A session bundles every side-effecting capability a command may use.
//! Each command execution creates a session that owns its providers; the
//! domain code only ever sees the provider traits.

use crate::application::config::AppConfig;
use crate::display::{DisplayProvider, LiveDisplayProvider};
use crate::primitives::DEPENDENCY_DIRS;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Workspace files as seen by resolution and the engine boundary
pub trait FileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf>;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Create or truncate `path` with `content`
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    /// Check if path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    fn is_directory(&self, path: &Path) -> bool;

    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Every file below `root`, recursively, skipping package-manager directories
    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Captured result of a child process
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Child processes: the analysis engine and the renderer
pub trait ProcessProvider {
    /// Run `command` in `working_dir` and wait for it
    fn execute(&self, command: &str, args: &[&str], working_dir: &Path) -> Result<ProcessOutput>;

    /// Whether `program` resolves on the search path
    fn is_available(&self, program: &str) -> bool;
}

pub trait ConfigProvider {
    fn app_config(&self) -> &AppConfig;
}

/// One entry offered to the user when a choice is ambiguous
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    /// Short label, typically a file name
    pub label: String,
    /// Secondary line, typically the full path
    pub detail: String,
}

/// Human disambiguation when several candidates tie
pub trait InteractiveProvider {
    /// Ask the user to choose one of `items`
    ///
    /// Returns `Some(index)` for a choice and `None` when the user cancels.
    /// Non-interactive providers answer with the first item.
    fn pick(&self, title: &str, items: &[PickItem]) -> Result<Option<usize>>;
}

/// Session trait that both CommandSession and MockCommandSession implement
pub trait Session {
    fn display(&self) -> &dyn DisplayProvider;

    fn filesystem(&self) -> &dyn FileSystemProvider;

    fn process(&self) -> &dyn ProcessProvider;

    fn config(&self) -> &dyn ConfigProvider;

    fn interactive(&self) -> &dyn InteractiveProvider;

    /// Directory relative paths are resolved against
    fn workdir(&self) -> Result<PathBuf> {
        match &self.config().app_config().workdir {
            Some(workdir) => Ok(workdir.clone()),
            None => self.filesystem().current_dir(),
        }
    }
}

/// `std::fs` backed filesystem
#[derive(Debug, Default)]
pub struct LiveFileSystemProvider;

impl FileSystemProvider for LiveFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir().context("Failed to determine working directory")
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create {}", path.display()))
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let walker = walkdir::WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !(entry.file_type().is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| DEPENDENCY_DIRS.contains(&name)))
            });

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                // Unreadable subtrees are skipped, the rest of the walk still counts
                Err(e) if e.depth() > 0 => {
                    tracing::debug!(error = %e, "Skipping unreadable workspace entry");
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Failed to enumerate files under {}", root.display())
                    });
                }
            }
        }

        Ok(files)
    }
}

/// `std::process` backed execution
#[derive(Debug, Default)]
pub struct LiveProcessProvider {
    /// Replaces `PATH` for lookups and children when set
    custom_path: Option<String>,
}

impl LiveProcessProvider {
    pub fn new() -> Self {
        Self { custom_path: None }
    }

    /// Resolve programs against `path` instead of the inherited `PATH`
    pub fn with_custom_path(path: String) -> Self {
        Self {
            custom_path: Some(path),
        }
    }

    fn search_path(&self) -> Option<std::ffi::OsString> {
        match &self.custom_path {
            Some(path) => Some(path.into()),
            None => env::var_os("PATH"),
        }
    }
}

impl ProcessProvider for LiveProcessProvider {
    fn execute(&self, command: &str, args: &[&str], working_dir: &Path) -> Result<ProcessOutput> {
        use std::process::Command;

        let mut cmd = Command::new(command);
        cmd.args(args).current_dir(working_dir);

        if let Some(custom_path) = &self.custom_path {
            cmd.env("PATH", custom_path);
        }

        tracing::debug!(command, ?args, cwd = %working_dir.display(), "Executing");

        let output = cmd
            .output()
            .with_context(|| format!("Failed to spawn {command}"))?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }

    fn is_available(&self, program: &str) -> bool {
        let Some(search_path) = self.search_path() else {
            return false;
        };

        env::split_paths(&search_path).any(|dir| {
            let candidate = dir.join(program);
            candidate.is_file() || (cfg!(windows) && candidate.with_extension("exe").is_file())
        })
    }
}

pub struct LiveConfigProvider {
    app_config: AppConfig,
}

impl LiveConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for LiveConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Fuzzy picker on the terminal, first item when non-interactive
pub struct LiveInteractiveProvider {
    yes_mode: bool,
}

impl LiveInteractiveProvider {
    pub fn new(yes_mode: bool) -> Self {
        Self { yes_mode }
    }

    fn is_tty() -> bool {
        use std::io::IsTerminal;
        std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
    }
}

impl InteractiveProvider for LiveInteractiveProvider {
    fn pick(&self, title: &str, items: &[PickItem]) -> Result<Option<usize>> {
        if items.is_empty() {
            return Ok(None);
        }

        // Non-interactive mode: take the best-ranked entry
        if self.yes_mode || !Self::is_tty() {
            return Ok(Some(0));
        }

        use dialoguer::FuzzySelect;

        let labels: Vec<String> = items
            .iter()
            .map(|item| format!("{}  ({})", item.label, item.detail))
            .collect();

        FuzzySelect::new()
            .with_prompt(title)
            .items(&labels)
            .default(0)
            .max_length(8)
            .interact_opt()
            .context("Failed to read selection")
    }
}

/// Providers for one command run
pub struct CommandSession<F, P, C, I>
where
    F: FileSystemProvider,
    P: ProcessProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    display_provider: Box<dyn DisplayProvider>,
    filesystem_provider: F,
    process_provider: P,
    config_provider: C,
    interactive_provider: I,
}

impl CommandSession<LiveFileSystemProvider, LiveProcessProvider, LiveConfigProvider, LiveInteractiveProvider> {
    /// Production composition; also brings up display and logging
    pub fn new(app_config: AppConfig) -> Self {
        match crate::terminal::TerminalCapabilities::detect_from_config(&app_config) {
            Ok(terminal_caps) => {
                let _ = crate::display::Display::init(terminal_caps.clone());
                let logger_config = app_config.to_logger_config(&terminal_caps);
                let _ = crate::logger::Logger::init(logger_config);
            }
            Err(e) => {
                let _ = crate::display::Display::init(crate::terminal::TerminalCapabilities::minimal());
                eprintln!("depview: terminal detection failed, using plain output: {e}");
            }
        }

        Self {
            display_provider: Box::new(LiveDisplayProvider::new()),
            filesystem_provider: LiveFileSystemProvider,
            process_provider: LiveProcessProvider::new(),
            interactive_provider: LiveInteractiveProvider::new(app_config.yes),
            config_provider: LiveConfigProvider::new(app_config),
        }
    }
}

impl<F, P, C, I> CommandSession<F, P, C, I>
where
    F: FileSystemProvider,
    P: ProcessProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    /// Create a session with custom providers (for testing)
    #[cfg(feature = "test-utils")]
    pub fn new_with_providers(
        filesystem_provider: F,
        process_provider: P,
        config_provider: C,
        interactive_provider: I,
    ) -> Self {
        Self {
            display_provider: Box::new(LiveDisplayProvider::new()),
            filesystem_provider,
            process_provider,
            config_provider,
            interactive_provider,
        }
    }

    /// Replace the display provider (for testing)
    #[cfg(feature = "test-utils")]
    pub fn with_display(mut self, display: impl DisplayProvider + 'static) -> Self {
        self.display_provider = Box::new(display);
        self
    }
}

impl<F, P, C, I> Session for CommandSession<F, P, C, I>
where
    F: FileSystemProvider,
    P: ProcessProvider,
    C: ConfigProvider,
    I: InteractiveProvider,
{
    fn display(&self) -> &dyn DisplayProvider {
        self.display_provider.as_ref()
    }

    fn filesystem(&self) -> &dyn FileSystemProvider {
        &self.filesystem_provider
    }

    fn process(&self) -> &dyn ProcessProvider {
        &self.process_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn interactive(&self) -> &dyn InteractiveProvider {
        &self.interactive_provider
    }
}

#[cfg(test)]
mod tests {
    include!("session.test.rs");
}
