//! Mock implementations of session providers for testing
//!
//! These mocks let command handlers and the resolution pipeline run
//! without touching the real filesystem, spawning processes, or prompting.

use crate::application::config::AppConfig;
use crate::application::session::*;
use crate::display::{DisplayProvider, MockDisplayProvider};
use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock filesystem provider for testing
#[derive(Clone)]
pub struct MockFileSystemProvider {
    pub current_dir: PathBuf,
    /// In-memory filesystem: path -> content
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    /// Track directories that exist
    pub directories: Arc<Mutex<HashSet<PathBuf>>>,
    /// Paths passed to `read_to_string`, in call order
    pub read_calls: Arc<Mutex<Vec<PathBuf>>>,
    /// Files that exist but fail on read
    pub unreadable: Arc<Mutex<HashSet<PathBuf>>>,
}

impl Default for MockFileSystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFileSystemProvider {
    pub fn new() -> Self {
        Self {
            current_dir: PathBuf::from("/test/workdir"),
            files: Arc::new(Mutex::new(HashMap::new())),
            directories: Arc::new(Mutex::new(HashSet::new())),
            read_calls: Arc::new(Mutex::new(Vec::new())),
            unreadable: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    pub fn with_current_dir(mut self, dir: PathBuf) -> Self {
        self.current_dir = dir.clone();
        self.directories.lock().unwrap().insert(dir);
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        self.track_parents(&path);
        self.files.lock().unwrap().insert(path, content.into());
        self
    }

    pub fn with_directory(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.track_parents(&path);
        self.directories.lock().unwrap().insert(path);
        self
    }

    /// Register a file that exists but cannot be read
    pub fn with_read_error(self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.unreadable.lock().unwrap().insert(path.clone());
        self.with_file(path, "")
    }

    /// Number of times `path` was read
    pub fn read_count(&self, path: &Path) -> usize {
        self.read_calls
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_path() == path)
            .count()
    }

    fn track_parents(&self, path: &Path) {
        let mut directories = self.directories.lock().unwrap();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            directories.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystemProvider for MockFileSystemProvider {
    fn current_dir(&self) -> Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_calls.lock().unwrap().push(path.to_path_buf());
        if self.unreadable.lock().unwrap().contains(path) {
            anyhow::bail!("Permission denied: {}", path.display());
        }
        let files = self.files.lock().unwrap();
        if let Some(content) = files.get(path) {
            Ok(content.clone())
        } else {
            Err(anyhow::anyhow!("File not found: {}", path.display()))
        }
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.track_parents(path);
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.is_file(path) || self.is_directory(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn is_directory(&self, path: &Path) -> bool {
        path == self.current_dir || self.directories.lock().unwrap().contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.track_parents(path);
        self.directories.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn list_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !self.is_directory(root) {
            return Err(anyhow::anyhow!("Directory not found: {}", root.display()));
        }

        let mut files: Vec<PathBuf> = self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter(|path| path.starts_with(root))
            .cloned()
            .collect();
        files.sort();
        Ok(files)
    }
}

/// Process call record for spy pattern
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessCall {
    pub command: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

/// Mock process provider for testing with spy pattern
#[derive(Clone)]
pub struct MockProcessProvider {
    pub available: HashSet<String>,
    pub calls: Arc<Mutex<Vec<ProcessCall>>>,
    /// Results keyed by command name; the first arg-prefix match wins
    pub results: Vec<(String, Vec<String>, std::result::Result<ProcessOutput, String>)>,
}

impl Default for MockProcessProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProcessProvider {
    pub fn new() -> Self {
        Self {
            available: ["depcruise", "dot"].iter().map(|s| s.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            results: Vec::new(),
        }
    }

    pub fn with_unavailable(mut self, program: &str) -> Self {
        self.available.remove(program);
        self
    }

    /// Canned result for `command` when its args start with `args_prefix`
    pub fn with_result(
        mut self,
        command: &str,
        args_prefix: &[&str],
        result: std::result::Result<ProcessOutput, String>,
    ) -> Self {
        self.results.push((
            command.to_string(),
            args_prefix.iter().map(|s| s.to_string()).collect(),
            result,
        ));
        self
    }

    /// Successful stdout for every invocation of `command`
    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_result(
            command,
            &[],
            Ok(ProcessOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                success: true,
            }),
        )
    }

    /// Failing exit with the given stderr for every invocation of `command`
    pub fn with_failure(self, command: &str, stderr: &str) -> Self {
        self.with_result(
            command,
            &[],
            Ok(ProcessOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
                success: false,
            }),
        )
    }

    /// Get all recorded process calls for verification
    pub fn get_calls(&self) -> Vec<ProcessCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get calls for a specific command
    pub fn get_calls_for_command(&self, command: &str) -> Vec<ProcessCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.command == command)
            .cloned()
            .collect()
    }
}

impl ProcessProvider for MockProcessProvider {
    fn execute(&self, command: &str, args: &[&str], working_dir: &Path) -> Result<ProcessOutput> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        self.calls.lock().unwrap().push(ProcessCall {
            command: command.to_string(),
            args: args.clone(),
            working_dir: working_dir.to_path_buf(),
        });

        let canned = self
            .results
            .iter()
            .find(|(cmd, prefix, _)| cmd == command && args.starts_with(prefix));

        match canned {
            Some((_, _, Ok(output))) => Ok(output.clone()),
            Some((_, _, Err(e))) => Err(anyhow::anyhow!("{}", e)),
            // Default behavior: succeed with empty output
            None => Ok(ProcessOutput {
                stdout: String::new(),
                stderr: String::new(),
                success: true,
            }),
        }
    }

    fn is_available(&self, program: &str) -> bool {
        self.available.contains(program)
    }
}

/// Mock config provider for testing
pub struct MockConfigProvider {
    pub app_config: AppConfig,
}

impl MockConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Mock interactive provider for testing
#[derive(Clone)]
pub struct MockInteractiveProvider {
    /// (title, items) for every pick
    pub pick_calls: Arc<Mutex<Vec<(String, Vec<PickItem>)>>>,
    pub pick_response: Arc<Mutex<Option<std::result::Result<Option<usize>, String>>>>,
}

impl Default for MockInteractiveProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInteractiveProvider {
    pub fn new() -> Self {
        Self {
            pick_calls: Arc::new(Mutex::new(Vec::new())),
            pick_response: Arc::new(Mutex::new(None)),
        }
    }

    /// Answer every pick with `response` (`None` = cancelled)
    pub fn with_pick(self, response: Option<usize>) -> Self {
        *self.pick_response.lock().unwrap() = Some(Ok(response));
        self
    }

    pub fn with_pick_error(self, message: &str) -> Self {
        *self.pick_response.lock().unwrap() = Some(Err(message.to_string()));
        self
    }

    pub fn get_pick_calls(&self) -> Vec<(String, Vec<PickItem>)> {
        self.pick_calls.lock().unwrap().clone()
    }
}

impl InteractiveProvider for MockInteractiveProvider {
    fn pick(&self, title: &str, items: &[PickItem]) -> Result<Option<usize>> {
        self.pick_calls
            .lock()
            .unwrap()
            .push((title.to_string(), items.to_vec()));

        match self.pick_response.lock().unwrap().clone() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(anyhow::anyhow!("{}", message)),
            // Default behavior: return first option (0)
            None if items.is_empty() => Ok(None),
            None => Ok(Some(0)),
        }
    }
}

/// Mock command session for testing
pub struct MockCommandSession {
    pub display_provider: MockDisplayProvider,
    pub filesystem_provider: MockFileSystemProvider,
    pub process_provider: MockProcessProvider,
    pub config_provider: MockConfigProvider,
    pub interactive_provider: MockInteractiveProvider,
}

impl Default for MockCommandSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCommandSession {
    pub fn new() -> Self {
        Self {
            display_provider: MockDisplayProvider::new(),
            filesystem_provider: MockFileSystemProvider::new(),
            process_provider: MockProcessProvider::new(),
            config_provider: MockConfigProvider::new(AppConfig::default()),
            interactive_provider: MockInteractiveProvider::new(),
        }
    }

    pub fn with_filesystem(mut self, filesystem: MockFileSystemProvider) -> Self {
        self.filesystem_provider = filesystem;
        self
    }

    pub fn with_process(mut self, process: MockProcessProvider) -> Self {
        self.process_provider = process;
        self
    }

    pub fn with_app_config(mut self, app_config: AppConfig) -> Self {
        self.config_provider = MockConfigProvider::new(app_config);
        self
    }

    pub fn with_interactive(mut self, interactive: MockInteractiveProvider) -> Self {
        self.interactive_provider = interactive;
        self
    }
}

impl Session for MockCommandSession {
    fn display(&self) -> &dyn DisplayProvider {
        &self.display_provider
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
    use super::*;

    #[test]
    fn test_mock_filesystem_lists_only_under_root() {
        let fs = MockFileSystemProvider::new()
            .with_file("/proj/tsconfig.json", "{}")
            .with_file("/proj/src/tsconfig.json", "{}")
            .with_file("/other/tsconfig.json", "{}");

        let files = fs.list_files(Path::new("/proj")).unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("/proj/src/tsconfig.json"),
                PathBuf::from("/proj/tsconfig.json"),
            ]
        );
        assert!(fs.is_directory(Path::new("/proj/src")));
    }

    #[test]
    fn test_mock_filesystem_missing_root_errors() {
        let fs = MockFileSystemProvider::new();
        assert!(fs.list_files(Path::new("/nowhere")).is_err());
    }

    #[test]
    fn test_mock_process_records_calls_and_prefix_results() {
        let process = MockProcessProvider::new()
            .with_result(
                "depcruise",
                &["--config"],
                Ok(ProcessOutput {
                    stdout: "digraph {}".to_string(),
                    stderr: String::new(),
                    success: true,
                }),
            )
            .with_unavailable("dot");

        let output = process
            .execute("depcruise", &["--config", "x.json"], Path::new("/proj"))
            .unwrap();

        assert_eq!(output.stdout, "digraph {}");
        assert!(process.is_available("depcruise"));
        assert!(!process.is_available("dot"));
        assert_eq!(process.get_calls_for_command("depcruise").len(), 1);
        assert_eq!(process.get_calls()[0].working_dir, PathBuf::from("/proj"));
    }

    #[test]
    fn test_mock_interactive_records_items() {
        let interactive = MockInteractiveProvider::new().with_pick(None);
        let items = vec![PickItem {
            label: "tsconfig.json".to_string(),
            detail: "/proj/tsconfig.json".to_string(),
        }];

        assert_eq!(interactive.pick("Pick", &items).unwrap(), None);

        let calls = interactive.get_pick_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Pick");
        assert_eq!(calls[0].1, items);
    }
}
