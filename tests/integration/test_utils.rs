//! Shared test utilities for integration tests
//!
//! Builds source trees in temp directories and isolates the process
//! environment (HOME, XDG dirs, COMBINE_* variables) for config and CLI tests.

use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "COMBINE_COLLECT__ROOT",
    "COMBINE_COLLECT__OUTPUT",
    "COMBINE_COLLECT__EXTENSIONS",
];

/// Environment variable state to restore after test
struct EnvState {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            saved: ISOLATED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.saved {
            match value {
                Some(orig) => std::env::set_var(name, orig),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Write `(relative path, content)` pairs under `root`, creating parent directories
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into `test_dir`
///
/// Also clears COMBINE_* variables the config tests touch, and restores the
/// previous environment afterwards. Serialized by a global mutex.
pub fn with_isolated_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    let test_config_home = test_dir.path().join("config");
    let test_home = test_dir.path().join("home");
    fs::create_dir_all(&test_config_home).unwrap();
    fs::create_dir_all(&test_home).unwrap();

    std::env::set_var("HOME", &test_home);
    std::env::set_var("XDG_CONFIG_HOME", &test_config_home);
    for name in ISOLATED_VARS.iter().filter(|name| name.starts_with("COMBINE_")) {
        std::env::remove_var(name);
    }

    let result = f();

    env_state.restore();

    result
}

/// Command for the built binary, run inside `cwd` with an isolated environment
pub fn combine_command(sandbox: &Path, cwd: &Path) -> Command {
    let config_home = sandbox.join("config");
    let state_home = sandbox.join("state");
    let home = sandbox.join("home");
    for dir in [&config_home, &state_home, &home] {
        fs::create_dir_all(dir).unwrap();
    }

    let mut command = Command::new(env!("CARGO_BIN_EXE_combine-code"));
    command
        .current_dir(cwd)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", &config_home)
        .env("XDG_STATE_HOME", &state_home)
        .env_remove("COMBINE_LOG")
        .env_remove("COMBINE_LOG_FORMAT")
        .env_remove("COMBINE_LOG_OUTPUT")
        .env_remove("COMBINE_COLLECT__ROOT")
        .env_remove("COMBINE_COLLECT__OUTPUT")
        .env_remove("COMBINE_COLLECT__EXTENSIONS");
    command
}

/// The 80-character `=` separator line
pub fn separator() -> String {
    "=".repeat(80)
}
