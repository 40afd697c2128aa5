//! Integration tests for layered configuration

use super::test_utils::{combine_command, with_isolated_env, write_tree};
use combine_code::config::{global_config_path, ConfigLoader};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    with_isolated_env(&test_dir, || {
        let global = global_config_path().expect("config dir resolvable with HOME set");
        fs::create_dir_all(global.parent().unwrap()).unwrap();
        fs::write(
            &global,
            "[collect]\noutput = \"global.txt\"\nextensions = [\".c\"]\n",
        )
        .unwrap();
        fs::write(
            workspace.join("combine.toml"),
            "[collect]\noutput = \"workspace.txt\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.collect.output, PathBuf::from("workspace.txt"));
        // Keys absent from the workspace file fall through to the global file
        assert_eq!(config.collect.extensions, vec![".c"]);
    });
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();
    fs::write(
        workspace.join("combine.toml"),
        "[collect]\noutput = \"workspace.txt\"\n",
    )
    .unwrap();

    with_isolated_env(&test_dir, || {
        std::env::set_var("COMBINE_COLLECT__OUTPUT", "from_env.txt");
        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.collect.output, PathBuf::from("from_env.txt"));
    });
}

#[test]
fn test_binary_precedence_env_then_cli() {
    let sandbox = TempDir::new().unwrap();
    let workspace = sandbox.path().join("ws");
    write_tree(
        &workspace,
        &[
            ("combine.toml", "[collect]\nextensions = [\".c\"]\noutput = \"file.txt\"\n"),
            ("a.c", "int a;"),
            ("b.rs", "fn b() {}"),
        ],
    );

    let from_env = combine_command(sandbox.path(), &workspace)
        .env("COMBINE_COLLECT__EXTENSIONS", ".rs")
        .output()
        .unwrap();
    assert!(from_env.status.success());
    let text = fs::read_to_string(workspace.join("file.txt")).unwrap();
    assert!(text.contains("FILE: b.rs\n"));
    assert!(!text.contains("FILE: a.c\n"));

    let from_cli = combine_command(sandbox.path(), &workspace)
        .env("COMBINE_COLLECT__EXTENSIONS", ".rs")
        .args(["--ext", ".c", "--output", "cli.txt"])
        .output()
        .unwrap();
    assert!(from_cli.status.success());
    let text = fs::read_to_string(workspace.join("cli.txt")).unwrap();
    assert!(text.contains("FILE: a.c\n"));
    assert!(!text.contains("FILE: b.rs\n"));
}

#[test]
fn test_print_config_renders_resolved_values() {
    let sandbox = TempDir::new().unwrap();
    let workspace = sandbox.path().join("ws");
    write_tree(&workspace, &[("combine.toml", "[collect]\nmax_depth = 2\n")]);

    let output = combine_command(sandbox.path(), &workspace)
        .args(["--print-config", "--ignore", ".git"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[collect]"));
    assert!(stdout.contains("max_depth = 2"));
    assert!(stdout.contains(".git"));
    assert!(!workspace.join("combined_code.txt").exists());
}

#[test]
fn test_invalid_config_exits_nonzero() {
    let sandbox = TempDir::new().unwrap();
    let workspace = sandbox.path().join("ws");
    write_tree(&workspace, &[("combine.toml", "[collect]\nextensions = []\n")]);

    let output = combine_command(sandbox.path(), &workspace).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("At least one extension is required"), "stderr={}", stderr);
}

#[test]
fn test_workspace_file_follows_root_from_environment() {
    let sandbox = TempDir::new().unwrap();
    let workspace = sandbox.path().join("ws");
    let cwd = sandbox.path().join("run");
    fs::create_dir_all(&cwd).unwrap();
    write_tree(
        &workspace,
        &[
            ("combine.toml", "[collect]\nextensions = [\".c\"]\n"),
            ("a.c", "int a;"),
            ("b.cpp", "int b;"),
        ],
    );

    let output = combine_command(sandbox.path(), &cwd)
        .env("COMBINE_COLLECT__ROOT", &workspace)
        .output()
        .unwrap();

    assert!(output.status.success());
    let text = fs::read_to_string(cwd.join("combined_code.txt")).unwrap();
    assert!(text.contains("FILE: a.c\n"));
    assert!(!text.contains("FILE: b.cpp\n"));
}
