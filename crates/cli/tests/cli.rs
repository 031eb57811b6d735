//! Integration tests for the `routegen` commands.
//!
//! Commands are run in-process through `run_cli`; results are observed via
//! exit codes and the files they write.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};

use routegen_cli::run_cli;
use routegen_core::{Config, RouteCollection, generate};
use tempfile::TempDir;

const MANIFEST: &str = r#"{
    "/app/src/routes/users/+server.ts": {
        "GET": { "method": "GET", "path": "/users", "returnType": "User[]" }
    },
    "/app/src/routes/users/[id]/+server.ts": {
        "GET": { "method": "GET", "path": "/users/[id]", "returnType": "User" }
    }
}"#;

fn write_manifest(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("routes.json");
    fs::write(&path, json).unwrap();
    path
}

fn run(args: &[&str]) -> i32 {
    let mut argv = vec!["routegen".to_string()];
    argv.extend(args.iter().map(|arg| (*arg).to_string()));
    run_cli(argv)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Config file next to the manifest with defaults, so the tests never pick
/// up a routegen.toml from the working directory.
fn default_config(dir: &Path) -> PathBuf {
    let path = dir.join("routegen.toml");
    fs::write(&path, "").unwrap();
    path
}

#[test]
fn test_generate_writes_output_once() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(dir.path(), MANIFEST);
    let config = default_config(dir.path());
    let out = dir.path().join("src/lib/api.ts");

    let args = [
        "generate",
        "--routes",
        path_arg(&manifest),
        "--config",
        path_arg(&config),
        "--out",
        path_arg(&out),
    ];
    assert_eq!(run(&args), 0);

    let expected = generate(
        &RouteCollection::from_json(MANIFEST).unwrap(),
        &Config::default(),
    )
    .unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);

    assert_eq!(run(&args), 0);
    assert_eq!(fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn test_generate_applies_format_flags() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(dir.path(), MANIFEST);
    let config = default_config(dir.path());
    let out = dir.path().join("api.js");

    let code = run(&[
        "generate",
        "--routes",
        path_arg(&manifest),
        "--config",
        path_arg(&config),
        "--out",
        path_arg(&out),
        "--dialect",
        "js",
        "--quote",
        "double",
        "--indent",
        "2",
        "--method-naming",
        "upper",
        "--no-banner",
    ]);
    assert_eq!(code, 0);

    let source = fs::read_to_string(&out).unwrap();
    assert!(source.starts_with("export default {\n  users: {\n"));
    assert!(source.contains("async GET(init, fetchFn) {"));
    assert!(source.contains("{ method: \"GET\", ...init }"));
    assert!(!source.contains("Promise<"));
}

#[test]
fn test_check_detects_stale_output() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(dir.path(), MANIFEST);
    let config = default_config(dir.path());
    let out = dir.path().join("api.ts");

    let check = [
        "generate",
        "--routes",
        path_arg(&manifest),
        "--config",
        path_arg(&config),
        "--out",
        path_arg(&out),
        "--check",
    ];

    // Missing file is stale.
    assert_eq!(run(&check), 1);
    assert!(!out.exists());

    fs::write(&out, "export default {};\n").unwrap();
    assert_eq!(run(&check), 1);
    assert_eq!(fs::read_to_string(&out).unwrap(), "export default {};\n");

    assert_eq!(run(&check[..check.len() - 1]), 0);
    assert_eq!(run(&check), 0);
}

#[test]
fn test_config_file_layout_is_used() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        dir.path(),
        r#"{ "api/items/[id]/route.ts": {
            "GET": { "method": "GET", "path": "/items/[id]", "returnType": "Item" }
        } }"#,
    );
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "[layout]\nroutes-root = \"api\"\nterminal-marker = \"route.ts\"\n\n[codegen]\nbanner = \"\"\n",
    )
    .unwrap();
    let out = dir.path().join("api.ts");

    let code = run(&[
        "generate",
        "--routes",
        path_arg(&manifest),
        "--config",
        path_arg(&config),
        "--out",
        path_arg(&out),
    ]);
    assert_eq!(code, 0);

    let source = fs::read_to_string(&out).unwrap();
    assert!(source.starts_with("export default {\n    items: {\n        id(id: string) {\n"));
}

#[test]
fn test_duplicate_methods_fail_unless_allowed() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        dir.path(),
        r#"{
            "/a/src/routes/items/+server.ts": {
                "GET": { "method": "GET", "path": "/items", "returnType": "A" }
            },
            "items/+server.ts": {
                "GET": { "method": "GET", "path": "/items", "returnType": "B" }
            }
        }"#,
    );
    let config = default_config(dir.path());
    let out = dir.path().join("api.ts");

    let mut args = vec![
        "generate",
        "--routes",
        path_arg(&manifest),
        "--config",
        path_arg(&config),
        "--out",
        path_arg(&out),
    ];
    assert_eq!(run(&args), 1);
    assert!(!out.exists());

    args.push("--allow-duplicates");
    assert_eq!(run(&args), 0);
    assert!(fs::read_to_string(&out).unwrap().contains("Promise<B>"));
}

#[test]
fn test_member_collision_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(
        dir.path(),
        r#"{
            "items/+server.ts": {
                "GET": { "method": "GET", "path": "/items", "returnType": "Item[]" }
            },
            "items/get/+server.ts": {
                "GET": { "method": "GET", "path": "/items/get", "returnType": "Item" }
            }
        }"#,
    );
    let config = default_config(dir.path());
    let out = dir.path().join("api.ts");

    let mut args = vec![
        "generate",
        "--routes",
        path_arg(&manifest),
        "--config",
        path_arg(&config),
        "--out",
        path_arg(&out),
    ];
    assert_eq!(run(&args), 1);
    assert!(!out.exists());

    args.extend(["--method-naming", "upper"]);
    assert_eq!(run(&args), 0);
    assert!(fs::read_to_string(&out).unwrap().contains("get: {"));
}

#[test]
fn test_invalid_inputs_exit_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let config = default_config(dir.path());
    assert_eq!(
        run(&["tree", "--routes", path_arg(&missing), "--config", path_arg(&config)]),
        1
    );

    let manifest = write_manifest(dir.path(), "{ \"+server.ts\": { \"GET\": { \"method\": \"HEAD\", \"path\": \"/\", \"returnType\": \"void\" } } }");
    assert_eq!(
        run(&["tree", "--routes", path_arg(&manifest), "--config", path_arg(&config)]),
        1
    );

    let good = write_manifest(dir.path(), MANIFEST);
    let bad_config = dir.path().join("bad.toml");
    fs::write(&bad_config, "[layout]\nunknown = 1\n").unwrap();
    assert_eq!(
        run(&["tree", "--routes", path_arg(&good), "--config", path_arg(&bad_config)]),
        1
    );
}

#[test]
fn test_tree_command_succeeds() {
    let dir = TempDir::new().unwrap();
    let manifest = write_manifest(dir.path(), MANIFEST);
    let config = default_config(dir.path());
    assert_eq!(
        run(&["tree", "--routes", path_arg(&manifest), "--config", path_arg(&config)]),
        0
    );
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    assert_eq!(run(&["generate", "--nope"]), 2);
}
