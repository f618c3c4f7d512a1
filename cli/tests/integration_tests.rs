use std::fs;
use std::process::{Command, Output};

fn cmdtree(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cmdtree"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run cmdtree")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ---------------------------------------------------------------------------
// resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_without_args_selects_root() {
    let out = cmdtree(&["--format", "json", "resolve"]);
    assert!(out.status.success());

    let report = stdout_json(&out);
    assert_eq!(report["command"], "tool");
    assert_eq!(report["found"], true);
    assert_eq!(report["remaining"], serde_json::json!([]));
}

#[test]
fn resolve_follows_alias_and_keeps_flags() {
    let out = cmdtree(&["--format", "json", "resolve", "cfg", "get", "--global", "name"]);
    assert!(out.status.success());

    let report = stdout_json(&out);
    assert_eq!(report["command"], "get");
    assert_eq!(report["path"], serde_json::json!(["tool", "config", "get"]));
    assert_eq!(report["found"], true);
    assert_eq!(report["remaining"], serde_json::json!(["--global", "name"]));
}

#[test]
fn resolve_stops_at_leading_flag() {
    let out = cmdtree(&["--format", "json", "resolve", "--", "-x", "generate"]);
    assert!(out.status.success());

    let report = stdout_json(&out);
    assert_eq!(report["command"], "tool");
    assert_eq!(report["found"], true);
    assert_eq!(report["remaining"], serde_json::json!(["-x", "generate"]));
}

#[test]
fn resolve_unknown_command_fails_with_usage() {
    let out = cmdtree(&["resolve", "config", "bogus", "extra"]);
    assert!(!out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("command: tool config"));
    assert!(stdout.contains("found: false"));
    assert!(stdout.contains("remaining: bogus extra"));

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:\n  tool config [command]"));
    assert!(stderr.contains("error: unknown command \"bogus\" for \"tool config\""));
}

#[test]
fn resolve_lenient_no_usage_exits_zero() {
    let out = cmdtree(&["resolve", "--lenient", "--no-usage", "nope"]);
    assert!(out.status.success());

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("Usage:"));
    assert!(stderr.contains("warning: unknown command \"nope\" for \"tool\""));
}

#[test]
fn resolve_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmdtree.yaml");
    fs::write(&path, "format: yaml\nstrict: false\nusage_on_miss: false\n").unwrap();

    let out = cmdtree(&["--config", path.to_str().unwrap(), "resolve", "up", "later"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("command: update"));
    assert!(stdout.contains("found: false"));
    assert!(stdout.contains("- later"));
}

#[test]
fn format_flag_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmdtree.yaml");
    fs::write(&path, "format: yaml\n").unwrap();

    let out = cmdtree(&[
        "--config",
        path.to_str().unwrap(),
        "--format",
        "json",
        "resolve",
        "gen",
    ]);
    assert!(out.status.success());
    assert_eq!(stdout_json(&out)["command"], "generate");
}

#[test]
fn missing_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let out = cmdtree(&["--config", path.to_str().unwrap(), "tree"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("error: I/O error"));
}

// ---------------------------------------------------------------------------
// usage / tree / init-config
// ---------------------------------------------------------------------------

#[test]
fn usage_lists_children_with_aliases() {
    let out = cmdtree(&["usage", "config"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("Inspect or change settings\n"));
    assert!(stdout.contains("Available commands:"));
    assert!(stdout.contains("  list  List all settings (aliases: ls)"));
}

#[test]
fn usage_for_unknown_path_prints_deepest_and_fails() {
    let out = cmdtree(&["usage", "config", "delete"]);
    assert!(!out.status.success());

    assert!(String::from_utf8_lossy(&out.stdout).contains("tool config [command]"));
    assert!(
        String::from_utf8_lossy(&out.stderr)
            .contains("unknown command \"delete\" for \"tool config\"")
    );
}

#[test]
fn tree_json_nests_children() {
    let out = cmdtree(&["--format", "json", "tree"]);
    assert!(out.status.success());

    let tree = stdout_json(&out);
    assert_eq!(tree["name"], "tool");
    assert_eq!(tree["children"][0]["name"], "generate");
    assert_eq!(tree["children"][0]["alt_names"], serde_json::json!(["gen"]));
    assert_eq!(tree["children"][4]["children"][2]["name"], "list");
}

#[test]
fn tree_text_is_indented() {
    let out = cmdtree(&["tree"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("tool - Example code generation tool\n"));
    assert!(stdout.contains("\n  config (cfg) - Inspect or change settings\n"));
    assert!(stdout.contains("\n    list (ls) - List all settings\n"));
}

#[test]
fn init_config_writes_loadable_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cmdtree.yaml");

    let out = cmdtree(&["init-config", path.to_str().unwrap()]);
    assert!(out.status.success());

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("format: text"));
    assert!(written.contains("strict: true"));

    let out = cmdtree(&["--config", path.to_str().unwrap(), "resolve", "refresh"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("command: tool refresh"));
}

#[cfg(target_os = "linux")]
#[test]
fn init_config_fails_when_disk_is_full() {
    let out = cmdtree(&["init-config", "/dev/full"]);
    assert!(!out.status.success());

    assert!(!String::from_utf8_lossy(&out.stdout).contains("Wrote"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error: I/O error"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let out = cmdtree(&["--verbose", "--format", "json", "resolve", "gen"]);
    assert!(out.status.success());

    assert_eq!(stdout_json(&out)["found"], true);
    assert!(String::from_utf8_lossy(&out.stderr).contains("lookup finished"));
}
