//! Integration tests for the repmap CLI.
//!
//! Every test runs the binary in a temporary directory with its own config
//! location, so neither a developer's config file nor a `.env` leaks in.
//!
//! Run with: `cargo test --package repmap-cli --test cli_integration`

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to run repmap in `dir` with extra environment variables.
fn run_repmap(dir: &Path, envs: &[(&str, &str)], args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_repmap"));
    command
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("XDG_DATA_HOME", dir.join(".local/share"))
        .env_remove("REPMAP_DATA_DIR")
        .env_remove("REPMAP_STATES_DIR")
        .env_remove("REPMAP_PORT")
        .env_remove("REPMAP_STORE")
        .args(args);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("Failed to execute repmap command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write a small catalog and two maps.
fn create_site(dir: &Path) {
    let data = dir.join("data");
    let states = dir.join("states");
    fs::create_dir_all(&data).unwrap();
    fs::create_dir_all(&states).unwrap();
    fs::write(
        data.join("stateOptions.json"),
        r#"{"CA": ["Rep A", "Rep B"], "NV": ["Rep N"]}"#,
    )
    .unwrap();
    fs::write(
        data.join("districtToRep.json"),
        r#"{"CA05": "Rep A", "NV01": "Rep N", "CA09": "Rep Ghost"}"#,
    )
    .unwrap();
    fs::write(
        states.join("california.svg"),
        r##"<svg xmlns="http://www.w3.org/2000/svg"><path id="CA05" stroke="#000" d="M0"/><path id="NV01" stroke="#000" d="M1"/><text id="credit-text-svg">Map credit</text>
</svg>"##,
    )
    .unwrap();
    fs::write(
        states.join("nevada.svg"),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="NV01" d="M1"/></svg>"#,
    )
    .unwrap();
}

// =============================================================================
// General
// =============================================================================

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    let output = run_repmap(temp.path(), &[], &["--help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["serve", "check", "svg", "preview", "signup", "config"] {
        assert!(text.contains(command), "missing {command} in help");
    }
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    let output = run_repmap(temp.path(), &[], &["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("repmap"));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn test_check_reports_problems() {
    let temp = TempDir::new().unwrap();
    create_site(temp.path());

    let output = run_repmap(temp.path(), &[], &["check"]);
    assert!(output.status.success(), "{:?}", output);
    let text = stdout(&output);
    assert!(text.contains("States:          2"));
    assert!(text.contains("Districts:       3"));
    assert!(text.contains("CA09 → Rep Ghost"));
    assert!(text.contains("ohio.svg"));
    assert!(!text.contains("california.svg"));
}

#[test]
fn test_check_strict_fails_on_problems() {
    let temp = TempDir::new().unwrap();
    create_site(temp.path());

    let output = run_repmap(temp.path(), &[], &["check", "--strict"]);
    assert!(!output.status.success());
}

#[test]
fn test_check_uses_env_data_dir() {
    let temp = TempDir::new().unwrap();
    create_site(temp.path());
    fs::rename(temp.path().join("data"), temp.path().join("elsewhere")).unwrap();

    let output = run_repmap(temp.path(), &[], &["check"]);
    assert!(!output.status.success());

    let data = temp.path().join("elsewhere");
    let output = run_repmap(
        temp.path(),
        &[("REPMAP_DATA_DIR", data.to_str().unwrap())],
        &["check"],
    );
    assert!(output.status.success());
}

// =============================================================================
// svg
// =============================================================================

#[test]
fn test_svg_trim_uses_file_name() {
    let temp = TempDir::new().unwrap();
    create_site(temp.path());

    let output = run_repmap(temp.path(), &[], &["svg", "trim", "states"]);
    assert!(output.status.success(), "{:?}", output);

    let ca = fs::read_to_string(temp.path().join("states/california.svg")).unwrap();
    assert!(ca.contains(r#"id="CA05""#));
    assert!(!ca.contains(r#"id="NV01""#));
    let nv = fs::read_to_string(temp.path().join("states/nevada.svg")).unwrap();
    assert!(nv.contains(r#"id="NV01""#));
}

#[test]
fn test_svg_dry_run_leaves_files() {
    let temp = TempDir::new().unwrap();
    create_site(temp.path());
    let before = fs::read_to_string(temp.path().join("states/california.svg")).unwrap();

    let output = run_repmap(temp.path(), &[], &["svg", "stroke", "states", "--dry-run"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("1 of 2 file(s) would change"));

    let after = fs::read_to_string(temp.path().join("states/california.svg")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_svg_stroke_and_strip_credit() {
    let temp = TempDir::new().unwrap();
    create_site(temp.path());
    let file = temp.path().join("states/california.svg");

    let output = run_repmap(temp.path(), &[], &["svg", "stroke", file.to_str().unwrap()]);
    assert!(output.status.success());
    let output = run_repmap(
        temp.path(),
        &[],
        &["svg", "strip-credit", file.to_str().unwrap()],
    );
    assert!(output.status.success());

    let markup = fs::read_to_string(&file).unwrap();
    assert!(markup.contains(r#"stroke="rgb(209, 219, 221)""#));
    assert!(markup.contains(r#"stroke-width="0.3""#));
    assert!(!markup.contains("credit-text-svg"));
    assert!(markup.ends_with("/></svg>"));
}

#[test]
fn test_svg_tag_reports() {
    let temp = TempDir::new().unwrap();
    create_site(temp.path());

    let output = run_repmap(temp.path(), &[], &["svg", "tag", "states"]);
    assert!(output.status.success());
    let markup = fs::read_to_string(temp.path().join("states/nevada.svg")).unwrap();
    assert!(markup.contains(r#"data-state="Nevada""#));
}

#[test]
fn test_svg_without_files_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_repmap(temp.path(), &[], &["svg", "tag", "."]);
    assert!(!output.status.success());
}

// =============================================================================
// config
// =============================================================================

#[test]
fn test_config_env_override() {
    let temp = TempDir::new().unwrap();
    let output = run_repmap(temp.path(), &[("REPMAP_PORT", "8081")], &["config", "get", "port"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "8081");
}

#[test]
fn test_config_set_persists() {
    let temp = TempDir::new().unwrap();
    let output = run_repmap(temp.path(), &[], &["config", "set", "store", "jsonl"]);
    assert!(output.status.success(), "{:?}", output);

    let output = run_repmap(temp.path(), &[], &["config", "get", "store"]);
    assert_eq!(stdout(&output).trim(), "jsonl");

    let output = run_repmap(temp.path(), &[], &["config", "reset"]);
    assert!(output.status.success());
    let output = run_repmap(temp.path(), &[], &["config", "get", "store"]);
    assert_eq!(stdout(&output).trim(), "memory");
}

#[test]
fn test_config_masks_secret() {
    let temp = TempDir::new().unwrap();
    let output = run_repmap(
        temp.path(),
        &[("SUPABASE_ANON_KEY", "super-secret-key")],
        &["config", "show"],
    );
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("***"));
    assert!(!text.contains("super-secret-key"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    let output = run_repmap(temp.path(), &[], &["config", "get", "colour"]);
    assert!(!output.status.success());
}
