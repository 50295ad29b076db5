use std::path::Path;
use std::process::{Command, Output};

fn command_in(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_factagg"));
    command
        .args(args)
        .current_dir(dir)
        .env_remove("FACTAGG_CONFIG")
        .env_remove("RUST_LOG");
    command
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    command_in(dir, args)
        .output()
        .expect("Failed to execute factagg")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_default_invocation() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert!(output.status.success(), "factagg exited with {:?}", output.status);
    assert_eq!(stdout_of(&output), "Aggregated factorial: 153\n");
}

#[test]
fn test_verbose_logs_stay_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--verbose"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Aggregated factorial: 153\n");
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_show_terms() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--start", "3", "--end", "4", "--show-terms"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "3! = 6\n4! = 24\nAggregated factorial: 30\n");
}

#[test]
fn test_checked_overflow_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--end", "21", "--arithmetic", "checked"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("21! overflows a 64-bit integer"));
}

#[test]
fn test_arbitrary_does_not_overflow() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--start", "25", "--end", "25"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Aggregated factorial: 15511210043330985984000000\n"
    );
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".factagg.toml"),
        "[range]\nend = 3\n\n[output]\nlabel = \"Sum\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Sum: 9\n");

    let output = run_in(dir.path(), &["--end", "5"]);
    assert_eq!(stdout_of(&output), "Sum: 153\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--config", "missing.toml"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Failed to read config file"));
}

#[test]
fn test_json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--format", "json", "--output", "report.json"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let content = std::fs::read_to_string(dir.path().join("report.json")).unwrap();
    assert!(content.contains("\"total\": \"153\""));
}

#[test]
fn test_init_config() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_in(dir.path(), &["--init-config"]);
    assert!(output.status.success());
    assert!(dir.path().join(".factagg.toml").exists());

    // Generated defaults reproduce the default run
    let output = run_in(dir.path(), &[]);
    assert_eq!(stdout_of(&output), "Aggregated factorial: 153\n");

    // Refuses to overwrite
    let output = run_in(dir.path(), &["--init-config"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_conflicting_verbosity() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &["--verbose", "--quiet"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_broken_default_config_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".factagg.toml"), "[range\n").unwrap();

    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Aggregated factorial: 153\n");
    assert!(stderr_of(&output).contains("Failed to load config"));
}

#[test]
fn test_config_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("custom.toml");
    std::fs::write(&config_path, "[output]\nlabel = \"From env\"\n").unwrap();

    let output = command_in(dir.path(), &[])
        .env("FACTAGG_CONFIG", &config_path)
        .output()
        .expect("Failed to execute factagg");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "From env: 153\n");
}

#[test]
fn test_rust_log_enables_logging() {
    let dir = tempfile::tempdir().unwrap();

    let quiet = run_in(dir.path(), &[]);
    assert!(quiet.stderr.is_empty());

    let output = command_in(dir.path(), &[])
        .env("RUST_LOG", "debug")
        .output()
        .expect("Failed to execute factagg");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Aggregated factorial: 153\n");
    assert!(stderr_of(&output).contains("factagg v"));
}

#[test]
fn test_hide_terms_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".factagg.toml"),
        "[range]\nend = 2\n\n[output]\nshow_terms = true\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &[]);
    assert_eq!(stdout_of(&output), "1! = 1\n2! = 2\nAggregated factorial: 3\n");

    let output = run_in(dir.path(), &["--hide-terms"]);
    assert_eq!(stdout_of(&output), "Aggregated factorial: 3\n");
}

#[test]
fn test_checked_arithmetic_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".factagg.toml"),
        "[range]\nend = 22\n\n[compute]\narithmetic = \"checked\"\n",
    )
    .unwrap();

    let output = run_in(dir.path(), &[]);
    assert_eq!(output.status.code(), Some(1));

    let output = run_in(dir.path(), &["--arithmetic", "arbitrary"]);
    assert!(output.status.success());
}
