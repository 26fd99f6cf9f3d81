use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn walog() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_walog"));
    command
        .env_remove("WALOG_MODULE")
        .env_remove("WALOG_LEVEL")
        .env_remove("WALOG_CONFIG");
    command
}

fn run(args: &[&str]) -> Output {
    walog().args(args).output().expect("failed to run walog")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Whether some line is `<date> <time> <suffix>`.
fn has_line(text: &str, suffix: &str) -> bool {
    text.lines().any(|line| {
        line.ends_with(suffix)
            && line.len() > suffix.len()
            && line.as_bytes()[0].is_ascii_digit()
    })
}

#[test]
fn emit_joins_words() {
    let output = run(&["--log-module", "app", "emit", "info", "hello", "1", "true"]);

    assert!(output.status.success());
    assert!(has_line(&stdout(&output), " [app INFO]hello 1 true"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn effective_config_is_logged_at_debug() {
    let output = run(&["--log-module", "app", "emit", "info", "x"]);

    assert!(stdout(&output).contains(
        r#"[app DEBUG]effective log config {"module":"app","level":null,"color":false,"quiet":false}"#
    ));
}

#[test]
fn threshold_drops_lower_levels() {
    let output = run(&["--log-level", "WARN", "emit", "info", "dropped"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let output = run(&["--log-level", "warn", "emit", "warn", "kept"]);
    assert_eq!(stdout(&output).lines().count(), 1);
    assert!(has_line(&stdout(&output), " [main WARN]kept"));
}

#[test]
fn errors_are_copied_to_stderr_with_location() {
    let output = run(&["--log-module", "app", "--log-level", "error", "emit", "error", "oops"]);

    assert!(has_line(&stdout(&output), " [app ERROR]oops"));

    let stderr = stderr(&output);
    let line = stderr.lines().next().expect("no line on stderr");
    assert!(line.ends_with(": [app ERROR]oops"));
    let location = line.split(' ').nth(2).expect("no location");
    assert!(location.contains(".rs:"));
    assert!(!location.contains('/'), "{} is not a bare file name", location);
}

#[test]
fn template_errors_stay_on_stdout() {
    let output = run(&["--log-module", "app", "emitf", "error", "100% {broken}"]);

    assert!(has_line(&stdout(&output), " [app ERROR]100% {broken}"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn colors() {
    let output = run(&["--log-color", "--log-level", "info", "emit", "warn", "careful"]);

    assert!(has_line(&stdout(&output), " \x1b[33m[main WARN]careful\x1b[0m"));
}

#[test]
fn json_payloads() {
    let output = run(&["--log-level", "debug", "json", "payload", r#"{"a":[1,2]}"#]);
    assert!(has_line(&stdout(&output), r#" [main DEBUG]payload {"a":[1,2]}"#));

    let output = run(&["--log-level", "debug", "json", "two", "1", "2"]);
    assert!(has_line(&stdout(&output), " [main DEBUG]two "));

    let output = run(&["json", "bad", "{"]);
    assert!(!output.status.success());
}

#[test]
fn pipe_tags_lines_with_the_module() {
    let mut child = walog()
        .args(&["--log-module", "app", "--log-level", "error", "pipe"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run walog");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"first line\nsecond\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    let stdout = stdout(&output);

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 2);
    assert!(has_line(&stdout, " [app] first line"));
    assert!(has_line(&stdout, " [app] second"));
}

#[test]
fn fatal_exits_with_one() {
    let output = run(&["--log-module", "app", "fatal", "boom"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(has_line(&stdout(&output), " [app ERROR]boom"));
}

#[test]
fn fatal_exits_even_when_filtered() {
    let output = run(&["--log-level", "error", "--log-module", "app", "fatal", "boom"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["--quiet", "fatal", "boom"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).is_empty());
}

#[test]
fn quiet_drops_everything() {
    let output = run(&["-q", "emit", "error", "nobody", "hears"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).is_empty());
}

#[test]
fn config_file() {
    let path = std::env::temp_dir().join(format!("walog-cli-test-{}.toml", std::process::id()));
    fs::write(&path, "[log]\nmodule = \"fromfile\"\nlevel = \"info\"\n").unwrap();

    let output = run(&[
        "--config",
        path.to_str().unwrap(),
        "--log-module",
        "ignored",
        "emit",
        "info",
        "x",
    ]);
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert!(has_line(&stdout(&output), " [fromfile INFO]x"));
    assert!(!stdout(&output).contains("ignored"));
}
