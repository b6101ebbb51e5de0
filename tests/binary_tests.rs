// End-to-end tests running the built binary

use std::process::{Command, Output};

fn run(args: &[&str], env: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_argdump"))
        .args(args)
        .env_clear()
        .envs(env.iter().copied())
        .output()
        .expect("Failed to run argdump")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_exit_code_is_zero() {
    let output = run(&[], &[]);
    assert!(output.status.success(), "Exit status: {:?}", output.status);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_header_layout() {
    let output = run(&["x"], &[("FOO", "1")]);
    let lines = stdout_lines(&output);

    assert!(lines[0].starts_with("test.c:17: -> _start at 0x"));
    assert!(lines[1].starts_with("test.c:18: -> main   at 0x"));
    assert_eq!(lines[2], "test.c:19: -> Starting Test");
    assert_eq!(lines[3], "ABCDEFGHIJ");

    // 0x + 16 hex digits
    for line in &lines[..2] {
        let hex = line.rsplit("0x").next().unwrap();
        assert_eq!(hex.len(), 16);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn test_main_address_is_nonzero() {
    let output = run(&[], &[]);
    let lines = stdout_lines(&output);
    let hex = lines[1].rsplit("0x").next().unwrap();

    assert_ne!(u64::from_str_radix(hex, 16).unwrap(), 0);
}

#[test]
fn test_args_and_env_echoed() {
    let output = run(&["x", "hello world"], &[("FOO", "1")]);
    let lines = stdout_lines(&output);
    let n = lines.len();

    // argv[0] is the binary path, printed like any other argument
    assert!(lines[4].ends_with("argdump"));
    assert_eq!(lines[5], "x");
    assert_eq!(lines[6], "hello world");
    assert_eq!(lines[7], "FOO=1");
    assert_eq!(n, 10);
    assert_eq!(lines[n - 2], "test.c:29: -> Jumped");
    assert_eq!(lines[n - 1], "test.c:30: -> Exiting");
}

#[test]
fn test_flags_are_not_interpreted() {
    let output = run(&["--help", "-v"], &[]);
    let lines = stdout_lines(&output);

    assert!(output.status.success());
    assert_eq!(lines[5], "--help");
    assert_eq!(lines[6], "-v");
}

#[test]
fn test_stdout_clean_with_logging_enabled() {
    let output = run(&[], &[("ARGDUMP_LOG", "debug")]);
    let lines = stdout_lines(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    // The log level variable is echoed like any other entry
    assert_eq!(lines[5], "ARGDUMP_LOG=debug");
    assert_eq!(lines.len(), 8);
    assert!(stderr.contains("dump starting"));
    assert!(stderr.contains("dump finished"));
}

#[test]
fn test_bad_log_level_warns() {
    let output = run(&[], &[("ARGDUMP_LOG", "loud")]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(stderr.contains("WARN"));
    assert!(stderr.contains("ARGDUMP_LOG"));
}

#[test]
fn test_quiet_by_default() {
    let output = run(&["x"], &[]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[cfg(target_os = "linux")]
#[test]
fn test_full_stdout_still_exits_zero() {
    use std::fs::OpenOptions;
    use std::process::Stdio;

    let full = OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .expect("Failed to open /dev/full");
    let output = Command::new(env!("CARGO_BIN_EXE_argdump"))
        .arg("x")
        .env_clear()
        .stdout(Stdio::from(full))
        .output()
        .expect("Failed to run argdump");

    assert_eq!(output.status.code(), Some(0));
    assert!(
        output.stderr.is_empty(),
        "Unexpected stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[cfg(unix)]
#[test]
fn test_env_printed_in_host_order() {
    // Command sorts its environment, so let env(1) build envp in argument order
    let output = Command::new("env")
        .arg("-i")
        .args(["Z=1", "A=2", "M=3"])
        .arg(env!("CARGO_BIN_EXE_argdump"))
        .output()
        .expect("Failed to run env");
    let lines = stdout_lines(&output);

    assert!(output.status.success());
    assert_eq!(lines.len(), 10);
    assert_eq!(&lines[5..8], ["Z=1", "A=2", "M=3"]);
}
