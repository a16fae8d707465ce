//! Drives the compiled binary end to end through its command-line surface.
//!
//! The live-run test spawns the real tool, which spins forever by design,
//! so it reads the expected output and then kills the process.

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};

fn cpuburn() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cpuburn"))
}

#[test]
fn help_prints_usage_without_launching() {
    let output = cpuburn().arg("-h").output().expect("failed to run binary");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("usage:"));

    // No status lines: nothing was parsed and nothing was launched.
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_cpu_list_is_rejected() {
    let output = cpuburn()
        .args(["-w", "2"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing cpu list"));
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_worker_count_is_rejected_after_the_cpu_list_is_accepted() {
    let output = cpuburn()
        .args(["-c", "0"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("using 1 cpus for affinity"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing worker thread count"));
}

#[test]
fn malformed_cpu_list_is_rejected() {
    let output = cpuburn()
        .args(["-c", "1,a,3", "-w", "1"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error parsing cpus"));
}

#[test]
fn cpu_list_of_only_delimiters_is_rejected() {
    let output = cpuburn()
        .args(["-c", ",,,", "-w", "1"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("error parsing cpus"));
}

#[test]
fn zero_workers_is_rejected() {
    let output = cpuburn()
        .args(["-c", "0", "-w", "0"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid worker thread count"));
}

#[test]
fn worker_count_above_maximum_is_rejected() {
    let output = cpuburn()
        .args(["-c", "0", "-w", "129"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("at most 128"));
}

#[test]
fn live_run_reports_counts_and_worker_affinity() {
    let mut child = cpuburn()
        .args(["-c", "0", "-w", "2"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start binary");

    let stdout = child
        .stdout
        .take()
        .expect("stdout was requested as a pipe");
    let mut lines = BufReader::new(stdout).lines();

    let mut next_line = || {
        lines
            .next()
            .expect("binary ended before producing the expected output")
            .expect("binary produced non-UTF-8 output")
    };

    assert_eq!(next_line(), "using 1 cpus for affinity");
    assert_eq!(next_line(), "using 1 cores, 2 worker threads");

    // Every worker prints at least one report line, one per allowed CPU.
    // Order across workers is unspecified.
    for _ in 0..2 {
        let line = next_line();
        assert!(
            line.starts_with("Thread ") && line.contains("bound to CPU"),
            "unexpected worker output: {line}"
        );
    }

    // The workers spin until killed from the outside - do so.
    child.kill().expect("failed to kill binary");
    child.wait().expect("failed to reap binary");
}
