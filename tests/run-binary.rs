use assert_cmd::prelude::*;
use std::process::{Command, Output};

fn run(args: &[&str]) -> (Output, String) {
    let output = Command::main_binary().unwrap().args(args).output().unwrap();
    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    (output, stdout)
}

#[test]
fn run_lrta_star() {
    let (output, stdout) = run(&["levels/simple/02-corridor.txt"]);
    assert!(output.status.success());

    // duration is not deterministic
    assert!(stdout.starts_with(
        r"Solving levels/simple/02-corridor.txt...
Algorithm: lrta_star
States explored: 3
Duration: "
    ));
    assert!(stdout.contains(
        r"Pulls: 0
Solution found: true
Moves: rRR
Learned estimates: 3
"
    ));
}

#[test]
fn run_beam_search_print_states() {
    let (output, stdout) = run(&[
        "--algorithm",
        "beam_search",
        "--print-states",
        "levels/simple/01-push-once.txt",
    ]);
    assert!(output.status.success());
    assert!(stdout.contains("Algorithm: beam_search\nStates explored: 0\n"));
    assert!(stdout.contains("Solution found: true\n"));
    // beam search doesn't record moves
    assert!(!stdout.contains("Moves:"));
    // only the solved state is kept
    assert!(stdout.contains(
        r"#####
#   #
# @*#
#   #
#####
"
    ));
    assert!(!stdout.contains("#@$.#"));
}

#[test]
fn run_multiple_levels() {
    let (output, stdout) = run(&[
        "-H",
        "h1",
        "levels/simple/00-no-boxes.txt",
        "levels/simple/04-stuck.txt",
        "levels/simple/01-push-once.txt",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout.matches("Solving ").count(), 3);
    assert_eq!(stdout.matches("Solution found: true").count(), 2);
    assert_eq!(stdout.matches("Solution found: false").count(), 1);
}

#[test]
fn run_beam_search_no_solution() {
    let (output, stdout) = run(&["-a", "beam_search", "levels/simple/04-stuck.txt"]);
    assert!(output.status.success());
    assert!(stdout.contains("No solution: Empty frontier"));
}

#[test]
fn run_max_steps() {
    let (output, stdout) = run(&["-m", "2", "levels/simple/02-corridor.txt"]);
    assert!(output.status.success());
    assert!(stdout.contains("States explored: 2\n"));
    assert!(stdout.contains("Solution found: false\n"));
}

#[test]
fn run_compare() {
    let (output, stdout) = run(&[
        "--compare",
        "levels/simple/01-push-once.txt",
        "levels/simple/02-corridor.txt",
    ]);
    assert!(output.status.success());
    assert!(stdout.contains("h1 steps"));
    assert!(stdout.contains("h3 pulls"));
    assert!(stdout.contains("levels/simple/01-push-once.txt"));
    assert!(stdout.contains("levels/simple/02-corridor.txt"));
    assert!(!stdout.contains("Algorithm:"));
}

#[test]
fn run_bad_algorithm() {
    Command::main_binary()
        .unwrap()
        .arg("--algorithm")
        .arg("dijkstra")
        .arg("levels/simple/01-push-once.txt")
        .assert()
        .failure();

    let (_, stdout) = run(&["-a", "dijkstra", "levels/simple/01-push-once.txt"]);
    assert!(!stdout.contains("Algorithm:"));
}

#[test]
fn run_bad_beam_width() {
    let (output, _) = run(&["-a", "beam_search", "-k", "0", "levels/simple/01-push-once.txt"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Beam width must be at least 1"));
}

#[test]
fn run_missing_file() {
    Command::main_binary()
        .unwrap()
        .arg("levels/simple/does-not-exist.txt")
        .assert()
        .failure();
}
