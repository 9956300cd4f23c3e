use assert_cmd::prelude::*;
use std::process::Command;

fn sokoban() -> Command {
    Command::cargo_bin("sokoban-bfs").unwrap()
}

#[test]
fn run_grid() {
    let output = r"#####
#PXO#
#####

#####
# P@#
#####

Solution length: 2
Pushes: 1
";

    sokoban()
        .arg("levels/grid/01-one-push.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_with_moves() {
    let output = r"#####
#PXO#
#####

#####
# P@#
#####

Solution length: 2
Pushes: 1
R
Moves: 1
";

    sokoban()
        .arg("--moves")
        .arg("levels/grid/01-one-push.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_walking() {
    let output = r"#######
#P X O#
#######

#######
#  PXO#
#######

#######
#   P@#
#######

Solution length: 3
Pushes: 2
rRR
Moves: 3
";

    sokoban()
        .arg("-m")
        .arg("levels/grid/02-line.txt")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn run_no_solution() {
    sokoban()
        .arg("levels/grid/no-solution-corner.txt")
        .assert()
        .success()
        .stdout("No solution\n")
        .stderr("");
}

#[test]
fn run_budget() {
    sokoban()
        .args(&["--max-states", "1", "levels/grid/04-two-blocks.txt"])
        .assert()
        .success()
        .stdout("No solution found within budget\n")
        .stderr("");
}

#[test]
fn run_dedup_by_set_with_stats() {
    let output = sokoban()
        .args(&["--dedup-by-set", "--stats", "levels/grid/04-two-blocks.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Solution length: 5\nPushes: 4\n"));
    assert!(stdout.contains("States created total: "));
    assert!(stdout.contains("Block configurations total: "));
    assert!(stdout.contains("Depth"));
}

#[test]
fn run_missing_file() {
    let output = sokoban().arg("levels/nope.txt").output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Can't load level levels/nope.txt: "));
}

#[test]
fn run_invalid_level() {
    let output = sokoban()
        .arg("levels/grid/invalid-two-players.txt")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("More than one player"), "{}", stderr);
}

#[test]
fn run_invalid_number() {
    let output = sokoban()
        .args(&["--max-states", "lots", "levels/grid/01-one-push.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Invalid --max-states lots"));
}

#[test]
fn run_budget_reaching_goal() {
    // only the start gets expanded, the goal is found without expanding it
    let output = sokoban()
        .args(&["--max-states", "1", "levels/grid/01-one-push.txt"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.ends_with("Solution length: 2\nPushes: 1\n"), "{}", stdout);
}
