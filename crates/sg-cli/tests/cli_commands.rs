//! Integration tests for the `sg` command-line interface.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn sg() -> Command {
    let mut cmd = Command::cargo_bin("sg").unwrap();
    cmd.env_remove("SG_SOLVER_URL")
        .env_remove("SG_SOLVER_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// cases
// ---------------------------------------------------------------------------

#[test]
fn cases_default_labels() {
    sg().arg("cases")
        .assert()
        .success()
        .stdout(predicate::str::contains("unstable, Action 1, Action 1"))
        .stdout(predicate::str::contains("case8"));
}

#[test]
fn cases_custom_names() {
    sg().args([
        "cases",
        "--nature",
        "Good, Bad",
        "--p1",
        "Cooperate,Defect",
        "--p2",
        "Trust,Distrust",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Bad, Defect, Trust"))
    .stdout(predicate::str::contains("Good, Defect, Distrust"));
}

#[test]
fn cases_blank_strategies_fall_back() {
    sg().args(["cases", "--p1", ", Defect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unstable, Action 1, Action 1"))
        .stdout(predicate::str::contains("unstable, Defect, Action 1"));
}

// ---------------------------------------------------------------------------
// payload
// ---------------------------------------------------------------------------

#[test]
fn payload_for_preset_is_json() {
    let output = sg().args(["payload", "--preset", "regulator"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["p1_name"], "regulator");
    assert_eq!(value["p2_name"], "firm");
    assert_eq!(value["nature_strategies"][1], "unstable");
    assert_eq!(value["p1_strategies"][1], "not intervene");
    assert_eq!(value["payoff_data"]["p2"]["reputation"]["case4"], -1.0);
    assert_eq!(value["p1_payoff_function"], "");
}

#[test]
fn payload_for_empty_game_fails() {
    sg().arg("payload")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "please add at least one payoff variable",
        ));
}

#[test]
fn payload_unknown_preset() {
    sg().args(["payload", "--preset", "chess"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset: chess"));
}

// ---------------------------------------------------------------------------
// presets
// ---------------------------------------------------------------------------

#[test]
fn presets_lists_regulator() {
    sg().arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("regulator"))
        .stdout(predicate::str::contains("firm"));
}

// ---------------------------------------------------------------------------
// solve
// ---------------------------------------------------------------------------

#[test]
fn solve_without_solver_shows_generic_failure() {
    sg().args([
        "solve",
        "--preset",
        "regulator",
        "--url",
        "http://127.0.0.1:9",
        "--timeout",
        "2",
    ])
    .assert()
    .failure()
    .stdout(predicate::str::contains(
        "An error occurred while calculating equilibrium.",
    ))
    .stderr(predicate::str::contains("error:"));
}

#[test]
fn solve_rejects_bad_url() {
    sg().args(["solve", "--preset", "regulator", "--url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid solver url"));
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_edits_and_prints_payload() {
    sg().arg("session")
        .write_stdin(
            "name p1 regulator\n\
             nature Good, Bad\n\
             add p1 Carbon Tax\n\
             set p1 1 case5 -12\n\
             add p2 wealth\n\
             payload\n\
             quit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting"))
        .stdout(predicate::str::contains("\"Carbon Tax\""))
        .stdout(predicate::str::contains("-12.0"))
        .stdout(predicate::str::contains("\"Good\""));
}

#[test]
fn session_reports_errors_and_continues() {
    sg().arg("session")
        .write_stdin("dance\nadd p1\nsolve\nlabels\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command: dance"))
        .stdout(predicate::str::contains("variable name"))
        .stdout(predicate::str::contains("please add at least one payoff variable"))
        .stdout(predicate::str::contains("stable, Action 2, Action 2"));
}

#[test]
fn session_solve_without_solver() {
    sg().args(["session", "--preset", "regulator", "--url", "http://127.0.0.1:9"])
        .write_stdin("solve\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("regulator vs firm"))
        .stdout(predicate::str::contains("request #1 (1 in flight)"))
        .stdout(predicate::str::contains("for request #1:"))
        .stdout(predicate::str::contains(
            "An error occurred while calculating equilibrium.",
        ));
}

#[test]
fn session_keeps_reading_while_requests_are_pending() {
    sg().args(["session", "--preset", "regulator", "--url", "http://127.0.0.1:9"])
        .write_stdin("solve\nname p1 agency\nsolve\nstatus\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("p1 is now \"agency\""))
        .stdout(predicate::str::contains("for request #1:"))
        .stdout(predicate::str::contains("for request #2:"))
        .stdout(predicate::str::contains("agency (p1): 3 variables"));
}

#[test]
fn session_unknown_preset_fails() {
    sg().args(["session", "--preset", "chess"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown preset"));
}
