use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn script(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("argument.proof");
    fs::write(&path, text).unwrap();
    path
}

fn proofer() -> Command {
    Command::cargo_bin("proofer").unwrap()
}

const VALID: &str = r#"
# hypothetical syllogism, then modus ponens
p -> q
q -> r
p
therefore
r
HS(1,2)
MP(4,3)
"#;

#[test]
fn test_check_valid_script() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, VALID);

    proofer()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("> HS(1,2)"))
        .stdout(predicate::str::contains("4. (p -> r)    HS"))
        .stdout(predicate::str::contains("5. r    MP"))
        .stdout(predicate::str::contains("You've shown the conclusion to be true!"))
        .stdout(predicate::str::contains("hypothetical").not());
}

#[test]
fn test_check_unproven_script_fails() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, "p -> q\nq\ntherefore\np\nMP(*,*)\n");

    proofer()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("MP derived nothing"))
        .stdout(predicate::str::contains("Are you sure the argument is valid?"))
        .stderr(predicate::str::contains("does not show its conclusion"));
}

#[test]
fn test_check_keeps_going_after_errors() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, "p -> q\np\ntherefore\nq\nMP(1,7)\nMP(1,2)\n");

    proofer()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error - No fact numbered 7"))
        .stdout(predicate::str::contains("3. q    MP"));
}

#[test]
fn test_check_strict_stops_at_first_error() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, "p -> q\np\ntherefore\nq\nMP(1,7)\nMP(1,2)\n");

    proofer()
        .args(["check", "--strict"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("3. q").not())
        .stderr(predicate::str::contains(":5: 'MP(1,7)' failed"));
}

#[test]
fn test_check_json_report() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, VALID);

    let output = proofer()
        .args(["check", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["proven"], true);
    assert_eq!(report["conclusion"], "r");
    assert_eq!(report["facts"].as_array().unwrap().len(), 5);
    assert_eq!(report["facts"][3]["formula"], "(p -> r)");

    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 7);
    assert_eq!(steps[0]["line"], 3);
    assert_eq!(steps[0]["reply"]["reply"], "premise_added");
    assert_eq!(steps[5]["reply"]["rule"], "HS");
}

#[test]
fn test_check_json_records_errors() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, "p\ntherefore\np V q\nMP(1)\n");

    let output = proofer()
        .args(["check", "--json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["proven"], false);
    assert_eq!(
        report["steps"][3]["error"],
        "Error executing MP - a second argument is required"
    );
}

#[test]
fn test_check_missing_file() {
    proofer()
        .args(["check", "does-not-exist.proof"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}
