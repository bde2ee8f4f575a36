use assert_cmd::Command;
use predicates::prelude::*;

fn proofer() -> Command {
    Command::cargo_bin("proofer").unwrap()
}

#[test]
fn test_parse_prints_canonical_form() {
    proofer()
        .args(["parse", "~p^q"])
        .assert()
        .success()
        .stdout("~(p ^ q)\n");

    proofer()
        .args(["parse", "(~p^q)"])
        .assert()
        .success()
        .stdout("(~p ^ q)\n");
}

#[test]
fn test_parse_error_goes_to_stderr() {
    proofer()
        .args(["parse", "p ->"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("expected operator"));
}

#[test]
fn test_parse_respects_max_depth() {
    proofer()
        .args(["parse", "((p))", "--max-depth", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nests deeper than 1 levels"));
}

#[test]
fn test_rules_lists_catalog() {
    proofer()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modus Ponens"))
        .stdout(predicate::str::contains("MP(n,m)"))
        .stdout(predicate::str::contains("Simp(n)"))
        .stdout(predicate::str::contains("DN(n[,coordinate])"))
        .stdout(predicate::str::contains("Tautology"))
        .stdout(predicate::str::contains("not implemented"));
}
