use assert_cmd::Command;
use predicates::prelude::*;

fn proofer() -> Command {
    Command::cargo_bin("proofer").unwrap()
}

#[test]
fn test_help_mentions_subcommands() {
    proofer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn test_repl_proves_modus_ponens() {
    proofer()
        .write_stdin("p -> q\np\ntherefore\nq\nMP(1,2)\ndone\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Proofer - The Logic Engine!"))
        .stdout(predicate::str::contains("1. (p -> q)"))
        .stdout(predicate::str::contains("Entering rule mode"))
        .stdout(predicate::str::contains("3. q    MP"))
        .stdout(predicate::str::contains("You've shown the conclusion to be true!"))
        .stdout(predicate::str::ends_with("Good bye!\n"));
}

#[test]
fn test_repl_ends_at_end_of_input() {
    proofer()
        .arg("repl")
        .write_stdin("p\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. p"))
        .stdout(predicate::str::ends_with("Good bye!\n"));
}

#[test]
fn test_repl_reports_parse_errors_and_continues() {
    proofer()
        .write_stdin("p ^ x\nq\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unrecognized token 'x'"))
        .stdout(predicate::str::contains("1. q"));
}

#[test]
fn test_repl_asks_for_the_formula_to_add() {
    proofer()
        .write_stdin("p\ntherefore\np V q\nAdd(1)\nq\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("enter the statement to add:"))
        .stdout(predicate::str::contains("2. (p V q)    Add"))
        .stdout(predicate::str::contains("You've shown the conclusion to be true!"));
}

#[test]
fn test_repl_facts_table() {
    proofer()
        .write_stdin("p -> q\ntherefore\nq\nfacts\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(p -> q)"))
        .stdout(predicate::str::contains("Conclusion: q"));
}

#[test]
fn test_repl_reset() {
    proofer()
        .write_stdin("p\ntherefore\nq\nreset\nr\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clearing facts, entering premise mode."))
        .stdout(predicate::str::contains("1. r"));
}

#[test]
fn test_repl_unknown_rule() {
    proofer()
        .write_stdin("p\ntherefore\np\nFoo(1)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error - Unknown rule 'Foo'"));
}
