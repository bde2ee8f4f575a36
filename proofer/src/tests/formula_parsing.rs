use crate::error::ParseErrorKind;
use crate::formula::{Atom, Formula};
use crate::parser::{parse, parse_with_limits};
use crate::ResourceLimits;

fn p() -> Formula {
    Formula::atom(Atom::P)
}

fn q() -> Formula {
    Formula::atom(Atom::Q)
}

fn r() -> Formula {
    Formula::atom(Atom::R)
}

fn kind_of(input: &str) -> ParseErrorKind {
    parse(input).unwrap_err().kind
}

#[test]
fn test_parse_single_atom() {
    for atom in Atom::ALL {
        assert_eq!(parse(&atom.to_string()).unwrap(), Formula::atom(atom));
    }
}

#[test]
fn test_parse_each_binary_operator() {
    assert_eq!(parse("p->q").unwrap(), Formula::implies(p(), q()));
    assert_eq!(parse("p<->q").unwrap(), Formula::iff(p(), q()));
    assert_eq!(parse("pVq").unwrap(), Formula::or(p(), q()));
    assert_eq!(parse("p^q").unwrap(), Formula::and(p(), q()));
}

#[test]
fn test_whitespace_is_ignored() {
    assert_eq!(parse("  p   <->\tq ").unwrap(), Formula::iff(p(), q()));
    assert_eq!(parse("( p ^ q )").unwrap(), Formula::and(p(), q()));
}

#[test]
fn test_binary_chains_group_to_the_right() {
    assert_eq!(
        parse("p^qVr").unwrap(),
        Formula::and(p(), Formula::or(q(), r()))
    );
    assert_eq!(
        parse("p->q->r").unwrap(),
        Formula::implies(p(), Formula::implies(q(), r()))
    );
}

#[test]
fn test_parentheses_override_grouping() {
    assert_eq!(
        parse("(p^q)Vr").unwrap(),
        Formula::or(Formula::and(p(), q()), r())
    );
    assert_eq!(parse("((p))").unwrap(), p());
}

#[test]
fn test_bare_negation_covers_the_rest_of_the_formula() {
    assert_eq!(parse("~p^q").unwrap(), Formula::not(Formula::and(p(), q())));
    assert_eq!(
        parse("~pVq->r").unwrap(),
        Formula::not(Formula::or(p(), Formula::implies(q(), r())))
    );
}

#[test]
fn test_negation_before_parenthesis_binds_tightly() {
    assert_eq!(parse("~(p)^q").unwrap(), Formula::and(Formula::not(p()), q()));
    assert_eq!(
        parse("~(p^q)").unwrap(),
        Formula::not(Formula::and(p(), q()))
    );
}

#[test]
fn test_negation_inside_parentheses_binds_tightly() {
    assert_eq!(parse("(~p^q)").unwrap(), Formula::and(Formula::not(p()), q()));
    assert_eq!(
        parse("(p ^ ~q V r)").unwrap(),
        Formula::and(p(), Formula::or(Formula::not(q()), r()))
    );
}

#[test]
fn test_stacked_negations() {
    assert_eq!(parse("~~p").unwrap(), Formula::not(Formula::not(p())));
    assert_eq!(
        parse("~~(p->q)").unwrap(),
        Formula::not(Formula::not(Formula::implies(p(), q())))
    );
}

#[test]
fn test_empty_input_is_missing_formula() {
    assert_eq!(kind_of(""), ParseErrorKind::MissingFormula);
    assert_eq!(kind_of("   "), ParseErrorKind::MissingFormula);
    assert_eq!(kind_of("~"), ParseErrorKind::MissingFormula);
}

#[test]
fn test_unrecognized_token() {
    let err = parse("x").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnrecognizedToken('x'));
    assert_eq!(err.span.col, 1);

    assert_eq!(kind_of("P"), ParseErrorKind::UnrecognizedToken('P'));
    assert_eq!(kind_of("∧p"), ParseErrorKind::UnrecognizedToken('∧'));
}

#[test]
fn test_missing_operator_between_operands() {
    let err = parse("p q").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedOperator);
    assert_eq!(err.span.col, 3);

    assert_eq!(kind_of("pvq"), ParseErrorKind::ExpectedOperator);
    assert_eq!(kind_of("p ∧ q"), ParseErrorKind::ExpectedOperator);
}

#[test]
fn test_operator_needs_a_right_operand() {
    let err = parse("p ->").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ExpectedOperator);
    assert_eq!(err.span.col, 3);

    assert_eq!(kind_of("pV"), ParseErrorKind::ExpectedOperator);
}

#[test]
fn test_unmatched_parenthesis() {
    let err = parse("q ^ (p ^ q").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnmatchedParenthesis);
    assert_eq!(err.span.col, 5);

    assert_eq!(kind_of("p)"), ParseErrorKind::ExpectedOperator);
}

#[test]
fn test_empty_parentheses() {
    let err = parse("p ^ ()").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyParentheses);
    assert_eq!((err.span.start, err.span.end), (4, 6));
    assert_eq!(err.span.col, 5);
}

#[test]
fn test_too_long_input() {
    let limits = ResourceLimits {
        max_formula_bytes: 8,
        ..ResourceLimits::default()
    };
    assert!(parse_with_limits("p ^ q", &limits).is_ok());

    let err = parse_with_limits("p ^ q ^ r", &limits).unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::TooLong {
            limit: 8,
            actual: 9
        }
    );
}

#[test]
fn test_too_deep_input() {
    let limits = ResourceLimits {
        max_nesting_depth: 3,
        ..ResourceLimits::default()
    };
    assert!(parse_with_limits("((p))", &limits).is_ok());

    let err = parse_with_limits("((((p))))", &limits).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::TooDeep { limit: 3 });
}
