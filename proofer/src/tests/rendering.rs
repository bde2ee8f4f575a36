use crate::coordinate::Coordinate;
use crate::formula::{Atom, Formula};
use crate::parser::parse;
use std::collections::HashSet;

fn f(text: &str) -> Formula {
    parse(text).unwrap()
}

fn at<'a>(formula: &'a Formula, coordinate: &str) -> Option<&'a Formula> {
    formula.at(&coordinate.parse::<Coordinate>().unwrap())
}

#[test]
fn test_render_atoms_and_negations() {
    assert_eq!(Formula::atom(Atom::T).render(), "t");
    assert_eq!(f("~p").render(), "~p");
    assert_eq!(f("~~p").render(), "~~p");
}

#[test]
fn test_render_binary_formulas_with_parentheses_and_spaces() {
    assert_eq!(f("p->q").render(), "(p -> q)");
    assert_eq!(f("p<->q").render(), "(p <-> q)");
    assert_eq!(f("p^qVr").render(), "(p ^ (q V r))");
    assert_eq!(f("~p^q").render(), "~(p ^ q)");
    assert_eq!(f("(~p^q)").render(), "(~p ^ q)");
}

#[test]
fn test_display_matches_render() {
    let formula = f("(p -> q) ^ ~r");
    assert_eq!(formula.to_string(), formula.render());
}

#[test]
fn test_round_trip_from_text() {
    let inputs = [
        "p",
        "~p^q",
        "~(p)^q",
        "(~p^q)",
        "p->(q<->~r)",
        "~~(pVq)",
        "((p->q)^(r->s))V~t",
        "(~~p ^ ~(q V r))",
    ];
    for input in inputs {
        let parsed = f(input);
        let rendered = parsed.render();
        assert_eq!(f(&rendered), parsed, "{} rendered as {}", input, rendered);
        assert_eq!(f(&rendered).render(), rendered);
    }
}

#[test]
fn test_equality_follows_rendering() {
    let built = Formula::implies(Formula::atom(Atom::P), Formula::atom(Atom::Q));
    let parsed = f("  ( p ) -> ( q )");
    assert_eq!(built, parsed);

    let mut set = HashSet::new();
    set.insert(built);
    assert!(!set.insert(parsed));
    assert!(set.insert(f("q -> p")));
}

#[test]
fn test_operator_and_operands() {
    let formula = f("p ^ q");
    let (op, left, right) = formula.as_binary().unwrap();
    assert_eq!(op, crate::Operator::And);
    assert_eq!(left.as_ref(), &f("p"));
    assert_eq!(right.as_ref(), &f("q"));

    assert_eq!(f("~p").operator(), Some(crate::Operator::Not));
    assert_eq!(f("p").operator(), None);
    assert!(f("p").is_atom());
}

#[test]
fn test_sub_formula_by_coordinate() {
    let formula = f("p -> ~(q ^ r)");
    assert_eq!(at(&formula, "0"), Some(&formula));
    assert_eq!(at(&formula, "1"), Some(&f("p")));
    assert_eq!(at(&formula, "2.1"), Some(&f("q ^ r")));
    assert_eq!(at(&formula, "2.1.2"), Some(&f("r")));
    assert_eq!(at(&formula, "2.2"), None);
    assert_eq!(at(&formula, "1.1"), None);
}

#[test]
fn test_replace_sub_formula() {
    let formula = f("p -> (q ^ r)");
    let replaced = formula
        .with_replaced(&"2.2".parse().unwrap(), f("s V t"))
        .unwrap();
    assert_eq!(replaced.render(), "(p -> (q ^ (s V t)))");
    assert_eq!(formula.render(), "(p -> (q ^ r))");

    assert!(formula
        .with_replaced(&"1.2".parse().unwrap(), f("s"))
        .is_none());
    assert_eq!(
        formula.with_replaced(&Coordinate::top(), f("s")).unwrap(),
        f("s")
    );
}

#[test]
fn test_serialize_as_canonical_text() {
    let json = serde_json::to_string(&f("~p -> q")).unwrap();
    assert_eq!(json, r#""~(p -> q)""#);
}

#[test]
fn test_depth_counts_connectives_to_deepest_atom() {
    assert_eq!(f("p").depth(), 0);
    assert_eq!(f("~~p").depth(), 2);
    assert_eq!(f("(p ^ q) -> r").depth(), 2);
    assert_eq!(f("p ^ (q V ~r)").depth(), 3);
    assert_eq!(f("((p))").depth(), 0);
}
