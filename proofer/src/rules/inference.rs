//! Rules of inference, one pair of operands at a time
//!
//! Each matcher returns `None` when the operands do not have the shape the
//! rule requires. Results share sub-formulas with the operands.

use crate::formula::Formula;
use std::sync::Arc;

/// `p -> q`, `p` gives `q`
pub fn modus_ponens(implication: &Formula, antecedent: &Formula) -> Option<Formula> {
    match implication {
        Formula::Implies(a, c) if a.as_ref() == antecedent => Some(c.as_ref().clone()),
        _ => None,
    }
}

/// `p -> q`, `~q` gives `~p`
pub fn modus_tollens(implication: &Formula, negated_consequent: &Formula) -> Option<Formula> {
    match (implication, negated_consequent) {
        (Formula::Implies(a, c), Formula::Not(n)) if n == c => Some(Formula::Not(Arc::clone(a))),
        _ => None,
    }
}

/// `p V q`, `~p` gives `q`
pub fn disjunctive_syllogism(disjunction: &Formula, negated_left: &Formula) -> Option<Formula> {
    match (disjunction, negated_left) {
        (Formula::Or(l, r), Formula::Not(n)) if n == l => Some(r.as_ref().clone()),
        _ => None,
    }
}

/// `p -> q`, `q -> r` gives `p -> r`
pub fn hypothetical_syllogism(first: &Formula, second: &Formula) -> Option<Formula> {
    match (first, second) {
        (Formula::Implies(a, b), Formula::Implies(c, d)) if b == c => {
            Some(Formula::Implies(Arc::clone(a), Arc::clone(d)))
        }
        _ => None,
    }
}

/// `p ^ q` gives `p`
pub fn simplification(conjunction: &Formula) -> Option<Formula> {
    match conjunction {
        Formula::And(l, _) => Some(l.as_ref().clone()),
        _ => None,
    }
}

pub fn conjunction(left: &Formula, right: &Formula) -> Formula {
    Formula::and(left.clone(), right.clone())
}

/// `(p -> q) ^ (r -> s)`, `p V r` gives `q V s`
pub fn constructive_dilemma(implications: &Formula, disjunction: &Formula) -> Option<Formula> {
    let Formula::And(first, second) = implications else {
        return None;
    };
    match (first.as_ref(), second.as_ref(), disjunction) {
        (Formula::Implies(a1, c1), Formula::Implies(a2, c2), Formula::Or(d1, d2))
            if d1 == a1 && d2 == a2 =>
        {
            Some(Formula::Or(Arc::clone(c1), Arc::clone(c2)))
        }
        _ => None,
    }
}

/// `p -> q` gives `p -> (p ^ q)`
pub fn absorption(implication: &Formula) -> Option<Formula> {
    match implication {
        Formula::Implies(a, c) => Some(Formula::Implies(
            Arc::clone(a),
            Arc::new(Formula::And(Arc::clone(a), Arc::clone(c))),
        )),
        _ => None,
    }
}

pub fn addition(formula: &Formula, addend: &Formula) -> Formula {
    Formula::or(formula.clone(), addend.clone())
}
