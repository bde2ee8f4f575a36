//! Rules of replacement
//!
//! Only double negation is implemented; the others in the catalog are
//! recognized and reported as unsupported.

use crate::formula::Formula;

/// `~~p` becomes `p`; anything else gains a `~~` prefix.
pub fn double_negation(formula: &Formula) -> Formula {
    if let Formula::Not(inner) = formula {
        if let Formula::Not(operand) = inner.as_ref() {
            return operand.as_ref().clone();
        }
    }
    Formula::not(Formula::not(formula.clone()))
}
