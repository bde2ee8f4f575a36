//! Formula model
//!
//! A [`Formula`] is an immutable tree. Sub-formulas sit behind [`Arc`] so that
//! derived formulas share structure with the facts they came from, and so that
//! formulas can be handed across threads without copying.
//!
//! Two formulas are equal exactly when their canonical renderings are equal;
//! `PartialEq` and `Hash` both go through [`fmt::Display`].

use crate::coordinate::{Coordinate, Step};
use crate::operator::Operator;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A propositional variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Atom {
    P,
    Q,
    R,
    S,
    T,
}

impl Atom {
    pub const ALL: [Atom; 5] = [Atom::P, Atom::Q, Atom::R, Atom::S, Atom::T];

    pub fn symbol(&self) -> char {
        match self {
            Atom::P => 'p',
            Atom::Q => 'q',
            Atom::R => 'r',
            Atom::S => 's',
            Atom::T => 't',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Atom> {
        Self::ALL.into_iter().find(|atom| atom.symbol() == symbol)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A propositional formula
#[derive(Debug, Clone)]
pub enum Formula {
    Atom(Atom),
    Not(Arc<Formula>),
    Implies(Arc<Formula>, Arc<Formula>),
    Iff(Arc<Formula>, Arc<Formula>),
    Or(Arc<Formula>, Arc<Formula>),
    And(Arc<Formula>, Arc<Formula>),
}

impl Formula {
    pub fn atom(atom: Atom) -> Self {
        Formula::Atom(atom)
    }

    pub fn not(operand: Formula) -> Self {
        Formula::Not(Arc::new(operand))
    }

    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Arc::new(antecedent), Arc::new(consequent))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Arc::new(left), Arc::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Arc::new(left), Arc::new(right))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Arc::new(left), Arc::new(right))
    }

    /// Join two formulas with a binary operator. Returns `None` for `Not`.
    pub fn binary(op: Operator, left: Formula, right: Formula) -> Option<Self> {
        Self::from_parts(op, Arc::new(left), Arc::new(right))
    }

    fn from_parts(op: Operator, left: Arc<Formula>, right: Arc<Formula>) -> Option<Self> {
        match op {
            Operator::Implies => Some(Formula::Implies(left, right)),
            Operator::Iff => Some(Formula::Iff(left, right)),
            Operator::Or => Some(Formula::Or(left, right)),
            Operator::And => Some(Formula::And(left, right)),
            Operator::Not => None,
        }
    }

    /// The main connective, `None` for an atom
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Formula::Atom(_) => None,
            Formula::Not(_) => Some(Operator::Not),
            Formula::Implies(..) => Some(Operator::Implies),
            Formula::Iff(..) => Some(Operator::Iff),
            Formula::Or(..) => Some(Operator::Or),
            Formula::And(..) => Some(Operator::And),
        }
    }

    /// Operator and operands of a binary formula
    pub fn as_binary(&self) -> Option<(Operator, &Arc<Formula>, &Arc<Formula>)> {
        match self {
            Formula::Implies(l, r) => Some((Operator::Implies, l, r)),
            Formula::Iff(l, r) => Some((Operator::Iff, l, r)),
            Formula::Or(l, r) => Some((Operator::Or, l, r)),
            Formula::And(l, r) => Some((Operator::And, l, r)),
            Formula::Atom(_) | Formula::Not(_) => None,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, Formula::Atom(_))
    }

    /// Connectives between the root and the deepest atom
    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,
            Formula::Not(operand) => operand.depth() + 1,
            _ => self
                .as_binary()
                .map_or(0, |(_, left, right)| left.depth().max(right.depth()) + 1),
        }
    }

    /// Canonical text, identical to the `Display` output
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The operand a single coordinate step leads to
    fn operand(&self, step: Step) -> Option<&Arc<Formula>> {
        match (self, step) {
            (Formula::Not(inner), Step::First) => Some(inner),
            (Formula::Not(_), Step::Second) | (Formula::Atom(_), _) => None,
            (_, Step::First) => self.as_binary().map(|(_, left, _)| left),
            (_, Step::Second) => self.as_binary().map(|(_, _, right)| right),
        }
    }

    /// The sub-formula a coordinate addresses, if it exists
    pub fn at(&self, coordinate: &Coordinate) -> Option<&Formula> {
        coordinate
            .steps()
            .iter()
            .try_fold(self, |node, step| node.operand(*step).map(Arc::as_ref))
    }

    /// A copy of this formula with the addressed sub-formula swapped out.
    ///
    /// Siblings along the path are shared, not copied. Returns `None` when the
    /// coordinate does not address a sub-formula.
    pub fn with_replaced(&self, coordinate: &Coordinate, replacement: Formula) -> Option<Formula> {
        self.replace_steps(coordinate.steps(), replacement)
    }

    fn replace_steps(&self, steps: &[Step], replacement: Formula) -> Option<Formula> {
        let Some((step, rest)) = steps.split_first() else {
            return Some(replacement);
        };

        let child = self.operand(*step)?;
        let rebuilt = Arc::new(child.replace_steps(rest, replacement)?);

        match self {
            Formula::Not(_) => Some(Formula::Not(rebuilt)),
            _ => {
                let (op, left, right) = self.as_binary()?;
                match step {
                    Step::First => Self::from_parts(op, rebuilt, Arc::clone(right)),
                    Step::Second => Self::from_parts(op, Arc::clone(left), rebuilt),
                }
            }
        }
    }
}

impl From<Atom> for Formula {
    fn from(atom: Atom) -> Self {
        Formula::Atom(atom)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{}", atom),
            Formula::Not(operand) => write!(f, "{}{}", Operator::Not, operand),
            _ => match self.as_binary() {
                Some((op, left, right)) => write!(f, "({} {} {})", left, op, right),
                None => Ok(()),
            },
        }
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.render() == other.render()
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.render().hash(state);
    }
}

impl Serialize for Formula {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
