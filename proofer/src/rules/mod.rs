//! Rule catalog and engine
//!
//! [`Rule`] is the closed list of rules a session can name. The engine is
//! stateless: [`Rule::apply`] runs a rule over every combination of candidate
//! operands and [`Rule::apply_at`] rewrites a sub-formula in place.

pub mod inference;
pub mod replacement;

use crate::coordinate::Coordinate;
use crate::error::RuleError;
use crate::formula::Formula;
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Derives a new formula from whole facts
    Inference,
    /// Rewrites a sub-formula into an equivalent one
    Replacement,
}

/// How many operand lists a rule takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

/// The rules a proof may cite, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MP,
    MT,
    DS,
    HS,
    Simp,
    Conj,
    CD,
    Abs,
    Add,
    DM,
    Com,
    Assoc,
    Dist,
    DN,
    Trans,
    Impl,
    Equiv,
    Exp,
    Taut,
}

impl Rule {
    pub const ALL: [Rule; 19] = [
        Rule::MP,
        Rule::MT,
        Rule::DS,
        Rule::HS,
        Rule::Simp,
        Rule::Conj,
        Rule::CD,
        Rule::Abs,
        Rule::Add,
        Rule::DM,
        Rule::Com,
        Rule::Assoc,
        Rule::Dist,
        Rule::DN,
        Rule::Trans,
        Rule::Impl,
        Rule::Equiv,
        Rule::Exp,
        Rule::Taut,
    ];

    /// Short name used in invocations, e.g. `MP`
    pub fn terse(&self) -> &'static str {
        match self {
            Rule::MP => "MP",
            Rule::MT => "MT",
            Rule::DS => "DS",
            Rule::HS => "HS",
            Rule::Simp => "Simp",
            Rule::Conj => "Conj",
            Rule::CD => "CD",
            Rule::Abs => "Abs",
            Rule::Add => "Add",
            Rule::DM => "DM",
            Rule::Com => "Com",
            Rule::Assoc => "Assoc",
            Rule::Dist => "Dist",
            Rule::DN => "DN",
            Rule::Trans => "Trans",
            Rule::Impl => "Impl",
            Rule::Equiv => "Equiv",
            Rule::Exp => "Exp",
            Rule::Taut => "Taut",
        }
    }

    pub fn verbose(&self) -> &'static str {
        match self {
            Rule::MP => "Modus Ponens",
            Rule::MT => "Modus Tollens",
            Rule::DS => "Disjunctive Syllogism",
            Rule::HS => "Hypothetical Syllogism",
            Rule::Simp => "Simplification",
            Rule::Conj => "Conjunction",
            Rule::CD => "Constructive Dilemma",
            Rule::Abs => "Absorption",
            Rule::Add => "Addition",
            Rule::DM => "DeMorgans",
            Rule::Com => "Commutation",
            Rule::Assoc => "Association",
            Rule::Dist => "Distribution",
            Rule::DN => "Double Negation",
            Rule::Trans => "Transposition",
            Rule::Impl => "Material Implication",
            Rule::Equiv => "Material Equivalence",
            Rule::Exp => "Exportation",
            Rule::Taut => "Tautology",
        }
    }

    /// Case-insensitive lookup by terse name
    pub fn lookup(name: &str) -> Option<Rule> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|rule| rule.terse().eq_ignore_ascii_case(name))
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::MP
            | Rule::MT
            | Rule::DS
            | Rule::HS
            | Rule::Simp
            | Rule::Conj
            | Rule::CD
            | Rule::Abs
            | Rule::Add => RuleKind::Inference,
            _ => RuleKind::Replacement,
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Rule::MP | Rule::MT | Rule::DS | Rule::HS | Rule::Conj | Rule::CD | Rule::Add => {
                Arity::Binary
            }
            _ => Arity::Unary,
        }
    }

    /// Whether applying the rule can succeed at all
    pub fn is_supported(&self) -> bool {
        self.kind() == RuleKind::Inference || *self == Rule::DN
    }

    /// Apply the rule to every operand in `first`, or to every pair drawn
    /// from `first` (outer) and `second` (inner) for binary rules.
    ///
    /// With `silent` set, operands the rule does not match are skipped
    /// instead of failing the whole batch. Requests of the wrong shape fail
    /// either way.
    pub fn apply(
        &self,
        first: &[Formula],
        second: Option<&[Formula]>,
        silent: bool,
    ) -> Result<Vec<Formula>, RuleError> {
        self.ensure_supported()?;
        debug!(
            "Applying {} to {} x {} operands",
            self,
            first.len(),
            second.map_or(1, <[Formula]>::len)
        );

        match (self.arity(), second) {
            (Arity::Binary, None) => Err(RuleError::MissingOperand { rule: *self }),
            (Arity::Unary, Some(_)) => Err(RuleError::UnexpectedOperand { rule: *self }),
            (Arity::Unary, None) => {
                self.collect(first.iter().map(|formula| self.single(formula, None)), silent)
            }
            (Arity::Binary, Some(second)) => self.collect(
                first.iter().flat_map(|left| {
                    second
                        .iter()
                        .map(move |right| self.single(left, Some(right)))
                }),
                silent,
            ),
        }
    }

    /// Apply a rule of replacement to the sub-formula `coordinate` addresses
    /// in each of `first`, keeping the rest of each formula intact.
    pub fn apply_at(
        &self,
        first: &[Formula],
        coordinate: &Coordinate,
        silent: bool,
    ) -> Result<Vec<Formula>, RuleError> {
        if self.kind() == RuleKind::Inference {
            return Err(RuleError::TakesNoLocation { rule: *self });
        }
        self.ensure_supported()?;
        debug!("Applying {} at {} to {} operands", self, coordinate, first.len());

        let invalid = || RuleError::InvalidLocation {
            rule: *self,
            coordinate: coordinate.clone(),
        };
        let results = first.iter().map(|formula| {
            let target = formula.at(coordinate).ok_or_else(invalid)?;
            let rewritten = self.single(target, None)?;
            formula.with_replaced(coordinate, rewritten).ok_or_else(invalid)
        });
        self.collect(results, silent)
    }

    fn ensure_supported(&self) -> Result<(), RuleError> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(RuleError::NotImplemented { rule: *self })
        }
    }

    /// One application to one operand or one pair
    fn single(&self, first: &Formula, second: Option<&Formula>) -> Result<Formula, RuleError> {
        let derived = match (self, second) {
            (Rule::MP, Some(second)) => inference::modus_ponens(first, second),
            (Rule::MT, Some(second)) => inference::modus_tollens(first, second),
            (Rule::DS, Some(second)) => inference::disjunctive_syllogism(first, second),
            (Rule::HS, Some(second)) => inference::hypothetical_syllogism(first, second),
            (Rule::Conj, Some(second)) => Some(inference::conjunction(first, second)),
            (Rule::CD, Some(second)) => inference::constructive_dilemma(first, second),
            (Rule::Add, Some(second)) => Some(inference::addition(first, second)),
            (Rule::Simp, None) => inference::simplification(first),
            (Rule::Abs, None) => inference::absorption(first),
            (Rule::DN, None) => Some(replacement::double_negation(first)),
            _ => return Err(RuleError::NotImplemented { rule: *self }),
        };
        derived.ok_or(RuleError::NotApplicable { rule: *self })
    }

    fn collect(
        &self,
        results: impl Iterator<Item = Result<Formula, RuleError>>,
        silent: bool,
    ) -> Result<Vec<Formula>, RuleError> {
        let mut derived = Vec::new();
        for result in results {
            match result {
                Ok(formula) => derived.push(formula),
                Err(err) if silent && err.is_mismatch() => {
                    debug!("Skipping operands for {}: {}", self, err)
                }
                Err(err) => return Err(err),
            }
        }
        Ok(derived)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.terse())
    }
}

impl Serialize for Rule {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.terse())
    }
}
