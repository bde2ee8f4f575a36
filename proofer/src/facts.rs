use crate::error::ProofError;
use crate::formula::Formula;
use crate::ProofResult;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Argument text that selects every fact
pub const WILDCARD: &str = "*";

/// Which facts a rule argument refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Index(usize),
    All,
}

/// Outcome of adding one formula to a [`FactBase`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Added {
    New { index: usize, formula: Formula },
    Duplicate { formula: Formula },
}

/// Numbered, append-only list of known formulas plus the goal of the proof.
///
/// Numbering starts at 1 and only ever grows until [`FactBase::clear`]. A
/// formula equal to one already present is never stored twice.
#[derive(Debug, Clone)]
pub struct FactBase {
    facts: BTreeMap<usize, Formula>,
    seen: HashSet<Formula>,
    next_index: usize,
    conclusion: Option<Formula>,
}

impl Default for FactBase {
    fn default() -> Self {
        Self::new()
    }
}

impl FactBase {
    pub fn new() -> Self {
        Self {
            facts: BTreeMap::new(),
            seen: HashSet::new(),
            next_index: 1,
            conclusion: None,
        }
    }

    /// Store `formula` under the next index unless an equal one is present.
    /// Returns the new index, or `None` for a duplicate.
    pub fn add(&mut self, formula: Formula) -> Option<usize> {
        if !self.seen.insert(formula.clone()) {
            return None;
        }
        let index = self.next_index;
        self.facts.insert(index, formula);
        self.next_index += 1;
        Some(index)
    }

    pub fn add_all(&mut self, formulas: impl IntoIterator<Item = Formula>) -> Vec<Added> {
        formulas
            .into_iter()
            .map(|formula| match self.add(formula.clone()) {
                Some(index) => Added::New { index, formula },
                None => Added::Duplicate { formula },
            })
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&Formula> {
        self.facts.get(&index)
    }

    pub fn contains(&self, formula: &Formula) -> bool {
        self.seen.contains(formula)
    }

    /// The facts a selector names, in index order
    pub fn select(&self, selector: Selector) -> ProofResult<Vec<Formula>> {
        match selector {
            Selector::All => Ok(self.facts.values().cloned().collect()),
            Selector::Index(index) => self
                .get(index)
                .cloned()
                .map(|formula| vec![formula])
                .ok_or(ProofError::UnknownFact(index)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Formula)> {
        self.facts.iter().map(|(index, formula)| (*index, formula))
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Forget every fact and the conclusion; numbering restarts at 1.
    pub fn clear(&mut self) {
        self.facts.clear();
        self.seen.clear();
        self.next_index = 1;
        self.conclusion = None;
    }

    pub fn conclusion(&self) -> Option<&Formula> {
        self.conclusion.as_ref()
    }

    pub fn set_conclusion(&mut self, conclusion: Formula) {
        self.conclusion = Some(conclusion);
    }

    /// True once the conclusion has been derived as a fact
    pub fn is_proven(&self) -> bool {
        self.conclusion
            .as_ref()
            .is_some_and(|conclusion| self.contains(conclusion))
    }
}
