use crate::formula::Formula;
use crate::rules::Rule;
use crate::session::{Command, Mode};
use serde::Serialize;

/// A stored fact together with its number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberedFact {
    pub index: usize,
    pub formula: Formula,
}

/// Snapshot of the fact store for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactListing {
    pub facts: Vec<NumberedFact>,
    /// Only listed once the session has reached rule mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<Formula>,
}

/// What a session did with one line of input
///
/// Replies carry data only. Turning them into text is left to the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum Reply {
    /// Blank line
    Nothing,
    PremiseAdded {
        index: usize,
        formula: Formula,
    },
    PremiseDuplicate {
        formula: Formula,
    },
    /// The conclusion was recorded and the session is now in rule mode
    ConclusionSet {
        conclusion: Formula,
    },
    Derived {
        rule: Rule,
        added: Vec<NumberedFact>,
        duplicates: Vec<Formula>,
    },
    /// `Add` was given one argument; the next line is the formula to add
    AddendRequested,
    Facts(FactListing),
    Done {
        proven: bool,
    },
    ConclusionMode,
    Reset,
    Help {
        mode: Mode,
        commands: Vec<Command>,
        rules: Vec<Rule>,
    },
    Exit,
}

impl Reply {
    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit)
    }
}
