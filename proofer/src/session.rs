//! Interactive proof session
//!
//! A [`Session`] consumes one line at a time. It starts in premise mode,
//! collects premises until `therefore`, takes one conclusion, then accepts
//! rule invocations such as `MP(1,2)` until the user is done.

use crate::coordinate::Coordinate;
use crate::error::ProofError;
use crate::facts::{Added, FactBase, Selector};
use crate::formula::Formula;
use crate::parser::{parse_invocation, parse_with_limits, Argument};
use crate::resource_limits::ResourceLimits;
use crate::response::{FactListing, NumberedFact, Reply};
use crate::rules::{Rule, RuleKind};
use crate::ProofResult;
use serde::Serialize;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Premise,
    Conclusion,
    Rule,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Premise => write!(f, "premise"),
            Mode::Conclusion => write!(f, "conclusion"),
            Mode::Rule => write!(f, "rule"),
        }
    }
}

/// Keywords recognized in place of a formula or invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    Exit,
    Therefore,
    Facts,
    Done,
    Reset,
    Help,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Exit,
        Command::Therefore,
        Command::Facts,
        Command::Done,
        Command::Reset,
        Command::Help,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Exit => "exit",
            Command::Therefore => "therefore",
            Command::Facts => "facts",
            Command::Done => "done",
            Command::Reset => "reset",
            Command::Help => "help",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Exit => "leave the program",
            Command::Therefore => "stop entering premises and enter the conclusion",
            Command::Facts => "list the known facts",
            Command::Done => "check whether the conclusion has been shown",
            Command::Reset => "clear all facts and start over",
            Command::Help => "show this help",
        }
    }

    pub fn available_in(&self, mode: Mode) -> bool {
        match self {
            Command::Exit | Command::Facts | Command::Help => true,
            Command::Therefore => mode == Mode::Premise,
            Command::Done | Command::Reset => mode == Mode::Rule,
        }
    }

    /// The command `line` names, if it is available in `mode`
    pub fn recognize(line: &str, mode: Mode) -> Option<Command> {
        let line = line.trim();
        Self::ALL
            .into_iter()
            .find(|command| command.keyword().eq_ignore_ascii_case(line))
            .filter(|command| command.available_in(mode))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// State of one proof attempt
#[derive(Debug, Clone, Default)]
pub struct Session {
    facts: FactBase,
    mode: Mode,
    /// Facts waiting for the formula `Add` should join to them
    pending_addition: Option<Selector>,
    limits: ResourceLimits,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn facts(&self) -> &FactBase {
        &self.facts
    }

    pub fn limits(&self) -> &ResourceLimits {
        &self.limits
    }

    /// True after `Add(n)` until a formula to add has been entered
    pub fn is_awaiting_addend(&self) -> bool {
        self.pending_addition.is_some()
    }

    /// Act on one line of input.
    ///
    /// Errors leave the session in the state it was in before the line,
    /// except that nothing already derived is rolled back.
    pub fn handle(&mut self, line: &str) -> ProofResult<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Nothing);
        }

        if let Some(selector) = self.pending_addition {
            if Command::recognize(line, self.mode) == Some(Command::Exit) {
                return Ok(Reply::Exit);
            }
            return self.finish_addition(selector, line);
        }

        if let Some(command) = Command::recognize(line, self.mode) {
            return Ok(self.run_command(command));
        }

        match self.mode {
            Mode::Premise => {
                let formula = self.parse(line)?;
                Ok(match self.facts.add(formula.clone()) {
                    Some(index) => Reply::PremiseAdded { index, formula },
                    None => Reply::PremiseDuplicate { formula },
                })
            }
            Mode::Conclusion => {
                let conclusion = self.parse(line)?;
                self.facts.set_conclusion(conclusion.clone());
                self.enter(Mode::Rule);
                Ok(Reply::ConclusionSet { conclusion })
            }
            Mode::Rule => self.invoke(line),
        }
    }

    fn parse(&self, line: &str) -> ProofResult<Formula> {
        Ok(parse_with_limits(line, &self.limits)?)
    }

    fn enter(&mut self, mode: Mode) {
        debug!("Entering {} mode", mode);
        self.mode = mode;
    }

    fn run_command(&mut self, command: Command) -> Reply {
        match command {
            Command::Exit => Reply::Exit,
            Command::Therefore => {
                self.enter(Mode::Conclusion);
                Reply::ConclusionMode
            }
            Command::Facts => Reply::Facts(self.listing()),
            Command::Done => Reply::Done {
                proven: self.facts.is_proven(),
            },
            Command::Reset => {
                self.facts.clear();
                self.enter(Mode::Premise);
                Reply::Reset
            }
            Command::Help => Reply::Help {
                mode: self.mode,
                commands: Command::ALL
                    .into_iter()
                    .filter(|command| command.available_in(self.mode))
                    .collect(),
                rules: Rule::ALL.to_vec(),
            },
        }
    }

    pub fn listing(&self) -> FactListing {
        FactListing {
            facts: self
                .facts
                .iter()
                .map(|(index, formula)| NumberedFact {
                    index,
                    formula: formula.clone(),
                })
                .collect(),
            conclusion: match self.mode {
                Mode::Rule => self.facts.conclusion().cloned(),
                Mode::Premise | Mode::Conclusion => None,
            },
        }
    }

    fn invoke(&mut self, line: &str) -> ProofResult<Reply> {
        let invocation = parse_invocation(line)?;
        let rule = Rule::lookup(&invocation.rule_name)
            .ok_or_else(|| ProofError::UnknownRule(invocation.rule_name.clone()))?;

        let selector = Self::selector(&invocation.first)?;
        let first = self.facts.select(selector)?;
        let silent = invocation.is_silent();

        let derived = match (rule.kind(), &invocation.second) {
            (RuleKind::Replacement, Some(location)) => {
                rule.apply_at(&first, &location.coordinate()?, silent)?
            }
            (RuleKind::Replacement, None) => rule.apply_at(&first, &Coordinate::top(), silent)?,
            (RuleKind::Inference, None) if rule == Rule::Add => {
                debug!("Waiting for the formula to add to {}", invocation.first);
                self.pending_addition = Some(selector);
                return Ok(Reply::AddendRequested);
            }
            (RuleKind::Inference, None) => rule.apply(&first, None, silent)?,
            (RuleKind::Inference, Some(argument)) => {
                let second = self.facts.select(Self::selector(argument)?)?;
                rule.apply(&first, Some(&second), silent)?
            }
        };

        Ok(self.record(rule, derived))
    }

    fn finish_addition(&mut self, selector: Selector, line: &str) -> ProofResult<Reply> {
        let addend = self.parse(line)?;
        let first = self.facts.select(selector)?;
        self.pending_addition = None;

        let silent = selector == Selector::All;
        let derived = Rule::Add.apply(&first, Some(std::slice::from_ref(&addend)), silent)?;
        Ok(self.record(Rule::Add, derived))
    }

    fn selector(argument: &Argument) -> ProofResult<Selector> {
        match argument {
            Argument::Index(index) => Ok(Selector::Index(*index)),
            Argument::Wildcard => Ok(Selector::All),
            Argument::Path(path) => Err(ProofError::IncorrectArgument(format!(
                "expected a fact number or '*', found '{}'",
                path
            ))),
        }
    }

    fn record(&mut self, rule: Rule, derived: Vec<Formula>) -> Reply {
        let mut added = Vec::new();
        let mut duplicates = Vec::new();
        for outcome in self.facts.add_all(derived) {
            match outcome {
                Added::New { index, formula } => added.push(NumberedFact { index, formula }),
                Added::Duplicate { formula } => duplicates.push(formula),
            }
        }
        debug!(
            "{} added {} facts, {} already known",
            rule,
            added.len(),
            duplicates.len()
        );

        Reply::Derived {
            rule,
            added,
            duplicates,
        }
    }
}
