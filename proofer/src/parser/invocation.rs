use crate::coordinate::{Coordinate, Step};
use crate::error::{CoordinateError, ProofError};
use crate::facts::WILDCARD;
use crate::ProofResult;
use pest::Parser;
use std::fmt;

mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "src/parser/invocation.pest"]
    pub struct InvocationParser;
}

use grammar::{InvocationParser, Rule as GrammarRule};

/// One argument of a rule invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// A fact number, or one of `0`, `1`, `2` when a coordinate is expected
    Index(usize),
    /// `*`, every fact in the store
    Wildcard,
    /// A dotted coordinate such as `1.2`
    Path(Coordinate),
}

impl Argument {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Argument::Wildcard)
    }

    /// Read this argument as a location inside a formula.
    ///
    /// `0` is the whole formula; single digits `1` and `2` are one step down.
    pub fn coordinate(&self) -> ProofResult<Coordinate> {
        match self {
            Argument::Path(coordinate) => Ok(coordinate.clone()),
            Argument::Index(0) => Ok(Coordinate::top()),
            Argument::Index(1) => Ok(Coordinate::new(vec![Step::First])),
            Argument::Index(2) => Ok(Coordinate::new(vec![Step::Second])),
            Argument::Index(n) => Err(CoordinateError(n.to_string()).into()),
            Argument::Wildcard => Err(ProofError::IncorrectArgument(
                "expected statement coordinates, found '*'".to_string(),
            )),
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Index(n) => write!(f, "{}", n),
            Argument::Wildcard => f.write_str(WILDCARD),
            Argument::Path(coordinate) => write!(f, "{}", coordinate),
        }
    }
}

/// A parsed `name(arg0[,arg1])` line. The name is not resolved here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub rule_name: String,
    pub first: Argument,
    pub second: Option<Argument>,
}

impl Invocation {
    /// True when either argument is `*`
    pub fn is_silent(&self) -> bool {
        self.first.is_wildcard() || self.second.as_ref().is_some_and(Argument::is_wildcard)
    }
}

pub fn parse_invocation(input: &str) -> ProofResult<Invocation> {
    let invalid = || ProofError::Invocation {
        input: input.to_string(),
    };

    let invocation = InvocationParser::parse(GrammarRule::invocation, input.trim())
        .map_err(|_| invalid())?
        .next()
        .ok_or_else(invalid)?;

    let mut rule_name = None;
    let mut arguments = Vec::with_capacity(2);
    for pair in invocation.into_inner() {
        match pair.as_rule() {
            GrammarRule::rule_name => rule_name = Some(pair.as_str().to_string()),
            GrammarRule::EOI => {}
            GrammarRule::wildcard => arguments.push(Argument::Wildcard),
            GrammarRule::index => {
                arguments.push(Argument::Index(pair.as_str().parse().map_err(|_| invalid())?))
            }
            GrammarRule::coordinate => arguments.push(Argument::Path(pair.as_str().parse()?)),
            _ => return Err(invalid()),
        }
    }

    let mut arguments = arguments.into_iter();
    match (rule_name, arguments.next()) {
        (Some(rule_name), Some(first)) => Ok(Invocation {
            rule_name,
            first,
            second: arguments.next(),
        }),
        _ => Err(invalid()),
    }
}
