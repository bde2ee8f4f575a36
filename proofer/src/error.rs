use crate::ast::Span;
use crate::coordinate::Coordinate;
use crate::rules::Rule;
use thiserror::Error;

/// Why a line of text is not a formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("expected a formula")]
    MissingFormula,

    #[error("unrecognized token '{0}'")]
    UnrecognizedToken(char),

    #[error("expected operator")]
    ExpectedOperator,

    #[error("no matching parenthesis")]
    UnmatchedParenthesis,

    #[error("error in parenthesis, not a statement")]
    EmptyParentheses,

    #[error("formula is {actual} bytes long, the limit is {limit}")]
    TooLong { limit: usize, actual: usize },

    #[error("formula nests deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Parse error with the location of the offending text in the input line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error - {kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// A rule could not produce a formula from the operands it was given
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("Error executing {rule} - Rule could not be applied")]
    NotApplicable { rule: Rule },

    #[error("Error executing {rule} - a second argument is required")]
    MissingOperand { rule: Rule },

    #[error("Error executing {rule} - only one argument is accepted")]
    UnexpectedOperand { rule: Rule },

    #[error("Error executing {rule} - invalid location {coordinate}")]
    InvalidLocation { rule: Rule, coordinate: Coordinate },

    #[error("Error executing {rule} - rules of inference take no location")]
    TakesNoLocation { rule: Rule },

    #[error("Error executing {rule} - not implemented")]
    NotImplemented { rule: Rule },
}

impl RuleError {
    /// The rule that failed
    pub fn rule(&self) -> Rule {
        match self {
            RuleError::NotApplicable { rule }
            | RuleError::MissingOperand { rule }
            | RuleError::UnexpectedOperand { rule }
            | RuleError::InvalidLocation { rule, .. }
            | RuleError::TakesNoLocation { rule }
            | RuleError::NotImplemented { rule } => *rule,
        }
    }

    /// Failures that depend on the particular operands, as opposed to the
    /// shape of the request. Only these are skipped by silent batches.
    pub fn is_mismatch(&self) -> bool {
        matches!(
            self,
            RuleError::NotApplicable { .. } | RuleError::InvalidLocation { .. }
        )
    }
}

/// Text that is neither `0` nor a dotted path of `1`s and `2`s
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid statement coordinates '{0}'")]
pub struct CoordinateError(pub String);

/// Error types for a proof session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProofError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Coordinate(#[from] CoordinateError),

    /// The line in rule mode does not match `name(arg0[,arg1])`
    #[error("Rule format must be name(arg0[,arg1])")]
    Invocation { input: String },

    #[error("Error - Unknown rule '{0}'")]
    UnknownRule(String),

    #[error("Error - No fact numbered {0}")]
    UnknownFact(usize),

    #[error("Error - Incorrect argument type: {0}")]
    IncorrectArgument(String),
}
