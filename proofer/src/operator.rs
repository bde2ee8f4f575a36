use serde::Serialize;
use std::fmt;

/// The logical connectives, each with a fixed canonical symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Implies,
    Iff,
    Or,
    And,
    Not,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Implies,
        Operator::Iff,
        Operator::Or,
        Operator::And,
        Operator::Not,
    ];

    /// Binary connectives in the order the parser tries them.
    ///
    /// No two of these symbols can match at the same position, so the first
    /// match is the only match.
    pub const BINARY: [Operator; 4] = [
        Operator::Implies,
        Operator::Iff,
        Operator::Or,
        Operator::And,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Implies => "->",
            Operator::Iff => "<->",
            Operator::Or => "V",
            Operator::And => "^",
            Operator::Not => "~",
        }
    }

    /// Number of bytes the symbol occupies in canonical text
    pub fn symbol_len(&self) -> usize {
        self.symbol().len()
    }

    pub fn is_binary(&self) -> bool {
        !matches!(self, Operator::Not)
    }

    /// Exact symbol lookup. `None` means "not an operator", not an error.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// The binary operator whose full symbol starts `text`, if any.
    pub fn binary_prefix_of(text: &[u8]) -> Option<Operator> {
        Self::BINARY
            .into_iter()
            .find(|op| text.starts_with(op.symbol().as_bytes()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
