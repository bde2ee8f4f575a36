use crate::error::CoordinateError;
use std::fmt;
use std::str::FromStr;

/// Text written for the top-level coordinate
pub const TOP_LEVEL: &str = "0";

/// One step down a formula: `1` is the left (or only) operand, `2` the right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    First,
    Second,
}

impl Step {
    fn from_digit(digit: &str) -> Option<Step> {
        match digit {
            "1" => Some(Step::First),
            "2" => Some(Step::Second),
            _ => None,
        }
    }

    fn digit(&self) -> char {
        match self {
            Step::First => '1',
            Step::Second => '2',
        }
    }
}

/// Path from the root of a formula to one of its sub-formulas
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate(Vec<Step>);

impl Coordinate {
    /// The whole formula
    pub fn top() -> Self {
        Self::default()
    }

    pub fn new(steps: Vec<Step>) -> Self {
        Self(steps)
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    pub fn is_top(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parses `0` or a dotted path such as `1.2.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == TOP_LEVEL {
            return Ok(Self::top());
        }

        s.split('.')
            .map(Step::from_digit)
            .collect::<Option<Vec<_>>>()
            .map(Coordinate)
            .ok_or_else(|| CoordinateError(s.to_string()))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_top() {
            return f.write_str(TOP_LEVEL);
        }
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", step.digit())?;
        }
        Ok(())
    }
}
