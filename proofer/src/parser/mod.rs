//! Formula parser
//!
//! Whitespace is insignificant and is removed before parsing, but every byte
//! that survives remembers where it sat in the original line so that errors
//! point at what the user actually typed.
//!
//! Binary operators have no relative precedence and group to the right:
//! `p^qVr` is `(p ^ (q V r))`. An unparenthesised `~` at formula level negates
//! everything to its right, so `~p^q` is `~(p ^ q)`. Inside parentheses, or
//! when directly followed by `(`, `~` binds to the single operand after it:
//! `(~p^q)` and `~(p)^q` are both `(~p ^ q)`. Canonical renderings always
//! fall under the second reading, which keeps `parse(render(f)) == f`.
//!
//! Nesting depth is a property of the formula, not of how it was typed: it
//! counts the connectives between the root and the deepest atom, so `p^q^r`
//! and its rendering `(p ^ (q ^ r))` are equally deep. Parentheses are bounded
//! separately by the same limit. The length limit applies to the text as given,
//! and a rendering is usually longer than what was typed.

use crate::ast::Span;
use crate::error::{ParseError, ParseErrorKind};
use crate::formula::{Atom, Formula};
use crate::operator::Operator;
use crate::resource_limits::ResourceLimits;

pub mod invocation;

pub use invocation::{parse_invocation, Argument, Invocation};

/// Parse one formula with the default [`ResourceLimits`].
pub fn parse(input: &str) -> Result<Formula, ParseError> {
    parse_with_limits(input, &ResourceLimits::default())
}

pub fn parse_with_limits(input: &str, limits: &ResourceLimits) -> Result<Formula, ParseError> {
    if input.len() > limits.max_formula_bytes {
        return Err(ParseError::new(
            ParseErrorKind::TooLong {
                limit: limits.max_formula_bytes,
                actual: input.len(),
            },
            Span::new(input, 0, input.len()),
        ));
    }

    let parser = FormulaParser {
        text: Stripped::new(input),
        limits,
    };
    let formula = parser.formula(0, parser.text.len(), Frame::default())?;

    // Left operands are not counted on the way down
    if formula.depth() > limits.max_nesting_depth {
        return Err(ParseError::new(
            ParseErrorKind::TooDeep {
                limit: limits.max_nesting_depth,
            },
            Span::new(input, 0, input.len()),
        ));
    }
    Ok(formula)
}

/// The input line with whitespace removed
struct Stripped<'a> {
    source: &'a str,
    bytes: Vec<u8>,
    /// Offset in `source` of each byte in `bytes`
    offsets: Vec<usize>,
}

impl<'a> Stripped<'a> {
    fn new(source: &'a str) -> Self {
        let mut bytes = Vec::with_capacity(source.len());
        let mut offsets = Vec::with_capacity(source.len());

        for (offset, ch) in source.char_indices().filter(|(_, ch)| !ch.is_whitespace()) {
            let mut buf = [0u8; 4];
            for (i, byte) in ch.encode_utf8(&mut buf).bytes().enumerate() {
                bytes.push(byte);
                offsets.push(offset + i);
            }
        }

        Self {
            source,
            bytes,
            offsets,
        }
    }

    fn len(&self) -> usize {
        self.bytes.len()
    }

    fn byte(&self, at: usize, to: usize) -> Option<u8> {
        if at < to {
            self.bytes.get(at).copied()
        } else {
            None
        }
    }

    fn starts_with(&self, at: usize, to: usize, symbol: &str) -> bool {
        self.bytes
            .get(at..to)
            .is_some_and(|rest| rest.starts_with(symbol.as_bytes()))
    }

    fn char_at(&self, at: usize) -> Option<char> {
        let offset = *self.offsets.get(at)?;
        self.source.get(offset..)?.chars().next()
    }

    /// Span of the single character starting at stripped position `at`
    fn span(&self, at: usize) -> Span {
        match (self.offsets.get(at), self.char_at(at)) {
            (Some(&start), Some(ch)) => Span::new(self.source, start, start + ch.len_utf8()),
            _ => Span::end_of(self.source),
        }
    }

    /// Span from stripped position `from` through `last`, inclusive
    fn span_through(&self, from: usize, last: usize) -> Span {
        let start = self.span(from);
        let end = self.span(last);
        Span::new(self.source, start.start, end.end)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Frame {
    /// Right operands and negations entered so far
    depth: usize,
    /// Open parentheses around this position
    parens: usize,
    /// Inside at least one pair of parentheses
    grouped: bool,
}

impl Frame {
    fn deeper(self) -> Self {
        Self {
            depth: self.depth + 1,
            ..self
        }
    }

    fn group(self) -> Self {
        Self {
            parens: self.parens + 1,
            grouped: true,
            ..self
        }
    }
}

struct FormulaParser<'a> {
    text: Stripped<'a>,
    limits: &'a ResourceLimits,
}

impl FormulaParser<'_> {
    /// `unary [binop formula]` over `from..to`, which must be consumed entirely
    fn formula(&self, from: usize, to: usize, frame: Frame) -> Result<Formula, ParseError> {
        self.check_depth(from, frame)?;

        let (left, next) = self.unary(from, to, frame)?;
        if next >= to {
            return Ok(left);
        }

        let (op, after) = self.binary_operator(next, to)?;
        let right = self.formula(after, to, frame.deeper())?;
        Formula::binary(op, left, right).ok_or_else(|| self.error(ParseErrorKind::ExpectedOperator, next))
    }

    /// An atom, a parenthesised group or a negation. Returns the formula and
    /// the position just past it.
    fn unary(&self, from: usize, to: usize, frame: Frame) -> Result<(Formula, usize), ParseError> {
        self.check_depth(from, frame)?;

        let Some(byte) = self.text.byte(from, to) else {
            return Err(self.error(ParseErrorKind::MissingFormula, from));
        };

        if let Some(atom) = Atom::from_symbol(char::from(byte)) {
            return Ok((Formula::atom(atom), from + 1));
        }

        if byte == b'(' {
            let close = self.matching_paren(from, to)?;
            if close == from + 1 {
                return Err(ParseError::new(
                    ParseErrorKind::EmptyParentheses,
                    self.text.span_through(from, close),
                ));
            }
            let inner = self.formula(from + 1, close, frame.group())?;
            return Ok((inner, close + 1));
        }

        if self.text.starts_with(from, to, Operator::Not.symbol()) {
            let start = from + Operator::Not.symbol_len();
            if frame.grouped || self.text.byte(start, to) == Some(b'(') {
                let (operand, next) = self.unary(start, to, frame.deeper())?;
                return Ok((Formula::not(operand), next));
            }
            let operand = self.formula(start, to, frame.deeper())?;
            return Ok((Formula::not(operand), to));
        }

        let token = self.text.char_at(from).unwrap_or(char::from(byte));
        Err(self.error(ParseErrorKind::UnrecognizedToken(token), from))
    }

    /// The first binary operator symbol at `at`, provided something follows it
    fn binary_operator(&self, at: usize, to: usize) -> Result<(Operator, usize), ParseError> {
        self.text
            .bytes
            .get(at..to)
            .and_then(Operator::binary_prefix_of)
            .map(|op| (op, at + op.symbol_len()))
            .filter(|(_, after)| *after < to)
            .ok_or_else(|| self.error(ParseErrorKind::ExpectedOperator, at))
    }

    /// Position of the `)` closing the `(` at `open`, searching no further than `to`
    fn matching_paren(&self, open: usize, to: usize) -> Result<usize, ParseError> {
        let mut depth = 0usize;
        for at in open + 1..to {
            match self.text.bytes[at] {
                b'(' => depth += 1,
                b')' if depth == 0 => return Ok(at),
                b')' => depth -= 1,
                _ => {}
            }
        }
        Err(self.error(ParseErrorKind::UnmatchedParenthesis, open))
    }

    fn check_depth(&self, at: usize, frame: Frame) -> Result<(), ParseError> {
        if frame.depth.max(frame.parens) > self.limits.max_nesting_depth {
            return Err(self.error(
                ParseErrorKind::TooDeep {
                    limit: self.limits.max_nesting_depth,
                },
                at,
            ));
        }
        Ok(())
    }

    fn error(&self, kind: ParseErrorKind, at: usize) -> ParseError {
        ParseError::new(kind, self.text.span(at))
    }
}
