//! # Proofer Engine
//!
//! **An interactive assistant for propositional proofs**
//!
//! Enter premises and a conclusion as formulas, then cite rules of inference
//! and replacement by fact number until the conclusion appears among the
//! known facts.
//!
//! ## Quick Start
//!
//! ```rust
//! use proofer::{ProofResult, Reply, Session};
//!
//! fn main() -> ProofResult<()> {
//!     let mut session = Session::new();
//!
//!     session.handle("p -> q")?;
//!     session.handle("p")?;
//!     session.handle("therefore")?;
//!     session.handle("q")?;
//!
//!     // Modus ponens on facts 1 and 2 derives q as fact 3
//!     session.handle("MP(1,2)")?;
//!
//!     assert_eq!(session.handle("done")?, Reply::Done { proven: true });
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Formulas
//! Atoms are the lowercase letters `p` through `t`. Connectives are `~`,
//! `^`, `V`, `->` and `<->`. Every formula has one canonical rendering, and
//! two formulas are equal exactly when their renderings are.
//!
//! ### Facts
//! Premises and derived formulas are numbered from 1 in the order they are
//! learned. The same formula is never stored twice.
//!
//! ### Rules
//! Rules are cited as `name(arg0[,arg1])`. Arguments are fact numbers or `*`
//! for every fact; rules of replacement take a coordinate such as `1.2` as
//! their second argument.

pub mod ast;
pub mod coordinate;
pub mod error;
pub mod facts;
pub mod formula;
pub mod operator;
pub mod parser;
pub mod resource_limits;
pub mod response;
pub mod rules;
pub mod session;

pub use ast::Span;
pub use coordinate::{Coordinate, Step};
pub use error::{CoordinateError, ParseError, ParseErrorKind, ProofError, RuleError};
pub use facts::{Added, FactBase, Selector};
pub use formula::{Atom, Formula};
pub use operator::Operator;
pub use parser::{parse, parse_invocation, parse_with_limits, Argument, Invocation};
pub use resource_limits::ResourceLimits;
pub use response::{FactListing, NumberedFact, Reply};
pub use rules::{Arity, Rule, RuleKind};
pub use session::{Command, Mode, Session};

/// Result type for proof session operations
pub type ProofResult<T> = Result<T, ProofError>;

#[cfg(test)]
mod tests;
