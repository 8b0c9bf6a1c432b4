//! # closedform
//!
//! closedform bundles four small command-line calculators: areas of simple
//! shapes, four-function arithmetic, two-variable linear systems solved with
//! Cramer's rule, and quadratic equations. Every number read from the user is
//! parsed strictly, and every failure (bad input or an impossible
//! calculation) is returned as a classified error instead of aborting.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fmt::Display, io::Write, str::FromStr};

use crate::{
    kernel::arithmetic::Operation,
    session::{Session, SessionResult, source::LineSource},
};

/// Provides unified error types for parsing, calculating and prompting.
///
/// # Responsibilities
/// - Classifies every way a token or equation line can be rejected.
/// - Names the domain failures of each calculation.
/// - Wraps both, plus I/O and end of input, for the interactive layer.
pub mod error;
/// Turns raw text into validated numbers.
///
/// This module holds the numeric parser, the tokenizer and the equation
/// extractors. Nothing here performs a calculation; it only decides whether a
/// piece of text is a number and which number it is.
///
/// # Responsibilities
/// - Parses integers and reals with explicit failure classes.
/// - Splits equation lines into tokens.
/// - Extracts signed coefficients from fixed token positions.
pub mod input;
/// The calculation kernels.
///
/// Each kernel is a pure function (or a small value type with methods) over
/// already-validated numbers, returning a result or a domain failure.
///
/// # Responsibilities
/// - Computes areas, arithmetic results, linear solutions and quadratic
///   roots.
/// - Detects overflow, division by zero and degenerate input before they can
///   produce a wrong number.
pub mod kernel;
/// The interactive layer that prompts, reads lines and prints results.
pub mod session;

/// The calculators this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// Square, rectangle or triangle area.
    Area,
    /// Four-function arithmetic, optionally restricted to one operation.
    Arithmetic(Option<Operation>),
    /// Two-variable linear system.
    Cramer,
    /// Quadratic equation.
    Quadratic,
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Area => write!(f, "area"),
            Self::Arithmetic(None) => write!(f, "arith"),
            Self::Arithmetic(Some(op)) => write!(f, "arith {op}"),
            Self::Cramer => write!(f, "cramer"),
            Self::Quadratic => write!(f, "quadratic"),
        }
    }
}

impl FromStr for Program {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let program = match words.next() {
            Some("area") => Self::Area,
            Some("arith") => Self::Arithmetic(words.next().map(str::parse).transpose()?),
            Some("cramer") => Self::Cramer,
            Some("quadratic") => Self::Quadratic,
            _ => return Err(format!("unknown calculator '{s}'")),
        };
        match words.next() {
            Some(extra) => Err(format!("unexpected '{extra}' after '{program}'")),
            None => Ok(program),
        }
    }
}

/// Runs one calculator to completion.
///
/// Lines are taken from `source`, and prompts (if `prompts` is set) and
/// results are written to `out`. This is the entry point the binary uses.
///
/// # Errors
/// Returns the [`SessionError`](error::SessionError) that ended the session.
///
/// # Examples
/// ```
/// use closedform::{Program, run, session::source::IterSource};
///
/// let mut out = Vec::new();
/// let res = run(Program::Cramer, IterSource::new(["1x + 1y = 2", "1x - 1y = 0"]), &mut out, false);
/// assert!(res.is_ok());
/// assert!(String::from_utf8(out).unwrap().ends_with("x = 1\ny = 1\n"));
///
/// // A zero divisor is reported, not printed as `inf`.
/// let mut out = Vec::new();
/// let res = run("arith div".parse().unwrap(), IterSource::new(["1", "0"]), &mut out, false);
/// assert!(res.is_err());
/// ```
pub fn run<S, W>(program: Program, source: S, out: W, prompts: bool) -> SessionResult<()>
    where S: LineSource,
          W: Write
{
    let mut session = Session::new(source, out).with_prompts(prompts);
    match program {
        Program::Area => session.area().map(drop),
        Program::Arithmetic(only) => session.arithmetic(only).map(drop),
        Program::Cramer => session.cramer().map(drop),
        Program::Quadratic => session.quadratic().map(drop),
    }
}
