use std::num::{FpCategory, IntErrorKind};

use tracing::debug;

use crate::{
    error::{IntegerWidth, ParseError},
    input::scan::{IntegerPrefix, Prefix, RealPrefix, leading, leading_real},
};

/// Result type used by every parser in this crate.
pub type ParseResult<T> = Result<T, ParseError>;

/// Whether characters after the numeric prefix are an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trailing {
    /// Fail with `TrailingGarbage`. Used for single-number prompts.
    Reject,
    /// Ignore the rest of the token, as in `5x` or `2x^2`.
    Allow,
}

/// Parses a token as a 64-bit integer.
///
/// Checks run in a fixed order: empty token, missing numeric prefix, trailing
/// characters (only with [`Trailing::Reject`]), then range.
///
/// # Errors
/// `EmptyInput`, `Unparsable`, `TrailingGarbage` or
/// `IntegerOverflow { width: Long }`.
///
/// # Example
/// ```
/// use closedform::{
///     error::{IntegerWidth, ParseError},
///     input::number::{Trailing, parse_long},
/// };
///
/// assert_eq!(parse_long("-42", Trailing::Reject).unwrap(), -42);
/// assert_eq!(parse_long("5x", Trailing::Allow).unwrap(), 5);
///
/// let err = parse_long("99999999999999999999", Trailing::Reject).unwrap_err();
/// assert!(matches!(err, ParseError::IntegerOverflow { width: IntegerWidth::Long, .. }));
/// ```
pub fn parse_long(token: &str, trailing: Trailing) -> ParseResult<i64> {
    let prefix = numeric_prefix(token, trailing, leading::<IntegerPrefix>)?;

    prefix.number.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
                               IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                                   ParseError::IntegerOverflow { token: token.to_string(),
                                                                 width: IntegerWidth::Long, }
                               },
                               _ => ParseError::Unparsable { token: token.to_string() },
                           })
}

/// Parses a token as a 32-bit integer.
///
/// The value is read as a 64-bit integer first and narrowed afterwards, so a
/// literal can fail on either range.
///
/// # Errors
/// Everything [`parse_long`] returns, plus `IntegerOverflow { width: Int }`.
///
/// # Example
/// ```
/// use closedform::{
///     error::{IntegerWidth, ParseError},
///     input::number::{Trailing, parse_integer},
/// };
///
/// assert_eq!(parse_integer("12", Trailing::Reject).unwrap(), 12);
/// assert!(matches!(parse_integer("12a", Trailing::Reject),
///                  Err(ParseError::TrailingGarbage { .. })));
/// assert_eq!(parse_integer("12a", Trailing::Allow).unwrap(), 12);
///
/// let err = parse_integer("3000000000", Trailing::Reject).unwrap_err();
/// assert!(matches!(err, ParseError::IntegerOverflow { width: IntegerWidth::Int, .. }));
/// ```
pub fn parse_integer(token: &str, trailing: Trailing) -> ParseResult<i32> {
    let value = parse_long(token, trailing)?;
    let value = long_to_int_checked(value, token)?;
    debug!(token, value, "parsed integer");
    Ok(value)
}

/// Parses a token as a real number.
///
/// Accepts decimal notation with optional fraction and exponent, and the
/// words `inf`, `infinity` and `nan` in any letter case. A decimal literal
/// is rejected when its magnitude is out of range for a normal `f64`: too
/// large (it would become infinite) or too small (it would become zero or
/// subnormal). Literals whose digits are all zero, like `0e-400`, are exact
/// zeros and are accepted.
///
/// # Errors
/// `EmptyInput`, `Unparsable`, `TrailingGarbage` or `NumericOverflow`.
///
/// # Example
/// ```
/// use closedform::{
///     error::ParseError,
///     input::number::{Trailing, parse_real},
/// };
///
/// assert_eq!(parse_real("2.5", Trailing::Reject).unwrap(), 2.5);
/// assert_eq!(parse_real("-.5y", Trailing::Allow).unwrap(), -0.5);
/// assert!(parse_real("inf", Trailing::Reject).unwrap().is_infinite());
/// assert!(matches!(parse_real("1e400", Trailing::Reject),
///                  Err(ParseError::NumericOverflow { .. })));
/// assert!(matches!(parse_real("1e-400", Trailing::Reject),
///                  Err(ParseError::NumericOverflow { .. })));
/// ```
pub fn parse_real(token: &str, trailing: Trailing) -> ParseResult<f64> {
    let prefix = numeric_prefix(token, trailing, leading_real)?;

    let value: f64 =
        prefix.number.parse().map_err(|_| ParseError::Unparsable { token: token.to_string() })?;

    if prefix.kind == RealPrefix::Decimal && out_of_range(value, prefix.number) {
        return Err(ParseError::NumericOverflow { token: token.to_string() });
    }
    debug!(token, value, "parsed real");
    Ok(value)
}

/// Narrows a 64-bit integer to 32 bits.
///
/// # Errors
/// Returns `IntegerOverflow { width: Int }` naming `token` if the value does
/// not fit.
///
/// # Example
/// ```
/// use closedform::input::number::long_to_int_checked;
///
/// assert_eq!(long_to_int_checked(-7, "-7").unwrap(), -7);
/// assert!(long_to_int_checked(i64::from(i32::MAX) + 1, "2147483648").is_err());
/// ```
pub fn long_to_int_checked(value: i64, token: &str) -> ParseResult<i32> {
    i32::try_from(value).map_err(|_| ParseError::IntegerOverflow { token: token.to_string(),
                                                                   width: IntegerWidth::Int, })
}

/// A finite decimal literal that came out infinite, or that has a nonzero
/// mantissa digit but came out zero or subnormal.
fn out_of_range(value: f64, literal: &str) -> bool {
    if value.is_infinite() {
        return true;
    }
    let mantissa = literal.split(['e', 'E']).next().unwrap_or(literal);
    let nonzero = mantissa.bytes().any(|b| matches!(b, b'1'..=b'9'));
    nonzero && matches!(value.classify(), FpCategory::Zero | FpCategory::Subnormal)
}

fn numeric_prefix<'s, T>(token: &'s str,
                         trailing: Trailing,
                         scan: impl FnOnce(&'s str) -> Option<Prefix<'s, T>>)
                         -> ParseResult<Prefix<'s, T>> {
    if token.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let prefix =
        scan(token).ok_or_else(|| ParseError::Unparsable { token: token.to_string() })?;

    if trailing == Trailing::Reject && !prefix.rest.is_empty() {
        return Err(ParseError::TrailingGarbage { token: token.to_string(),
                                                 rest:  prefix.rest.to_string(), });
    }

    Ok(prefix)
}
