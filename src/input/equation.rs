use tracing::debug;

use crate::{
    error::{IntegerWidth, ParseError},
    input::{
        number::{ParseResult, Trailing, parse_integer, parse_real},
        tokenizer::tokenize,
    },
};

/// Smallest number of tokens an equation line must have.
pub const MIN_TOKENS: usize = 5;

/// Position of the leading coefficient.
pub const FIRST: usize = 0;
/// Position of the sign in front of the second coefficient.
pub const SECOND_SIGN: usize = 1;
/// Position of the second coefficient.
pub const SECOND: usize = 2;
/// Position of the sign in front of the third coefficient.
pub const THIRD_SIGN: usize = 3;
/// Position of the third coefficient.
pub const THIRD: usize = 4;

/// Extracts `(a, b, c)` from a line shaped like `a·x + b·y = c`.
///
/// Only the sign token at position 1 is applied; the token at position 3 is
/// ignored and `c` is read literally from position 4, so its own sign (as in
/// `-8`) is what counts. Coefficients tolerate trailing variable names.
///
/// # Errors
/// `InvalidFormat` for fewer than five tokens, `InvalidCoefficient` if a
/// coefficient does not parse as a real.
///
/// # Example
/// ```
/// use closedform::input::equation::extract_linear;
///
/// assert_eq!(extract_linear("5x + 6y = 10").unwrap(), (5.0, 6.0, 10.0));
/// assert_eq!(extract_linear("10x - 10y = -8").unwrap(), (10.0, -10.0, -8.0));
/// // The sign before `c` is not applied.
/// assert_eq!(extract_linear("1x + 1y - 3").unwrap(), (1.0, 1.0, 3.0));
/// ```
pub fn extract_linear(line: &str) -> ParseResult<(f64, f64, f64)> {
    let tokens = equation_tokens(line)?;

    let a = coefficient(&tokens, FIRST, parse_real)?;
    let b = coefficient(&tokens, SECOND, parse_real)?;
    let c = coefficient(&tokens, THIRD, parse_real)?;

    let b = if is_negative(tokens[SECOND_SIGN]) { -b } else { b };

    debug!(line, a, b, c, "extracted linear coefficients");
    Ok((a, b, c))
}

/// Extracts `(a, b, c)` from a line shaped like `a·x^2 + b·x + c`.
///
/// Both sign tokens are applied: position 1 to `b` and position 3 to `c`.
/// Coefficients are 32-bit integers and tolerate trailing variable names.
///
/// # Errors
/// `InvalidFormat` for fewer than five tokens, `InvalidCoefficient` if a
/// coefficient does not parse or cannot be negated within 32 bits.
///
/// # Example
/// ```
/// use closedform::input::equation::extract_quadratic;
///
/// assert_eq!(extract_quadratic("2x^2 + 5x - 10").unwrap(), (2, 5, -10));
/// assert_eq!(extract_quadratic("1x^2 - 3x + 2").unwrap(), (1, -3, 2));
/// assert!(extract_quadratic("x^2 + 1").is_err());
/// ```
pub fn extract_quadratic(line: &str) -> ParseResult<(i32, i32, i32)> {
    let tokens = equation_tokens(line)?;

    let a = coefficient(&tokens, FIRST, parse_integer)?;
    let b = coefficient(&tokens, SECOND, parse_integer)?;
    let c = coefficient(&tokens, THIRD, parse_integer)?;

    let b = signed(b, &tokens, SECOND_SIGN, SECOND)?;
    let c = signed(c, &tokens, THIRD_SIGN, THIRD)?;

    debug!(line, a, b, c, "extracted quadratic coefficients");
    Ok((a, b, c))
}

/// Returns `true` only for the literal sign token `-`.
///
/// Every other token, `+` included, means a positive coefficient.
#[must_use]
pub fn is_negative(sign: &str) -> bool {
    sign == "-"
}

fn equation_tokens(line: &str) -> ParseResult<Vec<&str>> {
    let tokens = tokenize(line);
    if tokens.len() < MIN_TOKENS {
        return Err(ParseError::InvalidFormat { line:  line.to_string(),
                                               found: tokens.len(), });
    }
    Ok(tokens)
}

fn coefficient<T>(tokens: &[&str],
                  position: usize,
                  parse: impl Fn(&str, Trailing) -> ParseResult<T>)
                  -> ParseResult<T> {
    parse(tokens[position], Trailing::Allow).map_err(|e| ParseError::InvalidCoefficient { position,
                                                                                          source: Box::new(e) })
}

fn signed(value: i32, tokens: &[&str], sign: usize, position: usize) -> ParseResult<i32> {
    if !is_negative(tokens[sign]) {
        return Ok(value);
    }
    value.checked_neg().ok_or_else(|| {
                           let overflow =
                               ParseError::IntegerOverflow { token: format!("-{}", tokens[position]),
                                                             width: IntegerWidth::Int, };
                           ParseError::InvalidCoefficient { position,
                                                            source: Box::new(overflow) }
                       })
}
