use logos::Logos;

/// Integer prefixes such as `42`, `-7` or `+3`.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\f\x0B]+")]
pub enum IntegerPrefix {
    /// An optionally signed run of decimal digits.
    #[regex(r"[+-]?[0-9]+")]
    Digits,
}

/// Real prefixes such as `3.14`, `.5`, `2.`, `inf` or `nan`.
///
/// The exponent of a decimal and the `inity` of `infinity` are optional tails
/// that are only consumed when complete; [`leading_real`] attaches them after
/// the lexer has matched the mandatory part.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\f\x0B]+")]
pub enum RealPrefix {
    /// A decimal mantissa with an optional fraction.
    #[regex(r"[+-]?[0-9]+(\.[0-9]*)?")]
    #[regex(r"[+-]?\.[0-9]+")]
    Decimal,
    /// `inf` or `nan` in any letter case.
    #[regex(r"[+-]?[iI][nN][fF]")]
    #[regex(r"[+-]?[nN][aA][nN]")]
    NonFinite,
}

/// A numeric prefix found at the start of a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Prefix<'s, T> {
    /// Which grammar rule matched.
    pub kind:   T,
    /// The matched text, without leading whitespace.
    pub number: &'s str,
    /// Everything after the match.
    pub rest:   &'s str,
}

/// Scans the numeric prefix of `token` using the grammar `T`.
///
/// # Returns
/// - `Some(Prefix)`: The longest prefix matching `T` and the remaining text.
/// - `None`: If the token (after leading whitespace) does not start with a
///   number.
///
/// # Example
/// ```
/// use closedform::input::scan::{IntegerPrefix, leading};
///
/// let prefix = leading::<IntegerPrefix>(" 12a").unwrap();
/// assert_eq!(prefix.number, "12");
/// assert_eq!(prefix.rest, "a");
///
/// assert!(leading::<IntegerPrefix>("x").is_none());
/// assert!(leading::<IntegerPrefix>("-").is_none());
/// ```
#[must_use]
pub fn leading<'s, T>(token: &'s str) -> Option<Prefix<'s, T>>
    where T: Logos<'s, Source = str>,
          T::Extras: Default
{
    let mut lexer = T::lexer(token);
    match lexer.next() {
        Some(Ok(kind)) => Some(Prefix { kind,
                                        number: lexer.slice(),
                                        rest: &token[lexer.span().end..] }),
        _ => None,
    }
}

/// Scans the real-number prefix of `token`, including a complete exponent.
///
/// An exponent marker without digits (`1.5e`, `2e+`) is not consumed and is
/// left in the rest, as is anything after `inf` that does not spell out
/// `infinity`.
///
/// # Example
/// ```
/// use closedform::input::scan::{RealPrefix, leading_real};
///
/// let prefix = leading_real("2.1e-10x").unwrap();
/// assert_eq!((prefix.number, prefix.rest), ("2.1e-10", "x"));
///
/// let prefix = leading_real("1.5e").unwrap();
/// assert_eq!((prefix.number, prefix.rest), ("1.5", "e"));
///
/// let prefix = leading_real("-Infinity").unwrap();
/// assert_eq!(prefix.kind, RealPrefix::NonFinite);
/// assert_eq!(prefix.rest, "");
/// ```
#[must_use]
pub fn leading_real(token: &str) -> Option<Prefix<'_, RealPrefix>> {
    let prefix = leading::<RealPrefix>(token)?;

    let tail = match prefix.kind {
        RealPrefix::Decimal => exponent_len(prefix.rest),
        RealPrefix::NonFinite => infinity_tail_len(prefix.number, prefix.rest),
    };

    let end = token.len() - prefix.rest.len() + tail;
    let start = token.len() - prefix.rest.len() - prefix.number.len();
    Some(Prefix { kind:   prefix.kind,
                  number: &token[start..end],
                  rest:   &token[end..], })
}

fn exponent_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 { 0 } else { 1 + sign + digits }
}

fn infinity_tail_len(number: &str, rest: &str) -> usize {
    const TAIL: &str = "inity";

    let is_inf = number.trim_start_matches(['+', '-']).eq_ignore_ascii_case("inf");
    let spelled_out = rest.get(..TAIL.len()).is_some_and(|tail| tail.eq_ignore_ascii_case(TAIL));
    if is_inf && spelled_out { TAIL.len() } else { 0 }
}
