/// The scan module finds the numeric prefix of a token.
///
/// Built on `logos`: each prefix grammar (integer, real) is a small token
/// enum, and scanning a token means lexing exactly one item from its start.
/// Leading ASCII whitespace is skipped; whatever follows the prefix is handed
/// back to the caller untouched.
pub mod scan;
/// Strict numeric parsing with classified failures.
///
/// # Responsibilities
/// - Distinguishes empty input, unparsable input, trailing garbage and
///   overflow.
/// - Reads integers through a 64-bit stage before narrowing to 32 bits.
/// - Lets callers choose whether trailing characters are an error.
pub mod number;
/// Splits a line into space-separated tokens.
pub mod tokenizer;
/// Positional coefficient extraction for equation lines.
///
/// Turns lines shaped like `5x + 6y = 10` into signed coefficients. The
/// linear and quadratic extractors apply the sign convention differently and
/// are kept as two separate functions.
pub mod equation;
