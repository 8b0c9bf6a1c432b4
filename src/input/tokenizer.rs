/// Splits a line into tokens on the space character.
///
/// Runs of spaces never produce empty tokens. Other whitespace is not a
/// delimiter and stays inside its token.
///
/// # Example
/// ```
/// use closedform::input::tokenizer::tokenize;
///
/// assert_eq!(tokenize("5x + 6y = 10"), ["5x", "+", "6y", "=", "10"]);
/// assert_eq!(tokenize("  1   2 "), ["1", "2"]);
/// assert!(tokenize("").is_empty());
/// ```
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(' ').filter(|token| !token.is_empty()).collect()
}
