/// Input errors.
///
/// Defines every way a raw token or equation line can be rejected before any
/// calculation runs: empty input, non-numeric text, trailing characters,
/// integer and real overflow, and malformed equation lines.
pub mod parse_error;
/// Calculation errors.
///
/// Contains the domain failures raised by the calculation kernels, such as
/// division by zero, degenerate shapes or equations, missing real roots and
/// non-finite results.
pub mod calc_error;
/// Session errors.
///
/// Wraps input and calculation errors together with the failures that only
/// the interactive layer can produce: I/O problems, end of input, unknown
/// menu choices and cancellation.
pub mod session_error;

pub use calc_error::CalcError;
pub use parse_error::{IntegerWidth, ParseError};
pub use session_error::SessionError;
