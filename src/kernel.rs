use crate::error::CalcError;

/// Result type returned by every calculation kernel.
pub type CalcResult<T> = Result<T, CalcError>;

/// Area formulas for squares, rectangles and triangles.
///
/// Integer areas are guarded against overflow before the product is formed;
/// the triangle area is computed in floating point and rejected if it is not
/// finite.
pub mod area;
/// The four-function calculator.
///
/// Holds two real operands and applies addition, subtraction, multiplication
/// or division. Division by zero and non-finite results are reported as
/// errors instead of producing `inf` or `NaN`.
pub mod arithmetic;
/// Two-variable linear systems solved with Cramer's rule.
pub mod cramer;
/// Quadratic equations solved with the quadratic formula.
///
/// The discriminant is computed exactly in 128-bit arithmetic; roots are
/// computed in floating point as `(-b ± √D) / (2a)`.
pub mod quadratic;

/// Returns `value` if it is finite.
///
/// # Errors
/// Returns `ArithmeticOverflow { operation }` for infinities and `NaN`.
///
/// # Example
/// ```
/// use closedform::{error::CalcError, kernel::finite};
///
/// assert_eq!(finite(1.5, "sum").unwrap(), 1.5);
/// assert!(matches!(finite(f64::INFINITY, "sum"),
///                  Err(CalcError::ArithmeticOverflow { operation: "sum" })));
/// ```
pub fn finite(value: f64, operation: &'static str) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::ArithmeticOverflow { operation })
    }
}
