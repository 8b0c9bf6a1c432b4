use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
/// Represents all domain failures raised by the calculation kernels.
pub enum CalcError {
    /// Attempted division by zero.
    #[error("Error: Division by zero.")]
    DivisionByZero,
    /// The input describes a degenerate shape or equation.
    #[error("Error: Degenerate input: {what}.")]
    DegenerateInput {
        /// What made the input degenerate.
        what: &'static str,
    },
    /// The quadratic has a negative discriminant.
    #[error("Error: No real roots, the discriminant {discriminant} is negative.")]
    NoRealRoots {
        /// The computed discriminant.
        discriminant: i128,
    },
    /// The linear system has no unique solution.
    #[error("Error: No unique solution, the determinant is {determinant}.")]
    NoUniqueSolution {
        /// The determinant of the coefficient matrix.
        determinant: f64,
    },
    /// A result overflowed or was not finite.
    #[error("Error: Overflow while trying to compute the {operation}.")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
}
