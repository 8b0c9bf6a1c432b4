use tracing::debug;

use crate::{
    error::CalcError,
    input::{equation::extract_quadratic, number::ParseResult},
    kernel::{CalcResult, finite},
};

/// An equation `a·x² + b·x + c = 0` with integer coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuadraticEquation {
    /// Coefficient of `x²`. Must be nonzero for the equation to be quadratic.
    pub a: i32,
    /// Coefficient of `x`.
    pub b: i32,
    /// Constant term.
    pub c: i32,
}

impl QuadraticEquation {
    /// Creates an equation from its coefficients.
    #[must_use]
    pub const fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    /// Parses a line such as `2x^2 + 5x - 10`.
    ///
    /// See [`extract_quadratic`] for the token layout and sign handling.
    ///
    /// # Errors
    /// `InvalidFormat` or `InvalidCoefficient`.
    ///
    /// # Example
    /// ```
    /// use closedform::kernel::quadratic::QuadraticEquation;
    ///
    /// let equation = QuadraticEquation::parse("2x^2 + 5x - 10").unwrap();
    /// assert_eq!(equation, QuadraticEquation::new(2, 5, -10));
    /// ```
    pub fn parse(line: &str) -> ParseResult<Self> {
        let (a, b, c) = extract_quadratic(line)?;
        Ok(Self::new(a, b, c))
    }

    /// Returns the discriminant `b² − 4ac`.
    ///
    /// Computed in `i128`, which holds the result for every pair of `i32`
    /// coefficients.
    ///
    /// # Example
    /// ```
    /// use closedform::kernel::quadratic::QuadraticEquation;
    ///
    /// assert_eq!(QuadraticEquation::new(1, -3, 2).discriminant(), 1);
    /// assert_eq!(QuadraticEquation::new(i32::MIN, 0, i32::MIN).discriminant(), -(1_i128 << 64));
    /// ```
    #[must_use]
    pub fn discriminant(&self) -> i128 {
        let (a, b, c) = (i128::from(self.a), i128::from(self.b), i128::from(self.c));
        b * b - 4 * a * c
    }

    /// Solves for both real roots, `(-b + √D) / (2a)` first.
    ///
    /// # Errors
    /// - `DegenerateInput` if `a == 0`.
    /// - `NoRealRoots` if the discriminant is negative.
    ///
    /// # Example
    /// ```
    /// use closedform::{error::CalcError, kernel::quadratic::QuadraticEquation};
    ///
    /// assert_eq!(QuadraticEquation::new(1, -3, 2).solve().unwrap(), (2.0, 1.0));
    /// assert_eq!(QuadraticEquation::new(2, -4, 0).solve().unwrap(), (2.0, 0.0));
    /// assert!(matches!(QuadraticEquation::new(1, 0, 1).solve(),
    ///                  Err(CalcError::NoRealRoots { discriminant: -4 })));
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn solve(&self) -> CalcResult<(f64, f64)> {
        if self.a == 0 {
            return Err(CalcError::DegenerateInput { what: "the leading coefficient cannot be 0" });
        }

        let discriminant = self.discriminant();
        if discriminant < 0 {
            return Err(CalcError::NoRealRoots { discriminant });
        }

        let root = (discriminant as f64).sqrt();
        let b = f64::from(self.b);
        let denominator = 2.0 * f64::from(self.a);

        let x1 = finite((-b + root) / denominator, "first root")?;
        let x2 = finite((-b - root) / denominator, "second root")?;
        debug!(%discriminant, x1, x2, "solved quadratic");
        Ok((x1, x2))
    }
}
