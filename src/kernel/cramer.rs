use tracing::debug;

use crate::{
    error::CalcError,
    input::{equation::extract_linear, number::ParseResult},
    kernel::{CalcResult, finite},
};

/// One equation `a·x + b·y = c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearEquation {
    /// Coefficient of `x`.
    pub a: f64,
    /// Coefficient of `y`.
    pub b: f64,
    /// Right-hand side.
    pub c: f64,
}

impl LinearEquation {
    /// Creates an equation from its coefficients.
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Parses a line such as `5x + 6y = 10`.
    ///
    /// See [`extract_linear`] for the token layout and sign handling.
    ///
    /// # Errors
    /// `InvalidFormat` or `InvalidCoefficient`.
    pub fn parse(line: &str) -> ParseResult<Self> {
        let (a, b, c) = extract_linear(line)?;
        Ok(Self::new(a, b, c))
    }
}

/// Returns the 2×2 determinant `a1·b2 − a2·b1`.
///
/// # Example
/// ```
/// use closedform::kernel::cramer::determinant;
///
/// assert_eq!(determinant(1.0, 3.0, 2.0, 4.0), -2.0);
/// ```
#[must_use]
pub fn determinant(a1: f64, a2: f64, b1: f64, b2: f64) -> f64 {
    a1 * b2 - a2 * b1
}

/// The three determinants Cramer's rule needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Determinants {
    /// Determinant of the coefficient matrix.
    pub d:  f64,
    /// Determinant with the `x` column replaced by the right-hand side.
    pub dx: f64,
    /// Determinant with the `y` column replaced by the right-hand side.
    pub dy: f64,
}

/// A system of two linear equations in `x` and `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearSystem {
    /// The first equation.
    pub first:  LinearEquation,
    /// The second equation.
    pub second: LinearEquation,
}

impl LinearSystem {
    /// Creates a system from two equations.
    #[must_use]
    pub const fn new(first: LinearEquation, second: LinearEquation) -> Self {
        Self { first, second }
    }

    /// Parses a system from two equation lines.
    ///
    /// # Errors
    /// The `ParseError` of the first line that fails.
    ///
    /// # Example
    /// ```
    /// use closedform::kernel::cramer::{LinearEquation, LinearSystem};
    ///
    /// let system = LinearSystem::parse("5x + 6y = 10", "10x + 10y = -8").unwrap();
    /// assert_eq!(system.first, LinearEquation::new(5.0, 6.0, 10.0));
    /// assert_eq!(system.second, LinearEquation::new(10.0, 10.0, -8.0));
    /// ```
    pub fn parse(first: &str, second: &str) -> ParseResult<Self> {
        Ok(Self::new(LinearEquation::parse(first)?, LinearEquation::parse(second)?))
    }

    /// Computes `D`, `Dx` and `Dy`.
    #[must_use]
    pub fn determinants(&self) -> Determinants {
        let LinearEquation { a: a1, b: b1, c: c1 } = self.first;
        let LinearEquation { a: a2, b: b2, c: c2 } = self.second;

        Determinants { d:  determinant(a1, a2, b1, b2),
                       dx: determinant(c1, c2, b1, b2),
                       dy: determinant(a1, a2, c1, c2), }
    }

    /// Solves the system with Cramer's rule: `x = Dx / D`, `y = Dy / D`.
    ///
    /// The system has a unique solution exactly when `D` is nonzero; `Dx`
    /// and `Dy` may be zero, in which case the matching unknown is zero.
    ///
    /// # Errors
    /// - `NoUniqueSolution` if `D == 0`.
    /// - `ArithmeticOverflow` if a determinant or the solution is not finite.
    ///
    /// # Example
    /// ```
    /// use closedform::{
    ///     error::CalcError,
    ///     kernel::cramer::{LinearEquation, LinearSystem},
    /// };
    ///
    /// // x + y = 2, x - y = 0
    /// let system = LinearSystem::new(LinearEquation::new(1.0, 1.0, 2.0),
    ///                                LinearEquation::new(1.0, -1.0, 0.0));
    /// assert_eq!(system.solve().unwrap(), (1.0, 1.0));
    ///
    /// // Parallel lines.
    /// let system = LinearSystem::new(LinearEquation::new(1.0, 1.0, 2.0),
    ///                                LinearEquation::new(2.0, 2.0, 5.0));
    /// assert!(matches!(system.solve(), Err(CalcError::NoUniqueSolution { .. })));
    /// ```
    pub fn solve(&self) -> CalcResult<(f64, f64)> {
        let Determinants { d, dx, dy } = self.determinants();

        for value in [d, dx, dy] {
            finite(value, "determinant")?;
        }
        if d == 0.0 {
            return Err(CalcError::NoUniqueSolution { determinant: d });
        }

        let x = finite(dx / d, "solution for x")?;
        let y = finite(dy / d, "solution for y")?;
        debug!(d, dx, dy, x, y, "solved linear system");
        Ok((x, y))
    }
}
