use std::{fmt::Display, str::FromStr};

use tracing::debug;

use crate::{
    error::CalcError,
    input::number::{ParseResult, Trailing, parse_real},
    kernel::{CalcResult, finite},
};

/// One of the four calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
}

impl Operation {
    /// Every operation, in the order the calculator prints them.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Div, Self::Mul];

    const fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Sub => write!(f, "-"),
            Self::Mul => write!(f, "*"),
            Self::Div => write!(f, "/"),
        }
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" | "+" => Ok(Self::Add),
            "sub" | "-" => Ok(Self::Sub),
            "mul" | "*" => Ok(Self::Mul),
            "div" | "/" => Ok(Self::Div),
            _ => Err(format!("unknown operation '{s}', expected add, sub, mul or div")),
        }
    }
}

/// A calculator over two real operands.
///
/// Every operation checks its result: division rejects a zero divisor and
/// any infinite or `NaN` result is reported as an overflow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Calculator {
    a: f64,
    b: f64,
}

impl Calculator {
    /// Creates a calculator with operands `a` and `b`.
    #[must_use]
    pub const fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Creates a calculator from two lines holding one number each.
    ///
    /// Both lines are parsed strictly: anything after the number is an error.
    ///
    /// # Errors
    /// Returns the classified `ParseError` of the first line that fails.
    ///
    /// # Example
    /// ```
    /// use closedform::kernel::arithmetic::Calculator;
    ///
    /// let calculator = Calculator::parse("1.5", "-2").unwrap();
    /// assert_eq!(calculator.a(), 1.5);
    /// assert_eq!(calculator.b(), -2.0);
    /// assert!(Calculator::parse("1.5", "two").is_err());
    /// ```
    pub fn parse(first: &str, second: &str) -> ParseResult<Self> {
        Ok(Self::new(parse_real(first, Trailing::Reject)?, parse_real(second, Trailing::Reject)?))
    }

    /// The left operand.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The right operand.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Replaces the left operand.
    pub const fn set_a(&mut self, a: f64) {
        self.a = a;
    }

    /// Replaces the right operand.
    pub const fn set_b(&mut self, b: f64) {
        self.b = b;
    }

    /// Returns `a + b`.
    ///
    /// # Errors
    /// `ArithmeticOverflow` if the sum is not finite.
    pub fn add(&self) -> CalcResult<f64> {
        finite(self.a + self.b, Operation::Add.name())
    }

    /// Returns `a - b`.
    ///
    /// # Errors
    /// `ArithmeticOverflow` if the difference is not finite.
    pub fn sub(&self) -> CalcResult<f64> {
        finite(self.a - self.b, Operation::Sub.name())
    }

    /// Returns `a * b`.
    ///
    /// # Errors
    /// `ArithmeticOverflow` if the product is not finite.
    pub fn mul(&self) -> CalcResult<f64> {
        finite(self.a * self.b, Operation::Mul.name())
    }

    /// Returns `a / b`.
    ///
    /// # Errors
    /// `DivisionByZero` if `b == 0.0`, `ArithmeticOverflow` if the quotient is
    /// not finite.
    ///
    /// # Example
    /// ```
    /// use closedform::{error::CalcError, kernel::arithmetic::Calculator};
    ///
    /// assert_eq!(Calculator::new(1.0, 4.0).div().unwrap(), 0.25);
    /// assert!(matches!(Calculator::new(1.0, 0.0).div(), Err(CalcError::DivisionByZero)));
    /// assert!(matches!(Calculator::new(f64::MAX, 0.5).div(),
    ///                  Err(CalcError::ArithmeticOverflow { .. })));
    /// ```
    pub fn div(&self) -> CalcResult<f64> {
        if self.b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        finite(self.a / self.b, Operation::Div.name())
    }

    /// Applies `op` to the operands.
    ///
    /// # Errors
    /// Whatever the chosen operation returns.
    ///
    /// # Example
    /// ```
    /// use closedform::kernel::arithmetic::{Calculator, Operation};
    ///
    /// let calculator = Calculator::new(6.0, 3.0);
    /// assert_eq!(calculator.apply(Operation::Sub).unwrap(), 3.0);
    /// assert_eq!(calculator.apply(Operation::Div).unwrap(), 2.0);
    /// ```
    pub fn apply(&self, op: Operation) -> CalcResult<f64> {
        let result = match op {
            Operation::Add => self.add(),
            Operation::Sub => self.sub(),
            Operation::Mul => self.mul(),
            Operation::Div => self.div(),
        };
        debug!(a = self.a, b = self.b, %op, ?result, "applied operation");
        result
    }
}
