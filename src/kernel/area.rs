use std::fmt::Display;

use tracing::debug;

use crate::{
    error::CalcError,
    kernel::{CalcResult, finite},
};

/// Largest side length whose square fits into an `i32`.
pub const MAX_SQUARE_SIDE: i32 = i32::MAX.isqrt();

/// The shapes offered by the area calculator menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Menu choice `1`.
    Square,
    /// Menu choice `2`.
    Rectangle,
    /// Menu choice `3`.
    Triangle,
}

impl Shape {
    /// Maps a menu number to a shape.
    ///
    /// # Example
    /// ```
    /// use closedform::kernel::area::Shape;
    ///
    /// assert_eq!(Shape::from_choice(3), Some(Shape::Triangle));
    /// assert_eq!(Shape::from_choice(4), None);
    /// ```
    #[must_use]
    pub const fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Self::Square),
            2 => Some(Self::Rectangle),
            3 => Some(Self::Triangle),
            _ => None,
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Square => write!(f, "square"),
            Self::Rectangle => write!(f, "rectangle"),
            Self::Triangle => write!(f, "triangle"),
        }
    }
}

/// An area, exact for squares and rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Area {
    /// Area of a square or rectangle.
    Whole(i32),
    /// Area of a triangle.
    Fractional(f64),
}

impl Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Whole(area) => write!(f, "{area}"),
            Self::Fractional(area) => write!(f, "{area}"),
        }
    }
}

/// Computes the area of a square with the given side.
///
/// The side is range-checked against [`MAX_SQUARE_SIDE`] before squaring, so
/// the multiplication itself can never overflow.
///
/// # Errors
/// - `ArithmeticOverflow` if `|side| > MAX_SQUARE_SIDE`.
/// - `DegenerateInput` if `side == 0`.
///
/// # Example
/// ```
/// use closedform::{error::CalcError, kernel::area::square_area};
///
/// assert_eq!(square_area(5).unwrap(), 25);
/// assert_eq!(square_area(-4).unwrap(), 16);
/// assert!(matches!(square_area(0), Err(CalcError::DegenerateInput { .. })));
/// assert!(matches!(square_area(46_341), Err(CalcError::ArithmeticOverflow { .. })));
/// ```
pub fn square_area(side: i32) -> CalcResult<i32> {
    if !(-MAX_SQUARE_SIDE..=MAX_SQUARE_SIDE).contains(&side) {
        return Err(CalcError::ArithmeticOverflow { operation: "square area" });
    }
    if side == 0 {
        return Err(CalcError::DegenerateInput { what: "the side of a square cannot be 0" });
    }
    let area = side * side;
    debug!(side, area, "square area");
    Ok(area)
}

/// Computes the area of a rectangle with sides `a` and `b`.
///
/// # Errors
/// Returns `ArithmeticOverflow` if `a * b` does not fit into an `i32`.
///
/// # Example
/// ```
/// use closedform::{error::CalcError, kernel::area::rectangle_area};
///
/// assert_eq!(rectangle_area(3, 4).unwrap(), 12);
/// assert_eq!(rectangle_area(0, i32::MAX).unwrap(), 0);
/// assert!(matches!(rectangle_area(65_536, 65_536),
///                  Err(CalcError::ArithmeticOverflow { .. })));
/// ```
pub fn rectangle_area(a: i32, b: i32) -> CalcResult<i32> {
    let area = a.checked_mul(b)
                .ok_or(CalcError::ArithmeticOverflow { operation: "rectangle area" })?;
    debug!(a, b, area, "rectangle area");
    Ok(area)
}

/// Computes the area of a triangle from two sides and the angle between them.
///
/// `area = ½ · a · b · sin(angle)`, with the angle given in degrees.
///
/// # Errors
/// Returns `ArithmeticOverflow` if the result is not finite.
///
/// # Example
/// ```
/// use closedform::kernel::area::triangle_area;
///
/// let area = triangle_area(3, 4, 90).unwrap();
/// assert!((area - 6.0).abs() < 1e-12);
/// ```
pub fn triangle_area(a: i32, b: i32, angle_degrees: i32) -> CalcResult<f64> {
    let angle = f64::from(angle_degrees).to_radians();
    let area = finite(0.5 * f64::from(a) * f64::from(b) * angle.sin(), "triangle area")?;
    debug!(a, b, angle_degrees, area, "triangle area");
    Ok(area)
}
