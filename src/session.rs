use std::io::Write;

use tracing::{debug, warn};

use crate::{
    error::SessionError,
    input::number::{Trailing, parse_integer, parse_real},
    kernel::{
        area::{Area, Shape, rectangle_area, square_area, triangle_area},
        arithmetic::{Calculator, Operation},
        cramer::{LinearEquation, LinearSystem},
        quadratic::QuadraticEquation,
    },
};

/// Line sources a session can read from.
///
/// The session never touches standard input directly; it asks a
/// [`LineSource`](source::LineSource) for each line, so the same flow runs on
/// a terminal, on command-line arguments, or on a fixed list in tests.
pub mod source;

use source::LineSource;

/// Result type of every session flow.
pub type SessionResult<T> = Result<T, SessionError>;

/// Typing this at an arithmetic prompt cancels the session.
pub const EXIT_WORD: &str = "exit";

/// Drives one calculator over a line source and an output sink.
///
/// Prompts go to the sink only when enabled; results always do. Nothing is
/// printed to the process's standard streams directly.
///
/// Every flow fails with `Io` when the sink cannot be written or the source
/// reports a read error in place of the next line.
pub struct Session<S, W> {
    source:  S,
    out:     W,
    prompts: bool,
}

impl<S: LineSource, W: Write> Session<S, W> {
    /// Creates a session that prints prompts.
    pub const fn new(source: S, out: W) -> Self {
        Self { source,
               out,
               prompts: true }
    }

    /// Turns prompts on or off.
    #[must_use]
    pub fn with_prompts(mut self, prompts: bool) -> Self {
        self.prompts = prompts;
        self
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the area calculator.
    ///
    /// Reads a menu choice (`1` square, `2` rectangle, `3` triangle), then the
    /// shape's operands, each a strictly parsed integer.
    ///
    /// # Errors
    /// `Parse` for a bad number, `UnknownShape` for a bad choice, `Calc` for a
    /// failing formula, `EndOfInput` if a line is missing.
    ///
    /// # Example
    /// ```
    /// use closedform::{
    ///     kernel::area::Area,
    ///     session::{Session, source::IterSource},
    /// };
    ///
    /// let mut session = Session::new(IterSource::new(["2", "3", "4"]), Vec::new());
    /// assert_eq!(session.area().unwrap(), Area::Whole(12));
    ///
    /// let output = String::from_utf8(session.into_output()).unwrap();
    /// assert!(output.ends_with("Area of the rectangle is: 12\n"));
    /// ```
    pub fn area(&mut self) -> SessionResult<Area> {
        self.prompt("square(1)\trectangle(2)\ttriangle(3)")?;
        let choice = self.read_integer("a shape")?;
        let shape = Shape::from_choice(choice).ok_or(SessionError::UnknownShape { choice })?;
        debug!(%shape, "shape chosen");

        let area = match shape {
            Shape::Square => {
                self.prompt("Input the side x of a square:")?;
                let side = self.read_integer("the side of the square")?;
                Area::Whole(square_area(side)?)
            },
            Shape::Rectangle => {
                self.prompt("Input side a of a rectangle:")?;
                let a = self.read_integer("side a of the rectangle")?;
                self.prompt("Input side b of a rectangle:")?;
                let b = self.read_integer("side b of the rectangle")?;
                Area::Whole(rectangle_area(a, b)?)
            },
            Shape::Triangle => {
                self.prompt("Input side a of a triangle:")?;
                let a = self.read_integer("side a of the triangle")?;
                self.prompt("Input side b of a triangle:")?;
                let b = self.read_integer("side b of the triangle")?;
                self.prompt("Input the angle between a and b in degrees:")?;
                let angle = self.read_integer("the angle of the triangle")?;
                Area::Fractional(triangle_area(a, b, angle)?)
            },
        };

        writeln!(self.out, "Area of the {shape} is: {area}")?;
        Ok(area)
    }

    /// Runs the arithmetic calculator.
    ///
    /// Asks for `x` and `y` until each parses as a real, printing the reason
    /// for every rejected line. [`EXIT_WORD`] cancels. Then prints one line
    /// per operation: all four, or only `only` if given. A failing operation
    /// prints its error in place of the result.
    ///
    /// # Errors
    /// `Cancelled`, `EndOfInput`, or `Calc` with the first failed operation
    /// after every line has been printed.
    ///
    /// # Example
    /// ```
    /// use closedform::{
    ///     kernel::arithmetic::Operation,
    ///     session::{Session, source::IterSource},
    /// };
    ///
    /// let source = IterSource::new(["six", "6", "3"]);
    /// let mut session = Session::new(source, Vec::new()).with_prompts(false);
    /// let results = session.arithmetic(Some(Operation::Div)).unwrap();
    /// assert_eq!(results, [(Operation::Div, 2.0)]);
    /// ```
    pub fn arithmetic(&mut self, only: Option<Operation>) -> SessionResult<Vec<(Operation, f64)>> {
        let a = self.read_real_retrying("Please provide x:", "x")?;
        let b = self.read_real_retrying("Please provide y:", "y")?;
        let calculator = Calculator::new(a, b);

        let operations = only.map_or_else(|| Operation::ALL.to_vec(), |op| vec![op]);
        let mut results = Vec::with_capacity(operations.len());
        let mut failure = None;

        for op in operations {
            match calculator.apply(op) {
                Ok(result) => {
                    writeln!(self.out, "{a} {op} {b} = {result}")?;
                    results.push((op, result));
                },
                Err(e) => {
                    writeln!(self.out, "{a} {op} {b}: {e}")?;
                    if failure.is_none() {
                        failure = Some(e);
                    }
                },
            }
        }

        match failure {
            Some(e) => Err(e.into()),
            None => Ok(results),
        }
    }

    /// Runs the linear system solver.
    ///
    /// Reads two equation lines such as `5x + 6y = 10`, prints the
    /// coefficients it extracted, then `x` and `y`.
    ///
    /// # Errors
    /// `Parse` for a malformed equation, `Calc` if the system has no unique
    /// solution, `EndOfInput` if a line is missing.
    pub fn cramer(&mut self) -> SessionResult<(f64, f64)> {
        self.prompt("Input the first equation (e.g. 5x + 6y = 10):")?;
        let first = LinearEquation::parse(&self.next_line("the first equation")?)?;
        self.prompt("Input the second equation:")?;
        let second = LinearEquation::parse(&self.next_line("the second equation")?)?;

        for (number, LinearEquation { a, b, c }) in [(1, first), (2, second)] {
            writeln!(self.out, "equation {number}: a = {a}, b = {b}, c = {c}")?;
        }

        let (x, y) = LinearSystem::new(first, second).solve()?;
        writeln!(self.out, "x = {x}")?;
        writeln!(self.out, "y = {y}")?;
        Ok((x, y))
    }

    /// Runs the quadratic solver.
    ///
    /// Reads one equation line such as `2x^2 + 5x - 10`, prints the
    /// coefficients it extracted, then both roots.
    ///
    /// # Errors
    /// `Parse` for a malformed equation, `Calc` for a zero leading
    /// coefficient or a negative discriminant, `EndOfInput` if the line is
    /// missing.
    ///
    /// # Example
    /// ```
    /// use closedform::session::{Session, source::IterSource};
    ///
    /// let source = IterSource::new(["1x^2 - 3x + 2"]);
    /// let mut session = Session::new(source, Vec::new()).with_prompts(false);
    /// assert_eq!(session.quadratic().unwrap(), (2.0, 1.0));
    ///
    /// let output = String::from_utf8(session.into_output()).unwrap();
    /// assert_eq!(output, "a: 1 b: -3 c: 2\nx1: 2 x2: 1\n");
    /// ```
    pub fn quadratic(&mut self) -> SessionResult<(f64, f64)> {
        self.prompt("Input a quadratic equation (e.g. 2x^2 + 5x - 10):")?;
        let equation = QuadraticEquation::parse(&self.next_line("the equation")?)?;

        let QuadraticEquation { a, b, c } = equation;
        writeln!(self.out, "a: {a} b: {b} c: {c}")?;

        let (x1, x2) = equation.solve()?;
        writeln!(self.out, "x1: {x1} x2: {x2}")?;
        Ok((x1, x2))
    }

    fn prompt(&mut self, text: &str) -> SessionResult<()> {
        if self.prompts {
            writeln!(self.out, "{text}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn next_line(&mut self, expected: &'static str) -> SessionResult<String> {
        match self.source.read_line() {
            Some(line) => Ok(line),
            None => Err(self.source.take_error().map_or(SessionError::EndOfInput { expected },
                                                        SessionError::Io)),
        }
    }

    fn read_integer(&mut self, expected: &'static str) -> SessionResult<i32> {
        let line = self.next_line(expected)?;
        Ok(parse_integer(&line, Trailing::Reject)?)
    }

    fn read_real_retrying(&mut self, prompt: &str, expected: &'static str) -> SessionResult<f64> {
        loop {
            self.prompt(prompt)?;
            let line = self.next_line(expected)?;
            if line.trim() == EXIT_WORD {
                return Err(SessionError::Cancelled);
            }
            match parse_real(&line, Trailing::Reject) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!(input = %line, "rejected {expected}: {e}");
                    writeln!(self.out, "{e}")?;
                },
            }
        }
    }
}
