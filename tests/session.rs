use closedform::{
    Program,
    error::{CalcError, ParseError, SessionError},
    kernel::{area::Area, arithmetic::Operation},
    run,
    session::{
        Session,
        source::{IterSource, ReaderLines},
    },
};

fn quiet_session(lines: &[&str]) -> Session<IterSource<std::vec::IntoIter<String>>, Vec<u8>> {
    let lines: Vec<String> = lines.iter().map(ToString::to_string).collect();
    Session::new(IterSource::new(lines), Vec::new()).with_prompts(false)
}

fn output_of(session: Session<IterSource<std::vec::IntoIter<String>>, Vec<u8>>) -> String {
    String::from_utf8(session.into_output()).expect("output is UTF-8")
}

#[test]
fn area_menu_dispatches_to_each_shape() {
    let mut session = quiet_session(&["1", "5"]);
    assert_eq!(session.area().unwrap(), Area::Whole(25));
    assert_eq!(output_of(session), "Area of the square is: 25\n");

    let mut session = quiet_session(&["2", "3", "-4"]);
    assert_eq!(session.area().unwrap(), Area::Whole(-12));

    let mut session = quiet_session(&["3", "3", "4", "90"]);
    assert_eq!(session.area().unwrap(), Area::Fractional(6.0));
    assert_eq!(output_of(session), "Area of the triangle is: 6\n");
}

#[test]
fn area_prompts_when_enabled() {
    let source = IterSource::new(["1", "2"]);
    let mut session = Session::new(source, Vec::new());
    session.area().unwrap();

    let output = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(output,
               "square(1)\trectangle(2)\ttriangle(3)\nInput the side x of a square:\nArea of the square is: 4\n");
}

#[test]
fn area_rejects_bad_input() {
    assert!(matches!(quiet_session(&["4"]).area(), Err(SessionError::UnknownShape { choice: 4 })));
    assert!(matches!(quiet_session(&["1", "0"]).area(),
                     Err(SessionError::Calc(CalcError::DegenerateInput { .. }))));
    assert!(matches!(quiet_session(&["1", "5cm"]).area(),
                     Err(SessionError::Parse(ParseError::TrailingGarbage { .. }))));
    assert!(matches!(quiet_session(&["2", "3"]).area(), Err(SessionError::EndOfInput { .. })));
    assert!(matches!(quiet_session(&[]).area(), Err(SessionError::EndOfInput { .. })));
}

#[test]
fn unreadable_input_is_an_io_error() {
    let source = ReaderLines::new(&b"\xff\n"[..]);
    let mut session = Session::new(source, Vec::new()).with_prompts(false);
    assert!(matches!(session.area(), Err(SessionError::Io(_))));

    // A clean end of input is still reported as missing input.
    let source = ReaderLines::new(&b"1\n"[..]);
    let mut session = Session::new(source, Vec::new()).with_prompts(false);
    assert!(matches!(session.area(), Err(SessionError::EndOfInput { .. })));
}

#[test]
fn arithmetic_prints_every_operation() {
    let mut session = quiet_session(&["6", "3"]);
    let results = session.arithmetic(None).unwrap();
    assert_eq!(results,
               [(Operation::Add, 9.0), (Operation::Sub, 3.0), (Operation::Div, 2.0), (Operation::Mul, 18.0)]);
    assert_eq!(output_of(session), "6 + 3 = 9\n6 - 3 = 3\n6 / 3 = 2\n6 * 3 = 18\n");
}

#[test]
fn arithmetic_reprompts_after_rejected_lines() {
    let mut session = quiet_session(&["", "abc", "1.5x", "1.5", "2"]);
    let results = session.arithmetic(Some(Operation::Mul)).unwrap();
    assert_eq!(results, [(Operation::Mul, 3.0)]);

    let output = output_of(session);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], ParseError::EmptyInput.to_string());
    assert!(lines[1].contains("Unparsable input 'abc'"));
    assert!(lines[2].contains("Trailing garbage 'x'"));
    assert_eq!(lines[3], "1.5 * 2 = 3");
}

#[test]
fn arithmetic_reports_division_by_zero_after_printing_the_rest() {
    let mut session = quiet_session(&["1", "0"]);
    let err = session.arithmetic(None).unwrap_err();
    assert!(matches!(err, SessionError::Calc(CalcError::DivisionByZero)));

    let output = output_of(session);
    assert!(output.contains("1 + 0 = 1\n"));
    assert!(output.contains("1 / 0: Error: Division by zero.\n"));
    assert!(output.ends_with("1 * 0 = 0\n"));
}

#[test]
fn arithmetic_can_be_cancelled() {
    assert!(matches!(quiet_session(&["exit"]).arithmetic(None), Err(SessionError::Cancelled)));
    assert!(matches!(quiet_session(&["1", " exit "]).arithmetic(None),
                     Err(SessionError::Cancelled)));
    assert!(matches!(quiet_session(&["nope"]).arithmetic(None),
                     Err(SessionError::EndOfInput { expected: "x" })));
}

#[test]
fn cramer_echoes_coefficients_and_solution() {
    let mut session = quiet_session(&["1x + 1y = 2", "1x - 1y = 0"]);
    assert_eq!(session.cramer().unwrap(), (1.0, 1.0));
    assert_eq!(output_of(session),
               "equation 1: a = 1, b = 1, c = 2\nequation 2: a = 1, b = -1, c = 0\nx = 1\ny = 1\n");
}

#[test]
fn cramer_failures() {
    assert!(matches!(quiet_session(&["1x + 2y = 3", "2x + 4y = 6"]).cramer(),
                     Err(SessionError::Calc(CalcError::NoUniqueSolution { .. }))));
    assert!(matches!(quiet_session(&["1x + 2y", "2x + 4y = 6"]).cramer(),
                     Err(SessionError::Parse(ParseError::InvalidFormat { .. }))));
    assert!(matches!(quiet_session(&["1x + 2y = 3"]).cramer(),
                     Err(SessionError::EndOfInput { .. })));
}

#[test]
fn quadratic_failures() {
    assert!(matches!(quiet_session(&["1x^2 + 0x + 1"]).quadratic(),
                     Err(SessionError::Calc(CalcError::NoRealRoots { discriminant: -4 }))));
    assert!(matches!(quiet_session(&["0x^2 + 2x + 1"]).quadratic(),
                     Err(SessionError::Calc(CalcError::DegenerateInput { .. }))));
    assert!(matches!(quiet_session(&["x^2 + 2x + 1"]).quadratic(),
                     Err(SessionError::Parse(ParseError::InvalidCoefficient { position: 0, .. }))));
}

#[test]
fn run_dispatches_programs() {
    let mut out = Vec::new();
    run(Program::Quadratic, IterSource::new(["1x^2 - 3x + 2"]), &mut out, false).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a: 1 b: -3 c: 2\nx1: 2 x2: 1\n");

    let mut out = Vec::new();
    run(Program::Arithmetic(Some(Operation::Add)), IterSource::new(["0.5", "0.25"]), &mut out, false)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0.5 + 0.25 = 0.75\n");
}

#[test]
fn programs_parse_from_names() {
    assert_eq!("area".parse::<Program>().unwrap(), Program::Area);
    assert_eq!("arith".parse::<Program>().unwrap(), Program::Arithmetic(None));
    assert_eq!("arith mul".parse::<Program>().unwrap(), Program::Arithmetic(Some(Operation::Mul)));
    assert_eq!("cramer".parse::<Program>().unwrap(), Program::Cramer);
    assert!("arith pow".parse::<Program>().is_err());
    assert!("quadratic twice".parse::<Program>().is_err());
    assert!("volume".parse::<Program>().is_err());
}
