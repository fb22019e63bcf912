use error_trace::{new, render, wrap, wrap_code, Error, ResultExt, MAX_DEPTH};

fn first_function(err: &Error) -> String {
    err.stack().trace().first().map(|frame| frame.function()).unwrap_or_default()
}

#[test]
fn new_captures_its_caller() {
    let err = Error::new("boom");
    let function = first_function(&err);

    assert!(function.contains("new_captures_its_caller"), "first frame was {}", function);
}

#[test]
fn with_code_captures_its_caller() {
    let err = Error::with_code(7, "boom");
    let function = first_function(&err);

    assert!(function.contains("with_code_captures_its_caller"), "first frame was {}", function);
}

#[test]
fn wrap_functions_capture_their_caller() {
    let err = wrap(Some(Error::new("inner")), "outer").unwrap();
    let function = first_function(&err);
    assert!(function.contains("wrap_functions_capture_their_caller"), "first frame was {}", function);

    let err = wrap_code(Some("inner"), 3, "outer").unwrap();
    let function = first_function(&err);
    assert!(function.contains("wrap_functions_capture_their_caller"), "first frame was {}", function);
}

#[test]
fn result_ext_captures_its_caller() {
    let err = Err::<(), _>("inner").wrap("outer").unwrap_err();
    let function = first_function(&err);

    assert!(function.contains("result_ext_captures_its_caller"), "first frame was {}", function);
}

#[test]
fn macro_captures_its_invocation_line() {
    let (err, line) = (new!("here"), line!());
    let frame = err.stack().trace()[0];

    // Optimized builds may attribute the call to a neighbouring line, or
    // carry no line tables at all.
    if cfg!(debug_assertions) {
        assert_eq!(frame.line(), line);
    }
    assert_eq!(render(&frame, "%d").unwrap(), frame.line().to_string());
}

#[inline(never)]
fn nested(depth: usize) -> Error {
    if depth == 0 {
        return Error::new("bottom");
    }
    let err = nested(depth - 1);
    std::hint::black_box(err)
}

#[test]
fn deep_stacks_are_truncated() {
    let err = nested(MAX_DEPTH * 2);

    assert_eq!(err.stack().len(), MAX_DEPTH);
    assert!(first_function(&err).contains("nested"));
}

#[test]
fn wrapping_captures_a_fresh_stack() {
    let inner = Error::new("inner");
    let inner_handles = inner.stack().handles().to_vec();
    let outer = wrap(Some(inner), "outer").unwrap();

    assert_ne!(outer.stack().handles(), inner_handles.as_slice());
}
