use error_trace::{code, new, unwrap, wrap_code, Error};

#[test]
fn new_has_no_code_and_no_cause() {
    let err = Error::new("not found");

    assert_eq!(err.code(), 0);
    assert_eq!(code(Some(&err)), 0);
    assert!(err.cause().is_none());
    assert!(unwrap(&err).is_none());
    assert_eq!(err.to_string(), "not found");
}

#[test]
fn with_code_keeps_its_code() {
    for c in [-1, 0, 1, 404, i32::MAX] {
        let err = Error::with_code(c, "coded");
        assert_eq!(code(Some(&err)), c);
    }
}

#[test]
fn lookup_scenario_end_to_end() {
    let e1 = new!("not found");
    let e2 = wrap_code!(Some(e1), 404, "lookup failed").unwrap();

    assert_eq!(e2.to_string(), "lookup failed: not found");
    assert_eq!(code(Some(&e2)), 404);

    let e1 = unwrap(&e2).and_then(|e| e.downcast_ref::<Error>()).unwrap();
    assert_eq!(code(Some(e1)), 0);
    assert_eq!(e1.to_string(), "not found");
}

#[test]
fn message_never_embeds_the_cause() {
    let err = wrap_code!(Some(new!("inner")), 1, "outer").unwrap();

    assert_eq!(err.message(), "outer");
    assert_eq!(err.to_string(), "outer: inner");
}

#[test]
fn into_cause_returns_the_wrapped_error() {
    let err = wrap_code!(Some("leaf"), 1, "outer").unwrap();
    let cause = err.into_cause().unwrap();

    assert_eq!(cause.to_string(), "leaf");
}

pub mod rendering;
