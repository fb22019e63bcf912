use super::Envelope;
use error_trace::{code, new, wrap, wrap_code, Error};
use std::io;

#[test]
fn absent_error_has_no_code() {
    assert_eq!(code(None), 0);
}

#[test]
fn foreign_error_has_no_code() {
    let err = io::Error::new(io::ErrorKind::Other, "boom");

    assert_eq!(code(Some(&err)), 0);
}

#[test]
fn coded_error_behind_a_foreign_wrapper_is_not_consulted() {
    let envelope = Envelope { inner: Box::new(Error::with_code(5, "gone")) };

    assert_eq!(code(Some(&envelope)), 0);
}

#[test]
fn wrap_code_overrides_with_any_value() {
    let err = wrap_code(Some(Error::with_code(13, "crash")), 0, "handled").unwrap();
    assert_eq!(code(Some(&err)), 0);

    let err = wrap_code(Some(Error::with_code(13, "crash")), 418, "handled").unwrap();
    assert_eq!(code(Some(&err)), 418);
}

#[test]
fn wrap_carries_codes_through_long_chains() {
    let mut err: Error = Error::with_code(503, "unavailable");
    for i in 0..10 {
        err = wrap(Some(err), format!("layer {}", i)).unwrap();
        assert_eq!(code(Some(&err)), 503);
    }
    assert_eq!(code(Some(&new!("plain"))), 0);
}
