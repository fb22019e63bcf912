use super::Envelope;
use error_trace::{is, new, unwrap, with_code, wrap, Error};
use std::io;

#[test]
fn wrapped_error_is_found_by_text_and_code() {
    let err = wrap(Some(new!("boom")), "context").unwrap();

    assert!(is(&err, &new!("boom")));
    assert!(!is(&err, &with_code!(1, "boom")));
    assert!(!is(&err, &new!("bang")));
}

#[test]
fn every_node_is_itself() {
    let err = wrap(Some(io::Error::new(io::ErrorKind::Other, "leaf")), "context").unwrap();

    assert!(is(&err, &err));
    let leaf = unwrap(&err).unwrap();
    assert!(is(&err, leaf));
}

#[test]
fn foreign_values_only_match_by_identity() {
    let err = wrap(Some(io::Error::new(io::ErrorKind::Other, "leaf")), "context").unwrap();
    let twin = io::Error::new(io::ErrorKind::Other, "leaf");

    assert!(!is(&err, &twin));
}

#[test]
fn is_looks_through_foreign_wrappers() {
    let err: Error = wrap(Some(Envelope { inner: Box::new(with_code!(10, "retry")) }), "txn").unwrap();

    assert!(is(&err, &with_code!(10, "retry")));
    assert!(!is(&err, &with_code!(11, "retry")));
}
