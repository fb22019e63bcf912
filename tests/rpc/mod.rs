use super::chain::Envelope;
use error_trace::rpc::{find_status, Code, Status};
use error_trace::{code, downcast, is, wrap, wrap_code, Error, Matcher, ResultExt};

fn assert_send_sync<T: Send + Sync + 'static>() {}

#[test]
fn status_supplies_its_numeric_code() {
    let status = Status::new(Code::Unauthenticated, "expired token");

    assert_eq!(code(Some(&status)), 16);
}

#[test]
fn status_is_found_behind_foreign_wrappers() {
    let envelope = Envelope { inner: Box::new(Status::not_found("gone")) };

    assert_eq!(code(Some(&envelope)), 5);
    assert!(find_status(&envelope).is_some());
}

#[test]
fn wrap_of_status_inherits_the_status_code() {
    let err = wrap(Some(Status::permission_denied("no access")), "reading bucket").unwrap();

    assert_eq!(code(Some(&err)), 7);
    assert_eq!(err.code(), 7);
    assert!(err.to_string().starts_with("reading bucket: "));
}

#[test]
fn attached_code_wins_over_status() {
    let err = wrap_code(Some(Status::internal("crash")), 0, "handled").unwrap();
    assert_eq!(code(Some(&err)), 0);

    let err = wrap_code(Some(Status::internal("crash")), 418, "handled").unwrap();
    assert_eq!(code(Some(&err)), 418);
}

#[test]
fn result_ext_keeps_or_replaces_the_status_code() {
    let unavailable = || Err::<(), _>(Status::unavailable("overloaded"));

    let kept = unavailable().wrap("calling search").unwrap_err();
    assert_eq!(code(Some(&kept)), 14);

    let replaced = unavailable().wrap_code(503, "calling search").unwrap_err();
    assert_eq!(code(Some(&replaced)), 503);
}

#[test]
fn statuses_match_on_code_and_message() {
    let status = Status::new(Code::Cancelled, "client went away");

    assert!(status.matches(&Status::new(Code::Cancelled, "client went away")));
    assert!(!status.matches(&Status::new(Code::Cancelled, "timeout")));
    assert!(!status.matches(&Status::new(Code::Aborted, "client went away")));
    assert!(!status.matches(&Error::new("client went away")));
}

#[test]
fn wrapped_status_is_found() {
    let err = wrap(Some(Status::not_found("no row")), "context").unwrap();

    assert!(is(&err, &Status::not_found("no row")));
    assert!(!is(&err, &Status::not_found("other row")));
    assert!(!is(&err, &Status::internal("no row")));
}

#[test]
fn downcast_recovers_the_status() {
    let inner = Envelope { inner: Box::new(Status::aborted("conflict")) };
    let err = wrap(Some(inner), "committing").unwrap();

    let status = downcast::<Status>(&err).unwrap();
    assert_eq!(status.code(), Code::Aborted);
    assert_eq!(status.message(), "conflict");
}

#[test]
fn status_is_thread_safe() {
    assert_send_sync::<Status>();
}
