use error_trace::{render, wrap, wrap_code, Error, Spec, MAX_DEPTH};

fn stack_lines(err: &Error) -> usize {
    format!("{:#}", err.stack()).matches("\n\t").count()
}

#[test]
fn text_verbs_render_the_message_chain() {
    let err = wrap_code(Some(Error::new("not found")), 404, "lookup failed").unwrap();

    for spec in ["%s", "%q", "%v"] {
        assert_eq!(render(&err, spec).unwrap(), "lookup failed: not found", "spec {}", spec);
    }
    assert_eq!(render(&err, "%+s").unwrap(), "lookup failed: not found");
}

#[test]
fn frame_verbs_render_nothing_for_errors() {
    let err = Error::new("boom");

    assert_eq!(render(&err, "%d").unwrap(), "");
    assert_eq!(render(&err, "%n").unwrap(), "");
}

#[test]
fn detailed_form_of_a_root_error() {
    let err = Error::new("boom");
    let detailed = format!("{:#}", err);

    assert_eq!(detailed, format!("boom{:#}", err.stack()));
    assert_eq!(stack_lines(&err), err.stack().len());
}

#[test]
fn detailed_form_puts_the_cause_first() {
    let e2 = wrap_code(Some(Error::new("not found")), 404, "lookup failed").unwrap();
    let e1 = e2.cause().and_then(|c| c.downcast_ref::<Error>()).unwrap();

    let expected = format!("{:#}\nlookup failed{:#}", e1, e2.stack());
    assert_eq!(format!("{:#}", e2), expected);
    assert_eq!(render(&e2, "%+v").unwrap(), expected);
    assert_eq!(Spec::PLUS_V.apply(&e2).to_string(), expected);

    assert!(e2.stack().len() <= MAX_DEPTH);
    assert_eq!(stack_lines(&e2), e2.stack().len());
}

#[test]
fn detailed_form_of_a_foreign_cause_is_its_text() {
    let err = wrap(Some("socket closed"), "proxying").unwrap();
    let detailed = format!("{:#}", err);

    assert!(detailed.starts_with("socket closed\nproxying\n"), "{}", detailed);
}

#[test]
fn debug_matches_detailed_form() {
    let err = wrap(Some(Error::new("inner")), "outer").unwrap();

    assert_eq!(format!("{:?}", err), format!("{:#}", err));
}

#[test]
fn detailed_form_lists_every_node_message_in_order() {
    let err = wrap(wrap(Some(Error::new("first")), "second"), "third").unwrap();
    let detailed = format!("{:#}", err);

    let lines: Vec<&str> = detailed.lines().filter(|l| !l.starts_with('\t')).collect();
    let first = lines.iter().position(|l| *l == "first").unwrap();
    let second = lines.iter().position(|l| *l == "second").unwrap();
    let third = lines.iter().position(|l| *l == "third").unwrap();
    assert!(first < second && second < third);
}
