use error_trace::{render, Frame, Spec};

#[test]
fn rejects_missing_percent() {
    let err = Spec::parse("v").unwrap_err();

    assert_eq!(err.input(), "v");
    assert_eq!(err.to_string(), "invalid format spec `v`: must start with '%'");
}

#[test]
fn rejects_missing_verb() {
    assert_eq!(Spec::parse("%").unwrap_err().to_string(), "invalid format spec `%`: missing verb");
    assert_eq!(Spec::parse("%+").unwrap_err().to_string(), "invalid format spec `%+`: missing verb");
}

#[test]
fn rejects_trailing_input() {
    let err = Spec::parse("%vv").unwrap_err();

    assert_eq!(err.to_string(), "invalid format spec `%vv`: unexpected characters after the verb");
}

#[test]
fn rejects_unknown_verb() {
    let err = Spec::parse("%#v").unwrap_err();
    assert_eq!(err.to_string(), "invalid format spec `%#v`: unknown verb '#'");

    let err = render(&Frame::from_ip(0), "%x").unwrap_err();
    assert_eq!(err.to_string(), "invalid format spec `%x`: unknown verb 'x'");
}

#[test]
fn unknown_verb_is_reported_before_trailing_input() {
    for (input, verb) in [("%#v", '#'), ("%zz", 'z'), ("%+xs", 'x')] {
        let err = Spec::parse(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("invalid format spec `{}`: unknown verb '{}'", input, verb)
        );
    }
}

#[test]
fn parse_error_is_a_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(Spec::parse("").unwrap_err());

    assert!(err.source().is_none());
    assert!(err.to_string().contains("must start with '%'"));
}
