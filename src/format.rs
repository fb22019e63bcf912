//! Verb-driven rendering shared by frames, stacks and errors.
//!
//! A [`Spec`] is a verb plus an optional `+` ("detailed") flag written the
//! familiar printf way: `%s`, `%d`, `%n`, `%v`, `%q`, `%+s`, `%+v`. Every
//! renderable type implements [`Render`] and decides what each verb means for
//! it; a verb a type has no use for renders nothing. Rendering never fails on
//! its own; only a malformed spec string is rejected, up front, by
//! [`Spec::parse`].
//!
//! The standard formatting traits map onto the grammar: `{}` is `%v` and
//! `{:#}` is `%+v`.
//!
//! # Examples
//!
//! ```
//! use error_trace::{new, render};
//!
//! let err = new!("disk full");
//! assert_eq!(render(&err, "%s").unwrap(), "disk full");
//! assert!(render(&err, "%+v").unwrap().starts_with("disk full\n"));
//! assert!(render(&err, "%x").is_err());
//! ```

use core::fmt;
use core::str::FromStr;

/// The formatting verbs understood by [`Render`] implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `%s`: short text (file base name for frames, message text for errors).
    S,
    /// `%d`: line number.
    D,
    /// `%n`: bare function name.
    N,
    /// `%v`: default value form.
    V,
    /// `%q`: quoted form; errors render their message text.
    Q,
}

impl Verb {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::S),
            'd' => Some(Self::D),
            'n' => Some(Self::N),
            'v' => Some(Self::V),
            'q' => Some(Self::Q),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::S => 's',
            Self::D => 'd',
            Self::N => 'n',
            Self::V => 'v',
            Self::Q => 'q',
        }
    }
}

/// A verb together with its `+` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spec {
    verb: Verb,
    plus: bool,
}

impl Spec {
    /// `%v`
    pub const V: Self = Self::new(Verb::V);
    /// `%+v`
    pub const PLUS_V: Self = Self::plus(Verb::V);

    #[inline]
    pub const fn new(verb: Verb) -> Self {
        Self { verb, plus: false }
    }

    /// The detailed form of `verb`.
    #[inline]
    pub const fn plus(verb: Verb) -> Self {
        Self { verb, plus: true }
    }

    #[inline]
    pub const fn verb(&self) -> Verb {
        self.verb
    }

    #[inline]
    pub const fn is_plus(&self) -> bool {
        self.plus
    }

    /// Parses `%[+]<verb>`.
    pub fn parse(input: &str) -> Result<Self, ParseSpecError> {
        let fail = |reason| ParseSpecError { input: input.into(), reason };

        let rest = input.strip_prefix('%').ok_or_else(|| fail(Reason::MissingPercent))?;
        let (plus, rest) = match rest.strip_prefix('+') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        let mut chars = rest.chars();
        let c = chars.next().ok_or_else(|| fail(Reason::MissingVerb))?;
        let verb = Verb::from_char(c).ok_or_else(|| fail(Reason::UnknownVerb(c)))?;
        if chars.next().is_some() {
            return Err(fail(Reason::TrailingInput));
        }

        Ok(Self { verb, plus })
    }

    /// Wraps `target` so that `Display` renders it with this spec.
    #[inline]
    pub fn apply<T: Render + ?Sized>(self, target: &T) -> Formatted<'_, T> {
        Formatted { target, spec: self }
    }
}

impl FromStr for Spec {
    type Err = ParseSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        if self.plus {
            f.write_str("+")?;
        }
        write!(f, "{}", self.verb.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Reason {
    MissingPercent,
    MissingVerb,
    TrailingInput,
    UnknownVerb(char),
}

/// Error returned when a format spec string is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSpecError {
    input: String,
    reason: Reason,
}

impl ParseSpecError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid format spec `{}`: ", self.input)?;
        match self.reason {
            Reason::MissingPercent => f.write_str("must start with '%'"),
            Reason::MissingVerb => f.write_str("missing verb"),
            Reason::TrailingInput => f.write_str("unexpected characters after the verb"),
            Reason::UnknownVerb(c) => write!(f, "unknown verb '{}'", c),
        }
    }
}

impl std::error::Error for ParseSpecError {}

/// Types that render themselves according to a [`Spec`].
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>, spec: Spec) -> fmt::Result;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>, spec: Spec) -> fmt::Result {
        (**self).render(f, spec)
    }
}

/// `Display` adapter produced by [`Spec::apply`].
pub struct Formatted<'a, T: ?Sized> {
    target: &'a T,
    spec: Spec,
}

impl<T: Render + ?Sized> fmt::Display for Formatted<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.target.render(f, self.spec)
    }
}

/// Renders `target` with a spec given in its textual form.
///
/// ```
/// use error_trace::{render, Frame};
///
/// assert_eq!(render(&Frame::from_ip(0), "%d").unwrap(), "0");
/// ```
pub fn render<T: Render + ?Sized>(target: &T, spec: &str) -> Result<String, ParseSpecError> {
    let spec = Spec::parse(spec)?;
    Ok(spec.apply(target).to_string())
}
