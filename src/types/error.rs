//! The error node: message, code, cause and captured stack.
//!
//! An [`Error`] is built once by [`Error::new`], [`Error::with_code`],
//! [`wrap`] or [`wrap_code`] (or the matching macros) and never changes
//! afterwards. The stack is captured inside the constructor, so its first
//! frame is the code that asked for the error.

use core::fmt;
use std::error::Error as StdError;

use crate::chain::code;
use crate::format::{Render, Spec, Verb};
use crate::stack::Stack;
use crate::traits::{Causer, Coder, Matcher};
use crate::types::BoxError;

/// A failure with a message, an optional code, an optional cause and the
/// call stack of its construction site.
///
/// `Display` renders the message followed by the causes, joined with `": "`.
/// The alternate form `{:#}` (and `Debug`) renders the detailed trace: the
/// cause's detailed trace, a newline, this message, then one line pair per
/// captured frame.
///
/// # Examples
///
/// ```
/// use error_trace::{code, unwrap, Error, ResultExt};
///
/// let e1 = Error::new("not found");
/// let e2 = Err::<(), _>(e1).wrap_code(404, "lookup failed").unwrap_err();
///
/// assert_eq!(e2.to_string(), "lookup failed: not found");
/// assert_eq!(code(Some(&e2)), 404);
/// assert_eq!(unwrap(&e2).map(|e| e.to_string()), Some("not found".to_string()));
/// ```
pub struct Error {
    message: String,
    code: i32,
    cause: Option<BoxError>,
    stack: Stack,
}

impl Error {
    /// Creates an error with no cause and no code.
    #[inline(never)]
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self::build(message.into(), 0, None)
    }

    /// Creates an error with no cause and the given code.
    #[inline(never)]
    pub fn with_code<M: Into<String>>(code: i32, message: M) -> Self {
        Self::build(message.into(), code, None)
    }

    /// Every public constructor calls this directly so the number of frames
    /// between the capture and the caller stays fixed.
    #[inline(never)]
    pub(crate) fn build(message: String, code: i32, cause: Option<BoxError>) -> Self {
        Self { message, code, cause, stack: Stack::capture() }
    }

    /// The message of this node alone, without any cause text.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The attached code, `0` when none was given.
    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    /// The stack captured when this error was built.
    #[inline]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// The immediate cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the node and hands back its cause.
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    fn write_text(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }
        Ok(())
    }

    fn write_detailed(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(cause) = &self.cause {
            match cause.downcast_ref::<Error>() {
                Some(inner) => inner.write_detailed(f)?,
                None => write!(f, "{:#}", cause)?,
            }
            f.write_str("\n")?;
        }
        f.write_str(&self.message)?;
        self.stack.render(f, Spec::PLUS_V)
    }
}

/// Code a wrapper inherits from `cause`.
pub(crate) fn inherited_code(cause: &BoxError) -> i32 {
    let source: &(dyn StdError + 'static) = &**cause;
    code(Some(source))
}

/// Wraps `err` with `message`, keeping the code `err` carries.
///
/// Returns `None` when there is nothing to wrap.
///
/// ```
/// use error_trace::{code, with_code, wrap, Error};
///
/// assert!(wrap(None::<Error>, "context").is_none());
///
/// let err = wrap(Some(with_code!(409, "version conflict")), "saving draft").unwrap();
/// assert_eq!(code(Some(&err)), 409);
/// ```
#[inline(never)]
pub fn wrap<E, M>(err: Option<E>, message: M) -> Option<Error>
where
    E: Into<BoxError>,
    M: Into<String>,
{
    let cause = err?.into();
    Some(Error::build(message.into(), inherited_code(&cause), Some(cause)))
}

/// Wraps `err` with `message` and `code`, replacing whatever code `err`
/// carried.
///
/// Returns `None` when there is nothing to wrap.
///
/// ```
/// use error_trace::{code, with_code, wrap_code, Error};
///
/// assert!(wrap_code(None::<Error>, 500, "context").is_none());
///
/// let err = wrap_code(Some(with_code!(409, "version conflict")), 500, "saving draft").unwrap();
/// assert_eq!(code(Some(&err)), 500);
/// ```
#[inline(never)]
pub fn wrap_code<E, M>(err: Option<E>, code: i32, message: M) -> Option<Error>
where
    E: Into<BoxError>,
    M: Into<String>,
{
    let cause = err?.into();
    Some(Error::build(message.into(), code, Some(cause)))
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.write_detailed(f);
        }
        self.write_text(f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_detailed(f)
    }
}

impl Render for Error {
    fn render(&self, f: &mut fmt::Formatter<'_>, spec: Spec) -> fmt::Result {
        match spec.verb() {
            Verb::V if spec.is_plus() => self.write_detailed(f),
            Verb::S | Verb::Q | Verb::V => self.write_text(f),
            Verb::D | Verb::N => Ok(()),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl Coder for Error {
    fn code(&self) -> i32 {
        self.code
    }
}

impl Causer for Error {
    fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Two nodes match when they carry the same code and render the same text.
impl Matcher for Error {
    fn matches(&self, target: &(dyn StdError + 'static)) -> bool {
        target.downcast_ref::<Error>().is_some_and(|other| {
            self.code == other.code && self.to_string() == other.to_string()
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Error {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Error", 4)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("cause", &self.cause.as_ref().map(|cause| cause.to_string()))?;
        state.serialize_field("stack", &self.stack.trace())?;
        state.end()
    }
}
