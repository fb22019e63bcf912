//! Tracing integration for error-trace.
//!
//! This module wraps failures with the name of the active `tracing` span and
//! reports finished errors as `tracing` events, so the message chain, the
//! code and the captured stack reach whatever subscriber is installed.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-trace = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::format::Spec;
use crate::types::error::inherited_code;
use crate::types::{BoxError, Error};

/// Extension trait for `Result` types to wrap errors with span context.
pub trait ResultSpanExt<T> {
    /// Wraps the error with `in span '<name>'` for the current span.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use error_trace::tracing_ext::ResultSpanExt;
    ///
    /// fn process() -> Result<Data, error_trace::Error> {
    ///     let _guard = tracing::info_span!("process").entered();
    ///     do_work().wrap_current_span()
    /// }
    /// ```
    fn wrap_current_span(self) -> Result<T, Error>;

    /// Wraps the error with `in span '<name>'` for a specific span.
    fn wrap_span(self, span: &Span) -> Result<T, Error>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn wrap_current_span(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let cause = err.into();
                let message = span_message(&Span::current());
                Err(Error::build(message, inherited_code(&cause), Some(cause)))
            },
        }
    }

    #[inline(never)]
    fn wrap_span(self, span: &Span) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let cause = err.into();
                Err(Error::build(span_message(span), inherited_code(&cause), Some(cause)))
            },
        }
    }
}

/// Wraps `error` with the current span, keeping its code.
///
/// # Example
///
/// ```rust,ignore
/// use error_trace::tracing_ext::instrument_error;
///
/// let error = std::io::Error::other("disk full");
/// let instrumented = instrument_error(error);
/// // instrumented.to_string() == "in span 'flush': disk full"
/// ```
#[inline(never)]
pub fn instrument_error<E: Into<BoxError>>(error: E) -> Error {
    let cause = error.into();
    let message = span_message(&Span::current());
    Error::build(message, inherited_code(&cause), Some(cause))
}

/// Emits `err` as a single `ERROR` event.
///
/// The event carries the code, the one-line text and the detailed rendering
/// as separate fields.
pub fn emit(err: &Error) {
    tracing::error!(
        code = err.code(),
        error = %err,
        detail = %Spec::PLUS_V.apply(err),
        "error recorded"
    );
}

/// The span must be enabled to contribute its name.
fn span_message(span: &Span) -> String {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    format!("in span '{}'", name)
}
