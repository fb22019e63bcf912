//! `format!`-style shorthands for the constructors.
//!
//! - [`macro@crate::new`] - [`Error::new`](crate::Error::new) with a formatted message.
//! - [`macro@crate::with_code`] - [`Error::with_code`](crate::Error::with_code) with a
//!   formatted message.
//! - [`macro@crate::wrap`] - [`wrap`](crate::wrap()) with a formatted message.
//! - [`macro@crate::wrap_code`] - [`wrap_code`](crate::wrap_code()) with a formatted message.
//!
//! The macros expand to a single constructor call, so the captured stack
//! starts at the line that invoked them.
//!
//! # Examples
//!
//! ```
//! use error_trace::{code, new, with_code, wrap, wrap_code};
//!
//! let id = 42;
//! let base = with_code!(404, "user {} not found", id);
//! let err = wrap!(Some(base), "loading profile {}", id).unwrap();
//! assert_eq!(err.to_string(), "loading profile 42: user 42 not found");
//! assert_eq!(code(Some(&err)), 404);
//!
//! let err = wrap_code!(Some(new!("timeout")), 504, "calling {}", "billing").unwrap();
//! assert_eq!(code(Some(&err)), 504);
//! ```

/// Creates an [`Error`](crate::Error) from a format string, with no cause
/// and no code.
///
/// # Examples
///
/// ```
/// use error_trace::new;
///
/// let err = new!("port {} already in use", 8080);
/// assert_eq!(err.message(), "port 8080 already in use");
/// assert_eq!(err.code(), 0);
/// ```
#[macro_export]
macro_rules! new {
    ($($arg:tt)*) => {
        $crate::Error::new(format!($($arg)*))
    };
}

/// Creates an [`Error`](crate::Error) carrying `code`.
///
/// # Examples
///
/// ```
/// use error_trace::with_code;
///
/// let err = with_code!(429, "rate limited for {}s", 30);
/// assert_eq!(err.code(), 429);
/// assert_eq!(err.to_string(), "rate limited for 30s");
/// ```
#[macro_export]
macro_rules! with_code {
    ($code:expr, $($arg:tt)*) => {
        $crate::Error::with_code($code, format!($($arg)*))
    };
}

/// Wraps an `Option` of an error, keeping its code. `None` stays `None`.
///
/// # Examples
///
/// ```
/// use error_trace::{wrap, Error};
///
/// let nothing: Option<Error> = None;
/// assert!(wrap!(nothing, "context").is_none());
/// ```
#[macro_export]
macro_rules! wrap {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap($err, format!($($arg)*))
    };
}

/// Wraps an `Option` of an error, replacing its code. `None` stays `None`.
///
/// # Examples
///
/// ```
/// use error_trace::{code, wrap_code};
///
/// let err = wrap_code!(Some("socket closed"), 502, "proxying request").unwrap();
/// assert_eq!(code(Some(&err)), 502);
/// assert_eq!(err.to_string(), "proxying request: socket closed");
/// ```
#[macro_export]
macro_rules! wrap_code {
    ($err:expr, $code:expr, $($arg:tt)*) => {
        $crate::wrap_code($err, $code, format!($($arg)*))
    };
}
