//! Extension trait for wrapping the error side of a `Result`.
//!
//! This module provides [`ResultExt`], the `Result` counterpart of
//! [`wrap`](crate::wrap) and [`wrap_code`](crate::wrap_code): an `Ok` value
//! is returned unchanged and only an `Err` becomes a new [`Error`] whose
//! stack is captured at the call site.
//!
//! # Examples
//!
//! ```
//! use error_trace::{Error, ResultExt};
//!
//! fn load_config() -> Result<String, Error> {
//!     std::fs::read_to_string("does-not-exist.toml").wrap("loading configuration file")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(err.to_string().starts_with("loading configuration file: "));
//! ```

use crate::types::error::inherited_code;
use crate::types::{BoxError, Error};

/// Adds wrapping constructors to `Result`.
///
/// The `_with` variants take a closure that is only called on `Err`.
///
/// # Examples
///
/// ```
/// use error_trace::{code, with_code, Error, ResultExt};
///
/// fn find(id: u64) -> Result<String, Error> {
///     Err(with_code!(404, "user {} not found", id))
/// }
///
/// let err = find(7).wrap_with(|| format!("rendering profile {}", 7)).unwrap_err();
/// assert_eq!(err.to_string(), "rendering profile 7: user 7 not found");
/// assert_eq!(code(Some(&err)), 404);
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error with `message`, keeping the code it already carries.
    fn wrap<M: Into<String>>(self, message: M) -> Result<T, Error>;

    /// Like [`wrap`](ResultExt::wrap) with a lazily built message.
    fn wrap_with<M, F>(self, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// Wraps the error with `message` and replaces its code with `code`.
    fn wrap_code<M: Into<String>>(self, code: i32, message: M) -> Result<T, Error>;

    /// Like [`wrap_code`](ResultExt::wrap_code) with a lazily built message.
    fn wrap_code_with<M, F>(self, code: i32, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn wrap<M: Into<String>>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let cause = err.into();
                Err(Error::build(message.into(), inherited_code(&cause), Some(cause)))
            },
        }
    }

    #[inline(never)]
    fn wrap_with<M, F>(self, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let cause = err.into();
                Err(Error::build(f().into(), inherited_code(&cause), Some(cause)))
            },
        }
    }

    #[inline(never)]
    fn wrap_code<M: Into<String>>(self, code: i32, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::build(message.into(), code, Some(err.into()))),
        }
    }

    #[inline(never)]
    fn wrap_code_with<M, F>(self, code: i32, f: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::build(f().into(), code, Some(err.into()))),
        }
    }
}
