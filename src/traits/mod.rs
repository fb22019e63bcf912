//! Capability traits and `Result` extensions.
//!
//! An error takes part in the cause chain by exposing independent
//! capabilities rather than by sharing a base type:
//!
//! - [`Coder`]: carries an integer status code
//! - [`Causer`]: names the error it was built on top of
//! - [`Matcher`]: decides whether it stands for some other error value
//!
//! Errors of this crate expose all three. A foreign type that implements one
//! registers it with [`register_coder`], [`register_causer`] or
//! [`register_matcher`].
//!
//! [`ResultExt`] lifts the wrapping constructors onto `Result`, so an `Ok`
//! value passes through untouched and only failures are wrapped.
//!
//! # Examples
//!
//! ```
//! use error_trace::{code, ResultExt};
//!
//! let result: Result<(), &str> = Err("connection reset");
//! let err = result.wrap_code(503, "calling billing").unwrap_err();
//! assert_eq!(err.to_string(), "calling billing: connection reset");
//! assert_eq!(code(Some(&err)), 503);
//! ```

pub mod capability;
pub mod result_ext;

pub use capability::{register_causer, register_coder, register_matcher, Causer, Coder, Matcher};
pub use result_ext::ResultExt;
