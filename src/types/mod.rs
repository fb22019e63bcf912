//! The error node and its aliases.
//!
//! # Examples
//!
//! ```
//! use error_trace::{code, new, wrap_code};
//!
//! let err = wrap_code!(Some(new!("connection refused")), 503, "reaching {}", "db-primary")
//!     .unwrap();
//!
//! assert_eq!(err.to_string(), "reaching db-primary: connection refused");
//! assert_eq!(code(Some(&err)), 503);
//!
//! // Cause first, then this node's message, each followed by its stack:
//! //
//! // connection refused
//! // my_app::connect
//! //         src/main.rs:12
//! // reaching db-primary
//! // my_app::connect
//! //         src/main.rs:12
//! println!("{:#}", err);
//! ```

pub mod error;

pub use error::*;

/// Owned, thread-safe form of any error that can become a cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias for fallible operations returning an [`Error`].
pub type TracedResult<T> = Result<T, Error>;
