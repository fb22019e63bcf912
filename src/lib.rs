//! Error values that remember where they were made.
//!
//! An [`Error`] carries a message, an optional integer code, an optional
//! cause and the call stack captured at its construction site. Errors are
//! immutable; wrapping one builds a new node that points at the old one.
//!
//! # Examples
//!
//! ## Building and wrapping
//!
//! ```
//! use error_trace::{code, new, unwrap, wrap_code};
//!
//! let e1 = new!("not found");
//! let e2 = wrap_code!(Some(e1), 404, "lookup failed").unwrap();
//!
//! assert_eq!(e2.to_string(), "lookup failed: not found");
//! assert_eq!(code(Some(&e2)), 404);
//! assert_eq!(unwrap(&e2).unwrap().to_string(), "not found");
//! ```
//!
//! ## Rendering
//!
//! `{}` prints the joined message chain; `{:#}` and `{:?}` print the detailed
//! trace, one stack per node. The [`render`] function accepts printf-style
//! specs for finer control:
//!
//! ```
//! use error_trace::{new, render};
//!
//! let err = new!("disk full");
//! let frame = err.stack().trace()[0];
//!
//! // `%n` is the bare function name, `%+v` the full name, file and line.
//! println!("{}", render(&frame, "%n").unwrap());
//! println!("{}", render(&frame, "%+v").unwrap());
//! ```
//!
//! ## Results
//!
//! ```
//! use error_trace::{code, Error, ResultExt};
//!
//! fn read_settings() -> Result<String, Error> {
//!     std::fs::read_to_string("settings.json").wrap_code(500, "reading settings")
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert_eq!(code(Some(&err)), 500);
//! ```

/// Walking the cause chain
pub mod chain;
/// Verb-driven rendering of frames, stacks and errors
pub mod format;
/// Constructor macros with `format!` arguments
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Call-stack capture and symbolic frames
pub mod stack;
/// Capability traits and `Result` extensions
pub mod traits;
/// The error node
pub mod types;

/// gRPC status interop (requires `grpc` feature)
#[cfg(feature = "grpc")]
pub mod rpc;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use chain::{cause, chain, code, downcast, is, unwrap, Chain};
pub use format::{render, Formatted, ParseSpecError, Render, Spec, Verb};
pub use stack::{funcname, Frame, Stack, StackTrace, MAX_DEPTH, SKIP, UNKNOWN};
pub use traits::*;
pub use types::{wrap, wrap_code, BoxError, Error, TracedResult};
