//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_trace::prelude::*;
//!
//! fn open(path: &str) -> TracedResult<String> {
//!     std::fs::read_to_string(path).wrap_with(|| format!("opening {}", path))
//! }
//!
//! let err = open("missing.txt").unwrap_err();
//! assert_eq!(code(Some(&err)), 0);
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`new!`], [`with_code!`], [`wrap!`], [`wrap_code!`]
//! - **Types**: [`Error`], [`TracedResult`]
//! - **Functions**: [`code`], [`cause`], [`is`], [`downcast`]
//! - **Traits**: [`ResultExt`]

// Macros
pub use crate::{new, with_code, wrap, wrap_code};

// Core types
pub use crate::types::{Error, TracedResult};

// Chain inspection
pub use crate::chain::{cause, code, downcast, is};

// Traits
pub use crate::traits::ResultExt;
