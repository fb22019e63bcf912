//! gRPC status interop.
//!
//! A [`Status`] returned by a `tonic` client is the fallback source of
//! [`code`](crate::code): when an error carries no code of its own, the first
//! `Status` found along its `source()` chain supplies one.
//!
//! ```
//! use error_trace::rpc::{Code, Status};
//! use error_trace::{code, is, wrap};
//!
//! let status = Status::new(Code::NotFound, "no such user");
//! assert_eq!(code(Some(&status)), 5);
//!
//! let err = wrap(Some(status.clone()), "loading profile").unwrap();
//! assert_eq!(code(Some(&err)), 5);
//! assert!(is(&err, &status));
//! ```

use std::error::Error as StdError;

pub use tonic::{Code, Status};

use crate::chain::chain;
use crate::traits::Matcher;

/// Finds the first [`Status`] in the `source()` chain of `err`.
pub fn find_status<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a Status> {
    chain(err).find_map(|node| node.downcast_ref::<Status>())
}

/// Two statuses match when both code and message agree.
impl Matcher for Status {
    fn matches(&self, target: &(dyn StdError + 'static)) -> bool {
        target
            .downcast_ref::<Status>()
            .is_some_and(|other| self.code() == other.code() && self.message() == other.message())
    }
}
