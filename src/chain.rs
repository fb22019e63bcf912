//! Walking the cause chain.
//!
//! These functions read any `&dyn Error`, whether or not it was built by this
//! crate. The link they follow is `source()`, except for [`cause`], which
//! follows the [`Causer`](crate::Causer) capability only.
//!
//! # Examples
//!
//! ```
//! use error_trace::{cause, is, with_code, wrap};
//!
//! let err = wrap(wrap(Some(with_code!(503, "backend down")), "fetching quota"), "billing").unwrap();
//!
//! assert!(is(&err, &with_code!(503, "backend down")));
//! assert_eq!(cause(&err).to_string(), "backend down");
//! ```

use core::ptr;
use std::error::Error as StdError;

use crate::traits::capability::{causer, coder, matcher};

/// Extracts the code carried by `err`.
///
/// `None` yields `0`. Otherwise a code exposed by `err` itself through
/// [`Coder`](crate::Coder) wins, then (with the `grpc` feature) a gRPC
/// [`Status`](crate::rpc::Status) found in its chain, then `0`.
pub fn code(err: Option<&(dyn StdError + 'static)>) -> i32 {
    let Some(err) = err else {
        return 0;
    };
    if let Some(coder) = coder(err) {
        return coder.code();
    }
    #[cfg(feature = "grpc")]
    if let Some(status) = crate::rpc::find_status(err) {
        return i32::from(status.code());
    }
    0
}

/// Returns the deepest error reachable through [`Causer`](crate::Causer).
///
/// The walk stops at the first error that does not expose the capability or
/// whose cause is absent, and returns that error. An error that only reports
/// a `source()` ends the walk.
///
/// ```
/// use error_trace::{cause, new, wrap};
///
/// let root = new!("disk full");
/// assert_eq!(cause(&root).to_string(), "disk full");
///
/// let err = wrap(wrap(Some(root), "writing block"), "flushing cache").unwrap();
/// assert_eq!(cause(&err).to_string(), "disk full");
/// ```
pub fn cause<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(next) = causer(current).and_then(|c| c.cause()) {
        current = next;
    }
    current
}

/// Returns the immediate cause of `err`, if it reports one.
#[inline]
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Reports whether `target` appears anywhere in the chain of `err`.
///
/// A node matches when it is the very same value as `target`, or when it
/// exposes [`Matcher`](crate::Matcher) and accepts `target`.
pub fn is(err: &(dyn StdError + 'static), target: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|node| same_value(node, target) || matcher(node).is_some_and(|m| m.matches(target)))
}

fn same_value(a: &(dyn StdError + 'static), b: &(dyn StdError + 'static)) -> bool {
    ptr::addr_eq(a as *const dyn StdError, b as *const dyn StdError)
}

/// Returns the first error in the chain of `err` whose concrete type is `T`.
///
/// ```
/// use error_trace::{downcast, wrap};
/// use std::io;
///
/// let leaf = io::Error::new(io::ErrorKind::TimedOut, "txn");
/// let err = wrap(Some(leaf), "committing").unwrap();
/// let io_err = downcast::<io::Error>(&err).unwrap();
/// assert_eq!(io_err.kind(), io::ErrorKind::TimedOut);
/// ```
pub fn downcast<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    chain(err).find_map(|node| node.downcast_ref::<T>())
}

/// Iterates over `err` followed by each successive `source()`.
#[inline]
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

/// Iterator returned by [`chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}
