//! Optional capabilities an error value may expose to the chain walkers.
//!
//! The walkers only ever see `&dyn Error`, so a capability is found by
//! downcasting. Errors built by this crate are recognised directly. Any other
//! type opts in once per process with [`register_coder`], [`register_causer`]
//! or [`register_matcher`]; after that its values take part in
//! [`code`](crate::code), [`cause`](crate::cause) and [`is`](crate::is) like
//! the built-in ones.
//!
//! ```
//! use std::error::Error as StdError;
//! use std::fmt;
//!
//! use error_trace::{code, register_coder, wrap, Coder};
//!
//! #[derive(Debug)]
//! struct HttpError(u16);
//!
//! impl fmt::Display for HttpError {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "http {}", self.0)
//!     }
//! }
//!
//! impl StdError for HttpError {}
//!
//! impl Coder for HttpError {
//!     fn code(&self) -> i32 {
//!         i32::from(self.0)
//!     }
//! }
//!
//! register_coder::<HttpError>();
//!
//! let err = wrap(Some(HttpError(503)), "calling upstream").unwrap();
//! assert_eq!(code(Some(&err)), 503);
//! ```

use core::any::TypeId;
use std::error::Error as StdError;
use std::sync::{PoisonError, RwLock};

use crate::types::Error;

/// An error that carries an integer status code.
///
/// Types other than [`Error`] must be passed to [`register_coder`] before
/// the walkers can see the code.
pub trait Coder {
    fn code(&self) -> i32;
}

/// An error that names the error it wraps.
///
/// This is the relation followed by [`cause`](crate::cause). Types other
/// than [`Error`] must be passed to [`register_causer`].
pub trait Causer {
    fn cause(&self) -> Option<&(dyn StdError + 'static)>;
}

/// An error that can report that it stands for `target`.
///
/// Types other than [`Error`] must be passed to [`register_matcher`].
pub trait Matcher {
    fn matches(&self, target: &(dyn StdError + 'static)) -> bool;
}

type Lookup<C> = for<'a> fn(&'a (dyn StdError + 'static)) -> Option<&'a C>;

struct Table<C: ?Sized + 'static> {
    entries: RwLock<Vec<(TypeId, Lookup<C>)>>,
}

impl<C: ?Sized + 'static> Table<C> {
    const fn new() -> Self {
        Self { entries: RwLock::new(Vec::new()) }
    }

    fn insert(&self, id: TypeId, lookup: Lookup<C>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if !entries.iter().any(|(known, _)| *known == id) {
            entries.push((id, lookup));
        }
    }

    fn find<'a>(&self, err: &'a (dyn StdError + 'static)) -> Option<&'a C> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.iter().find_map(|(_, lookup)| lookup(err))
    }
}

static CODERS: Table<dyn Coder> = Table::new();
static CAUSERS: Table<dyn Causer> = Table::new();
static MATCHERS: Table<dyn Matcher> = Table::new();

fn as_coder<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn Coder + 'static)>
where
    T: Coder + StdError + 'static,
{
    err.downcast_ref::<T>().map(|value| value as &(dyn Coder + 'static))
}

fn as_causer<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn Causer + 'static)>
where
    T: Causer + StdError + 'static,
{
    err.downcast_ref::<T>().map(|value| value as &(dyn Causer + 'static))
}

fn as_matcher<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn Matcher + 'static)>
where
    T: Matcher + StdError + 'static,
{
    err.downcast_ref::<T>().map(|value| value as &(dyn Matcher + 'static))
}

/// Makes the [`Coder`] implementation of `T` visible to [`code`](crate::code)
/// and to the wrapping constructors. Registering a type twice is a no-op.
pub fn register_coder<T>()
where
    T: Coder + StdError + 'static,
{
    CODERS.insert(TypeId::of::<T>(), as_coder::<T>);
}

/// Makes the [`Causer`] implementation of `T` visible to
/// [`cause`](crate::cause). Registering a type twice is a no-op.
pub fn register_causer<T>()
where
    T: Causer + StdError + 'static,
{
    CAUSERS.insert(TypeId::of::<T>(), as_causer::<T>);
}

/// Makes the [`Matcher`] implementation of `T` visible to [`is`](crate::is).
/// Registering a type twice is a no-op.
pub fn register_matcher<T>()
where
    T: Matcher + StdError + 'static,
{
    MATCHERS.insert(TypeId::of::<T>(), as_matcher::<T>);
}

pub(crate) fn coder<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn Coder> {
    if let Some(e) = err.downcast_ref::<Error>() {
        return Some(e);
    }
    CODERS.find(err).map(|c| c as &dyn Coder)
}

pub(crate) fn causer<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn Causer> {
    if let Some(e) = err.downcast_ref::<Error>() {
        return Some(e);
    }
    CAUSERS.find(err).map(|c| c as &dyn Causer)
}

pub(crate) fn matcher<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn Matcher> {
    if let Some(e) = err.downcast_ref::<Error>() {
        return Some(e);
    }
    #[cfg(feature = "grpc")]
    if let Some(status) = err.downcast_ref::<tonic::Status>() {
        return Some(status);
    }
    MATCHERS.find(err).map(|m| m as &dyn Matcher)
}
