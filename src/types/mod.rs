//! Failure value types.
//!
//! A fallible step either produced nothing (`None`), one error
//! ([`Failure::Single`]) or several ([`Failure::List`]). The three cases share
//! one representation, `Option<Failure<E>>`, so callers never special-case
//! "did this become a list".
//!
//! # Examples
//!
//! ```
//! use error_merge::{merge, Failure};
//!
//! let write: Option<Failure<&str>> = Some(Failure::from("write failed"));
//! let close: Option<Failure<&str>> = Some(Failure::from("close failed"));
//!
//! let failure = merge([write, close]).unwrap();
//! assert!(failure.is_list());
//! assert_eq!(failure.to_string(), "write failed\nclose failed");
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_list;
pub mod failure;
pub mod list_formatter;

pub use error_list::*;
pub use failure::*;
pub use list_formatter::*;

/// SmallVec-backed storage for the trailing errors of an [`ErrorList`].
///
/// Two inline slots keep the common "primary error plus cleanup error" case,
/// and its first follow-up, off the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result alias whose error side is one or more `E`.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The leaf error type
pub type FailureResult<T, E> = Result<T, Failure<E>>;
