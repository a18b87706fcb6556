//! Merge, flatten and walk the several errors one operation can produce.
//!
//! A write can fail and the close that follows can fail too. `error_merge`
//! keeps both: [`merge`] collects any number of possibly-absent errors into
//! an `Option<Failure<E>>` that is `None`, a single error, or a flattened
//! [`ErrorList`]. The result still renders like one error, and [`Walk`]
//! visits every underlying error in order when you need them individually.
//!
//! # Examples
//!
//! ## Primary error plus cleanup error
//!
//! ```
//! use error_merge::{merge_into, Failure};
//!
//! struct Resource { write: Result<(), &'static str>, close: Result<(), &'static str> }
//!
//! impl Resource {
//!     fn write(&mut self) -> Result<(), &'static str> { self.write }
//!     fn close(self) -> Result<(), &'static str> { self.close }
//! }
//!
//! fn write_then_close(mut res: Resource) -> Option<Failure<&'static str>> {
//!     let mut err = res.write().err().map(Failure::from);
//!     merge_into(&mut err, || res.close());
//!     err
//! }
//!
//! let err = write_then_close(Resource { write: Err("write failed"), close: Err("close failed") });
//! assert_eq!(err.unwrap().to_string(), "write failed\nclose failed");
//! ```
//!
//! ## Walking a long list
//!
//! ```
//! use error_merge::{append, Failure, Walk};
//!
//! let mut list = None;
//! for n in 1..=1000 {
//!     list = append(list, Some(Failure::from(format!("number {n}"))));
//! }
//!
//! let mut shown = Vec::new();
//! list.walk_bounded(3, |e| shown.push(e.clone()));
//! assert_eq!(shown, ["number 1", "number 2", "number 3"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Variadic `merge!` macro
pub mod macros;
/// Merging possibly-absent failures
pub mod merge;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Conversion and traversal traits
pub mod traits;
/// Failure, ErrorList and rendering
pub mod types;
/// Traversal of possibly-absent failures
pub mod walk;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use merge::{append, merge, merge_into};
pub use traits::{IntoFailure, Walk};
pub use types::{
    render, render_with, ErrorList, ErrorVec, Failure, FailureResult, ListFormatBuilder,
    ListFormatConfig,
};
pub use walk::{first, walk, walk_bounded, walk_partial};
