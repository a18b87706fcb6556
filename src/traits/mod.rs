//! Core traits for merging and walking failures.
//!
//! - [`IntoFailure`]: Conversion of outcomes into merge arguments
//! - [`Walk`]: Full, partial and bounded traversal of leaf errors
//!
//! # Examples
//!
//! ```
//! use error_merge::traits::{IntoFailure, Walk};
//!
//! let failure = Err::<(), _>("boom").into_failure().unwrap();
//!
//! let mut seen = Vec::new();
//! failure.walk(|e| seen.push(*e));
//! assert_eq!(seen, ["boom"]);
//! ```

pub mod into_failure;
pub mod walk;

pub use into_failure::IntoFailure;
pub use walk::Walk;
