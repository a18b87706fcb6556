//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_merge::prelude::*;
//!
//! let err = merge!(Err::<(), _>("write failed"), Err::<(), _>("close failed"));
//! assert_eq!(first(err.as_ref()), Some(&"write failed"));
//! ```

// Macros
pub use crate::merge;

// Core types
pub use crate::types::{ErrorList, Failure, FailureResult};

// Operations
pub use crate::merge::{append, merge_into};
pub use crate::types::render;
pub use crate::walk::{first, walk_bounded, walk_partial};

// Traits
pub use crate::traits::{IntoFailure, Walk};
