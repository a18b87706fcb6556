//! Conversion of fallible outcomes into merge arguments.
//!
//! The [`merge!`](crate::merge!) macro and [`merge_into`](crate::merge_into)
//! accept anything implementing [`IntoFailure`], so a plain `Result<(), E>`
//! from a cleanup call can be merged next to an existing failure without
//! manual wrapping.
//!
//! # Implementations
//!
//! - `Option<Failure<E>>` - Identity conversion (no-op)
//! - `Failure<E>` - Always present
//! - `ErrorList<E>` - Always present, as [`Failure::List`]
//! - `Result<(), E>` - `Err(e)` becomes [`Failure::Single`], `Ok(())` is absent
//!
//! # Examples
//!
//! ```
//! use error_merge::traits::IntoFailure;
//! use error_merge::Failure;
//!
//! let closed: Result<(), &str> = Err("close failed");
//! assert_eq!(closed.into_failure(), Some(Failure::Single("close failed")));
//!
//! let fine: Result<(), &str> = Ok(());
//! assert_eq!(fine.into_failure(), None);
//! ```
use crate::types::{ErrorList, Failure};

/// Converts a value into a possibly-absent [`Failure`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be merged as a failure",
    label = "this type does not implement `IntoFailure`",
    note = "wrap single errors with `Failure::from(err)` or pass a `Result<(), E>`"
)]
pub trait IntoFailure {
    /// The leaf error type.
    type Error;

    /// Converts `self`, returning `None` when there is no error.
    fn into_failure(self) -> Option<Failure<Self::Error>>;
}

impl<E> IntoFailure for Option<Failure<E>> {
    type Error = E;

    #[inline]
    fn into_failure(self) -> Option<Failure<E>> {
        self
    }
}

impl<E> IntoFailure for Failure<E> {
    type Error = E;

    #[inline]
    fn into_failure(self) -> Option<Failure<E>> {
        Some(self)
    }
}

impl<E> IntoFailure for ErrorList<E> {
    type Error = E;

    #[inline]
    fn into_failure(self) -> Option<Failure<E>> {
        Some(Failure::List(self))
    }
}

impl<E> IntoFailure for Result<(), E> {
    type Error = E;

    #[inline]
    fn into_failure(self) -> Option<Failure<E>> {
        self.err().map(Failure::Single)
    }
}
