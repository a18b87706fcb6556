//! Rendering of failures as human-readable text.
//!
//! The default rendering puts one leaf error per line. [`ListFormatConfig`]
//! changes the separator, adds a per-item prefix, or caps the number of
//! leaves written for very long lists.

use crate::traits::Walk;
use crate::types::alloc_type::String;
use crate::types::Failure;
use core::fmt::{self, Display, Write};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

/// Configuration for rendering a list of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFormatConfig {
    pub separator: String,
    pub item_prefix: Option<String>,
    pub limit: Option<usize>,
}

impl Default for ListFormatConfig {
    fn default() -> Self {
        Self { separator: "\n".into(), item_prefix: None, limit: None }
    }
}

impl ListFormatConfig {
    /// One error per line, each prefixed with `"- "`.
    #[inline]
    pub fn bulleted() -> Self {
        Self { item_prefix: Some("- ".into()), ..Default::default() }
    }

    /// All errors on one line, separated by `"; "`.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: "; ".into(), ..Default::default() }
    }

    /// Renders at most `limit` errors followed by a `"... and N more"` summary.
    #[inline]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Builder for customizing how a failure is displayed.
///
/// Created by [`Failure::format`] or [`ListFormatBuilder::new`].
///
/// # Examples
///
/// ```
/// use error_merge::{merge, Failure};
///
/// let err = merge((1..=5).map(|n| Some(Failure::from(n)))).unwrap();
///
/// assert_eq!(err.format().compact().limit(2).to_string(), "1; 2; ... and 3 more");
/// assert_eq!(err.format().bulleted().limit(1).to_string(), "- 1\n... and 4 more");
/// ```
pub struct ListFormatBuilder<'a, W: ?Sized> {
    pub(crate) failure: &'a W,
    pub(crate) config: ListFormatConfig,
}

impl<'a, W: Walk + ?Sized> ListFormatBuilder<'a, W> {
    pub fn new(failure: &'a W) -> Self {
        Self { failure, config: ListFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ListFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.item_prefix = Some(prefix.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.config.limit = Some(limit);
        self
    }

    pub fn bulleted(mut self) -> Self {
        let limit = self.config.limit;
        self.config = ListFormatConfig { limit, ..ListFormatConfig::bulleted() };
        self
    }

    pub fn compact(mut self) -> Self {
        let limit = self.config.limit;
        self.config = ListFormatConfig { limit, ..ListFormatConfig::compact() };
        self
    }
}

impl<W> Display for ListFormatBuilder<'_, W>
where
    W: Walk + ?Sized,
    W::Leaf: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = self.config.limit.unwrap_or(usize::MAX);
        let mut written = 0usize;
        let mut outcome = Ok(());

        self.failure.walk_partial(|error| {
            if written == limit {
                return false;
            }
            outcome = self.write_item(f, written, error);
            written += 1;
            outcome.is_ok()
        });
        outcome?;

        let hidden = self.failure.leaf_count().saturating_sub(written);
        if hidden > 0 {
            if written > 0 {
                f.write_str(&self.config.separator)?;
            }
            write!(f, "... and {hidden} more")?;
        }
        Ok(())
    }
}

impl<W: ?Sized> ListFormatBuilder<'_, W> {
    fn write_item(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        error: &dyn Display,
    ) -> fmt::Result {
        if index > 0 {
            f.write_str(&self.config.separator)?;
        }
        if let Some(prefix) = &self.config.item_prefix {
            f.write_str(prefix)?;
        }
        write!(f, "{error}")
    }
}

impl<E> Failure<E> {
    /// Returns a builder for customizing how this failure is displayed.
    #[must_use]
    #[inline]
    pub fn format(&self) -> ListFormatBuilder<'_, Self> {
        ListFormatBuilder::new(self)
    }
}

/// Renders `value` as text: one line per leaf error, or an empty string when
/// nothing failed.
///
/// # Examples
///
/// ```
/// use error_merge::{merge, render, Failure};
///
/// let err = merge([Some(Failure::from("ab")), Some(Failure::from("cd"))]);
/// assert_eq!(render(err.as_ref()), "ab\ncd");
/// assert_eq!(render::<&str>(None), "");
/// ```
pub fn render<E: Display>(value: Option<&Failure<E>>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Renders `value` with a custom configuration.
pub fn render_with<E: Display>(value: Option<&Failure<E>>, config: ListFormatConfig) -> String {
    let mut out = String::new();
    if let Some(failure) = value {
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", failure.format().with_config(config));
    }
    out
}
