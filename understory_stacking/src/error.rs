// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the predicate and the walker.

/// Failure of a stacking-context query.
///
/// `E` is the error type of the caller's [`StyleResolver`](crate::style::StyleResolver).
#[derive(Debug, thiserror::Error)]
pub enum StackingError<E> {
    /// No resolver was passed and the finder has no default resolver.
    ///
    /// Reported before any node is inspected.
    #[error("no style resolver was supplied and no default resolver is configured")]
    MissingResolver,
    /// The style resolver failed for a node; the walk was aborted.
    #[error("failed to resolve computed style")]
    Resolve(#[source] E),
}

impl<E> StackingError<E> {
    /// Returns the resolver error, if this is a resolution failure.
    pub fn into_resolve_error(self) -> Option<E> {
        match self {
            Self::Resolve(err) => Some(err),
            Self::MissingResolver => None,
        }
    }
}
