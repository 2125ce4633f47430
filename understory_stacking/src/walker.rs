// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ancestor walker.
//!
//! ## Overview
//!
//! Starting at the target's parent, walks parent links up to the top of the tree
//! and keeps every ancestor for which the [predicate](crate::predicate) holds.
//!
//! ## Ordering
//!
//! - Results are nearest first: index `0` is the closest qualifying ancestor.
//! - The target itself is never included.
//! - The root element always qualifies, so when it is reached it is the last entry.
//!
//! ## Failures
//!
//! A resolver failure aborts the walk and is returned; no partial chain is produced.
//! Parent chains must be acyclic.
//!
//! ## Default resolver
//!
//! The free functions take the resolver explicitly. [`StackingContexts`] holds a
//! tree, an optional default resolver, and a [`StackingConfig`]; per-call resolvers
//! override the default, and calling without either fails with
//! [`StackingError::MissingResolver`] before any node is inspected.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::error::StackingError;
use crate::predicate::stacking_reason;
use crate::style::StyleResolver;
use crate::types::{DocumentTree, StackingConfig, StackingContext, StackingOptions, StackingReason};

/// Collect the ancestors of `target` that establish stacking contexts, nearest first.
///
/// Uses the default [`StackingConfig`].
pub fn find_stacking_contexts<K, T, R>(
    tree: &T,
    target: &K,
    resolver: &R,
) -> Result<Vec<K>, StackingError<R::Error>>
where
    K: Copy,
    T: DocumentTree<K> + ?Sized,
    R: StyleResolver<K> + ?Sized,
{
    find_stacking_contexts_with_config(tree, target, resolver, &StackingConfig::default())
}

/// [`find_stacking_contexts`] with an explicit configuration.
pub fn find_stacking_contexts_with_config<K, T, R>(
    tree: &T,
    target: &K,
    resolver: &R,
    config: &StackingConfig,
) -> Result<Vec<K>, StackingError<R::Error>>
where
    K: Copy,
    T: DocumentTree<K> + ?Sized,
    R: StyleResolver<K> + ?Sized,
{
    let mut out = Vec::new();
    walk(tree, target, resolver, config, |node, _| out.push(node))?;
    Ok(out)
}

/// Like [`find_stacking_contexts`], but pairs each ancestor with the rule that qualified it.
pub fn explain_stacking_contexts<K, T, R>(
    tree: &T,
    target: &K,
    resolver: &R,
    config: &StackingConfig,
) -> Result<Vec<StackingContext<K>>, StackingError<R::Error>>
where
    K: Copy,
    T: DocumentTree<K> + ?Sized,
    R: StyleResolver<K> + ?Sized,
{
    let mut out = Vec::new();
    walk(tree, target, resolver, config, |node, reason| {
        out.push(StackingContext { node, reason });
    })?;
    Ok(out)
}

fn walk<K, T, R>(
    tree: &T,
    target: &K,
    resolver: &R,
    config: &StackingConfig,
    mut visit: impl FnMut(K, StackingReason),
) -> Result<(), StackingError<R::Error>>
where
    K: Copy,
    T: DocumentTree<K> + ?Sized,
    R: StyleResolver<K> + ?Sized,
{
    let mut depth = 0_usize;
    let mut current = tree.parent_of(target);
    // Caller ensures acyclic ancestry.
    while let Some(node) = current {
        depth += 1;
        tracing::trace!(depth, "visiting ancestor");
        if let Some(reason) = stacking_reason(tree, &node, resolver, config)? {
            tracing::debug!(depth, %reason, "ancestor establishes a stacking context");
            visit(node, reason);
        }
        current = tree.parent_of(&node);
    }
    Ok(())
}

/// Stacking-context finder bound to a tree, with an optional default resolver.
///
/// ## Usage
///
/// - Construct with [`StackingContexts::with_resolver`] to install a default
///   resolver, with [`StackingContexts::with_default_resolver`] when `R: Default`,
///   or with [`StackingContexts::new`] when every call supplies its own.
/// - Optionally configure the predicate with [`set_options`](Self::set_options),
///   [`set_root_tag`](Self::set_root_tag) and
///   [`set_touch_scroll_property`](Self::set_touch_scroll_property).
/// - Call [`find`](Self::find) or [`explain`](Self::explain) per target.
///   The `_with` variants accept a resolver that takes precedence over the default.
pub struct StackingContexts<K, T: DocumentTree<K>, R: StyleResolver<K>> {
    tree: T,
    resolver: Option<R>,
    config: StackingConfig,
    _phantom: core::marker::PhantomData<fn() -> K>,
}

impl<K, T: DocumentTree<K>, R: StyleResolver<K>> core::fmt::Debug for StackingContexts<K, T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackingContexts")
            .field("has_resolver", &self.resolver.is_some())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<K: Copy, T: DocumentTree<K>, R: StyleResolver<K> + Default> StackingContexts<K, T, R> {
    /// Create a finder whose default resolver is `R::default()`.
    pub fn with_default_resolver(tree: T) -> Self {
        Self::with_resolver(tree, R::default())
    }
}

impl<K: Copy, T: DocumentTree<K>, R: StyleResolver<K>> StackingContexts<K, T, R> {
    /// Create a finder without a default resolver.
    pub fn new(tree: T) -> Self {
        Self {
            tree,
            resolver: None,
            config: StackingConfig::default(),
            _phantom: core::marker::PhantomData,
        }
    }

    /// Create a finder with a default resolver.
    pub fn with_resolver(tree: T, resolver: R) -> Self {
        Self {
            resolver: Some(resolver),
            ..Self::new(tree)
        }
    }

    /// The tree this finder walks.
    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// The predicate configuration.
    pub fn config(&self) -> &StackingConfig {
        &self.config
    }

    /// Replace the default resolver.
    pub fn set_resolver(&mut self, resolver: Option<R>) {
        self.resolver = resolver;
    }

    /// Replace the whole predicate configuration.
    pub fn set_config(&mut self, config: StackingConfig) {
        self.config = config;
    }

    /// Select optional rules.
    pub fn set_options(&mut self, options: StackingOptions) {
        self.config.options = options;
    }

    /// Set the tag name that identifies the root element.
    pub fn set_root_tag(&mut self, tag: impl Into<Cow<'static, str>>) {
        self.config.root_tag = tag.into();
    }

    /// Set the vendor touch scrolling property name.
    pub fn set_touch_scroll_property(&mut self, property: impl Into<Cow<'static, str>>) {
        self.config.touch_scroll_property = property.into();
    }

    /// Stacking-context ancestors of `target`, nearest first, using the default resolver.
    pub fn find(&self, target: &K) -> Result<Vec<K>, StackingError<R::Error>> {
        self.find_with(target, None)
    }

    /// Stacking-context ancestors of `target`, nearest first.
    ///
    /// `resolver` takes precedence over the default resolver.
    pub fn find_with(
        &self,
        target: &K,
        resolver: Option<&R>,
    ) -> Result<Vec<K>, StackingError<R::Error>> {
        let resolver = self.pick(resolver)?;
        find_stacking_contexts_with_config(&self.tree, target, resolver, &self.config)
    }

    /// Stacking-context ancestors of `target` with their reasons, using the default resolver.
    pub fn explain(&self, target: &K) -> Result<Vec<StackingContext<K>>, StackingError<R::Error>> {
        self.explain_with(target, None)
    }

    /// Stacking-context ancestors of `target` with their reasons.
    pub fn explain_with(
        &self,
        target: &K,
        resolver: Option<&R>,
    ) -> Result<Vec<StackingContext<K>>, StackingError<R::Error>> {
        let resolver = self.pick(resolver)?;
        explain_stacking_contexts(&self.tree, target, resolver, &self.config)
    }

    /// Returns `true` if `node` itself establishes a stacking context.
    pub fn is_stacking_context(&self, node: &K) -> Result<bool, StackingError<R::Error>> {
        self.reason(node).map(|reason| reason.is_some())
    }

    /// The rule that makes `node` a stacking context, if any.
    pub fn reason(&self, node: &K) -> Result<Option<StackingReason>, StackingError<R::Error>> {
        let resolver = self.pick(None)?;
        stacking_reason(&self.tree, node, resolver, &self.config)
    }

    fn pick<'a>(&'a self, explicit: Option<&'a R>) -> Result<&'a R, StackingError<R::Error>> {
        explicit
            .or(self.resolver.as_ref())
            .ok_or(StackingError::MissingResolver)
    }
}
