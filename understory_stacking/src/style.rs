// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed style records and the resolver capability.
//!
//! ## Overview
//!
//! The predicate never resolves styles itself. It asks a [`StyleResolver`] for a
//! [`StyleRecord`] per node and reads string values out of it.
//!
//! Property names are CSS kebab-case (`z-index`, `mix-blend-mode`). DOM camelCase
//! names (`zIndex`, `webkitOverflowScrolling`) are accepted by [`ComputedStyle`] and
//! normalized with [`normalize_property`], so records captured from a DOM
//! `CSSStyleDeclaration` can be fed in as-is.
//!
//! A missing property reads the same as its non-qualifying initial value
//! (`auto`, `none`, `normal`, `1`).

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;

/// Read-only view of the resolved style of one node.
pub trait StyleRecord {
    /// Returns the resolved value of `property`, or `None` when it is not reported.
    fn get(&self, property: &str) -> Option<&str>;
}

impl<S: StyleRecord + ?Sized> StyleRecord for &S {
    #[inline]
    fn get(&self, property: &str) -> Option<&str> {
        (**self).get(property)
    }
}

/// Resolve the computed style of a node.
///
/// Supplied by the caller; the predicate invokes it once per node it inspects,
/// and once more for the parent when a `z-index` needs the parent's `display`.
/// Errors are propagated unchanged inside
/// [`StackingError::Resolve`](crate::error::StackingError::Resolve).
pub trait StyleResolver<K> {
    /// Style record produced for a node.
    type Style: StyleRecord;
    /// Failure reported when a node's style cannot be resolved.
    type Error;

    /// Resolve the computed style of `node`.
    fn resolve(&self, node: &K) -> Result<Self::Style, Self::Error>;
}

impl<K, R: StyleResolver<K> + ?Sized> StyleResolver<K> for &R {
    type Style = R::Style;
    type Error = R::Error;

    #[inline]
    fn resolve(&self, node: &K) -> Result<Self::Style, Self::Error> {
        (**self).resolve(node)
    }
}

/// A [`StyleResolver`] backed by a closure.
///
/// Built with [`resolver_fn`].
#[derive(Clone, Copy)]
pub struct FnResolver<F>(F);

impl<F> core::fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnResolver").finish_non_exhaustive()
    }
}

/// Wrap a closure `Fn(&K) -> Result<S, E>` as a [`StyleResolver`].
///
/// ```
/// use core::convert::Infallible;
/// use understory_stacking::style::{ComputedStyle, StyleRecord, StyleResolver, resolver_fn};
///
/// let resolver = resolver_fn(|_node: &u32| Ok::<_, Infallible>(ComputedStyle::new().with("opacity", "0.5")));
/// let style = resolver.resolve(&7).unwrap();
/// assert_eq!(style.get("opacity"), Some("0.5"));
/// ```
pub fn resolver_fn<K, S, E, F>(f: F) -> FnResolver<F>
where
    F: Fn(&K) -> Result<S, E>,
    S: StyleRecord,
{
    FnResolver(f)
}

impl<K, S, E, F> StyleResolver<K> for FnResolver<F>
where
    F: Fn(&K) -> Result<S, E>,
    S: StyleRecord,
{
    type Style = S;
    type Error = E;

    #[inline]
    fn resolve(&self, node: &K) -> Result<S, E> {
        (self.0)(node)
    }
}

/// Owned snapshot of a node's resolved style.
///
/// Keys are stored in CSS kebab-case; see [`normalize_property`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComputedStyle {
    properties: BTreeMap<String, String>,
}

impl ComputedStyle {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            properties: BTreeMap::new(),
        }
    }

    /// Set `property` to `value`, returning the previous value if any.
    pub fn insert(&mut self, property: &str, value: impl Into<String>) -> Option<String> {
        self.properties
            .insert(normalize_property(property).into_owned(), value.into())
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Returns the value of `property`, accepting either naming convention.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .get(normalize_property(property).as_ref())
            .map(String::as_str)
    }

    /// Number of reported properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` when no property is reported.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate `(property, value)` pairs in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl StyleRecord for ComputedStyle {
    #[inline]
    fn get(&self, property: &str) -> Option<&str> {
        Self::get(self, property)
    }
}

impl<P: AsRef<str>, V: Into<String>> Extend<(P, V)> for ComputedStyle {
    fn extend<I: IntoIterator<Item = (P, V)>>(&mut self, iter: I) {
        for (property, value) in iter {
            self.insert(property.as_ref(), value);
        }
    }
}

impl<P: AsRef<str>, V: Into<String>> FromIterator<(P, V)> for ComputedStyle {
    fn from_iter<I: IntoIterator<Item = (P, V)>>(iter: I) -> Self {
        let mut style = Self::new();
        style.extend(iter);
        style
    }
}

const VENDOR_PREFIXES: [&str; 3] = ["webkit-", "moz-", "ms-"];

/// Convert a property name to CSS kebab-case.
///
/// - Kebab-case input is lowercased (`Z-Index` → `z-index`).
/// - camelCase input is split on upper-case letters (`mixBlendMode` → `mix-blend-mode`).
/// - Vendor prefixes gain their leading dash
///   (`webkitOverflowScrolling`, `WebkitOverflowScrolling` → `-webkit-overflow-scrolling`).
///
/// Already-normalized names are returned borrowed.
pub fn normalize_property(name: &str) -> Cow<'_, str> {
    let name = name.trim();
    if !name.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }
    if name.contains('-') {
        return Cow::Owned(name.to_ascii_lowercase());
    }

    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.char_indices() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    if VENDOR_PREFIXES.iter().any(|p| out.starts_with(p)) {
        out.insert(0, '-');
    }
    Cow::Owned(out)
}
