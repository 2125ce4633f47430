// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking-context predicate.
//!
//! ## Rule order
//!
//! Rules are evaluated top to bottom and the first one that decides wins:
//!
//! 1. The root element always qualifies. Its style is not resolved.
//! 2. `position: absolute | relative` with a non-`auto` `z-index` qualifies.
//!    Otherwise evaluation continues.
//! 3. `position: fixed | sticky` qualifies.
//! 4. Any other non-`auto` `z-index` on a node with a parent is decided by the parent:
//!    a `flex` or `grid` parent qualifies the node, anything else disqualifies it.
//!    Either way evaluation stops here, so such a node never reaches the rules below.
//! 5. `opacity` other than `1`.
//! 6. `mix-blend-mode` other than `normal`.
//! 7. The first of `transform`, `filter`, `perspective`, `clip-path`, `mask`,
//!    `mask-image`, `mask-border` that is not `none`.
//! 8. `isolation: isolate`.
//! 9. The vendor touch scrolling property set to `touch`
//!    ([`StackingOptions::TOUCH_SCROLLING`]).
//! 10. `will-change` naming a property that can create a stacking context
//!     ([`StackingOptions::WILL_CHANGE`]).
//!
//! `contain` is not considered.

use crate::error::StackingError;
use crate::style::{StyleRecord, StyleResolver};
use crate::types::{DocumentTree, StackingConfig, StackingOptions, StackingReason};

/// Properties checked by the effect rule, in evaluation order.
pub const EFFECT_PROPERTIES: [&str; 7] = [
    "transform",
    "filter",
    "perspective",
    "clip-path",
    "mask",
    "mask-image",
    "mask-border",
];

/// Properties that qualify a node when named in `will-change`.
pub const WILL_CHANGE_PROPERTIES: [&str; 12] = [
    "position",
    "z-index",
    "opacity",
    "mix-blend-mode",
    "transform",
    "filter",
    "perspective",
    "clip-path",
    "mask",
    "mask-image",
    "mask-border",
    "isolation",
];

/// Returns `true` if `node` establishes a stacking context.
///
/// See [`stacking_reason`] for the rules and failure modes.
pub fn is_stacking_context<K, T, R>(
    tree: &T,
    node: &K,
    resolver: &R,
    config: &StackingConfig,
) -> Result<bool, StackingError<R::Error>>
where
    T: DocumentTree<K> + ?Sized,
    R: StyleResolver<K> + ?Sized,
{
    stacking_reason(tree, node, resolver, config).map(|reason| reason.is_some())
}

/// Returns the rule that makes `node` a stacking context, or `None` if it is not one.
///
/// Resolves the style of `node`, and of its parent when a `z-index` has to be
/// checked against the parent's `display`. Resolver failures are returned as
/// [`StackingError::Resolve`]. Nothing is mutated.
pub fn stacking_reason<K, T, R>(
    tree: &T,
    node: &K,
    resolver: &R,
    config: &StackingConfig,
) -> Result<Option<StackingReason>, StackingError<R::Error>>
where
    T: DocumentTree<K> + ?Sized,
    R: StyleResolver<K> + ?Sized,
{
    if tree.tag_of(node).is_some_and(|tag| config.is_root_tag(tag)) {
        return Ok(Some(StackingReason::Root));
    }

    let style = resolver.resolve(node).map_err(StackingError::Resolve)?;
    let position = value(&style, "position");
    let z_index = value(&style, "z-index").filter(|z| *z != "auto");

    if matches!(position, Some("absolute" | "relative")) && z_index.is_some() {
        return Ok(Some(StackingReason::PositionedWithZIndex));
    }

    if matches!(position, Some("fixed" | "sticky")) {
        return Ok(Some(StackingReason::FixedOrSticky));
    }

    if z_index.is_some()
        && let Some(parent) = tree.parent_of(node)
    {
        let parent_style = resolver.resolve(&parent).map_err(StackingError::Resolve)?;
        if matches!(value(&parent_style, "display"), Some("flex" | "grid")) {
            return Ok(Some(StackingReason::FlexOrGridItem));
        }
        tracing::trace!("z-index outside a flex or grid container; remaining rules skipped");
        return Ok(None);
    }

    if value(&style, "opacity").is_some_and(|opacity| opacity != "1") {
        return Ok(Some(StackingReason::Opacity));
    }

    if value(&style, "mix-blend-mode").is_some_and(|mode| mode != "normal") {
        return Ok(Some(StackingReason::MixBlendMode));
    }

    if let Some(property) = EFFECT_PROPERTIES
        .into_iter()
        .find(|property| value(&style, property).is_some_and(|v| v != "none"))
    {
        return Ok(Some(StackingReason::Effect(property)));
    }

    if value(&style, "isolation") == Some("isolate") {
        return Ok(Some(StackingReason::Isolation));
    }

    if config.options.contains(StackingOptions::TOUCH_SCROLLING)
        && value(&style, &config.touch_scroll_property) == Some("touch")
    {
        return Ok(Some(StackingReason::TouchScrolling));
    }

    if config.options.contains(StackingOptions::WILL_CHANGE)
        && value(&style, "will-change").is_some_and(will_change_qualifies)
    {
        return Ok(Some(StackingReason::WillChange));
    }

    Ok(None)
}

/// Returns `true` if a `will-change` value names any of [`WILL_CHANGE_PROPERTIES`].
///
/// The value is split on commas and whitespace. Keywords such as `auto`,
/// `scroll-position` and `contents` never match.
pub fn will_change_qualifies(will_change: &str) -> bool {
    will_change
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|ident| !ident.is_empty())
        .any(|ident| {
            WILL_CHANGE_PROPERTIES
                .iter()
                .any(|property| ident.eq_ignore_ascii_case(property))
        })
}

// Trimmed value; empty strings read as absent.
fn value<'a, S: StyleRecord>(style: &'a S, property: &str) -> Option<&'a str> {
    style
        .get(property)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
