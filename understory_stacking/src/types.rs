// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: the document capability, stacking reasons, and configuration.
//!
//! ## Overview
//!
//! These types describe the inputs and outputs of the [`predicate`](crate::predicate)
//! and the [`walker`](crate::walker). Nodes are opaque keys `K`; everything the
//! crate needs to know about the tree comes from a [`DocumentTree`].

use alloc::borrow::Cow;

/// Tree structure needed to walk ancestors and recognize the document root.
///
/// Implement this for your DOM, arena, or any tree-shaped document model.
/// Parent chains must be acyclic; a cycle makes the walk non-terminating.
pub trait DocumentTree<K> {
    /// Returns the parent of `node`, or `None` if `node` has no parent.
    fn parent_of(&self, node: &K) -> Option<K>;

    /// Returns the tag name of `node` (for example `"HTML"` or `"div"`), if it has one.
    ///
    /// Only used to recognize the root element.
    fn tag_of(&self, node: &K) -> Option<&str>;
}

impl<K, T: DocumentTree<K> + ?Sized> DocumentTree<K> for &T {
    #[inline]
    fn parent_of(&self, node: &K) -> Option<K> {
        (**self).parent_of(node)
    }

    #[inline]
    fn tag_of(&self, node: &K) -> Option<&str> {
        (**self).tag_of(node)
    }
}

/// Why a node establishes a stacking context.
///
/// Variants follow the order in which the rules are evaluated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StackingReason {
    /// The root element.
    Root,
    /// `position: absolute | relative` with a non-`auto` `z-index`.
    PositionedWithZIndex,
    /// `position: fixed | sticky`.
    FixedOrSticky,
    /// Non-`auto` `z-index` on a child of a flex or grid container.
    FlexOrGridItem,
    /// `opacity` below `1`.
    Opacity,
    /// `mix-blend-mode` other than `normal`.
    MixBlendMode,
    /// One of `transform`, `filter`, `perspective`, `clip-path`, `mask`,
    /// `mask-image`, `mask-border` set to something other than `none`.
    Effect(&'static str),
    /// `isolation: isolate`.
    Isolation,
    /// Vendor touch scrolling (`-webkit-overflow-scrolling: touch`).
    TouchScrolling,
    /// `will-change` names a property that can create a stacking context.
    WillChange,
}

impl StackingReason {
    /// The CSS property that triggered this reason, or `None` for [`Root`](Self::Root).
    ///
    /// [`TouchScrolling`](Self::TouchScrolling) reports the default vendor property name.
    pub fn property(self) -> Option<&'static str> {
        match self {
            Self::Root => None,
            Self::PositionedWithZIndex | Self::FlexOrGridItem => Some("z-index"),
            Self::FixedOrSticky => Some("position"),
            Self::Opacity => Some("opacity"),
            Self::MixBlendMode => Some("mix-blend-mode"),
            Self::Effect(property) => Some(property),
            Self::Isolation => Some("isolation"),
            Self::TouchScrolling => Some(DEFAULT_TOUCH_SCROLL_PROPERTY),
            Self::WillChange => Some("will-change"),
        }
    }
}

impl core::fmt::Display for StackingReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Root => f.write_str("root element"),
            Self::PositionedWithZIndex => f.write_str("positioned with z-index"),
            Self::FixedOrSticky => f.write_str("fixed or sticky position"),
            Self::FlexOrGridItem => f.write_str("flex or grid item with z-index"),
            Self::Opacity => f.write_str("opacity less than 1"),
            Self::MixBlendMode => f.write_str("mix-blend-mode"),
            Self::Effect(property) => write!(f, "{property} is not none"),
            Self::Isolation => f.write_str("isolation: isolate"),
            Self::TouchScrolling => f.write_str("touch overflow scrolling"),
            Self::WillChange => f.write_str("will-change"),
        }
    }
}

/// A stacking-context ancestor together with the rule that qualified it.
///
/// Produced by [`explain_stacking_contexts`](crate::walker::explain_stacking_contexts).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StackingContext<K> {
    /// The ancestor node.
    pub node: K,
    /// The first rule that matched.
    pub reason: StackingReason,
}

bitflags::bitflags! {
    /// Optional rules of the predicate.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StackingOptions: u8 {
        /// Treat the vendor touch scrolling property set to `touch` as a stacking context.
        const TOUCH_SCROLLING = 0b0000_0001;
        /// Treat `will-change` naming a stacking-context property as a stacking context.
        const WILL_CHANGE     = 0b0000_0010;
    }
}

impl Default for StackingOptions {
    fn default() -> Self {
        Self::TOUCH_SCROLLING
    }
}

/// Tag name of the root element, compared ASCII case-insensitively.
pub const DEFAULT_ROOT_TAG: &str = "html";

/// Vendor property consulted for [`StackingReason::TouchScrolling`].
pub const DEFAULT_TOUCH_SCROLL_PROPERTY: &str = "-webkit-overflow-scrolling";

/// Predicate configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StackingConfig {
    /// Optional rules.
    pub options: StackingOptions,
    /// Tag name that identifies the root element.
    pub root_tag: Cow<'static, str>,
    /// Name of the vendor touch scrolling property.
    ///
    /// Some resolvers never report it; absence is a non-match.
    pub touch_scroll_property: Cow<'static, str>,
}

impl StackingConfig {
    /// Returns `true` if `tag` names the root element.
    pub fn is_root_tag(&self, tag: &str) -> bool {
        tag.eq_ignore_ascii_case(&self.root_tag)
    }
}

impl Default for StackingConfig {
    fn default() -> Self {
        Self {
            options: StackingOptions::default(),
            root_tag: Cow::Borrowed(DEFAULT_ROOT_TAG),
            touch_scroll_property: Cow::Borrowed(DEFAULT_TOUCH_SCROLL_PROPERTY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn root_tag_is_case_insensitive() {
        let config = StackingConfig::default();
        assert!(config.is_root_tag("HTML"));
        assert!(config.is_root_tag("html"));
        assert!(!config.is_root_tag("body"));
    }

    #[test]
    fn default_options_enable_touch_scrolling_only() {
        let options = StackingOptions::default();
        assert!(options.contains(StackingOptions::TOUCH_SCROLLING));
        assert!(!options.contains(StackingOptions::WILL_CHANGE));
    }

    #[test]
    fn reason_property_names() {
        assert_eq!(StackingReason::Root.property(), None);
        assert_eq!(StackingReason::FlexOrGridItem.property(), Some("z-index"));
        assert_eq!(
            StackingReason::Effect("clip-path").property(),
            Some("clip-path")
        );
        assert_eq!(
            StackingReason::TouchScrolling.property(),
            Some("-webkit-overflow-scrolling")
        );
    }

    #[test]
    fn reason_display() {
        assert_eq!(StackingReason::Root.to_string(), "root element");
        assert_eq!(
            StackingReason::Effect("transform").to_string(),
            "transform is not none"
        );
    }
}
