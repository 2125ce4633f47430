// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stacking --heading-base-level=0

//! Understory Stacking: find the CSS stacking contexts above a node.
//!
//! ## Overview
//!
//! Given a node in a document tree, this crate returns the ancestors that establish a
//! [stacking context], nearest first.
//! Devtools, layout debuggers, and visual-regression tooling use the chain to explain why
//! one element paints above or below another.
//!
//! It does not own a tree and does not resolve styles.
//! Describe your tree with a [`DocumentTree`](crate::types::DocumentTree) (parent links and
//! tag names) and supply a [`StyleResolver`](crate::style::StyleResolver) that returns the
//! computed style of a node as string values.
//!
//! ## Rules
//!
//! The [`predicate`] evaluates an ordered rule table taken from the CSS rendering model:
//! the root element, positioned elements with `z-index`, fixed and sticky positioning,
//! `z-index` on flex and grid items, `opacity`, `mix-blend-mode`, `transform`-like effects,
//! `isolation`, and optionally vendor touch scrolling and `will-change`.
//! Order matters: a non-`auto` `z-index` outside a flex or grid container ends evaluation
//! before the effect rules are consulted.
//! See the [`predicate`] module for the full table.
//!
//! ## Walking
//!
//! The [`walker`] starts at the target's parent and climbs to the top of the tree.
//! - [`find_stacking_contexts`](crate::walker::find_stacking_contexts) returns the qualifying nodes.
//! - [`explain_stacking_contexts`](crate::walker::explain_stacking_contexts) also returns the
//!   [`StackingReason`](crate::types::StackingReason) for each.
//! - [`StackingContexts`](crate::walker::StackingContexts) binds a tree, a default resolver,
//!   and a [`StackingConfig`](crate::types::StackingConfig).
//!
//! Resolver failures abort the walk and are returned as
//! [`StackingError`](crate::error::StackingError).
//!
//! ## Minimal example
//!
//! ```
//! use core::convert::Infallible;
//! use understory_stacking::style::{ComputedStyle, resolver_fn};
//! use understory_stacking::types::DocumentTree;
//! use understory_stacking::walker::find_stacking_contexts;
//!
//! // html > body > div(opacity: 0.5) > span
//! struct Doc {
//!     tags: [&'static str; 4],
//!     styles: [ComputedStyle; 4],
//! }
//!
//! impl DocumentTree<usize> for Doc {
//!     fn parent_of(&self, node: &usize) -> Option<usize> {
//!         node.checked_sub(1)
//!     }
//!     fn tag_of(&self, node: &usize) -> Option<&str> {
//!         Some(self.tags[*node])
//!     }
//! }
//!
//! let doc = Doc {
//!     tags: ["HTML", "BODY", "DIV", "SPAN"],
//!     styles: [
//!         ComputedStyle::new(),
//!         ComputedStyle::new().with("display", "block"),
//!         ComputedStyle::new().with("opacity", "0.5"),
//!         ComputedStyle::new(),
//!     ],
//! };
//! let resolver = resolver_fn(|node: &usize| Ok::<_, Infallible>(doc.styles[*node].clone()));
//!
//! let chain = find_stacking_contexts(&doc, &3_usize, &resolver).unwrap();
//! assert_eq!(chain, vec![2, 0]);
//! ```
//!
//! ## Logging
//!
//! The walker emits `tracing` events: `trace` per visited ancestor and `debug` per
//! stacking context found. Install a subscriber to see them.
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [stacking context]: https://developer.mozilla.org/en-US/docs/Web/CSS/CSS_positioned_layout/Stacking_context

#![no_std]

extern crate alloc;

pub mod error;
pub mod predicate;
pub mod style;
pub mod types;
pub mod walker;

#[cfg(test)]
mod test_util;
