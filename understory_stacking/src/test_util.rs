// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document used by the unit tests.

use alloc::vec::Vec;
use core::cell::Cell;

use crate::style::{ComputedStyle, StyleResolver};
use crate::types::DocumentTree;

struct DocNode {
    tag: &'static str,
    parent: Option<usize>,
    style: ComputedStyle,
    fails: bool,
}

/// Arena tree keyed by index. Node `0` is the root element.
pub(crate) struct Doc {
    nodes: Vec<DocNode>,
}

impl Doc {
    pub(crate) fn new() -> Self {
        Self::with_root_tag("HTML")
    }

    pub(crate) fn with_root_tag(tag: &'static str) -> Self {
        Self {
            nodes: alloc::vec![DocNode {
                tag,
                parent: None,
                style: ComputedStyle::new(),
                fails: false,
            }],
        }
    }

    pub(crate) fn root(&self) -> usize {
        0
    }

    pub(crate) fn push(
        &mut self,
        parent: usize,
        tag: &'static str,
        style: &[(&'static str, &'static str)],
    ) -> usize {
        self.insert(Some(parent), tag, style)
    }

    /// A node outside the tree, with no parent.
    pub(crate) fn push_detached(
        &mut self,
        tag: &'static str,
        style: &[(&'static str, &'static str)],
    ) -> usize {
        self.insert(None, tag, style)
    }

    /// Make style resolution fail for `node`.
    pub(crate) fn fail_on(&mut self, node: usize) {
        self.nodes[node].fails = true;
    }

    fn insert(
        &mut self,
        parent: Option<usize>,
        tag: &'static str,
        style: &[(&'static str, &'static str)],
    ) -> usize {
        self.nodes.push(DocNode {
            tag,
            parent,
            style: style.iter().copied().collect(),
            fails: false,
        });
        self.nodes.len() - 1
    }
}

impl DocumentTree<usize> for Doc {
    fn parent_of(&self, node: &usize) -> Option<usize> {
        self.nodes[*node].parent
    }

    fn tag_of(&self, node: &usize) -> Option<&str> {
        Some(self.nodes[*node].tag)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no computed style for node {0}")]
pub(crate) struct Unresolvable(pub(crate) usize);

/// Resolver over a [`Doc`] that counts calls.
pub(crate) struct Styles<'a> {
    doc: &'a Doc,
    calls: Cell<usize>,
}

impl<'a> Styles<'a> {
    pub(crate) fn new(doc: &'a Doc) -> Self {
        Self {
            doc,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn resolve_count(&self) -> usize {
        self.calls.get()
    }
}

impl StyleResolver<usize> for Styles<'_> {
    type Style = ComputedStyle;
    type Error = Unresolvable;

    fn resolve(&self, node: &usize) -> Result<ComputedStyle, Unresolvable> {
        self.calls.set(self.calls.get() + 1);
        let entry = &self.doc.nodes[*node];
        if entry.fails {
            return Err(Unresolvable(*node));
        }
        Ok(entry.style.clone())
    }
}
