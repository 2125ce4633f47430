// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stacking basics.
//!
//! Build a small document, then list the stacking contexts above a target element.
//!
//! Run:
//! - `cargo run -p understory_stacking_demos --example stacking_basics`

use core::convert::Infallible;

use understory_stacking::style::{ComputedStyle, StyleResolver};
use understory_stacking::types::DocumentTree;
use understory_stacking::walker::find_stacking_contexts;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Node(usize);

struct Element {
    tag: &'static str,
    parent: Option<Node>,
    style: ComputedStyle,
}

#[derive(Default)]
struct Document {
    elements: Vec<Element>,
}

impl Document {
    fn append(&mut self, parent: Option<Node>, tag: &'static str, style: &[(&str, &str)]) -> Node {
        self.elements.push(Element {
            tag,
            parent,
            style: style.iter().copied().collect(),
        });
        Node(self.elements.len() - 1)
    }
}

impl DocumentTree<Node> for Document {
    fn parent_of(&self, node: &Node) -> Option<Node> {
        self.elements[node.0].parent
    }

    fn tag_of(&self, node: &Node) -> Option<&str> {
        Some(self.elements[node.0].tag)
    }
}

impl StyleResolver<Node> for Document {
    type Style = ComputedStyle;
    type Error = Infallible;

    fn resolve(&self, node: &Node) -> Result<ComputedStyle, Infallible> {
        Ok(self.elements[node.0].style.clone())
    }
}

fn main() {
    let mut doc = Document::default();
    let html = doc.append(None, "HTML", &[]);
    let body = doc.append(Some(html), "BODY", &[("display", "block")]);
    let dialog = doc.append(
        Some(body),
        "DIV",
        &[("position", "relative"), ("zIndex", "10")],
    );
    let content = doc.append(Some(dialog), "DIV", &[("display", "flex")]);
    let badge = doc.append(Some(content), "SPAN", &[("z-index", "2")]);
    let icon = doc.append(Some(badge), "I", &[]);

    let chain = find_stacking_contexts(&doc, &icon, &doc).unwrap();
    println!("== Stacking contexts above {:?} (nearest first) ==", icon);
    for node in chain {
        println!("  {:?} <{}>", node, doc.elements[node.0].tag);
    }
}
