// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explain stacking contexts.
//!
//! Bind a finder to a document, enable the optional `will-change` rule, and print
//! why each ancestor establishes a stacking context. Set `RUST_LOG=trace` to see
//! the walker's events.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_stacking_demos --example stacking_explain`

use std::collections::HashMap;

use tracing_subscriber::EnvFilter;
use understory_stacking::error::StackingError;
use understory_stacking::style::{ComputedStyle, StyleResolver};
use understory_stacking::types::{DocumentTree, StackingOptions};
use understory_stacking::walker::StackingContexts;

/// Parent links and tags keyed by element id.
struct Tree {
    parents: HashMap<&'static str, &'static str>,
    tags: HashMap<&'static str, &'static str>,
}

impl DocumentTree<&'static str> for Tree {
    fn parent_of(&self, node: &&'static str) -> Option<&'static str> {
        self.parents.get(node).copied()
    }

    fn tag_of(&self, node: &&'static str) -> Option<&str> {
        self.tags.get(node).copied()
    }
}

/// Styles captured from a page, keyed by element id.
struct Snapshot(HashMap<&'static str, ComputedStyle>);

#[derive(Debug, thiserror::Error)]
#[error("no style captured for #{0}")]
struct NotCaptured(&'static str);

impl StyleResolver<&'static str> for Snapshot {
    type Style = ComputedStyle;
    type Error = NotCaptured;

    fn resolve(&self, node: &&'static str) -> Result<ComputedStyle, NotCaptured> {
        self.0.get(node).cloned().ok_or(NotCaptured(*node))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let edges = [
        ("body", "html", "BODY"),
        ("app", "body", "MAIN"),
        ("sidebar", "app", "ASIDE"),
        ("menu", "sidebar", "UL"),
        ("item", "menu", "LI"),
    ];
    let mut tree = Tree {
        parents: HashMap::new(),
        tags: HashMap::from([("html", "HTML")]),
    };
    for (id, parent, tag) in edges {
        tree.parents.insert(id, parent);
        tree.tags.insert(id, tag);
    }

    let snapshot = Snapshot(HashMap::from([
        ("body", ComputedStyle::new().with("display", "block")),
        (
            "app",
            ComputedStyle::new()
                .with("display", "grid")
                .with("isolation", "isolate"),
        ),
        ("sidebar", ComputedStyle::new().with("zIndex", "5")),
        ("menu", ComputedStyle::new().with("willChange", "transform")),
        ("item", ComputedStyle::new()),
    ]));

    let mut finder = StackingContexts::with_resolver(&tree, snapshot);
    finder.set_options(StackingOptions::TOUCH_SCROLLING | StackingOptions::WILL_CHANGE);

    match finder.explain(&"item") {
        Ok(chain) => {
            tracing::info!(ancestors = chain.len(), "explained #item");
            println!("== Stacking contexts above #item ==");
            for ctx in chain {
                println!("  #{:<8} {}", ctx.node, ctx.reason);
            }
        }
        Err(err) => eprintln!("error: {err}"),
    }

    // A partial snapshot fails the whole walk.
    let partial = Snapshot(HashMap::from([("item", ComputedStyle::new())]));
    match finder.find_with(&"item", Some(&partial)) {
        Err(StackingError::Resolve(err)) => println!("walk aborted: {err}"),
        other => println!("unexpected: {other:?}"),
    }
}
