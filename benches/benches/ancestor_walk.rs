// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::convert::Infallible;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_stacking::style::{ComputedStyle, StyleResolver};
use understory_stacking::types::{DocumentTree, StackingConfig, StackingOptions};
use understory_stacking::walker::{explain_stacking_contexts, find_stacking_contexts};

/// A single parent chain: node `i` is the parent of node `i + 1`, node `0` is `<html>`.
struct Chain {
    styles: Vec<ComputedStyle>,
}

impl DocumentTree<usize> for Chain {
    fn parent_of(&self, node: &usize) -> Option<usize> {
        node.checked_sub(1)
    }

    fn tag_of(&self, node: &usize) -> Option<&str> {
        Some(if *node == 0 { "HTML" } else { "DIV" })
    }
}

impl StyleResolver<usize> for Chain {
    type Style = ComputedStyle;
    type Error = Infallible;

    fn resolve(&self, node: &usize) -> Result<ComputedStyle, Infallible> {
        Ok(self.styles[*node].clone())
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_plain_chain(depth: usize) -> Chain {
    Chain {
        styles: (0..depth)
            .map(|_| ComputedStyle::new().with("display", "block"))
            .collect(),
    }
}

fn gen_mixed_chain(depth: usize, seed: u64) -> Chain {
    let mut rng = Rng::new(seed);
    let styles = (0..depth)
        .map(|_| match rng.next_u64() % 8 {
            0 => ComputedStyle::new().with("opacity", "0.5"),
            1 => ComputedStyle::new()
                .with("position", "relative")
                .with("z-index", "1"),
            2 => ComputedStyle::new().with("display", "flex"),
            3 => ComputedStyle::new().with("z-index", "2"),
            4 => ComputedStyle::new().with("transform", "rotate(1deg)"),
            5 => ComputedStyle::new().with("will-change", "opacity"),
            _ => ComputedStyle::new().with("display", "block"),
        })
        .collect();
    Chain { styles }
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_stacking_contexts");
    for &depth in &[16usize, 64, 256] {
        group.throughput(Throughput::Elements(depth as u64));

        let plain = gen_plain_chain(depth);
        group.bench_function(format!("plain_depth{}", depth), |b| {
            b.iter(|| {
                let found = find_stacking_contexts(&plain, &(depth - 1), &plain).unwrap();
                black_box(found.len());
            });
        });

        let mixed = gen_mixed_chain(depth, 0x9e37_79b9_7f4a_7c15);
        group.bench_function(format!("mixed_depth{}", depth), |b| {
            b.iter(|| {
                let found = find_stacking_contexts(&mixed, &(depth - 1), &mixed).unwrap();
                black_box(found.len());
            });
        });
    }
    group.finish();
}

fn bench_explain(c: &mut Criterion) {
    let mut group = c.benchmark_group("explain_stacking_contexts");
    let config = StackingConfig {
        options: StackingOptions::all(),
        ..StackingConfig::default()
    };
    for &depth in &[64usize, 256] {
        let mixed = gen_mixed_chain(depth, 0xdead_beef);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("mixed_all_rules_depth{}", depth), |b| {
            b.iter(|| {
                let found = explain_stacking_contexts(&mixed, &(depth - 1), &mixed, &config).unwrap();
                black_box(found.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_find, bench_explain);
criterion_main!(benches);
