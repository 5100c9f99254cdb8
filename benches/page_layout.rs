// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the work done after every page turn.
//!
//! Measures the performance of:
//! - Spread enumeration (page dots)
//! - Shadow and navigation recompute for every viewport of a book
//! - Page cache insertion and lookup

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use flipbook::book::viewport::{self, Viewport};
use flipbook::book::{CacheConfig, NavButtons, PageCache, PathRule, ShadowState};
use flipbook::config::DisplayMode;
use flipbook::media::ImageData;
use std::hint::black_box;

const BOOK_SIZES: &[usize] = &[21, 200, 999];

fn bench_spreads(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_layout");

    for &total in BOOK_SIZES {
        group.bench_with_input(BenchmarkId::new("spreads", total), &total, |b, &total| {
            b.iter(|| black_box(viewport::spreads(black_box(total), DisplayMode::Double)));
        });
    }

    group.finish();
}

/// Recomputes the UI state for every viewport, as a full read-through would.
fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_layout");

    for &total in BOOK_SIZES {
        let views: Vec<Viewport> = viewport::spreads(total, DisplayMode::Double);
        group.bench_with_input(BenchmarkId::new("sync_all", total), &views, |b, views| {
            let mut shadows = ShadowState::new();
            b.iter(|| {
                for view in views {
                    let current = view.last();
                    shadows.recompute(current, view, total);
                    black_box(NavButtons::for_page(current, total));
                }
                black_box(&shadows);
            });
        });
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_layout");
    let rule = PathRule::new("book");
    let page = ImageData::from_rgba(64, 64, vec![255; 64 * 64 * 4]);

    group.bench_function("cache_fill_and_hit", |b| {
        b.iter(|| {
            let mut cache = PageCache::new(CacheConfig::default());
            for index in 0..21 {
                cache.insert(rule.path_for(index), page.clone());
            }
            for index in 0..21 {
                black_box(cache.get(&rule.path_for(index)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_spreads, bench_sync, bench_cache);
criterion_main!(benches);
