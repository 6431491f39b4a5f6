// Benchmarks for poll operations
//
// Measures the fixed overhead this crate adds around a page lookup:
// - Locator rendering (selector strings)
// - A poll that hits on the first lookup (no sleeping)
// - A click through Actions on an element that is already present

use async_trait::async_trait;
use criterion::{Criterion, criterion_group, criterion_main};
use element_wait::{Actions, ElementFinder, ElementHandle, Locator, Page, Result};
use std::hint::black_box;

struct Present;

#[async_trait]
impl ElementHandle for Present {
    async fn click(&self) -> Result<()> {
        Ok(())
    }
}

// Page on which every locator matches immediately
struct EagerPage;

#[async_trait]
impl Page for EagerPage {
    type Element = Present;

    async fn find_first(&self, locator: &Locator) -> Result<Option<Present>> {
        black_box(locator.selector());
        Ok(Some(Present))
    }
}

fn locator_rendering_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("locator_rendering");

    group.bench_function("text_contains_enabled", |b| {
        let locator = Locator::text_contains_enabled("button", "Submit");
        b.iter(|| black_box(locator.selector()));
    });

    group.bench_function("class", |b| {
        let locator = Locator::class("div", ".MuiSelect-select");
        b.iter(|| black_box(locator.selector()));
    });

    group.bench_function("display", |b| {
        let locator = Locator::text_contains("button", "Submit");
        b.iter(|| black_box(locator.to_string()));
    });

    group.finish();
}

fn immediate_hit_benchmark(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let page = EagerPage;

    let mut group = c.benchmark_group("immediate_hit");

    group.bench_function("find_by_text_contains", |b| {
        b.iter(|| {
            runtime.block_on(async {
                let found = ElementFinder::new(&page)
                    .find_by_text_contains("button", "Submit")
                    .await
                    .unwrap();
                black_box(found.is_some());
            });
        });
    });

    group.bench_function("click", |b| {
        b.iter(|| {
            runtime.block_on(async {
                Actions::new(&page).click("button", "Submit").await.unwrap();
            });
        });
    });

    group.finish();
}

criterion_group!(benches, locator_rendering_benchmark, immediate_hit_benchmark);
criterion_main!(benches);
