//! Benchmarks for the page window computation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use page_window::{NavButtons, PageStrip, PageWindow, PaginationConfig, Paginator};

fn large_config() -> PaginationConfig {
    let mut config = PaginationConfig::new(10_000_000, 25).unwrap();
    config.set_current_item(4_321_000).unwrap();
    config.set_max_visible_pages(9).unwrap();
    config.set_edge_pages(2).unwrap();
    config.set_middle_pages(3).unwrap();
    config.set_middle_page_gap(10).unwrap();
    config
}

fn bench_compute_small(c: &mut Criterion) {
    c.bench_function("compute_small", |b| {
        let mut config = PaginationConfig::new(1237, 12).unwrap();
        config.set_current_item(61).unwrap();
        b.iter(|| {
            black_box(PageWindow::compute(black_box(&config)));
        });
    });
}

fn bench_compute_large(c: &mut Criterion) {
    c.bench_function("compute_large_with_middles", |b| {
        let config = large_config();
        b.iter(|| {
            black_box(PageWindow::compute(black_box(&config)));
        });
    });
}

fn bench_build_strip(c: &mut Criterion) {
    c.bench_function("build_strip", |b| {
        let config = large_config();
        let window = PageWindow::compute(&config);
        b.iter(|| {
            let buttons = NavButtons::resolve(&config);
            black_box(PageStrip::build(&config, &window, &buttons));
        });
    });
}

fn bench_navigation_sweep(c: &mut Criterion) {
    c.bench_function("navigation_sweep", |b| {
        let mut paginator = Paginator::with_items(100_000, 10).unwrap();
        paginator.subscribe(|update| {
            black_box(update.current_page);
        });
        b.iter(|| {
            paginator.first();
            for _ in 0..100 {
                paginator.next();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_compute_small,
    bench_compute_large,
    bench_build_strip,
    bench_navigation_sweep,
);

criterion_main!(benches);
