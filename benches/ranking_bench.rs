use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sigungu::format::{approximate_population, human_friendly_domain};
use sigungu::rank::{base_order, sort_by_distance};
use sigungu::selection::suggest;
use sigungu::{Dataset, Division, DivisionKey, DivisionType, SelectionController};

/// A synthetic national grid of roughly the size of the 시군구 level.
fn grid_dataset() -> Dataset {
    let mut divisions = Vec::new();
    for i in 0..250u64 {
        let lat = 33.0 + (i / 16) as f64 * 0.35;
        let lon = 125.0 + (i % 16) as f64 * 0.38;
        let mut d = Division::new(format!("지역{:03}구", i), 10_000 + i * 3_917, DivisionType::District)
            .with_id(i + 1)
            .with_area(20.0 + i as f64)
            .with_link(format!("https://www.region{}.go.kr/main", i));
        if i % 25 != 0 {
            d = d.with_coord(lat, lon);
        }
        divisions.push(d);
    }
    Dataset::from_divisions(divisions).unwrap()
}

fn bench_base_order(c: &mut Criterion) {
    let ds = grid_dataset();
    c.bench_function("base_order_250", |b| {
        b.iter(|| base_order(black_box(ds.divisions())))
    });
}

fn bench_sort_by_distance(c: &mut Criterion) {
    let ds = grid_dataset();
    let base = base_order(ds.divisions());
    let target = ds.get(&DivisionKey::Id(120)).unwrap();
    c.bench_function("sort_by_distance_250", |b| {
        b.iter(|| sort_by_distance(black_box(&base), black_box(target)))
    });
}

fn bench_select_cycle(c: &mut Criterion) {
    let ds = grid_dataset();
    c.bench_function("select_then_clear", |b| {
        let mut ctl = SelectionController::new(&ds);
        b.iter(|| {
            ctl.select(black_box(&DivisionKey::Id(77))).unwrap();
            ctl.clear();
        })
    });
}

fn bench_suggest(c: &mut Criterion) {
    let ds = grid_dataset();
    c.bench_function("suggest_prefix", |b| {
        b.iter(|| suggest(black_box(&ds), black_box("지역1")))
    });
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("approximate_population", |b| {
        b.iter(|| approximate_population(black_box(561_052)))
    });
    c.bench_function("human_friendly_domain", |b| {
        b.iter(|| human_friendly_domain(black_box("https://www.seoul.go.kr/main/index.jsp")))
    });
}

criterion_group!(
    benches,
    bench_base_order,
    bench_sort_by_distance,
    bench_select_cycle,
    bench_suggest,
    bench_formatting
);
criterion_main!(benches);
