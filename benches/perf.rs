use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use duel_terminal::metrics::{self, STANDARD};
use duel_terminal::normalize::normalize_pair;
use duel_terminal::record::StatTable;
use duel_terminal::season::normalize_season;
use duel_terminal::stats_fetch::parse_season_stats_json;

static SEASON_STATS_JSON: &str = include_str!("../tests/fixtures/season_stats.json");

fn bench_season_stats_parse(c: &mut Criterion) {
    c.bench_function("season_stats_parse", |b| {
        b.iter(|| {
            let rows = parse_season_stats_json(black_box(SEASON_STATS_JSON)).unwrap();
            black_box(rows.len());
        })
    });
}

fn bench_season_normalize(c: &mut Criterion) {
    const INPUTS: [&str; 6] = [
        "2017/2018",
        "2017/18",
        "17/18",
        "1718",
        "2023",
        "not a season",
    ];
    c.bench_function("season_normalize", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(normalize_season(black_box(input)));
            }
        })
    });
}

fn bench_extract_and_derive(c: &mut Criterion) {
    let rows = parse_season_stats_json(SEASON_STATS_JSON).unwrap();
    let record = rows.first().expect("fixture has rows").clone();
    c.bench_function("extract_and_derive", |b| {
        b.iter(|| {
            let raw = metrics::extract(black_box(&record), StatTable::Standard, &STANDARD).unwrap();
            let derived = metrics::derive_per90(&raw, 22.6, "bench").unwrap();
            black_box(derived.len());
        })
    });
}

fn bench_normalize_pair(c: &mut Criterion) {
    let v1: Vec<f64> = (0..11).map(|i| i as f64 * 0.37).collect();
    let v2: Vec<f64> = (0..11).map(|i| (10 - i) as f64 * 0.29).collect();
    c.bench_function("normalize_pair", |b| {
        b.iter(|| {
            let (n1, n2) = normalize_pair(black_box(&v1), black_box(&v2));
            black_box((n1.len(), n2.len()));
        })
    });
}

criterion_group!(
    perf,
    bench_season_stats_parse,
    bench_season_normalize,
    bench_extract_and_derive,
    bench_normalize_pair
);
criterion_main!(perf);
