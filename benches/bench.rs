// Criterion benchmarks for Whisker Algo

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashSet;
use whisker_algo::core::{assemble, build_query, score, Page};
use whisker_algo::models::{AgeRange, Cat, Location, PreferenceProfile};

fn create_cat(id: usize) -> Cat {
    Cat {
        id: id.to_string(),
        name: Some(format!("Cat {}", id)),
        color: if id % 3 == 0 { "black" } else { "white" }.to_string(),
        sex: if id % 2 == 0 { "female" } else { "male" }.to_string(),
        breed: if id % 5 == 0 { "tabby" } else { "siamese" }.to_string(),
        age: (id % 15) as u8,
        description: None,
        image_url: None,
    }
}

fn create_profile() -> PreferenceProfile {
    PreferenceProfile {
        location: Some(Location {
            latitude: 40.7128,
            longitude: -74.0060,
        }),
        radius: Some(25.0),
        color: Some("black".to_string()),
        sex: Some("female".to_string()),
        breed: Some("tabby".to_string()),
        age: Some(AgeRange {
            min_age: Some(1),
            max_age: Some(5),
        }),
        strict: false,
    }
}

fn bench_score(c: &mut Criterion) {
    let profile = create_profile();
    let cat = create_cat(0);

    c.bench_function("score", |b| {
        b.iter(|| score(black_box(&cat), black_box(&profile)));
    });
}

fn bench_build_query(c: &mut Criterion) {
    let profile = create_profile();

    c.bench_function("build_query_strict", |b| {
        b.iter(|| build_query(black_box(&profile), black_box(true)));
    });
}

fn bench_assemble(c: &mut Criterion) {
    let profile = create_profile();
    let excluded: HashSet<String> = (0..10).map(|i| (i * 7).to_string()).collect();

    let mut group = c.benchmark_group("assemble");

    for candidate_count in [10usize, 50, 100, 500, 1000].iter() {
        let cats: Vec<Cat> = (0..*candidate_count).map(create_cat).collect();

        group.bench_with_input(
            BenchmarkId::new("score_sort_page", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    assemble(
                        black_box(cats.clone()),
                        black_box(&excluded),
                        black_box(&profile),
                        black_box(Page::default()),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score, bench_build_query, bench_assemble);
criterion_main!(benches);
