use artfeed_service::{demo, Artwork, FeedPipeline};
use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CATEGORIES: [&str; 5] = ["illustration", "3d", "concept-art", "environment", "animation"];

fn synthetic_catalogue(size: usize) -> Vec<Artwork> {
    let now = Utc::now();
    (0..size)
        .map(|i| Artwork {
            id: format!("art{}", i),
            title: format!("Artwork #{}", i),
            artist_id: format!("artist{}", i % 97),
            tags: [format!("tag{}", i % 31), format!("tag{}", i % 17)]
                .into_iter()
                .collect(),
            upload_date: now - Duration::hours((i % 240) as i64),
            likes: (i * 37 % 900) as u64,
            views: (i * 131 % 9000) as u64,
            comments: (i * 7 % 80) as u64,
            quality_score: (i % 101) as f64,
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
        })
        .collect()
}

fn bench_generate_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_feed");
    let pipeline = FeedPipeline::default();
    let viewer = demo::sample_viewer();
    let now = Utc::now();

    for size in [100, 1000, 10000] {
        let artworks = synthetic_catalogue(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &artworks, |b, artworks| {
            b.iter(|| pipeline.generate_feed(black_box(&viewer), black_box(artworks), now))
        });
    }

    group.finish();
}

fn bench_find_similar(c: &mut Criterion) {
    let pipeline = FeedPipeline::default();
    let artworks = synthetic_catalogue(10000);
    let reference = artworks[42].clone();

    c.bench_function("find_similar_10000", |b| {
        b.iter(|| pipeline.find_similar(black_box(&reference), black_box(&artworks), 20))
    });
}

criterion_group!(benches, bench_generate_feed, bench_find_similar);
criterion_main!(benches);
