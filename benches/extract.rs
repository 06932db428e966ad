// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use monster_scrape::{
    assemble::{assemble_page, ExtractOptions},
    core::html::CreatureDocument,
    specs::{creature, index},
};

fn load(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).expect("read fixture")
}

fn bench_extract(c: &mut Criterion) {
    let page = load("giant_eel.html");
    let index_page = load("monster_index.html");
    let opts = ExtractOptions::default();

    c.bench_function("assemble_page", |b| {
        b.iter(|| {
            let a = assemble_page(black_box(&page), 1, &opts);
            black_box(a.failures.len())
        })
    });

    let doc = CreatureDocument::parse(&page);
    c.bench_function("abilities_only", |b| {
        b.iter(|| black_box(creature::extract_abilities(black_box(&doc)).is_ok()))
    });

    c.bench_function("index_links", |b| {
        b.iter(|| black_box(index::creature_links(black_box(&index_page), "https://dandwiki.com").len()))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
