use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ikey::{complete, flatten, Classifier};
use serde_json::{json, Value};

/// Build a dictionary tree with `sections` top-level sections of `leaves`
/// keys each
fn synthetic_tree(sections: usize, leaves: usize) -> Value {
    let mut root = serde_json::Map::new();
    for s in 0..sections {
        let mut section = serde_json::Map::new();
        for l in 0..leaves {
            section.insert(
                format!("label{}", l),
                json!(format!("Section {} label {}", s, l)),
            );
        }
        root.insert(format!("section{}", s), Value::Object(section));
    }
    Value::Object(root)
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    // Small dictionary: a typical hand-maintained project
    group.bench_function("small_tree", |b| {
        let tree = synthetic_tree(10, 20);
        b.iter(|| flatten(black_box(&tree)));
    });

    // Large dictionary: a mature product with thousands of keys
    group.bench_function("large_tree", |b| {
        let tree = synthetic_tree(50, 100);
        b.iter(|| flatten(black_box(&tree)));
    });

    group.finish();
}

fn bench_completion(c: &mut Criterion) {
    let mut group = c.benchmark_group("completion");

    let tree = synthetic_tree(50, 100);
    let entries = flatten(&tree);

    group.bench_function("top_level", |b| {
        b.iter(|| complete(black_box(""), black_box(&entries)));
    });

    group.bench_function("section_prefix", |b| {
        b.iter(|| complete(black_box("section25."), black_box(&entries)));
    });

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");

    let classifier = Classifier::new();

    group.bench_function("filter_prose", |b| {
        b.iter(|| classifier.filter(black_box("Save your pending changes")));
    });

    group.bench_function("filter_noise", |b| {
        b.iter(|| classifier.filter(black_box("btn-primary")));
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_completion, bench_classifier);
criterion_main!(benches);
