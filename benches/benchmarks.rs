//! Performance benchmarks for stitch

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use stitch::test_utils::TestTree;
use stitch::{Config, RunOptions, Ruleset, Walker, build_document, path_to_anchor};

const RUST_SOURCE: &str = r#"//! Module documentation

use std::path::Path;

/// Main function documentation
fn main() {
    println!("Hello, world!");
}
"#;

/// A tree with `file_count` sources spread over ten directories, plus an
/// ignored dependency directory of the same size.
fn create_tree_with_files(file_count: usize) -> TestTree {
    let tree = TestTree::new();
    for i in 0..file_count {
        tree.add_file(&format!("src/mod_{}/file_{}.rs", i % 10, i), RUST_SOURCE);
        tree.add_file(&format!("node_modules/pkg_{}/index.js", i), "module.exports = {};");
    }
    tree
}

fn bench_decide(c: &mut Criterion) {
    let rules = Ruleset::new(
        ["node_modules", "target", "docs/generated"],
        ["png", "jpg"],
        ["rs", "toml", "md"],
        ".meta",
    );

    let mut group = c.benchmark_group("decide");

    group.bench_function("included_file", |b| {
        b.iter(|| rules.decide(black_box("src/tree/walker.rs"), false))
    });
    group.bench_function("excluded_by_path", |b| {
        b.iter(|| rules.decide(black_box("docs/generated"), true))
    });
    group.bench_function("excluded_by_whitelist", |b| {
        b.iter(|| rules.decide(black_box("assets/app.js"), false))
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let small = create_tree_with_files(10);
    let medium = create_tree_with_files(100);
    let large = create_tree_with_files(500);
    let rules = Config::default().ruleset().unwrap();

    let mut group = c.benchmark_group("walk");

    group.bench_function("small_tree_10_files", |b| {
        b.iter(|| Walker::new(&rules).walk(black_box(small.path())))
    });
    group.bench_function("medium_tree_100_files", |b| {
        b.iter(|| Walker::new(&rules).walk(black_box(medium.path())))
    });
    group.bench_function("large_tree_500_files", |b| {
        b.iter(|| Walker::new(&rules).walk(black_box(large.path())))
    });

    group.finish();
}

fn bench_build_document(c: &mut Criterion) {
    let tree = create_tree_with_files(200);

    let mut group = c.benchmark_group("build_document");

    for jobs in [1, 0] {
        let config = Config {
            jobs,
            ..Default::default()
        };
        let options = RunOptions::new(tree.path(), config);
        let name = if jobs == 1 { "sequential" } else { "parallel" };
        group.bench_function(name, |b| b.iter(|| build_document(black_box(&options)).unwrap()));
    }

    group.finish();
}

fn bench_anchor(c: &mut Criterion) {
    c.bench_function("path_to_anchor", |b| {
        b.iter(|| path_to_anchor(black_box("Src/Components/My Widget.Test.TSX")))
    });
}

criterion_group!(
    benches,
    bench_decide,
    bench_walk,
    bench_build_document,
    bench_anchor,
);
criterion_main!(benches);
