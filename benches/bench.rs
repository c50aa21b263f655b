use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use text_tree::{default_options, Tree};

fn example_tree() -> Tree {
    let tree = Tree::new();
    tree.add_leaf("Alfa");
    let bravo = tree.add_branch("Bravo");
    bravo.add_leaf("Charlie");
    bravo
        .add_branch("Delta")
        .add_leaf("Echo")
        .add_leaf("Foxtrot");
    bravo.add_leaf("Golf");
    tree.add_leaf("Hotel");
    tree.add_branch("India")
        .add_leaf("Juliett")
        .add_leaf("Kilo")
        .add_leaf("Lima")
        .add_leaf("Mike")
        .add_leaf("November");
    tree.add_leaf("Oscar");
    let papa = tree.add_branch("Papa");
    papa.add_leaf("Quebec")
        .add_leaf("Romeo")
        .add_leaf("Sierra")
        .add_leaf("Tango")
        .add_leaf("Uniform");
    papa.add_branch("Victor")
        .add_leaf("Whiskey")
        .add_leaf("Xray")
        .add_leaf("Yankee");
    tree.add_leaf("Zulu");
    tree
}

fn deep_tree(depth: usize) -> Tree {
    let tree = Tree::new();
    let mut current = tree.clone();
    for level in 0..depth {
        current = current.add_branch(format!("level {level}"));
        current.add_leaf("sibling\nwith a second line");
    }
    tree
}

fn build(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("build");
    group.throughput(Throughput::Elements(1));

    group.bench_function("example-tree", |bencher| {
        bencher.iter(|| black_box(example_tree()));
    });

    group.bench_function("deep-tree", |bencher| {
        bencher.iter(|| black_box(deep_tree(black_box(100))));
    });

    group.finish();
}

fn renders(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let options = default_options();

    let tree = example_tree();
    group.bench_function("example-tree", |bencher| {
        bencher.iter(|| black_box(&tree).render_with(black_box(&options)));
    });

    let tree = deep_tree(100);
    group.bench_function("deep-tree", |bencher| {
        bencher.iter(|| black_box(&tree).render_with(black_box(&options)));
    });

    group.bench_function("deep-tree-default-options", |bencher| {
        bencher.iter_batched(
            || tree.clone(),
            |tree| black_box(tree).render(),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

/// Create flamegraphs with `cargo bench --bench bench -- --profile-time=5`
#[cfg(unix)]
fn profiled() -> Criterion {
    use pprof::criterion::{Output, PProfProfiler};
    Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}
#[cfg(not(unix))]
fn profiled() -> Criterion {
    Criterion::default()
}

criterion_group! {
    name = benches;
    config = profiled();
    targets = build, renders
}
criterion_main!(benches);
