//! Performance benchmarks for dirlist

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirlist::test_utils::TempTree;
use dirlist::{ListingWriter, TraversalStep, Walk};
use std::io;

fn create_tree(dirs: usize, files_per_dir: usize) -> TempTree {
    let tree = TempTree::new();
    for d in 0..dirs {
        for f in 0..files_per_dir {
            tree.add_file(&format!("dir_{}/file_{}.txt", d, f), "contents\n");
        }
    }
    tree
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    let small = create_tree(10, 10);
    group.bench_function("small_tree_100_files", |b| {
        b.iter(|| Walk::new(black_box(small.path())).unwrap().count())
    });

    let medium = create_tree(50, 20);
    group.bench_function("medium_tree_1000_files", |b| {
        b.iter(|| Walk::new(black_box(medium.path())).unwrap().count())
    });

    let large = create_tree(100, 50);
    group.bench_function("large_tree_5000_files", |b| {
        b.iter(|| Walk::new(black_box(large.path())).unwrap().count())
    });

    group.finish();
}

fn bench_listing(c: &mut Criterion) {
    let tree = create_tree(50, 20);

    let mut group = c.benchmark_group("listing");
    group.bench_function("walk_and_format_1000_files", |b| {
        b.iter(|| {
            let mut writer = ListingWriter::new(io::sink());
            for step in Walk::new(black_box(tree.path())).unwrap() {
                writer.write_step(&step).unwrap();
            }
        })
    });
    group.finish();
}

fn bench_write_step(c: &mut Criterion) {
    let step = TraversalStep {
        path: "typiq".into(),
        dirs: (0..20).map(|i| format!("dir_{}", i)).collect(),
        files: (0..80).map(|i| format!("file_{}.txt", i)).collect(),
    };

    let mut group = c.benchmark_group("write_step");
    group.bench_function("hundred_entries", |b| {
        b.iter(|| {
            let mut writer = ListingWriter::new(io::sink());
            writer.write_step(black_box(&step)).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, bench_walk, bench_listing, bench_write_step);
criterion_main!(benches);
