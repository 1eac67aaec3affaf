use criterion::{Criterion, criterion_group, criterion_main};
use nwkit::parse_newick_str;
use std::hint::black_box;

/// Sizes (number of leaves per polytomy, nesting depth) of generated trees.
const GENERATED_TREES: &[(&str, usize, usize)] = &[
    ("wide-n64-d2", 8, 2),
    ("deep-n3-d8", 3, 8),
    ("mixed-n5-d5", 5, 5),
];

/// Builds a Newick string in which each inner node has `width` children,
/// nested `depth` levels deep, with branch lengths on every node.
fn generate_newick(width: usize, depth: usize) -> String {
    fn vertex(width: usize, depth: usize, id: &mut usize) -> String {
        *id += 1;
        if depth == 0 {
            return format!("taxon_{id}:0.{id}");
        }
        let children: Vec<String> = (0..width).map(|_| vertex(width, depth - 1, id)).collect();
        format!("({})n{id}:1.0", children.join(","))
    }
    let mut id = 0;
    format!("({});", vertex(width, depth, &mut id))
}

fn parsing(c: &mut Criterion) {
    for (name, width, depth) in GENERATED_TREES {
        let newick = generate_newick(*width, *depth);
        c.bench_function(&format!("parse {name}"), |b| {
            b.iter(|| parse_newick_str(black_box(&newick)).unwrap());
        });
    }
}

fn rewriting_and_rendering(c: &mut Criterion) {
    for (name, width, depth) in GENERATED_TREES {
        let tree = parse_newick_str(generate_newick(*width, *depth)).unwrap();
        c.bench_function(&format!("collapse+binarize {name}"), |b| {
            b.iter(|| {
                let mut tree = tree.clone();
                tree.remove_redundant_nodes().unwrap().resolve_polytomies();
                tree
            });
        });
        c.bench_function(&format!("ascii art {name}"), |b| {
            b.iter(|| black_box(&tree).ascii_art());
        });
    }
}

criterion_group!(regression, parsing);
criterion_group! {
    name = reporting;
    config = Criterion::default().sample_size(10);
    targets = rewriting_and_rendering
}
criterion_main!(regression, reporting);
