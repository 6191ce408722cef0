use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use spangraph::{algorithm::*, graph::*};
use static_init::dynamic;

#[dynamic]
static NODE_SIZE: usize = std::env::var("NODE_SIZE")
    .unwrap_or("1000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("10000".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, cases);
criterion_main!(benches);

fn cases(c: &mut Criterion) {
    let node_size = *NODE_SIZE;
    println!("NODE_SIZE: {}", node_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);
    c.bench_function("build", |b| b.iter(|| build(node_size, edge_size)));

    let g = build(node_size, edge_size);
    c.bench_function("breadth_first_search", |b| {
        b.iter(|| {
            let mut visited = 0usize;
            g.breadth_first_search("n0", &mut |_: &Node| visited += 1)
                .unwrap();
            black_box(visited);
        })
    });
    c.bench_function("depth_first_search", |b| {
        b.iter(|| {
            let mut visited = 0usize;
            g.depth_first_search("n0", &mut |_: &Node| visited += 1)
                .unwrap();
            black_box(visited);
        })
    });
    c.bench_function("dijkstra", |b| {
        b.iter(|| {
            let costs = g.dijkstra("n0").unwrap();
            black_box(costs.len());
        })
    });
    c.bench_function("prim_jarnik", |b| {
        b.iter(|| {
            let mst: WeightedGraph = g.prim_jarnik().unwrap();
            black_box(mst.node_size());
        })
    });
}

// Chains the nodes first so the graph stays connected for prim_jarnik.
fn build(node_size: usize, edge_size: usize) -> WeightedGraph {
    let mut g = WeightedGraph::new();
    g.get_or_create_node("n0");
    for i in 1..node_size {
        let weight = rand::thread_rng().gen::<Weight>() % 1000;
        g.add_undirected_edge(&format!("n{}", i - 1), &format!("n{}", i), weight);
    }
    for _ in 0..edge_size {
        let src = rand::thread_rng().gen::<usize>() % node_size;
        let snk = rand::thread_rng().gen::<usize>() % node_size;
        let weight = rand::thread_rng().gen::<Weight>() % 1000;
        g.add_undirected_edge(&format!("n{}", src), &format!("n{}", snk), weight);
    }
    g
}
