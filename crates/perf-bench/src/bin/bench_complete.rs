use std::hint::black_box;
use std::time::Instant;

use cycle_base_core::metrics::cyclomatic_number;
use cycle_base_core::{CycleBaseFinder, GraphCsr, PatonSolver};
use perf_bench::*;

const NUM_VERTICES: usize = 400;

fn main() {
    let generated = complete(NUM_VERTICES);
    let graph = match GraphCsr::from_edges(generated.num_vertices, &generated.edges, 1) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to build graph: {}", e);
            std::process::exit(1);
        }
    };

    let start_time = Instant::now();
    let result = PatonSolver.find_cycle_base(black_box(&graph));
    let elapsed_time = start_time.elapsed();

    let cycles = match result {
        Ok(cycles) => black_box(cycles),
        Err(e) => {
            eprintln!("Cycle base search failed: {}", e);
            std::process::exit(1);
        }
    };
    let expected = match cyclomatic_number(&graph) {
        Ok(expected) => expected,
        Err(e) => {
            eprintln!("Cyclomatic number failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "--- Complete Graph Benchmark (K{}, {} Edges) ---",
        NUM_VERTICES,
        graph.num_edges()
    );
    println!("Cycles: {}", cycles.len());
    println!("Cyclomatic Number: {}", expected);
    println!("Elapsed Time: {:?}", elapsed_time);
}
