use std::hint::black_box;
use std::time::Instant;

use common::types::BasisSummary;
use cycle_base_core::metrics::cyclomatic_number;
use cycle_base_core::{CycleBaseFinder, GraphCsr, PatonSolver};
use perf_bench::*;

const ROWS: usize = 100;
const COLS: usize = 100;

fn main() {
    let generated = grid(ROWS, COLS);
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
    let summary = BasisSummary::from_cycles(&cycles);
    let expected = match cyclomatic_number(&graph) {
        Ok(expected) => expected,
        Err(e) => {
            eprintln!("Cyclomatic number failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "--- Grid Benchmark ({}x{}, {} Edges) ---",
        ROWS,
        COLS,
        graph.num_edges()
    );
    println!("Cycles: {}", summary.cycles);
    println!("Cyclomatic Number: {}", expected);
    println!("Longest Cycle: {}", summary.longest);
    println!("Mean Cycle Length: {:.2}", summary.mean_length());
    println!("Elapsed Time: {:?}", elapsed_time);
}
