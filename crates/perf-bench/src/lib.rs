// ----------------------------
// Benchmark graph generators
// ----------------------------

use common::types::Edge;

/// A generated graph: vertex count plus undirected edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGraph {
    pub num_vertices: usize,
    pub edges: Vec<Edge>,
}

impl GeneratedGraph {
    fn new(num_vertices: usize, edges: Vec<Edge>) -> Self {
        GeneratedGraph {
            num_vertices,
            edges,
        }
    }
}

pub fn empty(n: usize) -> GeneratedGraph {
    GeneratedGraph::new(n, Vec::new())
}

/// Path 0 - 1 - ... - (n-1).
pub fn linear(n: usize) -> GeneratedGraph {
    let edges = (1..n).map(|v| (v - 1, v)).collect();
    GeneratedGraph::new(n, edges)
}

/// Cycle on `n` vertices. For n = 1 and n = 2 this degenerates into a
/// self-loop and a pair of parallel edges respectively.
pub fn ring(n: usize) -> GeneratedGraph {
    let edges = (0..n).map(|v| (v, (v + 1) % n)).collect();
    GeneratedGraph::new(n, edges)
}

/// Vertex 0 joined to every other vertex.
pub fn star(n: usize) -> GeneratedGraph {
    let edges = (1..n).map(|v| (0, v)).collect();
    GeneratedGraph::new(n, edges)
}

pub fn complete(n: usize) -> GeneratedGraph {
    let edges = (0..n)
        .flat_map(|u| (u + 1..n).map(move |w| (u, w)))
        .collect();
    GeneratedGraph::new(n, edges)
}

/// K(a, b): vertices `0..a` on one side, `a..a+b` on the other.
pub fn complete_bipartite(a: usize, b: usize) -> GeneratedGraph {
    let edges = (0..a)
        .flat_map(|u| (a..a + b).map(move |w| (u, w)))
        .collect();
    GeneratedGraph::new(a + b, edges)
}

/// `rows x cols` lattice; vertex `(r, c)` has index `r * cols + c`.
pub fn grid(rows: usize, cols: usize) -> GeneratedGraph {
    let mut edges = Vec::with_capacity(2 * rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                edges.push((v, v + 1));
            }
            if r + 1 < rows {
                edges.push((v, v + cols));
            }
        }
    }
    GeneratedGraph::new(rows * cols, edges)
}

/// `dim`-dimensional hypercube: vertices are bit strings, edges flip one bit.
pub fn hypercube(dim: u32) -> GeneratedGraph {
    let n = 1usize << dim;
    let edges = (0..n)
        .flat_map(|v| {
            (0..dim)
                .map(move |bit| (v, v ^ (1 << bit)))
                .filter(|&(u, w)| u < w)
        })
        .collect();
    GeneratedGraph::new(n, edges)
}
