use cycle_base_core::csr::{AddEdgeResult, GraphCsr};
use cycle_base_core::traits::Graph;
use proptest::prelude::*;
use proptest::strategy::Strategy;

const NUM_VERTICES_STRATEGY: std::ops::Range<usize> = 1usize..10;

fn csr_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    NUM_VERTICES_STRATEGY.prop_flat_map(|num_vertices| {
        let edge_generator = (0usize..num_vertices, 0usize..num_vertices);
        let edges_generator = prop::collection::vec(edge_generator, 0..50);

        (proptest::strategy::Just(num_vertices), edges_generator)
    })
}

proptest! {
    /// Property: vertex_pointers should be monotonic
    #[test]
    fn vertex_pointers_monotonic((num_vertices, edges) in csr_strategy()) {
        let csr = GraphCsr::from_edges(num_vertices, &edges, 5).unwrap();
        for i in 0..csr.num_vertices {
            prop_assert!(csr.vertex_pointers[i] <= csr.vertex_pointers[i + 1]);
        }
    }

    /// Property: every non-loop edge owns two slots, every self-loop owns one.
    #[test]
    fn slot_count_matches_edges((num_vertices, edges) in csr_strategy()) {
        let csr = GraphCsr::from_edges(num_vertices, &edges, 5).unwrap();
        let loops = edges.iter().filter(|(u, w)| u == w).count();

        prop_assert_eq!(csr.adjacency_edges.len(), 2 * edges.len() - loops);
        // In CSR, the last vertex pointer equals the total number of slots.
        prop_assert_eq!(csr.adjacency_edges.len(), csr.vertex_pointers[csr.num_vertices]);
    }

    /// Property: each slot points back at an edge incident on its vertex,
    /// and the other endpoint is the remaining end of that edge.
    #[test]
    fn slots_are_incident((num_vertices, edges) in csr_strategy()) {
        let csr = GraphCsr::from_edges(num_vertices, &edges, 5).unwrap();

        for v in csr.vertices() {
            for e in csr.edges_of(v) {
                let (a, b) = csr.edge_endpoints(e).unwrap();
                prop_assert!(a == v || b == v);
                let expected = if a == v { b } else { a };
                prop_assert_eq!(csr.other_endpoint(e, v), expected);
            }
        }
    }

    /// Property: batching edges through the pending buffer ends in the same
    /// adjacency as building from the full list at once.
    #[test]
    fn batched_rebuild_matches_direct_build((num_vertices, edges) in csr_strategy()) {
        let direct = GraphCsr::from_edges(num_vertices, &edges, 5).unwrap();

        let mut batched = GraphCsr::from_edges(num_vertices, &[], 5).unwrap();
        for chunk in edges.chunks(3) {
            if let AddEdgeResult::RebuildNeeded(extracted) =
                batched.add_edges_and_extract_data(chunk.to_vec())
            {
                batched.rebuild_with_edges(extracted).unwrap();
            }
        }
        batched.flush_pending().unwrap();

        prop_assert_eq!(batched.vertex_pointers, direct.vertex_pointers);
        prop_assert_eq!(batched.adjacency_edges, direct.adjacency_edges);
        prop_assert_eq!(batched.edge_endpoints, direct.edge_endpoints);
    }
}
