use common::error::Error;
use common::types::Edge;

use crate::traits::Graph;

pub enum AddEdgeResult {
    Success,
    RebuildNeeded(Vec<Edge>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Undirected,
    Directed,
}

/// Multigraph in Compressed Sparse Row (CSR) format for fast adjacency traversal.
///
/// CSR format stores the incident edges of each vertex contiguously in memory:
/// - `vertex_pointers[v]..vertex_pointers[v+1]` → adjacency slots of vertex `v`
/// - `adjacency_edges[i]` -> the id of the edge behind slot `i`
/// - `edge_endpoints[id]` -> the `(u, w)` pair the edge was created with
///
/// Edge ids are positions in the input edge list, so parallel edges stay
/// distinguishable. In undirected mode every edge `(u, w)` with `u != w` owns
/// a slot under both endpoints, while a self-loop owns a single slot.
/// Pending updates are batched and applied on rebuild to maintain efficiency.
#[derive(Debug, Clone)]
pub struct GraphCsr {
    pub num_vertices: usize,
    pub orientation: Orientation,
    pub vertex_pointers: Vec<usize>,
    pub adjacency_edges: Vec<usize>,
    pub edge_endpoints: Vec<Edge>,
    pub rebuild_limit: usize,
    pub pending_updates: Vec<Edge>,
}

impl GraphCsr {
    /// Creates a new undirected CSR graph from a list of edges `(u, w)`.
    ///
    /// Adjacency slots of each vertex keep the order of the input list.
    ///
    /// # Arguments
    /// - `num_vertices`: total number of vertices (graph indices: 0..num_vertices-1)
    /// - `edges`: slice of `(u, w)` tuples, self-loops and repeats allowed
    /// - `rebuild_limit`: number of pending updates before triggering rebuild
    ///
    /// # Errors
    /// Returns `Error::VertexIndexOutOfBounds` if an endpoint is `>= num_vertices`.
    pub fn from_edges(
        num_vertices: usize,
        edges: &[Edge],
        rebuild_limit: usize,
    ) -> Result<Self, Error> {
        Self::with_orientation(num_vertices, edges, rebuild_limit, Orientation::Undirected)
    }

    /// Creates a directed CSR graph: edge `(u, w)` is only listed under `u`.
    pub fn from_directed_edges(
        num_vertices: usize,
        edges: &[Edge],
        rebuild_limit: usize,
    ) -> Result<Self, Error> {
        Self::with_orientation(num_vertices, edges, rebuild_limit, Orientation::Directed)
    }

    fn with_orientation(
        num_vertices: usize,
        edges: &[Edge],
        rebuild_limit: usize,
        orientation: Orientation,
    ) -> Result<Self, Error> {
        let (vertex_pointers, adjacency_edges) =
            Self::build_csr_from_edges(num_vertices, edges, orientation)?;

        Ok(Self {
            num_vertices,
            orientation,
            vertex_pointers,
            adjacency_edges,
            edge_endpoints: edges.to_vec(),
            rebuild_limit,
            pending_updates: Vec::new(),
        })
    }

    /// Internal helper to construct the CSR index arrays.
    ///
    /// Uses the two-pass counting technique: the first pass counts the slots
    /// each vertex needs, a prefix sum turns the counts into offsets, and the
    /// second pass drops every edge into its slot(s) through a per-vertex cursor.
    /// Since the second pass walks the edges in input order, the adjacency of
    /// every vertex ends up in input order as well.
    ///
    /// # Returns
    /// 1. `vertex_pointers`: start of each vertex's slots (size |V| + 1).
    /// 2. `adjacency_edges`: the edge id behind each slot.
    fn build_csr_from_edges(
        num_vertices: usize,
        edges: &[Edge],
        orientation: Orientation,
    ) -> Result<(Vec<usize>, Vec<usize>), Error> {
        let pointer_len = num_vertices
            .checked_add(1)
            .ok_or(Error::VertexIndexOutOfBounds(num_vertices))?;
        let mut vertex_pointers = vec![0; pointer_len];

        for &(u, w) in edges {
            if u >= num_vertices {
                return Err(Error::VertexIndexOutOfBounds(u));
            }
            if w >= num_vertices {
                return Err(Error::VertexIndexOutOfBounds(w));
            }

            vertex_pointers[u + 1] += 1;
            if orientation == Orientation::Undirected && u != w {
                vertex_pointers[w + 1] += 1;
            }
        }

        for i in 1..=num_vertices {
            vertex_pointers[i] += vertex_pointers[i - 1];
        }

        let mut adjacency_edges = vec![0; vertex_pointers[num_vertices]];

        let mut cursor = vertex_pointers.clone();

        for (id, &(u, w)) in edges.iter().enumerate() {
            adjacency_edges[cursor[u]] = id;
            cursor[u] += 1;

            if orientation == Orientation::Undirected && u != w {
                adjacency_edges[cursor[w]] = id;
                cursor[w] += 1;
            }
        }

        Ok((vertex_pointers, adjacency_edges))
    }

    pub fn num_edges(&self) -> usize {
        self.edge_endpoints.len()
    }

    /// Number of adjacency slots of `vertex`; a self-loop counts once.
    pub fn degree(&self, vertex: usize) -> Result<usize, Error> {
        if vertex >= self.num_vertices {
            return Err(Error::VertexIndexOutOfBounds(vertex));
        }
        Ok(self.vertex_pointers[vertex + 1] - self.vertex_pointers[vertex])
    }

    /// O(1) lookup for the endpoints of a given edge id.
    ///
    /// # Errors
    /// Returns `Error::InvalidGraph` if `edge_id` is out of bounds.
    pub fn edge_endpoints(&self, edge_id: usize) -> Result<Edge, Error> {
        self.edge_endpoints
            .get(edge_id)
            .copied()
            .ok_or(Error::InvalidGraph)
    }

    /// Attempts to add a batch of new edges to the internal buffer.
    /// If the buffer limit is reached, it atomically extracts (via O(1) swap)
    /// the full accumulated edge list and signals that a rebuild is required.
    pub fn add_edges_and_extract_data(&mut self, edges: Vec<Edge>) -> AddEdgeResult {
        self.pending_updates.extend(edges);

        if self.pending_updates.len() >= self.rebuild_limit {
            let edges_to_rebuild = std::mem::take(&mut self.pending_updates);

            return AddEdgeResult::RebuildNeeded(edges_to_rebuild);
        }
        AddEdgeResult::Success
    }

    /// Applies whatever sits in the pending buffer, regardless of `rebuild_limit`.
    pub fn flush_pending(&mut self) -> Result<(), Error> {
        let new_edges = std::mem::take(&mut self.pending_updates);
        if new_edges.is_empty() {
            return Ok(());
        }

        self.rebuild_with_edges(new_edges)
    }

    /// Fully rebuilds the CSR structure by incorporating a new set of edges.
    ///
    /// This is the **public interface** for the Writer's Phase 2 commit.
    /// Existing edges keep their ids, new edges are appended after them, and
    /// the vertex count grows to cover every new endpoint. Nothing is
    /// deduplicated: repeated pairs are parallel edges of the multigraph.
    /// The pending buffer is left untouched.
    ///
    /// # Errors
    /// Returns `Error::VertexIndexOutOfBounds` if an endpoint is `usize::MAX`.
    /// The graph is left unchanged in that case.
    pub fn rebuild_with_edges(&mut self, new_edges: Vec<Edge>) -> Result<(), Error> {
        let num_vertices = match new_edges.iter().flat_map(|&(u, w)| [u, w]).max() {
            Some(max_id) => max_id
                .checked_add(1)
                .ok_or(Error::VertexIndexOutOfBounds(max_id))?
                .max(self.num_vertices),
            None => self.num_vertices,
        };

        let mut edges = self.edge_endpoints.clone();
        edges.extend(new_edges);

        let (vertex_pointers, adjacency_edges) =
            Self::build_csr_from_edges(num_vertices, &edges, self.orientation)?;

        self.num_vertices = num_vertices;
        self.vertex_pointers = vertex_pointers;
        self.adjacency_edges = adjacency_edges;
        self.edge_endpoints = edges;
        Ok(())
    }
}

impl Graph for GraphCsr {
    type Vertex = usize;
    type Edge = usize;

    fn is_directed(&self) -> bool {
        self.orientation == Orientation::Directed
    }

    fn vertex_bound(&self) -> usize {
        self.num_vertices
    }

    fn to_index(&self, vertex: usize) -> usize {
        vertex
    }

    fn from_index(&self, index: usize) -> usize {
        index
    }

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.num_vertices
    }

    fn edges_of(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let start = self.vertex_pointers[vertex];
        let end = self.vertex_pointers[vertex + 1];
        self.adjacency_edges[start..end].iter().copied()
    }

    fn other_endpoint(&self, edge: usize, vertex: usize) -> usize {
        let (u, w) = self.edge_endpoints[edge];
        if u == vertex { w } else { u }
    }
}
