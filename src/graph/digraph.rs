use super::traits::Adjacency;
use super::GraphError;

/// A directed graph over vertices `0..num_vertices`, immutable after
/// construction.
///
/// Adjacency is stored per vertex in edge-insertion order; duplicate edges
/// and self-loops are permitted. Construction is the only mutating phase:
/// once the last edge has been added the graph is only queried, and may be
/// read concurrently by independent analyses.
///
/// # Examples
///
/// ```
/// use digraph_algo::prelude::*;
///
/// let graph = Digraph::from_arcs(3, [(0, 1), (0, 2), (1, 2)]).unwrap();
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 3);
/// assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Digraph {
    num_edges: usize,
    successors: Box<[Vec<usize>]>,
}

impl Digraph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_edges: 0,
            successors: vec![Vec::new(); num_vertices].into_boxed_slice(),
        }
    }

    /// Builds a graph from an arc list, aborting on the first arc with an
    /// endpoint out of range.
    ///
    /// No partially built graph is exposed on failure.
    pub fn from_arcs(
        num_vertices: usize,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(num_vertices);
        for (from, to) in arcs {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Appends `to` to the adjacency of `from`.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.successors[from].push(to);
        self.num_edges += 1;
        Ok(())
    }

    /// Checked variant of [`Adjacency::successors`].
    pub fn try_successors(
        &self,
        vertex: usize,
    ) -> Result<std::iter::Copied<std::slice::Iter<'_, usize>>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.successors[vertex].iter().copied())
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.successors.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                num_vertices: self.successors.len(),
            });
        }
        Ok(())
    }
}

impl Adjacency for Digraph {
    type Successors<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn num_vertices(&self) -> usize {
        self.successors.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn outdegree(&self, vertex: usize) -> usize {
        self.successors[vertex].len()
    }

    fn successors(&self, vertex: usize) -> Self::Successors<'_> {
        self.successors[vertex].iter().copied()
    }
}
