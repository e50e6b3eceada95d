use super::traits::Adjacency;
use super::GraphError;
use std::fmt;

/// A directed edge carrying a real-valued weight.
///
/// This is a pure value type: two edges with the same endpoints and weight
/// are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectedEdge {
    from: usize,
    to: usize,
    weight: f64,
}

impl DirectedEdge {
    /// Creates a new edge from `from` to `to` with the given weight.
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Returns the source vertex of the edge.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Returns the target vertex of the edge.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the weight of the edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for DirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// A directed graph whose edges carry a real-valued weight, immutable after
/// construction.
///
/// Same construction and immutability rules as [`Digraph`](super::Digraph):
/// per-vertex adjacency in edge-insertion order, duplicate edges and
/// self-loops permitted, read-only once built. The [`Adjacency`]
/// implementation exposes edge targets, so unweighted analyses (topological
/// order, strong components) run on this type unchanged; weighted analyses
/// use [`edges`](Self::edges).
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph {
    num_edges: usize,
    edges: Box<[Vec<DirectedEdge>]>,
}

impl EdgeWeightedDigraph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_edges: 0,
            edges: vec![Vec::new(); num_vertices].into_boxed_slice(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, aborting on the
    /// first triple with an endpoint out of range.
    ///
    /// No partially built graph is exposed on failure.
    pub fn from_edges(
        num_vertices: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(num_vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Appends an edge from `from` to `to` with the given weight.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.edges[from].push(DirectedEdge::new(from, to, weight));
        self.num_edges += 1;
        Ok(())
    }

    /// Returns the weighted outgoing edges of `vertex` in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not in `[0, num_vertices)`.
    pub fn edges(&self, vertex: usize) -> std::iter::Copied<std::slice::Iter<'_, DirectedEdge>> {
        self.edges[vertex].iter().copied()
    }

    /// Checked variant of [`edges`](Self::edges).
    pub fn try_edges(
        &self,
        vertex: usize,
    ) -> Result<std::iter::Copied<std::slice::Iter<'_, DirectedEdge>>, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.edges(vertex))
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.edges.len() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                num_vertices: self.edges.len(),
            });
        }
        Ok(())
    }
}

impl Adjacency for EdgeWeightedDigraph {
    type Successors<'a> =
        std::iter::Map<std::slice::Iter<'a, DirectedEdge>, fn(&DirectedEdge) -> usize>;

    fn num_vertices(&self) -> usize {
        self.edges.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn outdegree(&self, vertex: usize) -> usize {
        self.edges[vertex].len()
    }

    fn successors(&self, vertex: usize) -> Self::Successors<'_> {
        self.edges[vertex]
            .iter()
            .map(DirectedEdge::to as fn(&DirectedEdge) -> usize)
    }
}
