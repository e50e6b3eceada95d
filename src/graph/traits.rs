/// Random access to the adjacency of a directed graph.
///
/// Vertices are dense indices in `[0, num_vertices)` and are used as array
/// indices throughout. All analyses in [`crate::algo`] are generic over this
/// trait, so they run unchanged on [`Digraph`](crate::graph::Digraph) and on
/// [`EdgeWeightedDigraph`](crate::graph::EdgeWeightedDigraph) (which exposes
/// the targets of its weighted edges here).
pub trait Adjacency {
    /// The lazy, finite, restartable sequence over the successors of a
    /// vertex, in edge-insertion order.
    type Successors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of vertices of the graph.
    fn num_vertices(&self) -> usize;

    /// Returns the number of edges of the graph.
    fn num_edges(&self) -> usize;

    /// Returns the number of successors of `vertex`, duplicates included.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not in `[0, num_vertices)`.
    fn outdegree(&self, vertex: usize) -> usize;

    /// Returns the successors of `vertex` in edge-insertion order.
    ///
    /// Duplicate edges appear once per insertion; self-loops appear as the
    /// vertex itself.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not in `[0, num_vertices)`.
    fn successors(&self, vertex: usize) -> Self::Successors<'_>;
}
