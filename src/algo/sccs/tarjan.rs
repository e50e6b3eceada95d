use super::Sccs;
use crate::algo::visits::{depth_first::*, Sequential};
use crate::graph::traits::Adjacency;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;
use sux::bits::BitVec;

/// Tarjan's algorithm for strongly connected components.
///
/// The graph is visited depth-first from every unvisited vertex in
/// increasing order, so the result is deterministic for a fixed graph and
/// edge-insertion order. Each vertex gets a discovery index and a low link,
/// the smallest discovery index reachable through its visit subtree and at
/// most one edge into the component currently in progress; a vertex whose
/// low link equals its own index closes a component. The visit is
/// iterative, so graphs with visit paths as long as the number of vertices
/// do not overflow the call stack.
///
/// # Examples
///
/// ```
/// use digraph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = Digraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
/// let sccs = sccs::tarjan(&graph, no_logging![]);
///
/// assert_eq!(sccs.num_components(), 2);
/// assert_eq!(sccs.components()[0], sccs.components()[1]);
/// assert_eq!(sccs.components()[1], sccs.components()[2]);
/// assert_ne!(sccs.components()[2], sccs.components()[3]);
/// ```
pub fn tarjan(graph: &impl Adjacency, pl: &mut impl ProgressLog) -> Sccs {
    let num_vertices = graph.num_vertices();
    pl.item_name("vertex");
    pl.expected_updates(Some(num_vertices));
    pl.start("Computing strongly connected components...");

    let mut visit = SeqPred::new(graph);
    let mut index = vec![0; num_vertices].into_boxed_slice();
    let mut low_link = vec![0; num_vertices].into_boxed_slice();
    let mut component = vec![0; num_vertices].into_boxed_slice();
    // Vertices discovered but not yet assigned to a completed component,
    // with a parallel flag for constant-time membership tests.
    let mut component_stack = Vec::with_capacity(16);
    let mut on_stack = BitVec::new(num_vertices);
    let mut counter = 0;
    let mut num_components = 0;

    visit
        .visit_all(
            |event| {
                match event {
                    EventPred::Previsit { curr, .. } => {
                        index[curr] = counter;
                        low_link[curr] = counter;
                        counter += 1;
                        component_stack.push(curr);
                        on_stack.set(curr, true);
                    }
                    EventPred::Revisit { curr, pred, .. } => {
                        // A back or cross edge into the component in
                        // progress; edges into completed components carry
                        // no mutual reachability and are ignored.
                        if on_stack.get(curr) && index[curr] < low_link[pred] {
                            low_link[pred] = index[curr];
                        }
                    }
                    EventPred::Postvisit { curr, pred, .. } => {
                        if low_link[curr] == index[curr] {
                            // curr is the root of a completed component
                            while let Some(vertex) = component_stack.pop() {
                                on_stack.set(vertex, false);
                                component[vertex] = num_components;
                                if vertex == curr {
                                    break;
                                }
                            }
                            num_components += 1;
                        }
                        // Propagate knowledge to the parent; pred == curr
                        // only on the postvisit of a root
                        if pred != curr && low_link[curr] < low_link[pred] {
                            low_link[pred] = low_link[curr];
                        }
                    }
                    _ => {}
                }
                Ok::<_, Infallible>(())
            },
            pl,
        )
        .unwrap_or_else(|e| match e {});

    pl.done();
    Sccs::new(num_components, component)
}
