use crate::algo::visits::{depth_first::*, Sequential};
use crate::graph::traits::Adjacency;
use dsi_progress_logger::ProgressLog;
use thiserror::Error;

/// The error returned when a topological order is requested on a graph
/// containing a directed cycle.
///
/// This is a recoverable failure for the caller (for example, a scheduler
/// should report that no feasible schedule exists); no order is ever
/// fabricated from a cyclic graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the graph contains a directed cycle")]
pub struct CycleDetected;

/// Computes a topological sort of the graph, or fails with
/// [`CycleDetected`].
///
/// The order is the reverse of the postorder of a depth-first visit: every
/// edge `(u, v)` forces `v` to be fully explored before the visit of `u`
/// completes, so `u` precedes `v` after reversal. A revisit of a vertex
/// still on the visit path is a back edge, and the visit is interrupted
/// immediately.
///
/// # Examples
///
/// ```
/// use digraph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = Digraph::from_arcs(4, [(0, 1), (0, 2), (2, 3), (1, 3)]).unwrap();
/// assert_eq!(
///     top_sort(&graph, no_logging![]).unwrap(),
///     vec![0, 2, 1, 3].into_boxed_slice()
/// );
///
/// let graph = Digraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert_eq!(top_sort(&graph, no_logging![]), Err(CycleDetected));
/// ```
pub fn top_sort(
    graph: &impl Adjacency,
    pl: &mut impl ProgressLog,
) -> Result<Box<[usize]>, CycleDetected> {
    let num_vertices = graph.num_vertices();
    pl.item_name("vertex");
    pl.expected_updates(Some(num_vertices));
    pl.start("Computing topological sort");

    let mut visit = SeqPath::new(graph);
    let mut top_sort = vec![0; num_vertices].into_boxed_slice();
    let mut pos = num_vertices;

    let result = visit.visit_all(
        |event| match event {
            EventPred::Revisit { on_stack: true, .. } => Err(CycleDetected),
            EventPred::Postvisit { curr, .. } => {
                pos -= 1;
                top_sort[pos] = curr;
                Ok(())
            }
            _ => Ok(()),
        },
        pl,
    );

    pl.done();
    result.map(|()| top_sort)
}
