use crate::algo::visits::{depth_first::*, Sequential, StoppedWhenDone};
use crate::graph::traits::Adjacency;
use dsi_progress_logger::ProgressLog;

/// Runs an acyclicity test.
///
/// # Examples
///
/// ```
/// use digraph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = Digraph::from_arcs(3, [(1, 2), (0, 1)]).unwrap();
/// assert!(acyclicity(&graph, no_logging![]));
///
/// let graph = Digraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
/// assert!(!acyclicity(&graph, no_logging![]));
/// ```
pub fn acyclicity(graph: &impl Adjacency, pl: &mut impl ProgressLog) -> bool {
    let num_vertices = graph.num_vertices();
    pl.item_name("vertex");
    pl.expected_updates(Some(num_vertices));
    pl.start("Checking acyclicity");

    let mut visit = SeqPath::new(graph);

    let acyclic = visit.visit_all(
        |event| {
            // Stop the visit as soon as a back edge is found.
            match event {
                EventPred::Revisit { on_stack: true, .. } => Err(StoppedWhenDone),
                _ => Ok(()),
            }
        },
        pl,
    );

    pl.done();
    acyclic.is_ok()
}
