//! Visits on graphs.
//!
//! Visits are the building block of the analyses in this crate: they
//! enumerate a graph once, invoking a callback on a stream of events, and
//! the analyses (strong components, topological order, and so on) are thin
//! consumers of those events.
//!
//! Callbacks return a `Result`, so a visit can be interrupted at any event
//! by returning an error; the error is propagated back to the caller of the
//! visit. Callbacks that just want to stop the visit once their result is
//! known can use [`StoppedWhenDone`].

pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use thiserror::Error;

/// The error returned by a callback to interrupt a visit whose result is
/// already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stopped when done")]
pub struct StoppedWhenDone;

/// The events generated by a visit.
///
/// The associated type is the type of the arguments passed to the filter of
/// a filtered visit.
pub trait Event {
    /// The arguments passed to filter callbacks for this type of event.
    type FilterArgs;
}

/// A sequential visit.
///
/// Implementations provide [`visit_filtered`](Sequential::visit_filtered),
/// which visits the graph from a given root, and
/// [`visit_all_filtered`](Sequential::visit_all_filtered), which visits the
/// whole graph by starting a visit from every vertex in increasing order
/// (skipping vertices already known), making whole-graph results
/// deterministic for a fixed graph and edge-insertion order.
///
/// The callback is invoked with events of type `E`; returning an error
/// interrupts the visit and propagates the error to the caller. The filter
/// is invoked before a vertex is discovered: returning `false` makes the
/// visit ignore the vertex (it might still be visited later by another
/// path).
pub trait Sequential<E: Event> {
    /// Visits the graph from the specified vertex, filtering the vertices.
    ///
    /// # Arguments
    /// * `root`: the vertex to start the visit from.
    /// * `callback`: the callback function.
    /// * `filter`: the filter function.
    /// * `pl`: a progress logger.
    fn visit_filtered<R, C: FnMut(E) -> Result<(), R>, F: FnMut(E::FilterArgs) -> bool>(
        &mut self,
        root: usize,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), R>;

    /// Visits the graph from the specified vertex.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered).
    fn visit<R, C: FnMut(E) -> Result<(), R>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), R> {
        self.visit_filtered(root, callback, |_| true, pl)
    }

    /// Visits the whole graph, filtering the vertices.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered).
    fn visit_all_filtered<R, C: FnMut(E) -> Result<(), R>, F: FnMut(E::FilterArgs) -> bool>(
        &mut self,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), R>;

    /// Visits the whole graph.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered).
    fn visit_all<R, C: FnMut(E) -> Result<(), R>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), R> {
        self.visit_all_filtered(callback, |_| true, pl)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
