//! Depth-first visits.
//!
//! Implementations accept a callback invoked at the [start of a
//! visit](EventPred::Init), [every time a new vertex is
//! discovered](EventPred::Previsit), [every time a vertex is
//! revisited](EventPred::Revisit), and, if supported, [every time the
//! enumeration of the successors of a vertex is
//! completed](EventPred::Postvisit).
//!
//! Since [`EventPred`] carries the predecessor of the current vertex, all
//! post-initialization events can be interpreted as edge events; the only
//! exceptions are the previsit and postvisit events of a root, whose
//! predecessor is the root itself.

mod seq;
pub use seq::*;

use super::Event;

/// Types of callback events generated during depth-first visits keeping
/// track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// The visit from `root` has started.
    ///
    /// This event can be used to set up state before the first previsit.
    Init {
        /// The root of the current visit.
        root: usize,
    },
    /// The current vertex has been encountered for the first time: we are
    /// traversing a new tree edge, unless `curr` and `pred` are both equal
    /// to the root.
    Previsit {
        /// The current vertex.
        curr: usize,
        /// The parent of `curr` in the visit tree.
        pred: usize,
        /// The root of the current visit.
        root: usize,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// The current vertex has been encountered before: we are traversing a
    /// back, forward, or cross edge.
    Revisit {
        /// The current vertex.
        curr: usize,
        /// The predecessor of `curr` on the edge being traversed.
        pred: usize,
        /// The root of the current visit.
        root: usize,
        /// The length of the visit path from `root` to `pred`, plus one.
        depth: usize,
        /// Whether `curr` is currently on the visit path, that is, whether
        /// we are traversing a back edge. Visits that do not keep track of
        /// the visit path always report `false`.
        on_stack: bool,
    },
    /// The enumeration of the successors of the current vertex has been
    /// completed: we are retreating from a tree edge, unless `curr` and
    /// `pred` are both equal to the root.
    Postvisit {
        /// The current vertex.
        curr: usize,
        /// The parent of `curr` in the visit tree.
        pred: usize,
        /// The root of the current visit.
        root: usize,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done {
        /// The root of the current visit.
        root: usize,
    },
}

/// Filter arguments for visits keeping track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The vertex to be visited.
    pub curr: usize,
    /// The predecessor of `curr`.
    pub pred: usize,
    /// The root of the current visit.
    pub root: usize,
    /// The depth `curr` would be visited at.
    pub depth: usize,
}

impl Event for EventPred {
    type FilterArgs = FilterArgsPred;
}

/// Types of callback events generated during depth-first visits not keeping
/// track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// The visit from `root` has started.
    Init {
        /// The root of the current visit.
        root: usize,
    },
    /// The current vertex has been encountered for the first time.
    Previsit {
        /// The current vertex.
        curr: usize,
        /// The root of the current visit.
        root: usize,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// The current vertex has been encountered before.
    Revisit {
        /// The current vertex.
        curr: usize,
        /// The root of the current visit.
        root: usize,
        /// The depth the revisit happens at.
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done {
        /// The root of the current visit.
        root: usize,
    },
}

/// Filter arguments for visits not keeping track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsNoPred {
    /// The vertex to be visited.
    pub curr: usize,
    /// The root of the current visit.
    pub root: usize,
    /// The depth `curr` would be visited at.
    pub depth: usize,
}

impl Event for EventNoPred {
    type FilterArgs = FilterArgsNoPred;
}
