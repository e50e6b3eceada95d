use crate::algo::visits::{
    depth_first::{EventNoPred, EventPred, FilterArgsNoPred, FilterArgsPred},
    Sequential,
};
use crate::graph::traits::Adjacency;
use dsi_progress_logger::ProgressLog;
use sealed::sealed;
use sux::bits::BitVec;
use sux::traits::BitFieldSliceMut;

/// A depth-first visit which does not keep track of predecessors, or
/// vertices on the stack.
pub type SeqNoPred<'a, G> = SeqIter<'a, TwoStates, G, (), false>;

/// A depth-first visit which keeps track of predecessors, but not vertices
/// on the stack.
pub type SeqPred<'a, G> = SeqIter<'a, TwoStates, G, usize, true>;

/// A depth-first visit which keeps track of predecessors and vertices on
/// the stack.
pub type SeqPath<'a, G> = SeqIter<'a, ThreeStates, G, usize, true>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation carrying its own frame stack on the
/// heap, so visit paths as long as the number of vertices (say, a cyclic or
/// chain-shaped graph) cannot overflow the call stack.
///
/// There are three versions of the visit, which are type aliases to the same
/// common implementation: [`SeqNoPred`], [`SeqPred`] and [`SeqPath`] (the
/// generic implementation should not be instantiated by the user).
///
/// * [`SeqNoPred`] does not keep track of predecessors, nor of vertices on
///   the stack; it can be used, for example, to compute reachability
///   information.
/// * [`SeqPred`] keeps track of predecessors, but not of vertices on the
///   stack; it can be used, for example, to compute a [topological
///   sort](crate::algo::top_sort()).
/// * [`SeqPath`] keeps track of predecessors and vertices on the stack; it
///   can be used, for example, to establish
///   [acyclicity](crate::algo::acyclicity()).
///
/// Each type of visit uses incrementally more space:
/// * [`SeqNoPred`] uses one bit per vertex to remember known vertices and a
///   stack of iterators, one for each vertex on the visit path.
/// * [`SeqPred`] uses one bit per vertex to remember known vertices and a
///   stack of pairs made of an iterator and a predecessor, one for each
///   vertex on the visit path.
/// * [`SeqPath`] uses two bits per vertex to remember known vertices and
///   whether the vertex is on the visit path, and a stack of pairs made of
///   an iterator and a predecessor, one for each vertex on the visit path.
///
/// The visits differ also in the type of events they generate:
/// * [`SeqNoPred`] generates events of type [`EventNoPred`].
/// * [`SeqPred`] generates events of type [`EventPred`], with the proviso
///   that the Boolean associated with events of type
///   [`Revisit`](`EventPred::Revisit`) is always false.
/// * [`SeqPath`] generates events of type [`EventPred`].
///
/// If the visit was interrupted, the vertices still on the visit path can be
/// retrieved using the [`stack`](SeqPred::stack) method (only for
/// [`SeqPred`] and [`SeqPath`]).
///
/// The progress logger will be
/// [invoked](dsi_progress_logger::ProgressLog::light_update) after
/// completion of each postvisit.
///
/// # Examples
///
/// Let's test acyclicity:
///
/// ```
/// use digraph_algo::algo::visits::depth_first::{self, EventPred};
/// use digraph_algo::algo::visits::{Sequential, StoppedWhenDone};
/// use digraph_algo::graph::Digraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = Digraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3)]).unwrap();
/// let mut visit = depth_first::SeqPath::new(&graph);
///
/// assert!(visit
///     .visit_all(
///         |event| {
///             // Stop the visit as soon as a back edge is found
///             match event {
///                 EventPred::Revisit { on_stack: true, .. } => Err(StoppedWhenDone),
///                 _ => Ok(()),
///             }
///         },
///         no_logging![]
///     )
///     .is_err()); // As the graph is not acyclic
/// ```
///
/// Or, assuming the input is acyclic, let us compute the reverse of a
/// topological sort:
///
/// ```
/// use digraph_algo::algo::visits::depth_first::{self, EventPred};
/// use digraph_algo::algo::visits::Sequential;
/// use digraph_algo::graph::traits::Adjacency;
/// use digraph_algo::graph::Digraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = Digraph::from_arcs(4, [(0, 1), (1, 2), (1, 3), (0, 3)]).unwrap();
/// let mut visit = depth_first::SeqPred::new(&graph);
/// let mut top_sort = Vec::with_capacity(graph.num_vertices());
///
/// visit
///     .visit_all(
///         |event| {
///             if let EventPred::Postvisit { curr, .. } = event {
///                 top_sort.push(curr);
///             }
///             Ok::<_, std::convert::Infallible>(())
///         },
///         no_logging![]
///     )
///     .unwrap();
/// assert_eq!(top_sort, vec![2, 3, 1, 0]);
/// ```

// General depth-first visit implementation. The user shouldn't see this.
// Allowed combinations for `PRED`, `S` and `P` are:
// * `false`, `TwoStates` and `()` (no predecessors, no stack tracking)
// * `true`, `TwoStates` and `usize` (predecessors, no stack tracking)
// * `true`, `ThreeStates` and `usize` (predecessors, stack tracking)
pub struct SeqIter<'a, S, G: Adjacency, P, const PRED: bool> {
    graph: &'a G,
    /// Entries on this stack represent the iterator on the successors of a
    /// vertex and the parent of the vertex. This approach makes it possible
    /// to avoid storing both the current and the parent vertex in the
    /// stack.
    stack: Vec<(<G::Successors<'a> as IntoIterator>::IntoIter, P)>,
    state: S,
}

/// The iterator returned by [`stack`](SeqPred::stack).
pub struct StackIterator<'a, 'b, S, G: Adjacency> {
    visit: &'b mut SeqIter<'a, S, G, usize, true>,
}

impl<'a, 'b, S, G: Adjacency> Iterator for StackIterator<'a, 'b, S, G> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // Since we put predecessors on the stack, the first two stack
        // entries are equal to the root, so we avoid to return the first
        // one
        if self.visit.stack.len() <= 1 {
            return None;
        }
        self.visit.stack.pop().map(|(_, parent)| parent)
    }
}

impl<'a, S: VertexStates, G: Adjacency, P, const PRED: bool> SeqIter<'a, S, G, P, PRED> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqIter<'a, S, G, P, PRED> {
        let num_vertices = graph.num_vertices();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            state: S::new(num_vertices),
        }
    }
}

impl<'a, S, G: Adjacency> SeqIter<'a, S, G, usize, true> {
    /// Returns an iterator over the vertices still on the visit path,
    /// except for the last one.
    ///
    /// Vertices will be returned in reverse order of visit.
    ///
    /// This method is useful only in the case of interrupted visits, as in
    /// a completed visit the stack will be empty. The last vertex on the
    /// visit path at the moment of the interruption must be treated
    /// separately.
    pub fn stack(&mut self) -> StackIterator<'a, '_, S, G> {
        StackIterator { visit: self }
    }
}

#[doc(hidden)]
#[sealed]
pub trait VertexStates {
    fn new(n: usize) -> Self;
    fn set_on_stack(&mut self, vertex: usize);
    fn set_off_stack(&mut self, vertex: usize);
    fn on_stack(&self, vertex: usize) -> bool;
    fn set_known(&mut self, vertex: usize);
    fn known(&self, vertex: usize) -> bool;
    fn reset(&mut self);
}

#[doc(hidden)]
/// A two-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does not keep track of vertices on the stack, so
/// events of type [`Revisit`](`EventPred::Revisit`) will always have the
/// associated Boolean equal to false.
pub struct TwoStates(BitVec);

#[doc(hidden)]
/// A three-state selector type for [sequential depth-first visits](SeqIter).
///
/// This implementation does keep track of vertices on the stack, so events
/// of type [`Revisit`](`EventPred::Revisit`) will provide information about
/// whether the vertex associated with the event is currently on the visit
/// path.
pub struct ThreeStates(BitVec);

#[sealed]
impl VertexStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, vertex: usize) {
        self.0.set(vertex * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, vertex: usize) {
        self.0.set(vertex * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, vertex: usize) -> bool {
        self.0.get(vertex * 2 + 1)
    }
    #[inline(always)]
    fn set_known(&mut self, vertex: usize) {
        self.0.set(vertex * 2, true);
    }
    #[inline(always)]
    fn known(&self, vertex: usize) -> bool {
        self.0.get(vertex * 2)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.reset();
    }
}

#[sealed]
impl VertexStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _vertex: usize) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _vertex: usize) {}
    #[inline(always)]
    fn on_stack(&self, _vertex: usize) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, vertex: usize) {
        self.0.set(vertex, true);
    }
    #[inline(always)]
    fn known(&self, vertex: usize) -> bool {
        self.0.get(vertex)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.reset();
    }
}

impl<'a, S: VertexStates, G: Adjacency> Sequential<EventPred> for SeqIter<'a, S, G, usize, true> {
    fn visit_filtered<
        R,
        C: FnMut(EventPred) -> Result<(), R>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), R> {
        let state = &mut self.state;

        if state.known(root)
            || !filter(FilterArgsPred {
                curr: root,
                pred: root,
                root,
                depth: 0,
            })
        {
            // We ignore the vertex: it might be visited later
            return Ok(());
        }

        callback(EventPred::Init { root })?;

        state.set_known(root);

        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;

        self.stack
            .push((self.graph.successors(root).into_iter(), root));

        state.set_on_stack(root);

        // This variable keeps track of the current vertex being visited; the
        // parent vertex is derived at each iteration of the 'recurse loop.
        let mut current_vertex = root;

        'recurse: loop {
            let depth = self.stack.len();
            let Some((iter, parent)) = self.stack.last_mut() else {
                callback(EventPred::Done { root })?;
                return Ok(());
            };

            for succ in iter {
                // Check if vertex should be visited
                if state.known(succ) {
                    // Vertex has already been discovered
                    callback(EventPred::Revisit {
                        curr: succ,
                        pred: current_vertex,
                        root,
                        depth: depth + 1,
                        on_stack: state.on_stack(succ),
                    })?;
                } else {
                    // First time seeing vertex
                    if filter(FilterArgsPred {
                        curr: succ,
                        pred: current_vertex,
                        root,
                        depth: depth + 1,
                    }) {
                        state.set_known(succ);

                        callback(EventPred::Previsit {
                            curr: succ,
                            pred: current_vertex,
                            root,
                            depth: depth + 1,
                        })?;
                        // current_vertex is the parent of succ
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), current_vertex));

                        state.set_on_stack(succ);

                        // At the next iteration, succ will be the current
                        // vertex
                        current_vertex = succ;

                        continue 'recurse;
                    } // Else we ignore the vertex: it might be visited later
                }
            }

            callback(EventPred::Postvisit {
                curr: current_vertex,
                pred: *parent,
                root,
                depth,
            })?;

            pl.light_update();

            state.set_off_stack(current_vertex);

            // We're going up one stack level, so the next current_vertex
            // is the current parent.
            current_vertex = *parent;
            self.stack.pop();
        }
    }

    fn visit_all_filtered<
        R,
        C: FnMut(EventPred) -> Result<(), R>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), R> {
        for vertex in 0..self.graph.num_vertices() {
            self.visit_filtered(vertex, &mut callback, &mut filter, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}

impl<'a, G: Adjacency> Sequential<EventNoPred> for SeqIter<'a, TwoStates, G, (), false> {
    fn visit_filtered<
        R,
        C: FnMut(EventNoPred) -> Result<(), R>,
        F: FnMut(FilterArgsNoPred) -> bool,
    >(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), R> {
        let state = &mut self.state;

        if state.known(root)
            || !filter(FilterArgsNoPred {
                curr: root,
                root,
                depth: 0,
            })
        {
            // We ignore the vertex: it might be visited later
            return Ok(());
        }

        callback(EventNoPred::Init { root })?;

        state.set_known(root);

        callback(EventNoPred::Previsit {
            curr: root,
            root,
            depth: 0,
        })?;

        self.stack
            .push((self.graph.successors(root).into_iter(), ()));

        'recurse: loop {
            let depth = self.stack.len();
            let Some((iter, _)) = self.stack.last_mut() else {
                callback(EventNoPred::Done { root })?;
                return Ok(());
            };

            for succ in iter {
                // Check if vertex should be visited
                if state.known(succ) {
                    // Vertex has already been discovered
                    callback(EventNoPred::Revisit {
                        curr: succ,
                        root,
                        depth: depth + 1,
                    })?;
                } else {
                    // First time seeing vertex
                    if filter(FilterArgsNoPred {
                        curr: succ,
                        root,
                        depth: depth + 1,
                    }) {
                        state.set_known(succ);

                        callback(EventNoPred::Previsit {
                            curr: succ,
                            root,
                            depth: depth + 1,
                        })?;
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), ()));

                        continue 'recurse;
                    } // Else we ignore the vertex: it might be visited later
                }
            }

            pl.light_update();

            // We're going up one stack level.
            self.stack.pop();
        }
    }

    fn visit_all_filtered<
        R,
        C: FnMut(EventNoPred) -> Result<(), R>,
        F: FnMut(FilterArgsNoPred) -> bool,
    >(
        &mut self,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), R> {
        for vertex in 0..self.graph.num_vertices() {
            self.visit_filtered(vertex, &mut callback, &mut filter, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
    }
}
