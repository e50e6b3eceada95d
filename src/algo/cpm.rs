//! Critical-path-method scheduling.
//!
//! Jobs with durations and precedence constraints are scheduled at their
//! earliest possible start time by encoding the constraints as an acyclic
//! edge-weighted graph and computing [longest
//! paths](crate::algo::longest_paths()) from a global source: each job
//! contributes a start and a finish vertex joined by an edge weighted with
//! its duration, while precedence constraints and the connections to the
//! global source and sink contribute zero-weight edges.

use crate::algo::longest_paths::{longest_paths, AcyclicLongestPaths};
use crate::algo::top_sort::CycleDetected;
use crate::graph::EdgeWeightedDigraph;
use dsi_progress_logger::ProgressLog;
use thiserror::Error;

/// A job to be scheduled: a duration plus the indices of the jobs that
/// cannot start before this one completes.
#[derive(Debug, Clone, Default)]
pub struct Job {
    /// The time the job takes to complete.
    pub duration: f64,
    /// The indices of the jobs that must wait for this one.
    pub successors: Vec<usize>,
}

/// Errors raised while scheduling a set of jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The precedence constraints contain a cycle: no feasible schedule
    /// exists.
    #[error("no feasible schedule: {0}")]
    Cyclic(#[from] CycleDetected),
    /// A job lists a successor index that does not denote a job.
    #[error("job {job} lists successor {successor}, but there are only {num_jobs} jobs")]
    SuccessorOutOfRange {
        job: usize,
        successor: usize,
        num_jobs: usize,
    },
}

/// An earliest-start schedule for a set of jobs under precedence
/// constraints.
///
/// Returned by [`schedule`].
pub struct Schedule {
    num_jobs: usize,
    paths: AcyclicLongestPaths,
}

/// Computes the earliest-start schedule of `jobs` via the critical path
/// method.
///
/// # Examples
///
/// ```
/// use digraph_algo::algo::cpm::{schedule, Job};
/// use dsi_progress_logger::no_logging;
///
/// let jobs = [
///     Job { duration: 3.0, successors: vec![1, 2] },
///     Job { duration: 2.0, successors: vec![] },
///     Job { duration: 5.0, successors: vec![] },
/// ];
/// let schedule = schedule(&jobs, no_logging![]).unwrap();
///
/// assert_eq!(schedule.start_time(0), 0.0);
/// assert_eq!(schedule.start_time(1), 3.0);
/// assert_eq!(schedule.completion_time(), 8.0);
/// ```
pub fn schedule(jobs: &[Job], pl: &mut impl ProgressLog) -> Result<Schedule, ScheduleError> {
    let num_jobs = jobs.len();
    let source = 2 * num_jobs;
    let sink = 2 * num_jobs + 1;

    for (job, Job { successors, .. }) in jobs.iter().enumerate() {
        for &successor in successors {
            if successor >= num_jobs {
                return Err(ScheduleError::SuccessorOutOfRange {
                    job,
                    successor,
                    num_jobs,
                });
            }
        }
    }

    // Vertices: job starts in 0..num_jobs, job finishes in
    // num_jobs..2 * num_jobs, then the global source and sink. All
    // endpoints below are in range, so the additions cannot fail.
    let mut graph = EdgeWeightedDigraph::new(2 * num_jobs + 2);
    for (job, Job {
        duration,
        successors,
    }) in jobs.iter().enumerate()
    {
        let start = job;
        let finish = num_jobs + job;
        graph.add_edge(source, start, 0.0).unwrap();
        graph.add_edge(start, finish, *duration).unwrap();
        graph.add_edge(finish, sink, 0.0).unwrap();
        for &successor in successors {
            graph.add_edge(finish, successor, 0.0).unwrap();
        }
    }

    let paths = longest_paths(&graph, source, pl)?;

    Ok(Schedule { num_jobs, paths })
}

impl Schedule {
    /// Returns the number of scheduled jobs.
    pub fn num_jobs(&self) -> usize {
        self.num_jobs
    }

    /// Returns the earliest start time of `job`.
    ///
    /// # Panics
    ///
    /// Panics if `job` is not in `[0, num_jobs)`.
    pub fn start_time(&self, job: usize) -> f64 {
        assert!(job < self.num_jobs, "job {} is out of range", job);
        self.paths.dist_to(job)
    }

    /// Returns the earliest finish time of `job`.
    ///
    /// # Panics
    ///
    /// Panics if `job` is not in `[0, num_jobs)`.
    pub fn finish_time(&self, job: usize) -> f64 {
        assert!(job < self.num_jobs, "job {} is out of range", job);
        self.paths.dist_to(self.num_jobs + job)
    }

    /// Returns the minimum overall completion time.
    pub fn completion_time(&self) -> f64 {
        // With no jobs the sink is unreachable from the source
        if self.num_jobs == 0 {
            return 0.0;
        }
        self.paths.dist_to(2 * self.num_jobs + 1)
    }
}
