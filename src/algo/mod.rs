//! Module containing all algorithm implementations for the toolkit.

pub mod visits;

pub mod sccs;

mod acyclicity;
pub use acyclicity::*;
mod top_sort;
pub use top_sort::*;
mod longest_paths;
pub use longest_paths::*;

pub mod cpm;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    use super::*;

    pub use visits::{Event, Sequential};
}
