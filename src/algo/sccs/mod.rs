//! Algorithms used to compute and work with the strongly connected
//! components of a graph.

mod tarjan;
pub use tarjan::*;

use rayon::prelude::*;

/// The strongly connected components of a graph.
///
/// Two vertices share a component index if and only if each is reachable
/// from the other. Indices are assigned in the order components are
/// completed by the visit, which is deterministic for a fixed graph and
/// edge-insertion order but carries no meaning beyond equality grouping;
/// [`sort_by_size`](Sccs::sort_by_size) provides a canonical renumbering.
pub struct Sccs {
    num_components: usize,
    component: Box<[usize]>,
}

impl Sccs {
    pub fn new(num_components: usize, component: Box<[usize]>) -> Self {
        Self {
            num_components,
            component,
        }
    }

    /// Returns the number of strongly connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice mapping each vertex to the index of its component.
    pub fn components(&self) -> &[usize] {
        &self.component
    }

    /// Returns the size of each component.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components];
        for &component in self.component.iter() {
            sizes[component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers by decreasing size the components of this set.
    ///
    /// After a call to this method, the sizes of strongly connected
    /// components are decreasing in the component index.
    pub fn sort_by_size(&mut self) {
        let sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_unstable_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()].into_boxed_slice();
        for (position, &component) in sort_perm.iter().enumerate() {
            inv_perm[component] = position;
        }
        self.component
            .par_iter_mut()
            .for_each(|component| *component = inv_perm[*component]);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_compute_sizes() {
        let sccs = Sccs::new(3, vec![0, 0, 0, 1, 2, 2, 1, 2, 0, 0].into_boxed_slice());

        assert_eq!(sccs.compute_sizes(), vec![5, 2, 3].into_boxed_slice());
    }

    #[test]
    fn test_sort_by_size() {
        let mut sccs = Sccs::new(3, vec![0, 1, 1, 1, 0, 2].into_boxed_slice());

        sccs.sort_by_size();

        assert_eq!(sccs.components(), &[1, 0, 0, 0, 1, 2]);
        assert_eq!(sccs.compute_sizes(), vec![3, 2, 1].into_boxed_slice());
    }
}
