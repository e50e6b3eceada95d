use anyhow::Result;
use digraph_algo::algo::visits::depth_first::{self, EventNoPred};
use digraph_algo::algo::visits::Sequential;
use digraph_algo::prelude::*;
use dsi_progress_logger::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::convert::Infallible;

#[test]
fn test_one_cycle_plus_tail() -> Result<()> {
    let graph = Digraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (2, 3)])?;

    let sccs = sccs::tarjan(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 2);
    // Vertex 3 has no way back into the cycle, so its singleton component
    // is completed first
    assert_eq!(sccs.components(), &[1, 1, 1, 0]);

    Ok(())
}

#[test]
fn test_self_loop() -> Result<()> {
    let graph = Digraph::from_arcs(1, [(0, 0)])?;

    let sccs = sccs::tarjan(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 1);
    assert_eq!(sccs.components(), &[0]);

    Ok(())
}

#[test]
fn test_no_edges() {
    let graph = Digraph::new(4);

    let sccs = sccs::tarjan(&graph, no_logging![]);

    // Each isolated vertex is a singleton component, completed in
    // increasing vertex order
    assert_eq!(sccs.num_components(), 4);
    assert_eq!(sccs.components(), &[0, 1, 2, 3]);
}

#[test]
fn test_parallel_edges() -> Result<()> {
    let graph = Digraph::from_arcs(2, [(0, 1), (0, 1), (1, 0)])?;

    let sccs = sccs::tarjan(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 1);

    Ok(())
}

#[test]
fn test_cycle() -> Result<()> {
    let graph = Digraph::from_arcs(4, [(0, 1), (1, 2), (2, 3), (3, 0)])?;

    let sccs = sccs::tarjan(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 1);
    assert_eq!(sccs.compute_sizes(), vec![4].into_boxed_slice());

    Ok(())
}

#[test]
fn test_complete_graph() -> Result<()> {
    let mut graph = Digraph::new(5);
    for from in 0..5 {
        for to in 0..5 {
            if from != to {
                graph.add_edge(from, to)?;
            }
        }
    }

    let sccs = sccs::tarjan(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 1);
    for vertex in 0..5 {
        assert_eq!(sccs.components()[vertex], 0);
    }

    Ok(())
}

#[test]
fn test_tree() -> Result<()> {
    let graph = Digraph::from_arcs(7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)])?;

    let sccs = sccs::tarjan(&graph, no_logging![]);

    assert_eq!(sccs.num_components(), 7);

    Ok(())
}

#[test]
fn test_sizes_and_sorting() -> Result<()> {
    let arcs = [
        (0, 0),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 3),
        (2, 4),
        (2, 5),
        (3, 4),
        (4, 3),
        (5, 5),
        (5, 6),
        (5, 7),
        (5, 8),
        (6, 7),
        (8, 7),
    ];
    let graph = Digraph::from_arcs(9, arcs)?;

    let mut sccs = sccs::tarjan(&graph, no_logging![]);

    assert_eq!(sccs.components()[1], sccs.components()[2]);
    assert_eq!(sccs.components()[3], sccs.components()[4]);
    assert_ne!(sccs.components()[0], sccs.components()[1]);

    sccs.sort_by_size();
    let sizes = sccs.compute_sizes();

    assert_eq!(sizes, vec![2, 2, 1, 1, 1, 1, 1].into_boxed_slice());

    Ok(())
}

fn random_digraph(num_vertices: usize, edge_probability: f64, seed: u64) -> Digraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Digraph::new(num_vertices);
    for from in 0..num_vertices {
        for to in 0..num_vertices {
            if rng.random_bool(edge_probability) {
                graph.add_edge(from, to).unwrap();
            }
        }
    }
    graph
}

fn reachable_from(graph: &Digraph, root: usize) -> Vec<bool> {
    let mut visit = depth_first::SeqNoPred::new(graph);
    let mut reachable = vec![false; graph.num_vertices()];
    visit
        .visit(
            root,
            |event| {
                if let EventNoPred::Previsit { curr, .. } = event {
                    reachable[curr] = true;
                }
                Ok::<_, Infallible>(())
            },
            no_logging![],
        )
        .unwrap();
    reachable
}

fn check_mutual_reachability(graph: &Digraph) {
    let num_vertices = graph.num_vertices();
    let sccs = sccs::tarjan(graph, no_logging![]);

    assert!(sccs.num_components() >= 1);
    assert!(sccs.num_components() <= num_vertices);

    let reachable: Vec<_> = (0..num_vertices)
        .map(|vertex| reachable_from(graph, vertex))
        .collect();

    for u in 0..num_vertices {
        for v in 0..num_vertices {
            let mutual = reachable[u][v] && reachable[v][u];
            assert_eq!(
                sccs.components()[u] == sccs.components()[v],
                mutual,
                "vertices {} and {}",
                u,
                v
            );
        }
    }
}

#[test]
fn test_random() {
    for seed in 0..4 {
        check_mutual_reachability(&random_digraph(25, 0.08, seed));
        check_mutual_reachability(&random_digraph(25, 0.15, seed));
    }
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_random_large() {
    for num_vertices in (10..=100).step_by(10) {
        for density in 1..10usize {
            check_mutual_reachability(&random_digraph(
                num_vertices,
                density as f64 / 100.0,
                (num_vertices * 31 + density) as u64,
            ));
        }
    }
}
