use anyhow::Result;
use digraph_algo::prelude::*;

#[test]
fn test_empty_graph() {
    let graph = Digraph::new(4);

    assert_eq!(graph.num_vertices(), 4);
    assert_eq!(graph.num_edges(), 0);
    for vertex in 0..4 {
        assert_eq!(graph.outdegree(vertex), 0);
        assert_eq!(graph.successors(vertex).count(), 0);
    }
}

#[test]
fn test_insertion_order_duplicates_and_self_loops() -> Result<()> {
    let mut graph = Digraph::new(3);
    graph.add_edge(0, 1)?;
    graph.add_edge(0, 1)?;
    graph.add_edge(0, 0)?;
    graph.add_edge(2, 1)?;

    assert_eq!(graph.num_edges(), 4);
    assert_eq!(graph.outdegree(0), 3);
    assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 1, 0]);
    assert_eq!(graph.successors(2).collect::<Vec<_>>(), vec![1]);

    // The sequence is restartable
    assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 1, 0]);

    Ok(())
}

#[test]
fn test_add_edge_out_of_range() {
    let mut graph = Digraph::new(3);

    assert_eq!(
        graph.add_edge(0, 3),
        Err(GraphError::VertexOutOfRange {
            vertex: 3,
            num_vertices: 3
        })
    );
    assert_eq!(
        graph.add_edge(7, 0),
        Err(GraphError::VertexOutOfRange {
            vertex: 7,
            num_vertices: 3
        })
    );
    // The failed additions must not be recorded
    assert_eq!(graph.num_edges(), 0);
}

#[test]
fn test_from_arcs_aborts() {
    assert!(Digraph::from_arcs(2, [(0, 1), (1, 2)]).is_err());
    assert!(Digraph::from_arcs(2, [(0, 1), (1, 0)]).is_ok());
}

#[test]
fn test_try_successors() -> Result<()> {
    let graph = Digraph::from_arcs(2, [(0, 1)])?;

    assert_eq!(graph.try_successors(0)?.collect::<Vec<_>>(), vec![1]);
    assert_eq!(
        graph.try_successors(2).map(|_| ()),
        Err(GraphError::VertexOutOfRange {
            vertex: 2,
            num_vertices: 2
        })
    );

    Ok(())
}

#[test]
fn test_directed_edge() {
    let edge = DirectedEdge::new(0, 1, 5.5);

    assert_eq!(edge.from(), 0);
    assert_eq!(edge.to(), 1);
    assert_eq!(edge.weight(), 5.5);
    assert_eq!(edge, DirectedEdge::new(0, 1, 5.5));
    assert_ne!(edge, DirectedEdge::new(0, 1, 5.0));
    assert_eq!(format!("{}", edge), "0 -> 1 (5.5)");
}

#[test]
fn test_edge_weighted_digraph() -> Result<()> {
    let mut graph = EdgeWeightedDigraph::new(3);
    graph.add_edge(0, 1, 5.0)?;
    graph.add_edge(0, 2, 3.0)?;
    graph.add_edge(2, 2, 1.0)?;

    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 3);
    assert_eq!(graph.outdegree(0), 2);
    assert_eq!(
        graph.edges(0).collect::<Vec<_>>(),
        vec![DirectedEdge::new(0, 1, 5.0), DirectedEdge::new(0, 2, 3.0)]
    );
    // The unweighted view exposes edge targets
    assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(graph.successors(2).collect::<Vec<_>>(), vec![2]);

    assert_eq!(
        graph.add_edge(0, 3, 1.0),
        Err(GraphError::VertexOutOfRange {
            vertex: 3,
            num_vertices: 3
        })
    );
    assert_eq!(
        graph.try_edges(5).map(|_| ()),
        Err(GraphError::VertexOutOfRange {
            vertex: 5,
            num_vertices: 3
        })
    );

    Ok(())
}

#[test]
fn test_from_edges_aborts() {
    assert!(EdgeWeightedDigraph::from_edges(2, [(0, 1, 1.0), (0, 2, 1.0)]).is_err());
    assert!(EdgeWeightedDigraph::from_edges(2, [(0, 1, 1.0), (1, 0, 2.0)]).is_ok());
}
