use dagsort::prelude::*;

#[test]
fn diamond_sorts_with_both_algorithms() {
    let graph = Graph::new(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    assert_eq!(graph.n_edges(), 4);

    for algorithm in Algorithm::ALL {
        let result = algorithm.sort(&graph).unwrap();
        assert_eq!(result.stats.edges, 4);
        assert_eq!(result.stats.vertices, 4);
        assert!(graph.is_topological_order(&result.order), "{algorithm}");
    }

    assert_eq!(Algorithm::Dfs.sort(&graph).unwrap().order, [0, 2, 1, 3]);
    assert_eq!(
        Algorithm::SourceRemoval.sort(&graph).unwrap().order,
        [0, 1, 2, 3]
    );
}

#[test]
fn triangle_is_rejected_as_cycle() {
    let err = Graph::new(3, [(0, 1), (1, 2), (2, 0)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CycleDetected);
}

#[test]
fn self_loop_is_rejected() {
    let err = Graph::new(2, [(0, 0)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SelfLoopDetected);
}

#[test]
fn out_of_range_endpoint_is_rejected() {
    let err = Graph::new(3, [(0, 5)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VertexOutOfRange);
}

#[test]
fn single_vertex_without_edges() {
    let graph = Graph::new(1, []).unwrap();
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.sort(&graph).unwrap().order, [0]);
    }
}

#[test]
fn zero_vertices_are_rejected() {
    let err = Graph::new(0, []).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidVertexCount);
}

#[test]
fn benchmark_reports_last_iteration() {
    let graph = Graph::new(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    for algorithm in Algorithm::ALL {
        let run = run_benchmark(&graph, algorithm).unwrap();
        let direct = algorithm.sort(&graph).unwrap();

        assert_eq!(run.algorithm, algorithm);
        assert_eq!(run.samples.len(), 10);
        assert_eq!(run.result, direct);

        let t = run.timings;
        assert!(t.min <= t.median && t.median <= t.max);
        assert!(t.min <= t.average && t.average <= t.max);
    }
}

#[test]
fn comparison_covers_both_algorithms() {
    let mut builder = GraphBuilder::new(6);
    builder.add_path([0, 1, 2, 3]).add_path([4, 5, 3]);
    let graph = builder.build().unwrap();

    let comparison = compare(&graph).unwrap();
    assert_eq!(comparison.dfs.algorithm, Algorithm::Dfs);
    assert_eq!(comparison.source_removal.algorithm, Algorithm::SourceRemoval);
    assert!(graph.is_topological_order(&comparison.dfs.result.order));
    assert!(graph.is_topological_order(&comparison.source_removal.result.order));
}

#[test]
fn graph_is_shareable_across_threads() {
    let graph = Graph::new(4, [(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
    let expected = Algorithm::Dfs.sort(&graph).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| Algorithm::Dfs.sort(&graph).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
