use fib_sssp::algorithm::traits::ShortestPathAlgorithm;
use fib_sssp::graph::{DirectedGraph, Graph, MutableGraph};
use fib_sssp::{ParallelDijkstraStrategy, SequentialStrategy, ShortestPathResult};
use ordered_float::OrderedFloat;
use std::collections::HashMap;

type W = OrderedFloat<f64>;
type G = DirectedGraph<W>;

// Test helper: 8-connected grid, skipping every cell marked as blocked
fn create_test_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> G {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }
            let vertex = y * width + x;

            // Define possible moves (8 directions)
            let directions = [
                // Cardinal directions (N, E, S, W)
                (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
                // Diagonal directions (NE, SE, SW, NW)
                (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
            ];

            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let (nx, ny) = (nx as usize, ny as usize);
                    if !blocked.contains(&(nx, ny)) {
                        graph.add_edge(vertex, ny * width + nx, OrderedFloat(cost)).unwrap();
                    }
                }
            }
        }
    }

    graph
}

fn assert_path_uses_edges(graph: &G, path: &[usize], source: usize, target: usize) {
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10, &[]);
    let (source, target) = (0, 99);

    let sequential = SequentialStrategy::new();
    let parallel = ParallelDijkstraStrategy::new(4);

    let seq_result: ShortestPathResult<W> = sequential.compute_shortest_paths(&graph, source).unwrap();
    let par_result: ShortestPathResult<W> = parallel.compute_shortest_paths(&graph, source).unwrap();

    // Nine diagonal steps
    assert!((seq_result.distance[target].0 - 12.6).abs() < 1e-9);
    assert_eq!(seq_result.distance, par_result.distance);

    let seq_path = <SequentialStrategy as ShortestPathAlgorithm<W, G>>::get_path(&sequential, &seq_result, target)
        .expect("Sequential strategy should construct a path");
    let par_path = <ParallelDijkstraStrategy as ShortestPathAlgorithm<W, G>>::get_path(&parallel, &par_result, target)
        .expect("Parallel strategy should construct a path");

    assert_path_uses_edges(&graph, &seq_path, source, target);
    assert_path_uses_edges(&graph, &par_path, source, target);
    assert_eq!(seq_path.len(), 10);
}

// Test path finding with a wall that leaves a gap at the bottom
#[test]
fn test_path_finding_with_obstacles() {
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_test_grid(10, 10, &wall);
    let (source, target) = (0, 9);

    let straight_line = 9.0;
    let results: [ShortestPathResult<W>; 2] = [
        SequentialStrategy::new().compute_shortest_paths(&graph, source).unwrap(),
        ParallelDijkstraStrategy::new(3).compute_shortest_paths(&graph, source).unwrap(),
    ];
    for result in results {
        assert!(result.is_reachable(target), "Should find a path around obstacles");
        assert!(result.distance[target].0 > straight_line);

        let path = result.path_to(target).unwrap();
        assert_path_uses_edges(&graph, &path, source, target);
        assert!(path.iter().all(|v| !wall.contains(&(v % 10, v / 10))));
    }
}

// Test the city pathfinding scenario
#[test]
fn test_city_pathfinding() {
    let (width, height) = (25, 18);
    let buildings = [
        (3, 3), (4, 3), (5, 3),
        (3, 4), (4, 4), (5, 4),
        (3, 5), (4, 5), (5, 5),
        (10, 10), (11, 10), (12, 10),
        (10, 11), (11, 11), (12, 11),
        (10, 12), (11, 12), (12, 12),
    ];
    let graph = create_test_grid(width, height, &buildings);

    // Define some key locations
    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    let parallel = ParallelDijkstraStrategy::new(2);
    for (from_name, &(fx, fy)) in &locations {
        let source = fy * width + fx;
        let result: ShortestPathResult<W> = parallel.compute_shortest_paths(&graph, source).unwrap();
        let reference: ShortestPathResult<W> = SequentialStrategy::new().compute_shortest_paths(&graph, source).unwrap();
        assert_eq!(result.distance, reference.distance);

        for (to_name, &(tx, ty)) in &locations {
            if from_name == to_name {
                continue;
            }
            let target = ty * width + tx;
            assert!(result.is_reachable(target), "Should find a path from {} to {}", from_name, to_name);

            let path = result
                .path_to(target)
                .unwrap_or_else(|| panic!("Should construct a path from {} to {}", from_name, to_name));
            assert_path_uses_edges(&graph, &path, source, target);
        }
    }

    // Building cells have no edges and stay unreachable from anywhere
    let home: ShortestPathResult<W> = SequentialStrategy::new().compute_shortest_paths(&graph, 0).unwrap();
    for &(bx, by) in &buildings {
        assert!(!home.is_reachable(by * width + bx));
    }
}
