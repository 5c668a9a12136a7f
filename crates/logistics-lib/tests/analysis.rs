mod common;

use logistics_lib::{
    all_pairs_shortest_distances, eccentricities, eccentricity_and_center, load_graph, Error,
    Graph, GraphMode, WeatherCondition, WeatherWeights, MAX_TRAVEL_TIME,
};

use common::{fixture_path, graph_from, uniform};

fn triangle() -> Graph {
    graph_from(&[("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)])
}

#[test]
fn triangle_distance_matrix_and_center() {
    let report = eccentricity_and_center(&triangle()).expect("triangle is connected");

    assert_eq!(report.matrix.nodes(), ["A", "B", "C"]);
    assert_eq!(
        report.matrix.rows(),
        [
            vec![0.0, 1.0, 3.0],
            vec![1.0, 0.0, 2.0],
            vec![3.0, 2.0, 0.0]
        ]
    );
    assert_eq!(report.center, "B");
    assert_eq!(report.eccentricity, 2.0);
    assert_eq!(
        report.eccentricities,
        vec![
            ("A".to_string(), 3.0),
            ("B".to_string(), 2.0),
            ("C".to_string(), 3.0)
        ]
    );
}

#[test]
fn undirected_matrix_is_symmetric_with_zero_diagonal() {
    let graph = load_graph(
        Some(fixture_path().as_path()),
        WeatherCondition::Rain,
        GraphMode::Undirected,
    )
    .expect("fixture loads");
    let matrix = all_pairs_shortest_distances(&graph);

    assert!(matrix.is_symmetric());
    for (index, row) in matrix.rows().iter().enumerate() {
        assert_eq!(row[index], 0.0);
        assert!(row.iter().all(|distance| *distance >= 0.0));
    }
}

#[test]
fn directed_matrix_reports_unreachable_as_infinity() {
    let mut graph = Graph::new(GraphMode::Directed, WeatherCondition::Normal);
    graph.add_edge("A", "B", uniform(1.0)).unwrap();
    graph.add_edge("B", "C", uniform(1.0)).unwrap();
    let matrix = all_pairs_shortest_distances(&graph);

    assert_eq!(matrix.distance("A", "C"), Some(2.0));
    assert_eq!(matrix.distance("C", "A"), Some(f64::INFINITY));
    assert_eq!(matrix.distance("A", "missing"), None);
    assert!(!matrix.is_symmetric());
}

#[test]
fn floyd_warshall_handles_cycles() {
    let mut graph = Graph::new(GraphMode::Directed, WeatherCondition::Normal);
    graph.add_edge("A", "B", uniform(1.0)).unwrap();
    graph.add_edge("B", "C", uniform(1.0)).unwrap();
    graph.add_edge("C", "A", uniform(1.0)).unwrap();
    graph.add_edge("A", "C", uniform(5.0)).unwrap();

    let matrix = all_pairs_shortest_distances(&graph);
    assert_eq!(matrix.distance("A", "C"), Some(2.0));
    assert_eq!(matrix.distance("C", "B"), Some(2.0));
    assert_eq!(matrix.distance("B", "B"), Some(0.0));
}

#[test]
fn disconnected_graph_has_no_center() {
    let graph = graph_from(&[("A", "B", 1.0), ("C", "D", 1.0)]);

    match eccentricity_and_center(&graph) {
        Err(Error::DisconnectedGraph { from, to }) => {
            assert_eq!(from, "A");
            assert_eq!(to, "C");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn eccentricities_follow_matrix_order() {
    let matrix = all_pairs_shortest_distances(&triangle());
    let values = eccentricities(&matrix).expect("connected");
    let names: Vec<_> = values.iter().map(|(node, _)| node.as_str()).collect();
    assert_eq!(names, matrix.nodes());
}

#[test]
fn fixture_center_under_normal_weather() {
    let graph = load_graph(
        Some(fixture_path().as_path()),
        WeatherCondition::Normal,
        GraphMode::Undirected,
    )
    .expect("fixture loads");
    let report = eccentricity_and_center(&graph).expect("fixture is connected");

    assert_eq!(report.center, "Coban");
    assert_eq!(report.eccentricity, 430.0);
    assert_eq!(report.matrix.distance("Guatemala", "Peten"), Some(450.0));
}

#[test]
fn mutations_are_reflected_in_next_analysis() {
    let mut graph = triangle();
    assert!(graph.remove_edge("B", "C"));

    let matrix = all_pairs_shortest_distances(&graph);
    assert_eq!(matrix.distance("B", "C"), Some(4.0));

    graph.add_edge("D", "C", uniform(1.0)).unwrap();
    let report = eccentricity_and_center(&graph).expect("still connected");
    // A and C tie at eccentricity 4; the smaller identifier wins.
    assert_eq!(report.center, "A");
    assert_eq!(report.eccentricity, 4.0);
}

#[test]
fn largest_travel_times_keep_a_connected_graph_connected() {
    assert!(matches!(
        WeatherWeights::new([f64::MAX; 4]),
        Err(Error::InvalidInput { .. })
    ));

    let graph = graph_from(&[
        ("A", "B", MAX_TRAVEL_TIME),
        ("B", "C", MAX_TRAVEL_TIME),
        ("C", "D", MAX_TRAVEL_TIME),
    ]);
    let report = eccentricity_and_center(&graph).expect("path graph is connected");

    assert_eq!(report.center, "B");
    assert_eq!(report.eccentricity, 2.0 * MAX_TRAVEL_TIME);
    assert_eq!(
        report.matrix.distance("A", "D"),
        Some(3.0 * MAX_TRAVEL_TIME)
    );
}
