use u_graphkit::astar::{PathFinder, ZeroHeuristic};
use u_graphkit::coloring::{ColoringStep, WelshPowell};
use u_graphkit::graph::Graph;
use u_graphkit::planarity::{PlanarityChecker, PlanarityReason};
use u_graphkit::tsp::{TspConfig, TspGeneticSolver};
use u_graphkit::GraphError;

fn named(names: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    let mut g = Graph::new();
    for name in names {
        g.add_named_vertex(name);
    }
    for &(a, b, w) in edges {
        let u = g.vertex_by_name(a).expect("vertex defined");
        let v = g.vertex_by_name(b).expect("vertex defined");
        g.add_edge(u, v, w).unwrap();
    }
    g
}

#[test]
fn shortest_path_prefers_two_cheap_hops() {
    let mut g = Graph::new();
    let a = g.add_vertex_at("A", 0.0, 0.0);
    let b = g.add_vertex_at("B", 1.0, 0.0);
    let c = g.add_vertex_at("C", 1.0, 1.0);
    g.add_edge(a, b, 1.0).unwrap();
    g.add_edge(b, c, 1.0).unwrap();
    g.add_edge(a, c, 3.0).unwrap();

    let outcome = PathFinder::with_heuristic(&g, ZeroHeuristic)
        .find_path(a, c)
        .unwrap();
    let path = outcome.path().expect("path exists");

    let details = path.details(&g);
    assert_eq!(details.names, vec!["A", "B", "C"]);
    assert_eq!(details.total_cost, 2.0);
    assert_eq!(details.segments.len(), 2);
}

#[test]
fn shortest_path_on_positioned_map() {
    // 100 weight per coordinate unit keeps the scaled Manhattan estimate admissible.
    let mut g = Graph::new();
    let s = g.add_vertex_at("S", 0.0, 0.0);
    let a = g.add_vertex_at("A", 1.0, 0.0);
    let b = g.add_vertex_at("B", 0.0, 1.0);
    let t = g.add_vertex_at("T", 2.0, 1.0);
    g.add_edge(s, a, 100.0).unwrap();
    g.add_edge(s, b, 100.0).unwrap();
    g.add_edge(a, t, 250.0).unwrap();
    g.add_edge(b, t, 200.0).unwrap();

    let finder = PathFinder::new(&g);
    let path = finder.find_path(s, t).unwrap().into_path().unwrap();
    assert_eq!(path.vertices, vec![s, b, t]);
    assert_eq!(path.cost, 300.0);

    let table = finder.heuristic_table(t).unwrap();
    assert_eq!(table["S"], 300.0);
    assert_eq!(table["T"], 0.0);
}

#[test]
fn shortest_path_rejects_unknown_vertex() {
    let g = named(&["A"], &[]);
    assert_eq!(
        PathFinder::new(&g).find_path(0, 5),
        Err(GraphError::InvalidVertex(5))
    );
    assert_eq!(g.neighbors(5), Err(GraphError::InvalidVertex(5)));
    assert_eq!(g.degree(5), Err(GraphError::InvalidVertex(5)));
    assert_eq!(g.edge_weight(0, 5), Err(GraphError::InvalidVertex(5)));
}

#[test]
fn four_cycle_needs_two_colors() {
    let g = named(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
            ("D", "A", 1.0),
        ],
    );
    let mut trace = Vec::new();
    let coloring = WelshPowell::new(&g).color_traced(&mut trace);

    assert_eq!(coloring.chromatic_number(), 2);
    assert_eq!(coloring.color_classes(), vec![vec![0, 2], vec![1, 3]]);
    assert!(coloring.verify(&g).valid);

    assert!(matches!(trace[0], ColoringStep::Ordered { .. }));
    assert_eq!(
        trace[1].describe(2),
        "Step 2: assign color 0 to non-adjacent vertices A, C"
    );
}

#[test]
fn k5_is_not_planar() {
    let names = ["A", "B", "C", "D", "E"];
    let mut edges = Vec::new();
    for (i, a) in names.iter().enumerate() {
        for b in &names[i + 1..] {
            edges.push((*a, *b, 1.0));
        }
    }
    let g = named(&names, &edges);

    let verdict = PlanarityChecker::new(&g).check();
    assert!(!verdict.planar);
    assert!(matches!(verdict.reason, PlanarityReason::EulerBound { .. }));
}

#[test]
fn genetic_tour_visits_every_city() {
    let g = named(
        &["F", "N", "C", "L", "K", "E", "H", "G"],
        &[
            ("F", "N", 30.0),
            ("F", "C", 20.0),
            ("F", "L", 10.0),
            ("N", "K", 60.0),
            ("N", "C", 47.0),
            ("K", "G", 90.0),
            ("K", "E", 10.0),
            ("K", "C", 70.0),
            ("C", "L", 10.0),
            ("C", "E", 10.0),
            ("E", "G", 40.0),
            ("E", "H", 60.0),
            ("E", "L", 5.0),
            ("L", "H", 40.0),
            ("H", "G", 80.0),
            ("F", "H", 55.0),
            ("K", "H", 73.0),
        ],
    );
    let start = g.vertex_by_name("F").unwrap();
    let config = TspConfig::default()
        .with_max_generations(60)
        .with_mutation_rate(0.2)
        .with_seed(2024);
    let mut solver = TspGeneticSolver::new(&g, start, config).unwrap();

    let mut observed = 0;
    let result = solver.run_with(|_| observed += 1).unwrap();
    assert_eq!(observed, 61);

    let full = result.best.full_route();
    assert_eq!(full.first(), Some(&start));
    assert_eq!(full.last(), Some(&start));
    let mut visited = full[1..full.len() - 1].to_vec();
    visited.sort_unstable();
    visited.dedup();
    assert_eq!(visited.len(), 7);

    assert!(result.best_cost < 999_999.0);
    let rendered = result.best.display(&g).to_string();
    assert!(rendered.starts_with("F → "));
    assert!(rendered.contains("| cost: "));
}
