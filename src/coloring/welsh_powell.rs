//! Welsh–Powell greedy coloring.

use tracing::debug;

use super::types::{Coloring, ColoringStep};
use crate::graph::{Graph, VertexId};

/// Greedy coloring in order of decreasing degree.
///
/// # Algorithm (Welsh & Powell, 1967)
///
/// 1. Sort vertices by degree, descending; ties keep insertion order
/// 2. Seed a new color class with the first uncolored vertex
/// 3. Add every later uncolored vertex not adjacent to a member of the class
/// 4. Repeat with the next color until all vertices are colored
///
/// # Complexity
/// O(V · (V + E)) in the worst case
pub struct WelshPowell<'g> {
    graph: &'g Graph,
}

impl<'g> WelshPowell<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Colors the graph.
    pub fn color(&self) -> Coloring {
        self.run(None)
    }

    /// Colors the graph, appending each step to `trace`.
    ///
    /// The result is identical to [`color`](Self::color).
    pub fn color_traced(&self, trace: &mut Vec<ColoringStep>) -> Coloring {
        self.run(Some(trace))
    }

    /// Vertices by degree descending, ties by id.
    pub fn degree_order(&self) -> Vec<VertexId> {
        let mut order: Vec<VertexId> = self.graph.vertices().collect();
        // sort_by_key is stable
        order.sort_by_key(|&v| std::cmp::Reverse(self.graph.adjacent(v).len()));
        order
    }

    fn run(&self, mut trace: Option<&mut Vec<ColoringStep>>) -> Coloring {
        let g = self.graph;
        let order = self.degree_order();

        if let Some(sink) = trace.as_deref_mut() {
            sink.push(ColoringStep::Ordered {
                degrees: order.iter().map(|&v| g.adjacent(v).len()).collect(),
                order: order.clone(),
            });
        }

        let mut assignment: Vec<Option<usize>> = vec![None; g.vertex_count()];
        let mut colored = 0usize;
        let mut color = 0usize;
        // Marks neighbors of the current class; reset per color.
        let mut blocked = vec![false; g.vertex_count()];

        while colored < order.len() {
            blocked.iter_mut().for_each(|b| *b = false);
            let mut class = Vec::new();

            for &v in &order {
                if assignment[v].is_some() || blocked[v] {
                    continue;
                }
                assignment[v] = Some(color);
                class.push(v);
                for &(n, _) in g.adjacent(v) {
                    blocked[n] = true;
                }
            }

            colored += class.len();
            debug!(color, size = class.len(), "color class formed");

            if let Some(sink) = trace.as_deref_mut() {
                sink.push(ColoringStep::ClassFormed {
                    color,
                    names: class.iter().map(|&v| g.name(v).to_owned()).collect(),
                    vertices: class,
                    assignment: assignment.clone(),
                });
            }

            color += 1;
        }

        // Every vertex in `order` was assigned before the loop exited.
        Coloring::new(assignment.into_iter().map(|c| c.unwrap_or(0)).collect())
    }
}
