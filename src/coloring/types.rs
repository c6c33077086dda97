//! Coloring results, verdicts, and trace records.

use crate::graph::{Graph, VertexId};

/// A complete vertex coloring: `colors[v]` is the color index of vertex `v`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coloring {
    colors: Vec<usize>,
}

impl Coloring {
    pub(crate) fn new(colors: Vec<usize>) -> Self {
        Self { colors }
    }

    pub fn color_of(&self, v: VertexId) -> Option<usize> {
        self.colors.get(v).copied()
    }

    /// Color of every vertex, indexed by vertex id.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// `max color + 1`, or `0` for an empty graph.
    pub fn chromatic_number(&self) -> usize {
        self.colors.iter().max().map_or(0, |&c| c + 1)
    }

    /// Vertices of each color class, indexed by color, ids ascending.
    pub fn color_classes(&self) -> Vec<Vec<VertexId>> {
        let mut classes = vec![Vec::new(); self.chromatic_number()];
        for (v, &c) in self.colors.iter().enumerate() {
            classes[c].push(v);
        }
        classes
    }

    /// Checks that no edge joins two vertices of the same color.
    ///
    /// Reports the first violating edge in edge insertion order.
    pub fn verify(&self, graph: &Graph) -> ColoringVerdict {
        if self.colors.len() != graph.vertex_count() {
            return ColoringVerdict {
                valid: false,
                message: format!(
                    "coloring covers {} vertices but the graph has {}",
                    self.colors.len(),
                    graph.vertex_count()
                ),
                violation: None,
            };
        }

        for e in graph.edges() {
            if self.colors[e.u] == self.colors[e.v] {
                return ColoringVerdict {
                    valid: false,
                    message: format!(
                        "adjacent vertices {} and {} share color {}",
                        graph.name(e.u),
                        graph.name(e.v),
                        self.colors[e.u]
                    ),
                    violation: Some((e.u, e.v)),
                };
            }
        }

        ColoringVerdict {
            valid: true,
            message: "valid coloring".to_owned(),
            violation: None,
        }
    }

    /// Summary statistics, including a validity check against `graph`.
    pub fn statistics(&self, graph: &Graph) -> ColoringStats {
        let verdict = self.verify(graph);
        let chromatic_number = self.chromatic_number();
        ColoringStats {
            chromatic_number,
            colors_used: (0..chromatic_number).collect(),
            class_sizes: self.color_classes().iter().map(Vec::len).collect(),
            is_valid: verdict.valid,
            validation_message: verdict.message,
        }
    }
}

/// Pass/fail result of [`Coloring::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringVerdict {
    pub valid: bool,
    pub message: String,
    /// First edge whose endpoints share a color.
    pub violation: Option<(VertexId, VertexId)>,
}

/// Summary of a coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoringStats {
    pub chromatic_number: usize,
    pub colors_used: Vec<usize>,
    /// Number of vertices per color, indexed by color.
    pub class_sizes: Vec<usize>,
    pub is_valid: bool,
    pub validation_message: String,
}

/// One observable step of a Welsh–Powell run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColoringStep {
    /// Vertices sorted by degree, descending.
    Ordered {
        order: Vec<VertexId>,
        /// Degree of each vertex in `order`, same positions.
        degrees: Vec<usize>,
    },
    /// A color class was completed.
    ClassFormed {
        color: usize,
        vertices: Vec<VertexId>,
        names: Vec<String>,
        /// Assignment after this class, indexed by vertex id.
        assignment: Vec<Option<usize>>,
    },
}

impl ColoringStep {
    /// One-line description; `index` is the 1-based step number.
    pub fn describe(&self, index: usize) -> String {
        match self {
            ColoringStep::Ordered { .. } => {
                format!("Step {index}: sort vertices by degree (descending)")
            }
            ColoringStep::ClassFormed { color, names, .. } => format!(
                "Step {index}: assign color {color} to non-adjacent vertices {}",
                names.join(", ")
            ),
        }
    }
}
