//! Structural graph properties used as planarity short-circuits.
//!
//! All functions are breadth-first and cover every connected component.

use std::collections::VecDeque;

use crate::graph::{Graph, VertexId};

/// Whether the graph is 2-colorable. Empty graphs are bipartite.
pub fn is_bipartite(graph: &Graph) -> bool {
    let mut side: Vec<Option<bool>> = vec![None; graph.vertex_count()];
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if side[root].is_some() {
            continue;
        }
        side[root] = Some(false);
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            let here = side[v].unwrap_or(false);
            for &(n, _) in graph.adjacent(v) {
                match side[n] {
                    None => {
                        side[n] = Some(!here);
                        queue.push_back(n);
                    }
                    Some(s) if s == here => return false,
                    Some(_) => {}
                }
            }
        }
    }
    true
}

/// Whether every vertex has degree exactly 3.
///
/// Vacuously true for the empty graph.
pub fn is_cubic(graph: &Graph) -> bool {
    graph.vertices().all(|v| graph.adjacent(v).len() == 3)
}

/// Length of the shortest cycle, or `None` for a forest.
///
/// Runs a BFS from every vertex; a non-tree edge `(v, n)` closes a cycle of
/// length at most `dist[v] + dist[n] + 1`, and the minimum over all roots is
/// exact.
pub fn girth(graph: &Graph) -> Option<usize> {
    let n = graph.vertex_count();
    let mut best: Option<usize> = None;
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        dist.iter_mut().for_each(|d| *d = None);
        parent.iter_mut().for_each(|p| *p = None);
        dist[root] = Some(0);
        queue.clear();
        queue.push_back(root);

        while let Some(v) = queue.pop_front() {
            let dv = dist[v].unwrap_or(0);
            for &(w, _) in graph.adjacent(v) {
                match dist[w] {
                    None => {
                        dist[w] = Some(dv + 1);
                        parent[w] = Some(v);
                        queue.push_back(w);
                    }
                    Some(dw) if parent[v] != Some(w) => {
                        let len = dv + dw + 1;
                        best = Some(best.map_or(len, |b| b.min(len)));
                    }
                    Some(_) => {}
                }
            }
        }
    }
    best
}

/// Vertex sets of the connected components, in order of their lowest id.
pub fn connected_components(graph: &Graph) -> Vec<Vec<VertexId>> {
    let mut seen = vec![false; graph.vertex_count()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for root in graph.vertices() {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        queue.push_back(root);
        let mut members = Vec::new();

        while let Some(v) = queue.pop_front() {
            members.push(v);
            for &(n, _) in graph.adjacent(v) {
                if !seen[n] {
                    seen[n] = true;
                    queue.push_back(n);
                }
            }
        }
        members.sort_unstable();
        components.push(members);
    }
    components
}

/// Whether the graph has at most one component. Empty graphs are connected.
pub fn is_connected(graph: &Graph) -> bool {
    connected_components(graph).len() <= 1
}
