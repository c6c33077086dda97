//! Low-point DFS with back-edge interval interlacing.
//!
//! An iterative depth-first search over an arena of per-vertex state. Each
//! vertex gets a 1-based discovery number and a low-point; tree edges are
//! kept as per-vertex child lists and back edges as per-vertex target lists.
//!
//! After a child `w` of `v` finishes, if `low[w] < disc[v]` the back edges
//! of every pair of `v`'s subtrees are compared as intervals
//! `[disc[target], disc[source]]`. Two intervals that interleave rather than
//! nest mark the graph as non-planar. This approximates the Hopcroft–Tarjan
//! path-addition test; it is not exact.

use crate::graph::{Graph, VertexId};

/// Two DFS subtrees of `vertex` whose back edges interleave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interlacing {
    pub vertex: VertexId,
    pub branches: (VertexId, VertexId),
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    next: usize,
}

pub(crate) struct LowpointDfs<'g> {
    graph: &'g Graph,
    /// 0 = undiscovered.
    disc: Vec<usize>,
    low: Vec<usize>,
    parent: Vec<Option<VertexId>>,
    children: Vec<Vec<VertexId>>,
    back_edges: Vec<Vec<VertexId>>,
    counter: usize,
}

impl<'g> LowpointDfs<'g> {
    pub(crate) fn new(graph: &'g Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            disc: vec![0; n],
            low: vec![0; n],
            parent: vec![None; n],
            children: vec![Vec::new(); n],
            back_edges: vec![Vec::new(); n],
            counter: 0,
        }
    }

    /// Runs the DFS from every undiscovered vertex, stopping at the first
    /// interlacing found.
    pub(crate) fn find_interlacing(&mut self) -> Option<Interlacing> {
        for root in self.graph.vertices() {
            if self.disc[root] == 0 {
                if let Some(hit) = self.explore(root) {
                    return Some(hit);
                }
            }
        }
        None
    }

    fn discover(&mut self, v: VertexId, parent: Option<VertexId>) {
        self.counter += 1;
        self.disc[v] = self.counter;
        self.low[v] = self.counter;
        self.parent[v] = parent;
    }

    fn explore(&mut self, root: VertexId) -> Option<Interlacing> {
        let graph = self.graph;
        self.discover(root, None);
        let mut stack = vec![Frame {
            vertex: root,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let v = frame.vertex;
            let Some(&(w, _)) = graph.adjacent(v).get(frame.next) else {
                // v finished
                stack.pop();
                if let Some(p) = self.parent[v] {
                    self.low[p] = self.low[p].min(self.low[v]);
                    if let Some(hit) = self.check_interlacing(p, v) {
                        return Some(hit);
                    }
                }
                continue;
            };
            frame.next += 1;

            if self.disc[w] == 0 {
                self.children[v].push(w);
                self.discover(w, Some(v));
                stack.push(Frame { vertex: w, next: 0 });
            } else if self.parent[v] != Some(w) {
                self.back_edges[v].push(w);
                self.low[v] = self.low[v].min(self.disc[w]);
            }
        }
        None
    }

    /// Compares every pair of `v`'s finished subtrees once `w` is done.
    fn check_interlacing(&self, v: VertexId, w: VertexId) -> Option<Interlacing> {
        if self.low[w] >= self.disc[v] {
            return None;
        }

        let kids = &self.children[v];
        let intervals: Vec<Vec<(usize, usize)>> = kids
            .iter()
            .map(|&k| self.subtree_intervals(k))
            .collect();

        for i in 0..kids.len() {
            for j in (i + 1)..kids.len() {
                if any_interleave(&intervals[i], &intervals[j]) {
                    return Some(Interlacing {
                        vertex: v,
                        branches: (kids[i], kids[j]),
                    });
                }
            }
        }
        None
    }

    /// `(disc[target], disc[source])` for every back edge whose source lies
    /// in the subtree rooted at `root`.
    fn subtree_intervals(&self, root: VertexId) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut pending = vec![root];
        while let Some(s) = pending.pop() {
            for &t in &self.back_edges[s] {
                out.push((self.disc[t], self.disc[s]));
            }
            pending.extend_from_slice(&self.children[s]);
        }
        out
    }
}

fn any_interleave(a: &[(usize, usize)], b: &[(usize, usize)]) -> bool {
    a.iter().any(|&(d1, o1)| {
        b.iter()
            .any(|&(d2, o2)| (d1 < d2 && d2 < o1 && o1 < o2) || (d2 < d1 && d1 < o2 && o2 < o1))
    })
}
