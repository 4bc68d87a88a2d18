use std::collections::BTreeSet;

use crate::error::GraphError;

use super::types::TwoPath;

/// Adjacency-set graph. Invariant: `v ∈ adj[u]` iff `u ∈ adj[v]`, no self loops.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<BTreeSet<usize>>,
}

impl Graph {
    /// Simple path `0 - 1 - … - (n-1)`. For `n = 1` the single vertex is isolated.
    pub fn path(n: usize) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::EmptyPath);
        }
        let adj = (0..n)
            .map(|i| {
                let mut nb = BTreeSet::new();
                if i > 0 {
                    nb.insert(i - 1);
                }
                if i + 1 < n {
                    nb.insert(i + 1);
                }
                nb
            })
            .collect();
        Ok(Self { adj })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    /// Neighbours of `v` in ascending order.
    pub fn neighbours(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[v].iter().copied()
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj.get(u).is_some_and(|nb| nb.contains(&v))
    }

    /// Every edge once as `(u, v)` with `u < v`, ascending.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, nb)| nb.range(u + 1..).map(move |&v| (u, v)))
    }

    /// Every length-2 path `a - i - b` with `a < b`, ordered by `i` then `(a, b)`.
    pub fn two_paths(&self) -> impl Iterator<Item = TwoPath> + '_ {
        self.adj.iter().enumerate().flat_map(|(i, nb)| {
            nb.iter().flat_map(move |&a| {
                nb.range(a + 1..).map(move |&b| TwoPath::new(a, i, b))
            })
        })
    }

    /// Delete the edge `u - v`.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_pair(u, v)?;
        if !self.has_edge(u, v) {
            return Err(GraphError::MissingEdge { u, v });
        }
        self.adj[u].remove(&v);
        self.adj[v].remove(&u);
        Ok(())
    }

    /// Insert the edge `u - v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_pair(u, v)?;
        if self.has_edge(u, v) {
            return Err(GraphError::DuplicateEdge { u, v });
        }
        self.adj[u].insert(v);
        self.adj[v].insert(u);
        Ok(())
    }

    /// Connected with exactly `n - 1` edges.
    pub fn is_tree(&self) -> bool {
        let n = self.vertex_count();
        if n == 0 || self.edge_count() != n - 1 {
            return false;
        }
        let mut seen = vec![false; n];
        let mut stack = vec![0usize];
        seen[0] = true;
        let mut reached = 1usize;
        while let Some(u) = stack.pop() {
            for &v in &self.adj[u] {
                if !seen[v] {
                    seen[v] = true;
                    reached += 1;
                    stack.push(v);
                }
            }
        }
        reached == n
    }

    fn check_pair(&self, u: usize, v: usize) -> Result<(), GraphError> {
        let len = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= len {
                return Err(GraphError::VertexOutOfRange { vertex, len });
            }
        }
        if u == v {
            return Err(GraphError::SelfLoop { vertex: u });
        }
        Ok(())
    }
}
