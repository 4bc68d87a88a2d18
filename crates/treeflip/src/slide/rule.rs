use crate::geometry::{distance_sq, Point};

/// Index of the closing edge `(cycle[2], cycle[0])`.
pub const CLOSING_EDGE: usize = 2;

/// Index of the longest edge `(cycle[k], cycle[(k+1) % 3])`, first index on ties.
pub fn longest_edge(cycle: &[Point; 3]) -> usize {
    let mut best = 0usize;
    let mut best_len = distance_sq(cycle[0], cycle[1]);
    for k in 1..3 {
        let len = distance_sq(cycle[k], cycle[(k + 1) % 3]);
        if len > best_len {
            best = k;
            best_len = len;
        }
    }
    best
}

/// True iff the closing edge is not the (tie-broken) longest edge.
#[inline]
pub fn is_slideable(cycle: &[Point; 3]) -> bool {
    longest_edge(cycle) != CLOSING_EDGE
}
