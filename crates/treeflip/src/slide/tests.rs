use super::*;
use crate::error::{GraphError, SimError};
use crate::geometry::{distance_sq, total_length, Point};
use crate::graph::{Graph, TwoPath};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

fn unit_square() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ]
}

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| vector![rng.gen::<f64>(), rng.gen::<f64>()]).collect()
}

#[test]
fn unit_square_has_no_slideable_paths() {
    let pts = unit_square();
    let g = Graph::path(4).unwrap();
    assert_eq!(longest_edge(&triangle(&pts, TwoPath::new(0, 1, 2))), 2);
    assert_eq!(longest_edge(&triangle(&pts, TwoPath::new(1, 2, 3))), 2);
    assert!(slideable_two_paths(&g, &pts).is_empty());
}

#[test]
fn collinear_closing_edge_dominates() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![3.0, 0.0]];
    let g = Graph::path(3).unwrap();
    assert!(!is_slideable(&[pts[0], pts[1], pts[2]]));
    assert!(slideable_two_paths(&g, &pts).is_empty());
    let mut g2 = g.clone();
    let mv = TwoPath::new(0, 1, 2);
    assert_eq!(
        apply_slide(&mut g2, &pts, mv),
        Err(SimError::NotSlideable { mv })
    );
    assert_eq!(g2, g);
}

#[test]
fn long_first_edge_is_replaced() {
    // 0 and 1 far apart, 2 sits between them
    let pts = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 0.0]];
    let mut g = Graph::path(3).unwrap();
    let mv = TwoPath::new(0, 1, 2);
    assert_eq!(slideable_two_paths(&g, &pts), vec![mv]);
    let before = total_length(&g, &pts);
    let s = apply_slide(&mut g, &pts, mv).unwrap();
    assert_eq!(s.removed, (0, 1));
    assert_eq!(s.added, (0, 2));
    assert!(g.has_edge(0, 2) && g.has_edge(1, 2) && !g.has_edge(0, 1));
    assert!((before - 3.0).abs() < 1e-12);
    assert!((total_length(&g, &pts) - 2.0).abs() < 1e-12);
    assert!(slideable_two_paths(&g, &pts).is_empty());
}

#[test]
fn long_second_edge_is_replaced() {
    let pts = vec![vector![1.0, 0.0], vector![0.0, 0.0], vector![2.0, 0.0]];
    let mut g = Graph::path(3).unwrap();
    let s = apply_slide(&mut g, &pts, TwoPath::new(0, 1, 2)).unwrap();
    assert_eq!(s.removed, (1, 2));
    assert_eq!(s.added, (0, 2));
    assert_eq!(g.edge_count(), 2);
    assert!(g.is_tree());
}

#[test]
fn closing_edge_tie_counts_as_slideable() {
    // |ai|² = 10, |ib|² = 25, |ba|² = 25: edge 1 is found first
    let tri = [vector![0.0, 0.0], vector![3.0, 1.0], vector![0.0, 5.0]];
    assert_eq!(distance_sq(tri[1], tri[2]), distance_sq(tri[2], tri[0]));
    assert_eq!(longest_edge(&tri), 1);
    assert!(is_slideable(&tri));

    let mut g = Graph::path(3).unwrap();
    let before = total_length(&g, &tri);
    let s = apply_slide(&mut g, &tri, TwoPath::new(0, 1, 2)).unwrap();
    assert_eq!(s.removed, (1, 2));
    assert!((total_length(&g, &tri) - before).abs() < 1e-12);
    // the reverse slide through vertex 0 is tied the same way
    let back = TwoPath::new(1, 0, 2);
    assert_eq!(slideable_two_paths(&g, &tri), vec![back]);
    assert_eq!(apply_slide(&mut g, &tri, back).unwrap().removed, (0, 2));
    assert_eq!(g, Graph::path(3).unwrap());
}

#[test]
fn path_edges_tie_picks_first() {
    // isosceles with apex i and a short base
    let tri = [vector![0.0, 0.0], vector![0.5, 3.0], vector![1.0, 0.0]];
    assert_eq!(longest_edge(&tri), 0);
}

#[test]
fn existing_closing_edge_is_refused() {
    let pts = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 0.0]];
    let mut g = Graph::path(3).unwrap();
    g.add_edge(0, 2).unwrap();
    let snapshot = g.clone();
    let mv = TwoPath::new(0, 1, 2);
    assert_eq!(
        apply_slide(&mut g, &pts, mv),
        Err(SimError::Rewire {
            mv,
            source: GraphError::DuplicateEdge { u: 0, v: 2 }
        })
    );
    assert_eq!(g, snapshot);
}

#[test]
fn finder_is_idempotent() {
    let pts = random_points(60, 7);
    let g = Graph::path(60).unwrap();
    let first = slideable_two_paths(&g, &pts);
    let second = slideable_two_paths(&g, &pts);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

fn coord() -> impl Strategy<Value = f64> {
    0.0f64..1.0
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| vector![x, y])
}

proptest! {
    #[test]
    fn longest_edge_is_maximal_and_deterministic(a in point(), b in point(), c in point()) {
        let tri = [a, b, c];
        let k = longest_edge(&tri);
        let lens: Vec<f64> = (0..3).map(|e| distance_sq(tri[e], tri[(e + 1) % 3])).collect();
        prop_assert!(lens.iter().all(|&l| lens[k] >= l));
        prop_assert!(lens[..k].iter().all(|&l| l < lens[k]));
        prop_assert_eq!(longest_edge(&tri), k);
    }

    #[test]
    fn slides_preserve_tree_and_never_grow(
        pts in prop::collection::vec(point(), 1..40),
        seed in any::<u64>(),
    ) {
        let n = pts.len();
        let mut g = Graph::path(n).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut len = total_length(&g, &pts);
        let mut converged = false;
        // every slide in general position strictly shortens the tree
        for _ in 0..100_000 {
            let moves = slideable_two_paths(&g, &pts);
            let Some(&mv) = moves.choose(&mut rng) else {
                converged = true;
                break;
            };
            apply_slide(&mut g, &pts, mv).unwrap();
            let next = total_length(&g, &pts);
            prop_assert!(next <= len + 1e-9);
            prop_assert_eq!(g.vertex_count(), n);
            prop_assert_eq!(g.edge_count(), n - 1);
            prop_assert!(g.is_tree());
            len = next;
        }
        prop_assert!(converged);
        // every remaining two-path has its closing edge as the longest
        for mv in g.two_paths() {
            prop_assert_eq!(longest_edge(&triangle(&pts, mv)), CLOSING_EDGE);
        }
    }
}
