use std::fmt;

/// Length-2 path `a - i - b` through the middle vertex `i`.
///
/// Stale as soon as the graph it was enumerated from is mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TwoPath {
    pub a: usize,
    pub i: usize,
    pub b: usize,
}

impl TwoPath {
    #[inline]
    pub fn new(a: usize, i: usize, b: usize) -> Self {
        Self { a, i, b }
    }
    /// Vertices in cyclic triangle order `(a, i, b)`.
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.a, self.i, self.b]
    }
}

impl fmt::Display for TwoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{}-{})", self.a, self.i, self.b)
    }
}
