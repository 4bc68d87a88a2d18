//! Triangle-improvement slides: rule, finder and rewire step.
//!
//! A length-2 path `(a, i, b)` is read as the cyclic triangle with edges
//! `0 = (a, i)`, `1 = (i, b)`, `2 = (b, a)`. It is slideable when the closing
//! edge 2 is not the longest; the slide drops the longest path edge and adds
//! `a - b`.
//!
//! Tie-break
//! - The longest edge is the *first* index attaining the maximum squared
//!   length in the order 0, 1, 2. A closing edge that only ties a path edge is
//!   therefore never the longest, and such a move counts as slideable. On an
//!   exact tie the slide leaves the total length unchanged.

mod finder;
mod rewire;
mod rule;

pub use finder::{slideable_two_paths, triangle};
pub use rewire::{apply_slide, Slide};
pub use rule::{is_slideable, longest_edge, CLOSING_EDGE};

#[cfg(test)]
mod tests;
