//! Error types for graph mutation and the convergence loop.
//!
//! Every variant is an invariant violation: the move set never asks for a
//! missing edge or a duplicate one, so seeing any of these means the finder and
//! the rewire step disagree about the current graph.

use std::fmt;

use crate::graph::TwoPath;

/// Checked adjacency mutation failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// A path needs at least one vertex.
    EmptyPath,
    VertexOutOfRange { vertex: usize, len: usize },
    SelfLoop { vertex: usize },
    MissingEdge { u: usize, v: usize },
    DuplicateEdge { u: usize, v: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "a path needs at least one vertex"),
            Self::VertexOutOfRange { vertex, len } => {
                write!(f, "vertex {vertex} out of range for graph on {len} vertices")
            }
            Self::SelfLoop { vertex } => write!(f, "self loop at vertex {vertex}"),
            Self::MissingEdge { u, v } => write!(f, "edge {u}-{v} is not present"),
            Self::DuplicateEdge { u, v } => write!(f, "edge {u}-{v} is already present"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Failures surfaced by the rewire step and the convergence loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SimError {
    /// The point set must name at least one vertex.
    NoPoints,
    /// The move's closing edge is already the longest; sliding would not improve.
    NotSlideable { mv: TwoPath },
    /// Graph mutation failed while applying `mv`.
    Rewire { mv: TwoPath, source: GraphError },
}

impl SimError {
    pub(crate) fn rewire(mv: TwoPath, source: GraphError) -> Self {
        Self::Rewire { mv, source }
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPoints => write!(f, "cannot simulate on an empty point set"),
            Self::NotSlideable { mv } => write!(f, "move {mv} is not slideable"),
            Self::Rewire { mv, source } => write!(f, "applying move {mv}: {source}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rewire { source, .. } => Some(source),
            _ => None,
        }
    }
}
