// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Errors

use crate::types::NodeId;

/// Fatal simulation errors. Every variant is a configuration or caller bug,
/// not a transient fault; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// Strength lookup on a non-adjacent pair.
    #[error("nodes {0} and {1} are not adjacent")]
    NotAnEdge(NodeId, NodeId),

    /// No nodes to seed; aborts before round 1.
    #[error("graph has no nodes to seed")]
    EmptyGraph,

    /// Requested generator count exceeds the node count.
    #[error("requested {requested} generators but graph has {available} nodes")]
    InsufficientGenerators { requested: usize, available: usize },
}
