// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Neighbor Classifier

use std::collections::HashSet;

use crate::error::SimError;
use crate::graph::SocialGraph;
use crate::types::NodeId;

/// A clicker's candidate pools, partitioned by connection strength. All three
/// pools exclude nodes that have already seen the item, so any node drawn
/// from them transitions `seen` false→true exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborPools {
    /// Unseen neighbors with edge strength strictly above the threshold.
    pub strong: Vec<NodeId>,
    /// Unseen neighbors at or below the threshold.
    pub weak: Vec<NodeId>,
    /// Unseen non-neighbors (the random pool).
    pub other: Vec<NodeId>,
}

/// Partition the graph around `node` by the strong/weak threshold. Pool
/// contents follow the graph store's stable order; any shuffling is the
/// selector's job.
pub fn classify(
    graph: &SocialGraph,
    node: NodeId,
    threshold: f64,
) -> Result<NeighborPools, SimError> {
    let mut strong = Vec::new();
    let mut weak = Vec::new();

    let neighbor_set: HashSet<NodeId> = graph.neighbors(node).iter().copied().collect();
    for &nbr in graph.neighbors(node) {
        if graph.state(nbr).seen {
            continue;
        }
        if graph.edge_strength(node, nbr)? > threshold {
            strong.push(nbr);
        } else {
            weak.push(nbr);
        }
    }

    let other: Vec<NodeId> = graph
        .all_nodes()
        .iter()
        .copied()
        .filter(|&n| n != node && !neighbor_set.contains(&n) && !graph.state(n).seen)
        .collect();

    Ok(NeighborPools { strong, weak, other })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
