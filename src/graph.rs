// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Graph Store
//
// Static undirected weighted graph plus per-node mutable simulation state.
// Edges are immutable once built; only node state changes during a run.

use std::collections::{HashMap, HashSet};

use crate::error::SimError;
use crate::types::{NodeId, NodeState};

/// Normalized edge key: endpoints in ascending order.
fn edge_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}

// ─── SocialGraph ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct SocialGraph {
    /// Node ids in insertion order. Stable across the run; the engine's
    /// iteration order everywhere.
    order: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<NodeId>>,
    states: Vec<NodeState>,
    strengths: HashMap<(NodeId, NodeId), f64>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            states: Vec::new(),
            strengths: HashMap::new(),
        }
    }

    /// Build a graph from `(a, b, strength)` triples.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut graph = Self::new();
        for (a, b, strength) in edges {
            graph.add_edge(a, b, strength);
        }
        graph
    }

    /// Insert a node with default state. No-op if the id already exists.
    pub fn add_node(&mut self, id: NodeId) {
        if !self.index.contains_key(&id) {
            self.index.insert(id, self.order.len());
            self.order.push(id);
            self.adjacency.push(Vec::new());
            self.states.push(NodeState::default());
        }
    }

    /// Insert an undirected edge. Missing endpoints are created with default
    /// state; self-loops are rejected silently; a duplicate edge only updates
    /// the stored strength.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, strength: f64) {
        if a == b {
            return;
        }
        self.add_node(a);
        self.add_node(b);
        if self.strengths.insert(edge_key(a, b), strength).is_none() {
            let ia = self.index[&a];
            self.adjacency[ia].push(b);
            let ib = self.index[&b];
            self.adjacency[ib].push(a);
        }
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// All node ids, in stable insertion order.
    pub fn all_nodes(&self) -> &[NodeId] {
        &self.order
    }

    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[self.index[&node]]
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.strengths.contains_key(&edge_key(a, b))
    }

    /// Strength of the edge between `a` and `b`.
    ///
    /// # Errors
    /// `NotAnEdge` if the nodes are not adjacent — a caller bug, not a
    /// recoverable condition.
    pub fn edge_strength(&self, a: NodeId, b: NodeId) -> Result<f64, SimError> {
        self.strengths
            .get(&edge_key(a, b))
            .copied()
            .ok_or(SimError::NotAnEdge(a, b))
    }

    /// Immutable state handle. Panics on an unknown id.
    pub fn state(&self, node: NodeId) -> &NodeState {
        &self.states[self.index[&node]]
    }

    /// Mutable state handle. Panics on an unknown id.
    pub fn state_mut(&mut self, node: NodeId) -> &mut NodeState {
        let i = self.index[&node];
        &mut self.states[i]
    }

    /// Raise a node's click probability. Lower values are ignored: the
    /// probability of a node never decreases over a run.
    pub fn raise_probability(&mut self, node: NodeId, probability: f64) {
        let state = self.state_mut(node);
        if probability > state.probability {
            state.probability = probability;
        }
    }

    pub fn seen_count(&self) -> usize {
        self.states.iter().filter(|s| s.seen).count()
    }

    pub fn clicked_count(&self) -> usize {
        self.states.iter().filter(|s| s.clicked).count()
    }

    /// Recompute every edge strength as the shared-neighbourhood overlap of
    /// its endpoints: |N(a) ∩ N(b)| / min(|N(a)|, |N(b)|), bounded to [0, 1].
    pub fn annotate_strengths(&mut self) {
        let neighbor_sets: Vec<HashSet<NodeId>> = self
            .adjacency
            .iter()
            .map(|nbrs| nbrs.iter().copied().collect())
            .collect();

        let keys: Vec<(NodeId, NodeId)> = self.strengths.keys().copied().collect();
        for (a, b) in keys {
            let sa = &neighbor_sets[self.index[&a]];
            let sb = &neighbor_sets[self.index[&b]];
            let shared = sa.intersection(sb).count();
            let denom = sa.len().min(sb.len());
            // denom >= 1: both endpoints are adjacent to each other
            let strength = shared as f64 / denom as f64;
            self.strengths.insert((a, b), strength);
        }
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
