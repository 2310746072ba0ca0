// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Type Definitions

use serde::{Serialize, Deserialize};

/// Node identifier. Ids are arbitrary (need not be dense); uniqueness is the
/// caller's responsibility when building the graph.
pub type NodeId = u32;

// ─── Probability Mode ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProbabilityMode {
    /// p' = p + strength * 0.1
    Standard,
    /// p' = p + strength * 0.05 + source_degree * 0.15
    Influencer,
}

impl Default for ProbabilityMode {
    fn default() -> Self { ProbabilityMode::Standard }
}

// ─── Feed Composition ────────────────────────────────────────────────────────

/// How many strong vs. weak connections are targeted per exposure event.
/// Shortfalls spill into adjacent pools during selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Composition {
    pub strong: usize,
    pub weak: usize,
}

impl Composition {
    pub fn new(strong: usize, weak: usize) -> Self {
        Self { strong, weak }
    }

    /// Total feed size implied by the two quotas.
    pub fn feed_size(&self) -> usize {
        self.strong + self.weak
    }
}

// ─── Views Limit ─────────────────────────────────────────────────────────────

/// Upper bound on total ad views, either absolute or derived from graph size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum ViewsLimit {
    Fixed(usize),
    /// Fraction of the node count, rounded down.
    NodeFraction(f64),
}

impl ViewsLimit {
    pub fn resolve(&self, node_count: usize) -> usize {
        match *self {
            ViewsLimit::Fixed(n) => n,
            ViewsLimit::NodeFraction(f) => (node_count as f64 * f) as usize,
        }
    }
}

impl Default for ViewsLimit {
    fn default() -> Self { ViewsLimit::NodeFraction(0.975) }
}

// ─── SimConfig ───────────────────────────────────────────────────────────────

/// Per-run configuration. One value per run; never process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub composition: Composition,
    /// Strong/weak edge-strength threshold (strictly greater is strong).
    pub threshold: f64,
    /// Number of generator nodes forced seen+clicked at round 0.
    pub seed_count: usize,
    pub mode: ProbabilityMode,
    pub views_limit: ViewsLimit,
    /// PRNG seed; identical seed + inputs reproduce the run exactly.
    pub rng_seed: u64,
}

// ─── NodeState ───────────────────────────────────────────────────────────────

/// Mutable per-node simulation state. `seen`/`clicked` are monotonic over the
/// whole run; the `*_last` flags are scoped to the round just completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeState {
    pub probability: f64,
    pub seen: bool,
    pub clicked: bool,
    pub seen_last: bool,
    pub clicked_last: bool,
}

impl NodeState {
    pub fn new(probability: f64) -> Self {
        Self {
            probability,
            seen: false,
            clicked: false,
            seen_last: false,
            clicked_last: false,
        }
    }
}

impl Default for NodeState {
    fn default() -> Self { Self::new(0.0) }
}

// ─── StopReason ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StopReason {
    ViewsUpperLimit,
    NoProgress,
    IterationUpperLimit,
}

impl StopReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewsUpperLimit => "views upper limit",
            Self::NoProgress => "no progress",
            Self::IterationUpperLimit => "iteration upper limit",
        }
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── RunPhase ────────────────────────────────────────────────────────────────

/// Run state machine: Seeded → Running → Stopped(reason).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RunPhase {
    Seeded,
    Running,
    Stopped(StopReason),
}

// ─── RoundResult ─────────────────────────────────────────────────────────────

/// Snapshot produced by one round of the diffusion engine.
#[derive(Debug, Clone, Serialize)]
pub struct RoundResult {
    pub round: u32,
    /// Nodes that clicked during the previous round and drove this one.
    pub clickers: usize,
    /// Nodes newly shown the item this round.
    pub exposed: usize,
    /// Nodes that clicked this round.
    pub new_clicks: usize,
    pub total_seen: usize,
    pub total_clicked: usize,
    pub stopped: Option<StopReason>,
}

// ─── RunResult ───────────────────────────────────────────────────────────────

/// Final per-run output record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunResult {
    pub rounds: u32,
    pub clicked: usize,
    pub seen: usize,
    pub stop_reason: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_size() {
        assert_eq!(Composition::new(3, 2).feed_size(), 5);
        assert_eq!(Composition::new(0, 0).feed_size(), 0);
    }

    #[test]
    fn test_views_limit_resolution() {
        assert_eq!(ViewsLimit::Fixed(4000).resolve(4039), 4000);
        assert_eq!(ViewsLimit::NodeFraction(0.975).resolve(1000), 975);
        assert_eq!(ViewsLimit::NodeFraction(0.5).resolve(0), 0);
    }

    #[test]
    fn test_stop_reason_labels() {
        assert_eq!(StopReason::ViewsUpperLimit.as_str(), "views upper limit");
        assert_eq!(StopReason::NoProgress.as_str(), "no progress");
        assert_eq!(StopReason::IterationUpperLimit.as_str(), "iteration upper limit");
    }
}
