// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Diffusion Engine
//
// One round = three full passes over the clicker set (probability, exposure,
// click resolution), then the stop-condition check. The pass structure is the
// round barrier: decision reads in one pass never observe another clicker's
// writes from a later pass of the same round.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::classify::classify;
use crate::error::SimError;
use crate::graph::SocialGraph;
use crate::probability::increase_probability;
use crate::selection::select_recipients;
use crate::stop;
use crate::types::{NodeId, RoundResult, RunPhase, RunResult, SimConfig};

// ─── CascadeSimulation ───────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CascadeSimulation {
    graph: SocialGraph,
    config: SimConfig,
    rng: ChaCha8Rng,
    phase: RunPhase,
    round: u32,
    views_limit: usize,
    clicked_prev: usize,
    generators: Vec<NodeId>,
}

impl CascadeSimulation {
    /// Seed a run: pick the `seed_count` highest-probability nodes as
    /// generators and force them seen+clicked. The graph must already carry
    /// initial probabilities.
    ///
    /// # Errors
    /// `EmptyGraph` if there are no nodes; `InsufficientGenerators` if
    /// `seed_count` exceeds the node count.
    pub fn new(graph: SocialGraph, config: SimConfig) -> Result<Self, SimError> {
        if graph.node_count() == 0 {
            return Err(SimError::EmptyGraph);
        }
        if config.seed_count > graph.node_count() {
            return Err(SimError::InsufficientGenerators {
                requested: config.seed_count,
                available: graph.node_count(),
            });
        }

        let views_limit = config.views_limit.resolve(graph.node_count());
        let rng = ChaCha8Rng::seed_from_u64(config.rng_seed);
        let clicked_prev = config.seed_count;

        let mut sim = Self {
            graph,
            config,
            rng,
            phase: RunPhase::Seeded,
            round: 0,
            views_limit,
            clicked_prev,
            generators: Vec::new(),
        };
        sim.seed_generators();
        Ok(sim)
    }

    /// Highest initial probability wins; ties break on node order, which is
    /// stable across the run.
    fn seed_generators(&mut self) {
        let mut ranked: Vec<NodeId> = self.graph.all_nodes().to_vec();
        ranked.sort_by(|&a, &b| {
            self.graph
                .state(b)
                .probability
                .total_cmp(&self.graph.state(a).probability)
        });
        ranked.truncate(self.config.seed_count);

        for &node in &ranked {
            let state = self.graph.state_mut(node);
            state.seen = true;
            state.clicked = true;
            state.seen_last = true;
            state.clicked_last = true;
        }
        self.generators = ranked;
    }

    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn views_limit(&self) -> usize {
        self.views_limit
    }

    pub fn generators(&self) -> &[NodeId] {
        &self.generators
    }

    /// Execute one round. A stopped simulation returns its terminal snapshot
    /// unchanged.
    pub fn round_core(&mut self) -> Result<RoundResult, SimError> {
        if let RunPhase::Stopped(reason) = self.phase {
            return Ok(RoundResult {
                round: self.round,
                clickers: 0,
                exposed: 0,
                new_clicks: 0,
                total_seen: self.graph.seen_count(),
                total_clicked: self.graph.clicked_count(),
                stopped: Some(reason),
            });
        }
        self.phase = RunPhase::Running;
        self.round += 1;

        // 1. Clickers from the previous round, in stable node order.
        let nodes: Vec<NodeId> = self.graph.all_nodes().to_vec();
        let clickers: Vec<NodeId> = nodes
            .iter()
            .copied()
            .filter(|&n| self.graph.state(n).clicked_last)
            .collect();

        // 2. Reset per-round flags.
        for &n in &nodes {
            let state = self.graph.state_mut(n);
            state.seen_last = false;
            state.clicked_last = false;
        }

        // 3. Probability pass: every neighbor of every clicker accrues
        //    probability, shown or not.
        for &clicker in &clickers {
            let degree = self.graph.degree(clicker);
            let neighbors = self.graph.neighbors(clicker).to_vec();
            for nbr in neighbors {
                let strength = self.graph.edge_strength(clicker, nbr)?;
                let raised = increase_probability(
                    self.graph.state(nbr).probability,
                    strength,
                    degree,
                    self.config.mode,
                );
                self.graph.raise_probability(nbr, raised);
            }
        }

        // 4. Exposure pass: classify and select per clicker, mark recipients.
        let mut exposed = 0usize;
        for &clicker in &clickers {
            let pools = classify(&self.graph, clicker, self.config.threshold)?;
            let recipients =
                select_recipients(&mut self.rng, self.config.composition, pools);
            for recipient in recipients {
                let state = self.graph.state_mut(recipient);
                if !state.seen {
                    exposed += 1;
                }
                state.seen = true;
                state.seen_last = true;
            }
        }

        // 5. Click resolution: one uniform draw per freshly exposed node.
        let mut new_clicks = 0usize;
        for &n in &nodes {
            if !self.graph.state(n).seen_last {
                continue;
            }
            let draw: f64 = self.rng.gen();
            if draw < self.graph.state(n).probability {
                let state = self.graph.state_mut(n);
                state.clicked = true;
                state.clicked_last = true;
                new_clicks += 1;
            }
        }

        // 6. Stop-condition check.
        let total_seen = self.graph.seen_count();
        let total_clicked = self.graph.clicked_count();
        let stopped = stop::evaluate(
            total_seen,
            self.views_limit,
            total_clicked,
            self.clicked_prev,
            self.round,
        );
        self.clicked_prev = total_clicked;
        if let Some(reason) = stopped {
            self.phase = RunPhase::Stopped(reason);
        }

        Ok(RoundResult {
            round: self.round,
            clickers: clickers.len(),
            exposed,
            new_clicks,
            total_seen,
            total_clicked,
            stopped,
        })
    }

    /// Run rounds until a terminal state is reached and report the run.
    pub fn run(&mut self) -> Result<RunResult, SimError> {
        loop {
            let round = self.round_core()?;
            if let Some(reason) = round.stopped {
                return Ok(RunResult {
                    rounds: self.round,
                    clicked: round.total_clicked,
                    seen: round.total_seen,
                    stop_reason: reason,
                });
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Composition, ProbabilityMode, ViewsLimit};

    fn config(seed_count: usize) -> SimConfig {
        SimConfig {
            composition: Composition::new(3, 2),
            threshold: 0.5,
            seed_count,
            mode: ProbabilityMode::Standard,
            views_limit: ViewsLimit::Fixed(1000),
            rng_seed: 1,
        }
    }

    fn path_graph(n: u32) -> SocialGraph {
        SocialGraph::from_edges((0..n - 1).map(|i| (i, i + 1, 1.0)))
    }

    #[test]
    fn test_empty_graph_rejected() {
        let err = CascadeSimulation::new(SocialGraph::new(), config(1)).unwrap_err();
        assert_eq!(err, SimError::EmptyGraph);
    }

    #[test]
    fn test_insufficient_generators_rejected() {
        let err = CascadeSimulation::new(path_graph(3), config(5)).unwrap_err();
        assert_eq!(
            err,
            SimError::InsufficientGenerators { requested: 5, available: 3 }
        );
    }

    #[test]
    fn test_generators_are_top_probability_nodes() {
        let mut g = path_graph(5);
        g.state_mut(3).probability = 0.9;
        g.state_mut(1).probability = 0.8;
        let sim = CascadeSimulation::new(g, config(2)).unwrap();
        assert_eq!(sim.generators(), &[3, 1]);
        for &n in sim.generators() {
            let s = sim.graph().state(n);
            assert!(s.seen && s.clicked && s.seen_last && s.clicked_last);
        }
    }

    #[test]
    fn test_generator_ties_break_on_node_order() {
        let g = path_graph(5); // all probabilities equal (0.0)
        let sim = CascadeSimulation::new(g, config(2)).unwrap();
        assert_eq!(sim.generators(), &[0, 1]);
    }

    #[test]
    fn test_phase_transitions() {
        let mut g = path_graph(4);
        g.state_mut(0).probability = 0.5;
        let mut sim = CascadeSimulation::new(g, config(1)).unwrap();
        assert_eq!(sim.phase(), RunPhase::Seeded);
        sim.round_core().unwrap();
        // Either still running or already stopped, never back to Seeded
        assert_ne!(sim.phase(), RunPhase::Seeded);
        let result = sim.run().unwrap();
        assert_eq!(sim.phase(), RunPhase::Stopped(result.stop_reason));
    }

    #[test]
    fn test_stopped_simulation_is_idempotent() {
        let mut sim = CascadeSimulation::new(path_graph(4), config(1)).unwrap();
        let result = sim.run().unwrap();
        let round = sim.round_core().unwrap();
        assert_eq!(round.stopped, Some(result.stop_reason));
        assert_eq!(round.total_seen, result.seen);
        assert_eq!(sim.round(), result.rounds, "round counter must not advance");
    }

    #[test]
    fn test_round_flags_reset_each_round() {
        let mut g = path_graph(6);
        g.state_mut(2).probability = 0.9;
        let mut sim = CascadeSimulation::new(g, config(1)).unwrap();
        sim.round_core().unwrap();
        // Generator flags were consumed by round 1; a seen node is never
        // re-exposed, so its per-round flags stay down.
        let s = sim.graph().state(2);
        assert!(s.seen && s.clicked);
        assert!(!s.seen_last && !s.clicked_last);
        // seen_last may only be true for nodes exposed this round
        for &n in sim.graph().all_nodes() {
            if sim.graph().state(n).seen_last {
                assert!(sim.graph().state(n).seen);
            }
        }
    }
}
