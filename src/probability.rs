// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Probability Model

use rand::Rng;

use crate::graph::SocialGraph;
use crate::types::ProbabilityMode;

/// Mean of the exponential base-case probability distribution.
pub const BASE_PROBABILITY_MEAN: f64 = 0.03;

/// Scale applied to the normalized degree in influencer initialization.
pub const INFLUENCER_PROBABILITY_SCALE: f64 = 0.7;

/// New click probability of a neighbor after one exposure event from a
/// clicking node. Pure; called once per (clicker, neighbor) pair per round,
/// whether or not the neighbor ends up in the recipient set.
pub fn increase_probability(
    current: f64,
    edge_strength: f64,
    source_degree: usize,
    mode: ProbabilityMode,
) -> f64 {
    match mode {
        ProbabilityMode::Standard => current + edge_strength * 0.1,
        ProbabilityMode::Influencer => {
            current + edge_strength * 0.05 + source_degree as f64 * 0.15
        }
    }
}

/// Draw from an exponential distribution with the given mean (inverse CDF).
pub fn exponential_draw<R: Rng>(rng: &mut R, mean: f64) -> f64 {
    let u: f64 = rng.gen(); // [0, 1)
    -mean * (1.0 - u).ln()
}

/// Degree-scaled base probability for the influencer model.
pub fn degree_probability(degree: usize, max_degree: usize) -> f64 {
    if max_degree == 0 {
        0.0
    } else {
        degree as f64 / max_degree as f64 * INFLUENCER_PROBABILITY_SCALE
    }
}

/// Assign an initial click probability to every node.
///
/// Standard mode draws from an exponential distribution with mean 0.03;
/// influencer mode scales each node's degree against the graph's maximum.
/// Draws follow the graph's stable node order, so a seeded RNG reproduces
/// the same assignment.
pub fn assign_probabilities<R: Rng>(
    graph: &mut SocialGraph,
    mode: ProbabilityMode,
    rng: &mut R,
) {
    let nodes: Vec<_> = graph.all_nodes().to_vec();
    match mode {
        ProbabilityMode::Standard => {
            for node in nodes {
                let p = exponential_draw(rng, BASE_PROBABILITY_MEAN);
                graph.state_mut(node).probability = p;
            }
        }
        ProbabilityMode::Influencer => {
            let max_degree = nodes.iter().map(|&n| graph.degree(n)).max().unwrap_or(0);
            for node in nodes {
                let p = degree_probability(graph.degree(node), max_degree);
                graph.state_mut(node).probability = p;
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
