// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Sweep Graph Generation
//
// Seedable Barabási–Albert graphs for the sweep harness, annotated with
// shared-neighbourhood strengths and initial click probabilities.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use cascade_engine::graph::SocialGraph;
use cascade_engine::probability::assign_probabilities;
use cascade_engine::types::{NodeId, ProbabilityMode};

/// Preferential-attachment graph: each of the `n - m` late nodes attaches to
/// `m` distinct existing nodes, chosen proportionally to degree via the
/// repeated-endpoints list.
pub fn barabasi_albert(rng: &mut ChaCha8Rng, n: u32, m: usize) -> SocialGraph {
    assert!(m >= 1 && (m as u32) < n, "need 1 <= m < n");

    let mut graph = SocialGraph::new();
    for id in 0..n {
        graph.add_node(id);
    }

    // Endpoint id appears once per incident edge; sampling from this list is
    // degree-proportional.
    let mut repeated: Vec<NodeId> = Vec::new();
    let mut targets: Vec<NodeId> = (0..m as u32).collect();

    for source in (m as u32)..n {
        for &t in &targets {
            graph.add_edge(source, t, 0.0);
        }
        repeated.extend(&targets);
        repeated.extend(std::iter::repeat(source).take(m));
        targets = sample_distinct(rng, &repeated, m);
    }

    graph
}

/// Draw `count` distinct ids from the repeated-endpoints list.
fn sample_distinct(rng: &mut ChaCha8Rng, repeated: &[NodeId], count: usize) -> Vec<NodeId> {
    let mut picked = HashSet::with_capacity(count);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let candidate = repeated[rng.gen_range(0..repeated.len())];
        if picked.insert(candidate) {
            out.push(candidate);
        }
    }
    out
}

/// Build one simulation-ready graph: topology, strengths, probabilities.
pub fn build_graph(seed: u64, n: u32, m: usize, mode: ProbabilityMode) -> SocialGraph {
    use rand::SeedableRng;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut graph = barabasi_albert(&mut rng, n, m);
    graph.annotate_strengths();
    assign_probabilities(&mut graph, mode, &mut rng);
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_edge_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let g = barabasi_albert(&mut rng, 200, 3);
        let total_degree: usize = g.all_nodes().iter().map(|&n| g.degree(n)).sum();
        // m edges per late node, each counted from both endpoints
        assert_eq!(total_degree, 2 * 3 * (200 - 3));
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = build_graph(9, 100, 2, ProbabilityMode::Standard);
        let b = build_graph(9, 100, 2, ProbabilityMode::Standard);
        assert_eq!(a.all_nodes(), b.all_nodes());
        for &n in a.all_nodes() {
            assert_eq!(a.neighbors(n), b.neighbors(n));
            assert_eq!(a.state(n).probability, b.state(n).probability);
        }
    }

    #[test]
    fn test_strengths_annotated_in_bounds() {
        let g = build_graph(3, 100, 2, ProbabilityMode::Standard);
        for &a in g.all_nodes() {
            for &b in g.neighbors(a) {
                let s = g.edge_strength(a, b).unwrap();
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}
