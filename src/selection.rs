// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Feed Composition Selector
//
// Deterministic given the injected RNG: quota fill strong→weak, then
// shortfall backfill through strong remainder → weak remainder → random pool.

use std::collections::HashSet;

use rand::Rng;

use crate::classify::NeighborPools;
use crate::types::{Composition, NodeId};

/// Take up to `quota` elements uniformly at random without replacement.
/// Returns `(picked, remainder)`; takes the whole pool when it is smaller
/// than or equal to the quota.
fn draw_up_to<R: Rng>(
    rng: &mut R,
    pool: Vec<NodeId>,
    quota: usize,
) -> (Vec<NodeId>, Vec<NodeId>) {
    if quota == 0 {
        return (Vec::new(), pool);
    }
    if pool.len() <= quota {
        return (pool, Vec::new());
    }
    let chosen: HashSet<usize> = rand::seq::index::sample(rng, pool.len(), quota)
        .iter()
        .collect();
    let mut picked = Vec::with_capacity(quota);
    let mut remainder = Vec::with_capacity(pool.len() - quota);
    for (i, node) in pool.into_iter().enumerate() {
        if chosen.contains(&i) {
            picked.push(node);
        } else {
            remainder.push(node);
        }
    }
    (picked, remainder)
}

/// Pick the recipient set for one clicking node.
///
/// Fill law: `|recipients| == min(feed_size, |strong ∪ weak ∪ other|)` —
/// strictly fewer than the feed size only when the three pools together
/// cannot fill it. No node appears twice (the pools are disjoint).
pub fn select_recipients<R: Rng>(
    rng: &mut R,
    composition: Composition,
    pools: NeighborPools,
) -> Vec<NodeId> {
    let NeighborPools { strong, weak, other } = pools;

    let (mut recipients, strong_remainder) = draw_up_to(rng, strong, composition.strong);
    let mut leftover = composition.strong - recipients.len();

    let (weak_picked, weak_remainder) = draw_up_to(rng, weak, composition.weak);
    leftover += composition.weak - weak_picked.len();
    recipients.extend(weak_picked);

    // Backfill precedence: unused strong, unused weak, then the random pool.
    for pool in [strong_remainder, weak_remainder, other] {
        if leftover == 0 {
            break;
        }
        let (fill, _) = draw_up_to(rng, pool, leftover);
        leftover -= fill.len();
        recipients.extend(fill);
    }

    recipients
}

// ─── Tests ───────────────────────────────────────────────────────────────────
