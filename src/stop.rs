// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Stop Conditions

use crate::types::StopReason;

/// Hard cap on rounds per run. Reaching it is a designed terminal state, not
/// an error.
pub const MAX_ROUNDS: u32 = 100;

/// Evaluate the terminal conditions for the round just completed, in priority
/// order: views limit, then no progress, then the round cap. First match wins.
pub fn evaluate(
    total_seen: usize,
    views_limit: usize,
    total_clicked: usize,
    clicked_prev: usize,
    round: u32,
) -> Option<StopReason> {
    if total_seen >= views_limit {
        Some(StopReason::ViewsUpperLimit)
    } else if total_clicked == clicked_prev {
        Some(StopReason::NoProgress)
    } else if round >= MAX_ROUNDS {
        Some(StopReason::IterationUpperLimit)
    } else {
        None
    }
}
