// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade")
//
// Models how an ad spreads through a social graph over discrete rounds,
// driven by per-node click probabilities, per-edge connection strength and a
// configurable feed-composition policy. Graph construction beyond the
// in-memory store, persistence and cross-run aggregation live outside this
// crate (the sweep binary carries its own harness for those).

pub mod types;
pub mod error;
pub mod graph;
pub mod probability;
pub mod classify;
pub mod selection;
pub mod stop;
pub mod simulation;

pub use error::SimError;
pub use graph::SocialGraph;
pub use simulation::CascadeSimulation;
pub use types::*;
