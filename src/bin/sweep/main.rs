// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Composition Sweep Runner
//
// Sweeps feed compositions and generator counts over seedable
// preferential-attachment graphs and aggregates per-cell statistics.
//
// Usage:
//   cargo run --release --bin sweep                      # full grid, defaults
//   cargo run --release --bin sweep -- --graphs 5        # fewer graphs/cell
//   cargo run --release --bin sweep -- --nodes 2000 --edges 10
//   cargo run --release --bin sweep -- --influencers     # influencer model
//   cargo run --release --bin sweep -- --seed 42 --out report.json

mod generate;
mod report;

use std::path::PathBuf;

use cascade_engine::types::{
    Composition, ProbabilityMode, SimConfig, ViewsLimit,
};
use cascade_engine::CascadeSimulation;

use generate::build_graph;
use report::{SweepRecord, SweepReport};

/// Feed compositions under trial, (strong, weak) per 10-slot feed.
const COMPOSITIONS: [(usize, usize); 7] = [
    (10, 0),
    (9, 1),
    (8, 2),
    (7, 3),
    (6, 4),
    (5, 5),
    (4, 6),
];

// ─── CLI Parsing ────────────────────────────────────────────────────────────

struct CliArgs {
    graphs: usize,
    nodes: u32,
    edges: usize,
    threshold: f64,
    seed: u64,
    influencers: bool,
    seeds_from: usize,
    seeds_to: usize,
    seeds_step: usize,
    out: PathBuf,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        graphs: 20,
        nodes: 1000,
        edges: 5,
        threshold: 0.5,
        seed: 123,
        influencers: false,
        seeds_from: 10,
        seeds_to: 40,
        seeds_step: 10,
        out: PathBuf::from("sweep_report.json"),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--graphs" => {
                i += 1;
                if i < args.len() {
                    cli.graphs = args[i].parse().unwrap_or(cli.graphs);
                }
            }
            "--nodes" => {
                i += 1;
                if i < args.len() {
                    cli.nodes = args[i].parse().unwrap_or(cli.nodes);
                }
            }
            "--edges" => {
                i += 1;
                if i < args.len() {
                    cli.edges = args[i].parse().unwrap_or(cli.edges);
                }
            }
            "--threshold" => {
                i += 1;
                if i < args.len() {
                    cli.threshold = args[i].parse().unwrap_or(cli.threshold);
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    cli.seed = args[i].parse().unwrap_or(cli.seed);
                }
            }
            "--seeds" => {
                // from:to:step
                i += 1;
                if i < args.len() {
                    let parts: Vec<usize> = args[i]
                        .split(':')
                        .filter_map(|p| p.parse().ok())
                        .collect();
                    if parts.len() == 3 {
                        cli.seeds_from = parts[0];
                        cli.seeds_to = parts[1];
                        cli.seeds_step = parts[2].max(1);
                    }
                }
            }
            "--influencers" => {
                cli.influencers = true;
            }
            "--out" => {
                i += 1;
                if i < args.len() {
                    cli.out = PathBuf::from(&args[i]);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    cli
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() {
    let cli = parse_args();
    let mode = if cli.influencers {
        ProbabilityMode::Influencer
    } else {
        ProbabilityMode::Standard
    };

    println!(
        "Sweep: {} graphs x {} nodes (m={}), threshold {}, mode {:?}, base seed {}",
        cli.graphs, cli.nodes, cli.edges, cli.threshold, mode, cli.seed
    );

    let mut records = Vec::new();

    for &(strong, weak) in &COMPOSITIONS {
        let composition = Composition::new(strong, weak);
        println!("Composition ({}, {}):", strong, weak);

        let mut items = cli.seeds_from;
        while items <= cli.seeds_to {
            let mut runs = Vec::with_capacity(cli.graphs);
            for g in 0..cli.graphs {
                let graph_seed = cli.seed + g as u64;
                let graph = build_graph(graph_seed, cli.nodes, cli.edges, mode);
                let config = SimConfig {
                    composition,
                    threshold: cli.threshold,
                    seed_count: items,
                    mode,
                    views_limit: ViewsLimit::NodeFraction(0.975),
                    rng_seed: graph_seed,
                };
                let result = CascadeSimulation::new(graph, config)
                    .and_then(|mut sim| sim.run());
                match result {
                    Ok(run) => runs.push(run),
                    Err(e) => {
                        eprintln!("  run failed (graph {}, items {}): {}", g, items, e);
                    }
                }
            }

            let record = SweepRecord::aggregate(composition, items, &runs);
            println!(
                "  items {:>3}: rounds {:>6.2} ± {:>5.2}  clicks {:>8.1}  views {:>8.1}  [v:{} n:{} i:{}]",
                items,
                record.rounds.mean,
                record.rounds.std_dev,
                record.clicks.mean,
                record.views.mean,
                record.stop_reasons.views_upper_limit,
                record.stop_reasons.no_progress,
                record.stop_reasons.iteration_upper_limit,
            );
            records.push(record);

            items += cli.seeds_step;
        }
    }

    let sweep_report = SweepReport {
        nodes: cli.nodes,
        edges_per_node: cli.edges,
        graphs: cli.graphs,
        threshold: cli.threshold,
        mode: format!("{:?}", mode),
        base_seed: cli.seed,
        records,
    };

    match sweep_report.write_json(&cli.out) {
        Ok(()) => println!("Report written to {}", cli.out.display()),
        Err(e) => eprintln!("Failed to write report: {}", e),
    }
}
