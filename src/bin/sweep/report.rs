// Copyright 2026 Cascade Analytics. All rights reserved.
// Newsfeed Diffusion Simulation Suite ("Cascade") - Sweep Report Types

use serde::Serialize;

use cascade_engine::types::{Composition, RunResult, StopReason};

// ─── Statistics (per-metric aggregation across graphs) ──────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        }
        let mean = samples.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let stderr = std_dev / (n as f64).sqrt();
        let z = 1.96; // 95% CI
        Self {
            mean,
            std_dev,
            ci_lower: mean - z * stderr,
            ci_upper: mean + z * stderr,
            min: samples.iter().cloned().fold(f64::INFINITY, f64::min),
            max: samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            n,
        }
    }
}

// ─── Stop-reason histogram ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize)]
pub struct StopHistogram {
    pub views_upper_limit: u32,
    pub no_progress: u32,
    pub iteration_upper_limit: u32,
}

impl StopHistogram {
    pub fn record(&mut self, reason: StopReason) {
        match reason {
            StopReason::ViewsUpperLimit => self.views_upper_limit += 1,
            StopReason::NoProgress => self.no_progress += 1,
            StopReason::IterationUpperLimit => self.iteration_upper_limit += 1,
        }
    }
}

// ─── Sweep records ──────────────────────────────────────────────────────────

/// One (composition, generator count) cell aggregated over all graphs.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRecord {
    pub composition: Composition,
    pub seed_count: usize,
    pub rounds: Stats,
    pub clicks: Stats,
    pub views: Stats,
    pub stop_reasons: StopHistogram,
}

impl SweepRecord {
    pub fn aggregate(
        composition: Composition,
        seed_count: usize,
        runs: &[RunResult],
    ) -> Self {
        let rounds: Vec<f64> = runs.iter().map(|r| r.rounds as f64).collect();
        let clicks: Vec<f64> = runs.iter().map(|r| r.clicked as f64).collect();
        let views: Vec<f64> = runs.iter().map(|r| r.seen as f64).collect();
        let mut stop_reasons = StopHistogram::default();
        for run in runs {
            stop_reasons.record(run.stop_reason);
        }
        Self {
            composition,
            seed_count,
            rounds: Stats::from_samples(&rounds),
            clicks: Stats::from_samples(&clicks),
            views: Stats::from_samples(&views),
            stop_reasons,
        }
    }
}

/// Full sweep output, serialized as JSON for downstream analysis.
#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub nodes: u32,
    pub edges_per_node: usize,
    pub graphs: usize,
    pub threshold: f64,
    pub mode: String,
    pub base_seed: u64,
    pub records: Vec<SweepRecord>,
}

impl SweepReport {
    pub fn write_json(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_from_samples() {
        let s = Stats::from_samples(&[1.0, 2.0, 3.0]);
        assert!((s.mean - 2.0).abs() < 1e-12);
        assert!((s.std_dev - 1.0).abs() < 1e-12);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 3.0);
        assert_eq!(s.n, 3);
    }

    #[test]
    fn test_stats_empty() {
        let s = Stats::from_samples(&[]);
        assert_eq!(s.n, 0);
        assert_eq!(s.mean, 0.0);
    }

    #[test]
    fn test_histogram() {
        let mut h = StopHistogram::default();
        h.record(StopReason::NoProgress);
        h.record(StopReason::NoProgress);
        h.record(StopReason::ViewsUpperLimit);
        assert_eq!(h.no_progress, 2);
        assert_eq!(h.views_upper_limit, 1);
        assert_eq!(h.iteration_upper_limit, 0);
    }

    #[test]
    fn test_aggregate() {
        let runs = vec![
            RunResult { rounds: 4, clicked: 10, seen: 100, stop_reason: StopReason::NoProgress },
            RunResult { rounds: 6, clicked: 20, seen: 200, stop_reason: StopReason::ViewsUpperLimit },
        ];
        let rec = SweepRecord::aggregate(Composition::new(6, 4), 10, &runs);
        assert!((rec.rounds.mean - 5.0).abs() < 1e-12);
        assert!((rec.clicks.mean - 15.0).abs() < 1e-12);
        assert_eq!(rec.stop_reasons.no_progress, 1);
        assert_eq!(rec.stop_reasons.views_upper_limit, 1);
    }
}
