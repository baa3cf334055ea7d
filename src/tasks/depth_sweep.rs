//! Experiment driver: accuracy and tree size versus depth limit.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::classifiers::decision_tree::{DecisionTreeLearner, SplitCriterion};
use crate::core::{Dataset, Schema};
use crate::evaluation;

/// Averaged results for one depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthPoint {
    pub depth: usize,
    pub avg_accuracy: f64,
    pub avg_node_count: f64,
}

/// Sweeps `max_depth` from 0 (unbounded) up to a cap for one criterion,
/// averaging holdout accuracy and node count over repeated shuffled 80/20
/// splits per depth.
pub struct DepthSweep {
    criterion: SplitCriterion,
    depth_cap: usize,
    repetitions: usize,
}

impl DepthSweep {
    pub fn new(criterion: SplitCriterion, depth_cap: usize, repetitions: usize) -> Result<Self> {
        ensure!(repetitions > 0, "repetitions must be > 0");
        Ok(Self {
            criterion,
            depth_cap,
            repetitions,
        })
    }

    pub fn run(&self, dataset: &Dataset) -> Result<Vec<DepthPoint>> {
        let schema = Schema::infer(dataset);
        let mut points = Vec::with_capacity(self.depth_cap + 1);

        for depth in 0..=self.depth_cap {
            let mut total_accuracy = 0.0;
            let mut total_nodes = 0usize;

            for _ in 0..self.repetitions {
                let (train, test) = evaluation::split(dataset);
                let tree = DecisionTreeLearner::new(self.criterion)
                    .max_depth(depth)
                    .fit(&train, &schema)
                    .with_context(|| format!("building tree at depth limit {depth}"))?;
                total_nodes += tree.node_count();
                total_accuracy += evaluation::evaluate(&tree, &test)?.percent();
            }

            let reps = self.repetitions as f64;
            points.push(DepthPoint {
                depth,
                avg_accuracy: total_accuracy / reps,
                avg_node_count: total_nodes as f64 / reps,
            });
        }

        Ok(points)
    }

    /// Writes a `depth,avg_accuracy,avg_node_count` CSV report.
    pub fn write_csv(points: &[DepthPoint], path: &Path) -> Result<()> {
        let mut out = String::from("depth,avg_accuracy,avg_node_count\n");
        for point in points {
            let _ = writeln!(
                out,
                "{},{},{}",
                point.depth, point.avg_accuracy, point.avg_node_count
            );
        }
        fs::write(path, out)
            .with_context(|| format!("writing sweep report to {}", path.display()))
    }
}
