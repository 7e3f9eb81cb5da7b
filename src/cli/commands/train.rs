//! Train command - Train one learner variant and report its probe trace

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{config::LearnerArgs, output},
    pipeline::{MetricsObserver, MetricsSummary, ProgressObserver, SharedObserver},
    q_learning::{LearnerConfig, MultiAgentQLearner, TrainingResult, Variant},
};

#[derive(Parser, Debug)]
#[command(about = "Train a learner variant")]
pub struct TrainArgs {
    /// Variant to train (`q`, `friend-q`, `foe-q` or `ce-q`)
    pub variant: Variant,

    #[command(flatten)]
    pub learner: LearnerArgs,
}

#[derive(Debug, Serialize)]
struct TrainReport<'a> {
    config: &'a LearnerConfig,
    metrics: &'a MetricsSummary,
    result: &'a TrainingResult,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = args.learner.learner_config();
    let (metrics, handle) = SharedObserver::new(MetricsObserver::new());
    let mut learner =
        MultiAgentQLearner::new(args.variant, config.clone())?.with_observer(Box::new(metrics));
    if args.learner.show_progress() {
        learner = learner.with_observer(Box::new(ProgressObserver::new()));
    }

    if !args.learner.json {
        output::print_section(&format!("Training {}", args.variant));
        output::print_config(&config);
    }

    let result = learner.train()?;
    let summary = handle
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .summary();

    if args.learner.json {
        let report = TrainReport {
            config: &config,
            metrics: &summary,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_result(&result, &summary);
    }

    Ok(())
}
