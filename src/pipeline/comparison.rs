//! Comparison of the four update rules under identical settings
//!
//! Each variant is trained by its own learner, one after another. Seeded
//! comparisons offset the seed by the variant's index so no two runs share
//! a random stream.

use serde::{Deserialize, Serialize};

use super::observers::{MetricsObserver, MetricsSummary, ProgressObserver, SharedObserver};
use crate::{
    Result,
    q_learning::{LearnerConfig, MultiAgentQLearner, TrainingResult, Variant},
};

/// Outcome of one variant within a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub seed: Option<u64>,
    pub metrics: MetricsSummary,
    pub result: TrainingResult,
}

/// Sequential multi-variant runner
#[derive(Debug, Clone)]
pub struct Comparison {
    config: LearnerConfig,
    variants: Vec<Variant>,
    show_progress: bool,
}

impl Comparison {
    /// Compare all four variants with `config`
    pub fn new(config: LearnerConfig) -> Self {
        Self {
            config,
            variants: Variant::ALL.to_vec(),
            show_progress: false,
        }
    }

    /// Restrict the comparison to `variants`, run in the given order
    pub fn with_variants(mut self, variants: impl IntoIterator<Item = Variant>) -> Self {
        self.variants = variants.into_iter().collect();
        self
    }

    /// Attach a progress bar to every run
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Seed used for the run at `index`
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        self.config
            .seed
            .map(|seed| seed.wrapping_add(index as u64))
    }

    /// Train every variant and collect the results in run order.
    ///
    /// # Errors
    ///
    /// Fails on the first run that fails; earlier results are discarded.
    pub fn run(&self) -> Result<Vec<ComparisonEntry>> {
        self.config.validate()?;
        let mut entries = Vec::with_capacity(self.variants.len());

        for (index, &variant) in self.variants.iter().enumerate() {
            let seed = self.seed_for(index);
            let mut config = self.config.clone();
            config.seed = seed;

            let (metrics, handle) = SharedObserver::new(MetricsObserver::new());
            let mut learner =
                MultiAgentQLearner::new(variant, config)?.with_observer(Box::new(metrics));
            if self.show_progress {
                learner = learner.with_observer(Box::new(ProgressObserver::new()));
            }

            log::info!("comparison run {} of {}: {}", index + 1, self.variants.len(), variant);
            let result = learner.train()?;
            let metrics = handle
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .summary();

            entries.push(ComparisonEntry {
                seed,
                metrics,
                result,
            });
        }

        Ok(entries)
    }
}
