//! Shared configuration types for CLI commands

use clap::Args;

use crate::{
    lp::PolicyModel,
    q_learning::LearnerConfig,
};

/// Learner options shared by `train` and `compare`
#[derive(Args, Debug, Clone)]
pub struct LearnerArgs {
    /// Number of simulation steps per run
    #[arg(long, short = 's', default_value_t = 1_000_000)]
    pub steps: usize,

    /// Initial learning rate
    #[arg(long, default_value_t = 0.2)]
    pub alpha: f64,

    /// Discount factor
    #[arg(long, default_value_t = 0.9)]
    pub gamma: f64,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Row distribution for Foe-Q and CE-Q backups (`uniform` or `optimized`)
    #[arg(long, default_value_t = PolicyModel::Uniform)]
    pub policy: PolicyModel,

    /// Print machine-readable JSON instead of a text summary
    #[arg(long)]
    pub json: bool,

    /// Disable progress bars
    #[arg(long)]
    pub no_progress: bool,
}

impl LearnerArgs {
    pub fn learner_config(&self) -> LearnerConfig {
        let config = LearnerConfig::new(self.steps, self.alpha, self.gamma).with_policy(self.policy);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Progress bars are suppressed for JSON output
    pub fn show_progress(&self) -> bool {
        !self.no_progress && !self.json
    }
}
