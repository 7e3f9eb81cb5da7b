//! Training parameters

use serde::{Deserialize, Serialize};

use crate::{Error, Result, lp::PolicyModel};

/// Lower bound for the decayed learning rate
pub const MIN_ALPHA: f64 = 0.001;

/// Multiplicative learning-rate decay applied after every step
pub const ALPHA_DECAY: f64 = 0.999995;

/// Configuration for one learner run
///
/// # Examples
///
/// ```
/// use soccer_q::lp::PolicyModel;
/// use soccer_q::q_learning::LearnerConfig;
///
/// let config = LearnerConfig::new(10_000, 0.2, 0.9)
///     .with_seed(7)
///     .with_policy(PolicyModel::Optimized);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Number of time steps (always run in full)
    pub steps: usize,
    /// Initial learning rate α
    pub alpha: f64,
    /// Discount factor γ
    pub gamma: f64,
    /// Random seed; `None` draws one from the thread RNG
    pub seed: Option<u64>,
    /// Row distribution model for the LP-backed variants
    pub policy: PolicyModel,
}

impl LearnerConfig {
    pub fn new(steps: usize, alpha: f64, gamma: f64) -> Self {
        Self {
            steps,
            alpha,
            gamma,
            seed: None,
            policy: PolicyModel::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: PolicyModel) -> Self {
        self.policy = policy;
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `steps` is zero, `alpha`
    /// lies outside `[0.001, 1]` or `gamma` outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(Error::InvalidConfiguration {
                message: "steps must be positive".to_string(),
            });
        }
        if !(MIN_ALPHA..=1.0).contains(&self.alpha) {
            return Err(Error::InvalidConfiguration {
                message: format!("alpha {} must lie in [{MIN_ALPHA}, 1]", self.alpha),
            });
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(Error::InvalidConfiguration {
                message: format!("gamma {} must lie in [0, 1]", self.gamma),
            });
        }
        Ok(())
    }
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self::new(1_000_000, 0.2, 0.9)
    }
}
