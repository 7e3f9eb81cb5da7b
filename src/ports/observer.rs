//! Observer port - abstraction for training observation and data collection
//!
//! This port defines the interface for observing training events,
//! allowing composable data collection without coupling the learner
//! to progress bars, metrics or output formats.

use crate::{
    Result,
    q_learning::{EpisodeSummary, ProbeSample, Variant},
};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(variant, total_steps)` - Once at the beginning
/// 2. During the run, in step order:
///    - `on_probe(sample)` - Whenever the probe key is updated
///    - `on_episode_end(summary)` - Whenever a terminal reward is observed
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use soccer_q::{ports::Observer, q_learning::EpisodeSummary};
///
/// struct GoalCounter {
///     goals: usize,
/// }
///
/// impl Observer for GoalCounter {
///     fn on_episode_end(&mut self, _episode: &EpisodeSummary) -> soccer_q::Result<()> {
///         self.goals += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    fn on_training_start(&mut self, _variant: Variant, _total_steps: usize) -> Result<()> {
        Ok(())
    }

    /// Called after the probe key's Q-value has been updated.
    fn on_probe(&mut self, _sample: &ProbeSample) -> Result<()> {
        Ok(())
    }

    /// Called when an episode reaches a terminal reward.
    ///
    /// The step that produced the reward is already applied to the tables.
    fn on_episode_end(&mut self, _episode: &EpisodeSummary) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    ///
    /// Use this to finalize outputs or display summaries.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
