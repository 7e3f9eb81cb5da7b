//! Training output: probe samples, episode summaries and run totals

use serde::{Deserialize, Serialize};

use super::variant::Variant;
use crate::soccer::Action;

/// One update of the probe key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeSample {
    /// 1-based time step of the update
    pub step: usize,
    /// |post - pre|
    pub abs_diff: f64,
    pub pre: f64,
    pub post: f64,
    /// Row distribution used by the LP backup, for Foe-Q and CE-Q
    pub policy: Option<[f64; Action::COUNT]>,
}

/// A finished episode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// 0-based episode index
    pub index: usize,
    /// Step at which the terminal reward was observed
    pub end_step: usize,
    /// Number of steps in the episode
    pub length: usize,
    /// Terminal reward (+100 or -100)
    pub reward: f64,
}

/// Result of a complete run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    pub variant: Variant,
    pub steps: usize,
    /// Episodes that reached a terminal reward
    pub episodes: usize,
    /// Episodes ending with +100
    pub scored: usize,
    /// Episodes ending with -100
    pub conceded: usize,
    /// Steps belonging to completed episodes; the unfinished tail is excluded
    pub episode_steps: usize,
    pub final_alpha: f64,
    /// Probe samples in step order
    pub trace: Vec<ProbeSample>,
}

impl TrainingResult {
    /// Largest probe update in the last `window` samples
    pub fn recent_max_diff(&self, window: usize) -> Option<f64> {
        self.trace
            .iter()
            .rev()
            .take(window)
            .map(|s| s.abs_diff)
            .reduce(f64::max)
    }

    /// Probe value after the final update
    pub fn final_probe_value(&self) -> Option<f64> {
        self.trace.last().map(|s| s.post)
    }

    /// Mean episode length over completed episodes
    pub fn mean_episode_length(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.episode_steps as f64 / self.episodes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(step: usize, abs_diff: f64) -> ProbeSample {
        ProbeSample {
            step,
            abs_diff,
            pre: 1.0,
            post: 1.0 + abs_diff,
            policy: None,
        }
    }

    #[test]
    fn test_recent_max_diff() {
        let result = TrainingResult {
            variant: Variant::Friend,
            steps: 100,
            episodes: 4,
            scored: 3,
            conceded: 1,
            episode_steps: 80,
            final_alpha: 0.1,
            trace: vec![sample(3, 5.0), sample(40, 0.5), sample(90, 0.25)],
        };
        assert_eq!(result.recent_max_diff(2), Some(0.5));
        assert_eq!(result.recent_max_diff(10), Some(5.0));
        assert_eq!(result.final_probe_value(), Some(1.25));
        // the 20 steps after the last goal do not count
        assert_eq!(result.mean_episode_length(), 20.0);
    }

    #[test]
    fn test_empty_trace() {
        let result = TrainingResult {
            variant: Variant::Foe,
            steps: 10,
            episodes: 0,
            scored: 0,
            conceded: 0,
            episode_steps: 0,
            final_alpha: 0.2,
            trace: Vec::new(),
        };
        assert_eq!(result.recent_max_diff(5), None);
        assert_eq!(result.final_probe_value(), None);
        assert_eq!(result.mean_episode_length(), 0.0);
    }
}
