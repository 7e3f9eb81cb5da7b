//! Observer adapters for training runs
//!
//! Observers allow composable data collection during training without
//! coupling the learner to specific output formats.

use std::sync::{Arc, Mutex};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::Observer,
    q_learning::{EpisodeSummary, ProbeSample, Variant},
};

/// Progress bar observer - Shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    scored: usize,
    conceded: usize,
    total_steps: usize,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            scored: 0,
            conceded: 0,
            total_steps: 0,
        }
    }

    fn message(&self) -> String {
        format!("G:{} C:{}", self.scored, self.conceded)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, variant: Variant, total_steps: usize) -> Result<()> {
        let pb = ProgressBar::new(total_steps as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{prefix:>10} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} steps {msg}")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        pb.set_prefix(variant.name());
        self.progress_bar = Some(pb);
        self.total_steps = total_steps;
        self.scored = 0;
        self.conceded = 0;
        Ok(())
    }

    fn on_episode_end(&mut self, episode: &EpisodeSummary) -> Result<()> {
        if episode.reward > 0.0 {
            self.scored += 1;
        } else {
            self.conceded += 1;
        }
        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode.end_step as u64);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(self.total_steps as u64);
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Metrics observer - Tracks episode and probe statistics
#[derive(Debug, Clone, Default)]
pub struct MetricsObserver {
    episodes: usize,
    scored: usize,
    conceded: usize,
    total_length: usize,
    longest_episode: usize,
    probe_updates: usize,
    max_probe_diff: f64,
    last_probe_diff: Option<f64>,
}

/// Summary of training metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub episodes: usize,
    pub scored: usize,
    pub conceded: usize,
    pub score_rate: f64,
    pub avg_episode_length: f64,
    pub longest_episode: usize,
    pub probe_updates: usize,
    pub max_probe_diff: f64,
    pub last_probe_diff: Option<f64>,
}

impl MetricsObserver {
    /// Create a new metrics observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of episodes ending with +100
    pub fn score_rate(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.scored as f64 / self.episodes as f64
        }
    }

    pub fn avg_episode_length(&self) -> f64 {
        if self.episodes == 0 {
            0.0
        } else {
            self.total_length as f64 / self.episodes as f64
        }
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            episodes: self.episodes,
            scored: self.scored,
            conceded: self.conceded,
            score_rate: self.score_rate(),
            avg_episode_length: self.avg_episode_length(),
            longest_episode: self.longest_episode,
            probe_updates: self.probe_updates,
            max_probe_diff: self.max_probe_diff,
            last_probe_diff: self.last_probe_diff,
        }
    }
}

impl Observer for MetricsObserver {
    fn on_training_start(&mut self, _variant: Variant, _total_steps: usize) -> Result<()> {
        *self = Self::default();
        Ok(())
    }

    fn on_probe(&mut self, sample: &ProbeSample) -> Result<()> {
        self.probe_updates += 1;
        self.max_probe_diff = self.max_probe_diff.max(sample.abs_diff);
        self.last_probe_diff = Some(sample.abs_diff);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: &EpisodeSummary) -> Result<()> {
        self.episodes += 1;
        if episode.reward > 0.0 {
            self.scored += 1;
        } else {
            self.conceded += 1;
        }
        self.total_length += episode.length;
        self.longest_episode = self.longest_episode.max(episode.length);
        Ok(())
    }
}

/// Trace observer - Collects probe samples as they are recorded
#[derive(Debug, Clone, Default)]
pub struct TraceObserver {
    samples: Vec<ProbeSample>,
}

impl TraceObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[ProbeSample] {
        &self.samples
    }

    /// Largest `abs_diff` among samples at or after `step`
    pub fn max_diff_since(&self, step: usize) -> Option<f64> {
        self.samples
            .iter()
            .filter(|s| s.step >= step)
            .map(|s| s.abs_diff)
            .reduce(f64::max)
    }

    /// Serialize the collected samples as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.samples)?)
    }
}

impl Observer for TraceObserver {
    fn on_training_start(&mut self, _variant: Variant, _total_steps: usize) -> Result<()> {
        self.samples.clear();
        Ok(())
    }

    fn on_probe(&mut self, sample: &ProbeSample) -> Result<()> {
        self.samples.push(sample.clone());
        Ok(())
    }
}

/// Shares an observer with the caller so its data can be read after the
/// learner has consumed the boxed handle
pub struct SharedObserver<O> {
    inner: Arc<Mutex<O>>,
}

impl<O: Observer> SharedObserver<O> {
    /// Wrap `observer`, returning the boxed adapter and the caller's handle
    pub fn new(observer: O) -> (Self, Arc<Mutex<O>>) {
        let inner = Arc::new(Mutex::new(observer));
        (
            Self {
                inner: Arc::clone(&inner),
            },
            inner,
        )
    }

    fn with<T>(&self, f: impl FnOnce(&mut O) -> T) -> T {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl<O: Observer> Observer for SharedObserver<O> {
    fn on_training_start(&mut self, variant: Variant, total_steps: usize) -> Result<()> {
        self.with(|o| o.on_training_start(variant, total_steps))
    }

    fn on_probe(&mut self, sample: &ProbeSample) -> Result<()> {
        self.with(|o| o.on_probe(sample))
    }

    fn on_episode_end(&mut self, episode: &EpisodeSummary) -> Result<()> {
        self.with(|o| o.on_episode_end(episode))
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.with(|o| o.on_training_end())
    }
}
