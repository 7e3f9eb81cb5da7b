//! Episodic multi-agent Q-learning driver
//!
//! Both players act uniformly at random every step (off-policy evaluation);
//! only player1's Q-table is learned. Each step updates exactly one Q entry
//! toward `reward + γ·V(s')`, where `V(s')` is backed up according to the
//! [`Variant`].

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{
    config::{ALPHA_DECAY, LearnerConfig, MIN_ALPHA},
    table::{QKey, ValueTable},
    trace::{EpisodeSummary, ProbeSample, TrainingResult},
    variant::Variant,
};
use crate::{
    Result,
    lp::{MicroLpSolver, maximin},
    ports::{LinearProgramSolver, Observer},
    soccer::{Action, GameState, TransitionEngine},
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Backed-up value of a successor state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backup {
    pub value: f64,
    /// Row distribution behind `value` for the LP variants
    pub policy: Option<[f64; Action::COUNT]>,
}

/// Learner for one of the four update rules
///
/// Owns its Q-table, V-table, learning rate, random stream and solver, so
/// independent runs never share mutable state.
///
/// # Examples
///
/// ```
/// use soccer_q::q_learning::{LearnerConfig, MultiAgentQLearner, Variant};
///
/// let config = LearnerConfig::new(2_000, 0.2, 0.9).with_seed(1);
/// let mut learner = MultiAgentQLearner::new(Variant::Foe, config)?;
/// let result = learner.train()?;
/// assert_eq!(result.steps, 2_000);
/// assert!(result.trace.iter().all(|s| s.policy.is_some()));
/// # Ok::<(), soccer_q::Error>(())
/// ```
pub struct MultiAgentQLearner {
    variant: Variant,
    config: LearnerConfig,
    q: ValueTable<QKey>,
    v: ValueTable<GameState>,
    alpha: f64,
    engine: TransitionEngine,
    solver: Box<dyn LinearProgramSolver>,
    rng: StdRng,
    observers: Vec<Box<dyn Observer>>,
}

impl MultiAgentQLearner {
    /// Create a learner with the bundled `microlp` solver.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the configuration
    /// fails [`LearnerConfig::validate`].
    pub fn new(variant: Variant, config: LearnerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            variant,
            alpha: config.alpha,
            rng: build_rng(config.seed),
            config,
            q: ValueTable::optimistic(),
            v: ValueTable::optimistic(),
            engine: TransitionEngine::new(),
            solver: Box::new(MicroLpSolver::new()),
            observers: Vec::new(),
        })
    }

    /// Replace the LP backend
    pub fn with_solver(mut self, solver: Box<dyn LinearProgramSolver>) -> Self {
        self.solver = solver;
        self
    }

    /// Add an observer
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    /// Current learning rate
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn q_table(&self) -> &ValueTable<QKey> {
        &self.q
    }

    pub fn v_table(&self) -> &ValueTable<GameState> {
        &self.v
    }

    /// Clear both tables and restore the initial learning rate and seed
    pub fn reset(&mut self) {
        self.q.clear();
        self.v.clear();
        self.alpha = self.config.alpha;
        self.rng = build_rng(self.config.seed);
    }

    /// Run `config.steps` steps from the kick-off configuration.
    ///
    /// Calling `train` again continues from the current tables and learning
    /// rate; step numbers in the new trace restart at 1.
    ///
    /// # Errors
    ///
    /// Propagates observer failures and LP solver failures. The programs the
    /// learner builds are always feasible and bounded for finite Q-values.
    pub fn train(&mut self) -> Result<TrainingResult> {
        let total_steps = self.config.steps;
        let probe = self.variant.probe_key();
        log::info!(
            "training {} for {} steps (alpha {}, gamma {}, policy {})",
            self.variant,
            total_steps,
            self.alpha,
            self.config.gamma,
            self.config.policy
        );
        for observer in &mut self.observers {
            observer.on_training_start(self.variant, total_steps)?;
        }

        let mut trace = Vec::new();
        let mut state = GameState::initial();
        let mut episode_start = 1;
        let mut episodes = 0;
        let mut scored = 0;
        let mut conceded = 0;

        for step in 1..=total_steps {
            let own = self.sample_action();
            let other = self.sample_action();
            let next = self.engine.step(&state, own, other, &mut self.rng);
            let reward = next.reward();

            let backup = self.backup(&next)?;
            self.v.set(next, backup.value);

            let key = self.variant.key(state, own, other);
            let pre = self.q.get(&key);
            let post = (1.0 - self.alpha) * pre
                + self.alpha * (reward + self.config.gamma * self.v.get(&next));
            self.q.set(key, post);

            if key == probe {
                let sample = ProbeSample {
                    step,
                    abs_diff: (post - pre).abs(),
                    pre,
                    post,
                    policy: backup.policy,
                };
                log::trace!("probe update at step {step}: {pre} -> {post}");
                for observer in &mut self.observers {
                    observer.on_probe(&sample)?;
                }
                trace.push(sample);
            }

            self.alpha = (self.alpha * ALPHA_DECAY).max(MIN_ALPHA);

            if next.is_terminal() {
                let episode = EpisodeSummary {
                    index: episodes,
                    end_step: step,
                    length: step + 1 - episode_start,
                    reward,
                };
                if reward > 0.0 {
                    scored += 1;
                } else {
                    conceded += 1;
                }
                episodes += 1;
                log::debug!(
                    "episode {} ended at step {} after {} steps (reward {})",
                    episode.index,
                    step,
                    episode.length,
                    reward
                );
                for observer in &mut self.observers {
                    observer.on_episode_end(&episode)?;
                }
                state = GameState::initial();
                episode_start = step + 1;
            } else {
                state = next;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }
        log::info!(
            "{} finished: {} episodes, {} probe samples, alpha {:.6}",
            self.variant,
            episodes,
            trace.len(),
            self.alpha
        );

        Ok(TrainingResult {
            variant: self.variant,
            steps: total_steps,
            episodes,
            scored,
            conceded,
            episode_steps: episode_start - 1,
            final_alpha: self.alpha,
            trace,
        })
    }

    /// Backed-up value of `state` under the current Q-table
    pub fn backup(&mut self, state: &GameState) -> Result<Backup> {
        match self.variant {
            Variant::Independent => Ok(Backup {
                value: Action::ALL
                    .iter()
                    .map(|&own| self.q.get(&QKey::single(*state, own)))
                    .fold(f64::NEG_INFINITY, f64::max),
                policy: None,
            }),
            Variant::Friend => Ok(Backup {
                value: Action::ALL
                    .iter()
                    .flat_map(|&own| Action::ALL.iter().map(move |&other| (own, other)))
                    .map(|(own, other)| self.q.get(&QKey::joint(*state, own, other)))
                    .fold(f64::NEG_INFINITY, f64::max),
                policy: None,
            }),
            Variant::Foe | Variant::Correlated => {
                let payoff = self.payoff_matrix(state);
                let game = maximin(&payoff, self.config.policy, self.solver.as_mut())?;
                Ok(Backup {
                    value: game.value,
                    policy: Some(game.policy),
                })
            }
        }
    }

    /// `Q(state, i, j)` with player1's action as row and player2's as column
    pub fn payoff_matrix(&self, state: &GameState) -> [[f64; Action::COUNT]; Action::COUNT] {
        let mut payoff = [[0.0; Action::COUNT]; Action::COUNT];
        for (row, &own) in payoff.iter_mut().zip(Action::ALL.iter()) {
            for (cell, &other) in row.iter_mut().zip(Action::ALL.iter()) {
                *cell = self.q.get(&QKey::joint(*state, own, other));
            }
        }
        payoff
    }

    fn sample_action(&mut self) -> Action {
        Action::ALL[self.rng.random_range(0..Action::COUNT)]
    }
}

impl std::fmt::Debug for MultiAgentQLearner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiAgentQLearner")
            .field("variant", &self.variant)
            .field("config", &self.config)
            .field("alpha", &self.alpha)
            .field("q_entries", &self.q.len())
            .field("v_entries", &self.v.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
