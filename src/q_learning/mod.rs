//! Multi-agent tabular Q-learning on the soccer game
//!
//! Four update rules share one driver and differ only in the shape of the
//! Q-table key and in how the value of the successor state is backed up.
//!
//! ## Variants
//!
//! | Variant | Opponent model | Backup |
//! |---------|----------------|--------|
//! | Independent-Q | part of the environment | `max_a Q(s',a)` |
//! | Friend-Q | cooperative | `max_{a,o} Q(s',a,o)` |
//! | Foe-Q | adversarial | maximin LP over `Q(s',·,·)` |
//! | CE-Q | correlated equilibrium | maximin LP over `Q(s',·,·)` |
//!
//! ## Usage Example
//!
//! ```no_run
//! use soccer_q::q_learning::{LearnerConfig, MultiAgentQLearner, Variant};
//!
//! let config = LearnerConfig::new(
//!     1_000_000, // steps
//!     0.2,       // alpha
//!     0.9,       // gamma
//! )
//! .with_seed(42);
//!
//! let mut learner = MultiAgentQLearner::new(Variant::Foe, config)?;
//! let result = learner.train()?;
//! for sample in &result.trace {
//!     println!("{},{},{},{}", sample.step, sample.abs_diff, sample.pre, sample.post);
//! }
//! # Ok::<(), soccer_q::Error>(())
//! ```

pub mod config;
pub mod learner;
pub mod table;
pub mod trace;
pub mod variant;

// Public re-exports
pub use config::{ALPHA_DECAY, LearnerConfig, MIN_ALPHA};
pub use learner::{Backup, MultiAgentQLearner};
pub use table::{OPTIMISTIC_INIT, QKey, ValueTable};
pub use trace::{EpisodeSummary, ProbeSample, TrainingResult};
pub use variant::Variant;
