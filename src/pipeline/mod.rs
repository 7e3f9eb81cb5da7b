//! Training pipeline adapters
//!
//! This module provides:
//! - Observer implementations for progress, metrics and probe traces
//! - A runner comparing the update rules side by side

pub mod comparison;
pub mod observers;

pub use comparison::{Comparison, ComparisonEntry};
// Re-export observer implementations (adapters)
pub use observers::{
    MetricsObserver, MetricsSummary, ProgressObserver, SharedObserver, TraceObserver,
};

pub use crate::ports::Observer;
