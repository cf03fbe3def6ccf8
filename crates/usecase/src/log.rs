//! Outcome-aware logging helpers.

use riskwise_core::{Outcome, Outcomes};

/// Log an outcome at `error` level when it failed, `info` otherwise.
pub fn log_outcome<T>(operation: &str, outcome: &Outcome<T>) {
    match outcome {
        Ok(_) => tracing::info!(operation, "ok"),
        Err(fault) => tracing::error!(operation, fault = %fault, "failed"),
    }
}

/// Batch variant of [`log_outcome`], keyed on the first fault.
pub fn log_outcomes<T>(operation: &str, outcomes: &Outcomes<T>) {
    match outcomes.first_fault() {
        None => tracing::info!(operation, count = outcomes.len(), "ok"),
        Some(fault) => tracing::error!(operation, fault = %fault, "failed"),
    }
}
