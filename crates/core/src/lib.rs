//! riskwise-core: domain core for the riskwise content service.
//!
//! Provides the outcome primitives (failure-as-data), the validation
//! machinery, and the validated domain entities (Category, Risk, Updated).
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`Outcome`] / [`Outcomes`] -- single and batch fallible results
//! - [`Fault`] / [`FaultKind`] -- the uniform error value
//! - [`Category`] / [`Risk`] -- validated, immutable domain entities
//! - [`Updated`] / [`Updatable`] -- the "recently changed" capability
//! - [`Violation`] / [`ViolationCode`] -- structured validation failures

pub mod entity;
pub mod outcome;
pub mod validate;

// ── Convenience re-exports: key types ────────────────────────────────

pub use entity::{
    Category, CategoryDetails, Id, Risk, RiskCategory, RiskDetails, RiskLevel, RiskType, Updatable,
    Updated,
};
pub use outcome::{Fault, FaultKind, Outcome, Outcomes};
pub use validate::{validation_fault, Violation, ViolationCode};
