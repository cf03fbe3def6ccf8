//! riskwise-storage: the in-memory JSON-backed store and the
//! repositories over it.
//!
//! The store is a flat, id-keyed record graph ([`JsonStore`]); the
//! repositories resolve one level of parent/child references per call
//! and hand the result to the validating entity factories. Every
//! lookup failure is an `Outcome`/`Outcomes` error carrying a
//! descriptive message; no repository method panics.

mod category;
mod record;
mod risk;
mod store;
mod traits;

pub use category::CategoryRepository;
pub use record::{CategoryRecord, RiskRecord};
pub use risk::RiskRepository;
pub use store::{shared, JsonStore, SharedStore, StoreError};
pub use traits::{CategoryStore, RiskStore};
