//! The async read/write surface the service layer programs against.
//!
//! Implementations must be `Send + Sync` so handles can sit in axum
//! application state and cross async task boundaries. The JSON-backed
//! repositories are the in-core implementation; the seam exists so a
//! real external store can slot in behind the same contract.

use async_trait::async_trait;

use riskwise_core::{Category, Outcome, Outcomes, Risk, RiskCategory};

/// Category reads over an id-keyed record graph.
///
/// Parent and child references are resolved one level per call; a
/// resolved parent's own parent, and a resolved child's own children,
/// stay unresolved.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Fetch a category by id, with its immediate parent and each
    /// listed child resolved by direct lookup.
    async fn fetch(&self, id: &str) -> Outcome<Category>;

    /// `Ok(None)` when the child has no parent; otherwise the parent as
    /// [`CategoryStore::fetch`] would return it.
    async fn fetch_parent(&self, child_id: &str) -> Outcome<Option<Category>>;

    /// Fetch every direct child, short-circuiting to a single-error
    /// batch when the root is missing or any child fetch fails.
    async fn fetch_children(&self, id: &str) -> Outcomes<Category>;

    /// List every category, in id order, skipping parented entries when
    /// `only_root` is set.
    async fn list(&self, only_root: bool) -> Outcomes<Category>;
}

/// Risk reads plus the single in-core mutation.
#[async_trait]
pub trait RiskStore: Send + Sync {
    /// Write a new risk record. Fails on a duplicate id or a parent id
    /// with no backing record.
    async fn create(&self, risk: &Risk) -> Outcome<()>;

    /// Fetch a risk by id, with its immediate parent resolved one level.
    async fn fetch(&self, id: &str) -> Outcome<Risk>;

    /// `Ok(None)` when the risk has no parent.
    async fn fetch_parent(&self, child_id: &str) -> Outcome<Option<Risk>>;

    /// Fetch every risk whose parent is `id`, in id order.
    async fn fetch_children(&self, id: &str) -> Outcomes<Risk>;

    /// List risks in id order, optionally filtered to one top-level
    /// category; without `include_descendants`, parented risks are
    /// excluded.
    async fn list(&self, category: Option<RiskCategory>, include_descendants: bool)
        -> Outcomes<Risk>;
}
