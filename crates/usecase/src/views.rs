//! Flattened usecase shapes consumed by the API/resolver layer.
//!
//! Views are plain serde structs, distinct from the validated domain
//! entities. Enum values are SCREAMING_SNAKE strings on this side of
//! the boundary.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView {
    pub id: String,
    pub slug: String,
    pub previous_slugs: Vec<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<CategoryView>>,
    pub children: Vec<CategoryView>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskView {
    pub id: String,
    pub category: String,
    pub impact: String,
    pub likelihood: String,
    pub name: String,
    /// Transpiled markup, passed through untouched from the transpiler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<RiskView>>,
    #[serde(rename = "type")]
    pub risk_type: String,
    pub short_description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub updated: OffsetDateTime,
}

/// One entry of the reverse-chronological "recently updated" list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum UpdatedView {
    Category(CategoryView),
    Risk(RiskView),
}

/// Wire input for creating a risk. Enum fields arrive as strings and
/// are translated (strictly, no fallback) by the mapper; the parent is
/// a reference by id, resolved against the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskInput {
    pub id: String,
    pub category: String,
    pub impact: String,
    pub likelihood: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "type")]
    pub risk_type: String,
    pub short_description: String,
    /// Defaults to "now" when absent.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated: Option<OffsetDateTime>,
}
