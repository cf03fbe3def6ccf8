//! Flat serde records as they live in the store JSON.
//!
//! Records keep references as ids (`parent_id`, `children`); the nested
//! entity view is only materialized by the repositories.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use riskwise_core::{RiskCategory, RiskLevel, RiskType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub slug: String,
    #[serde(default)]
    pub previous_slugs: Vec<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
    /// RFC 3339 timestamp string on the wire.
    #[serde(with = "time::serde::rfc3339")]
    pub updated: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    pub category: RiskCategory,
    pub impact: RiskLevel,
    pub likelihood: RiskLevel,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    pub short_description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub updated: OffsetDateTime,
}
