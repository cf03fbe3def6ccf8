//! The Risk entity: a categorized, rated item with an optional parent
//! chain.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::outcome::Outcome;
use crate::validate::{validation_fault, Validator, Violation};

use super::{Id, Updatable};

/// Top-level grouping of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Health,
    Wealth,
    Security,
}

/// Impact and likelihood rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Normal,
}

/// What kind of item this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskType {
    Risk,
    Goal,
    Condition,
}

/// Plain construction input for [`Risk`]. The parent is nested details,
/// validated recursively by the factory.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskDetails {
    pub id: String,
    pub category: RiskCategory,
    pub impact: RiskLevel,
    pub likelihood: RiskLevel,
    pub name: String,
    /// Raw markup; transpiled by an injected collaborator at the
    /// mapping layer, never here.
    pub notes: Option<String>,
    pub parent: Option<Box<RiskDetails>>,
    pub risk_type: RiskType,
    pub short_description: String,
    pub updated: OffsetDateTime,
}

/// A validated, immutable risk.
#[derive(Debug, Clone, PartialEq)]
pub struct Risk {
    id: Id,
    category: RiskCategory,
    impact: RiskLevel,
    likelihood: RiskLevel,
    name: String,
    notes: Option<String>,
    parent: Option<Box<Risk>>,
    risk_type: RiskType,
    short_description: String,
    updated: OffsetDateTime,
}

impl Risk {
    /// Validate `details` and construct the entity.
    pub fn new(details: RiskDetails) -> Outcome<Risk> {
        let mut v = Validator::new();
        validate_details(&details, &mut v);
        if !v.is_clean() {
            return Err(validation_fault("risk", v.into_violations()));
        }
        Ok(Risk::from_valid(details))
    }

    fn from_valid(details: RiskDetails) -> Risk {
        Risk {
            id: Id(details.id),
            category: details.category,
            impact: details.impact,
            likelihood: details.likelihood,
            name: details.name,
            notes: details.notes,
            parent: details.parent.map(|parent| Box::new(Risk::from_valid(*parent))),
            risk_type: details.risk_type,
            short_description: details.short_description,
            updated: details.updated,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn category(&self) -> RiskCategory {
        self.category
    }

    pub fn impact(&self) -> RiskLevel {
        self.impact
    }

    pub fn likelihood(&self) -> RiskLevel {
        self.likelihood
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn parent(&self) -> Option<&Risk> {
        self.parent.as_deref()
    }

    pub fn risk_type(&self) -> RiskType {
        self.risk_type
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn updated(&self) -> OffsetDateTime {
        self.updated
    }

    /// Re-derive the plain details shape; see `Category::details`.
    pub fn details(&self) -> RiskDetails {
        RiskDetails {
            id: self.id.as_str().to_owned(),
            category: self.category,
            impact: self.impact,
            likelihood: self.likelihood,
            name: self.name.clone(),
            notes: self.notes.clone(),
            parent: self.parent.as_ref().map(|p| Box::new(p.details())),
            risk_type: self.risk_type,
            short_description: self.short_description.clone(),
            updated: self.updated,
        }
    }
}

impl Updatable for Risk {
    fn id(&self) -> &Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn updated(&self) -> OffsetDateTime {
        self.updated
    }

    fn short_description(&self) -> &str {
        &self.short_description
    }
}

fn validate_details(details: &RiskDetails, v: &mut Validator) {
    v.require_min_len("id", &details.id, 1);
    v.require_min_len("name", &details.name, 2);
    v.require_min_len("shortDescription", &details.short_description, 2);
    if let Some(parent) = &details.parent {
        v.absorb("parent", violations_of(parent));
    }
}

fn violations_of(details: &RiskDetails) -> Vec<Violation> {
    let mut v = Validator::new();
    validate_details(details, &mut v);
    v.into_violations()
}
