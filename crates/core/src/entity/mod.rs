//! Validated, immutable domain entities.
//!
//! Entities are constructed through validating factories from plain
//! details structs and expose read-only accessors afterwards. The
//! factories snapshot the details, so mutating an input after
//! construction cannot affect the entity.

mod category;
mod risk;

pub use category::{Category, CategoryDetails};
pub use risk::{Risk, RiskCategory, RiskDetails, RiskLevel, RiskType};

use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::outcome::Outcome;
use crate::validate::{validation_fault, Validator};

/// A non-empty string used as an entity primary key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(value: impl Into<String>) -> Outcome<Id> {
        let value = value.into();
        let mut v = Validator::new();
        v.require_min_len("", &value, 1);
        if !v.is_clean() {
            return Err(validation_fault("identifier", v.into_violations()));
        }
        Ok(Id(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The capability shared by Category and Risk that powers the
/// "recently changed" query.
pub trait Updatable {
    fn id(&self) -> &Id;
    fn name(&self) -> &str;
    fn updated(&self) -> OffsetDateTime;
    fn short_description(&self) -> &str;
}

/// Either recently-updated entity kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Updated {
    Category(Category),
    Risk(Risk),
}

impl Updated {
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Updated::Category(category) => Some(category),
            Updated::Risk(_) => None,
        }
    }

    pub fn as_risk(&self) -> Option<&Risk> {
        match self {
            Updated::Risk(risk) => Some(risk),
            Updated::Category(_) => None,
        }
    }
}

impl Updatable for Updated {
    fn id(&self) -> &Id {
        match self {
            Updated::Category(c) => c.id(),
            Updated::Risk(r) => r.id(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Updated::Category(c) => c.name(),
            Updated::Risk(r) => r.name(),
        }
    }

    fn updated(&self) -> OffsetDateTime {
        match self {
            Updated::Category(c) => c.updated(),
            Updated::Risk(r) => r.updated(),
        }
    }

    fn short_description(&self) -> &str {
        match self {
            Updated::Category(c) => c.short_description(),
            Updated::Risk(r) => r.short_description(),
        }
    }
}
