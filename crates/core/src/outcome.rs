//! Outcome primitives: failure represented as data.
//!
//! Every fallible operation in the workspace returns an [`Outcome`] (one
//! value) or an [`Outcomes`] (an ordered batch). Nothing in this crate or
//! its consumers panics on a domain failure; a [`Fault`] travels up the
//! call chain until the API boundary converts it into a wire error.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// A single fallible result: the value, or a [`Fault`].
pub type Outcome<T> = Result<T, Fault>;

/// Broad failure classes, used by the API layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// Entity construction failed a structural, length, or enum rule.
    Validation,
    /// A lookup by id found no matching record.
    NotFound,
    /// A write collided with existing state (duplicate id, dangling parent).
    Conflict,
    /// An enum or union mapping hit a value outside its known cases.
    /// Always a defect, never silently defaulted.
    Unhandled,
    /// Anything else.
    Other,
}

/// The uniform error value.
///
/// Carries a human-readable message, a [`FaultKind`], an open metadata
/// map, and an optional source error for diagnostics. Immutable once
/// constructed; the builder methods consume and return `self`.
#[derive(Clone)]
pub struct Fault {
    message: String,
    kind: FaultKind,
    metadata: BTreeMap<String, serde_json::Value>,
    source: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Fault {
            message: message.into(),
            kind: FaultKind::Other,
            metadata: BTreeMap::new(),
            source: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Fault::new(message).with_kind(FaultKind::Validation)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Fault::new(message).with_kind(FaultKind::NotFound)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Fault::new(message).with_kind(FaultKind::Conflict)
    }

    pub fn unhandled(message: impl Into<String>) -> Self {
        Fault::new(message).with_kind(FaultKind::Unhandled)
    }

    pub fn with_kind(mut self, kind: FaultKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    pub fn metadata(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.metadata
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("metadata", &self.metadata)
            .finish()
    }
}

impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn StdError + 'static))
    }
}

/// An ordered batch of [`Outcome`]s.
///
/// All derived views preserve the input order. Batch producers
/// short-circuit on the first failure, so a failed batch normally holds
/// exactly one `Err` slot; the views still cope with mixed batches.
#[derive(Debug, Clone)]
pub struct Outcomes<T> {
    items: Vec<Outcome<T>>,
}

impl<T> Outcomes<T> {
    pub fn new(items: Vec<Outcome<T>>) -> Self {
        Outcomes { items }
    }

    /// A batch where every element succeeded.
    pub fn ok(values: impl IntoIterator<Item = T>) -> Self {
        Outcomes {
            items: values.into_iter().map(Ok).collect(),
        }
    }

    /// A single-element batch holding one failure. `values()` yields `[None]`.
    pub fn err(fault: Fault) -> Self {
        Outcomes {
            items: vec![Err(fault)],
        }
    }

    /// A single-element batch carrying `outcome` as-is, for lifting an
    /// already-failed outcome into batch position without losing its
    /// fault. An `Ok` input simply becomes a one-success batch.
    pub fn err_outcome(outcome: Outcome<T>) -> Self {
        Outcomes {
            items: vec![outcome],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outcome<T>> {
        self.items.iter()
    }

    /// Same-length view with `None` standing in for failed slots.
    pub fn values(&self) -> Vec<Option<&T>> {
        self.items.iter().map(|item| item.as_ref().ok()).collect()
    }

    /// Only the successful values, relative order preserved.
    pub fn ok_values(&self) -> Vec<&T> {
        self.items.iter().filter_map(|item| item.as_ref().ok()).collect()
    }

    /// Consuming variant of [`Outcomes::ok_values`].
    pub fn into_ok_values(self) -> Vec<T> {
        self.items.into_iter().filter_map(Result::ok).collect()
    }

    /// The first failing element in sequence order, or `None` iff every
    /// element succeeded. This is the short-circuit signal callers
    /// propagate upward.
    pub fn first_fault(&self) -> Option<&Fault> {
        self.items.iter().find_map(|item| item.as_ref().err())
    }

    /// Collapse the batch to just its first error: a single-element batch
    /// when any element failed, an empty batch when none did. The target
    /// value type is free because no values survive the collapse.
    pub fn with_only_first_fault<U>(&self) -> Outcomes<U> {
        match self.first_fault() {
            Some(fault) => Outcomes::err(fault.clone()),
            None => Outcomes { items: Vec::new() },
        }
    }

    /// All values when every element succeeded, or the first fault.
    pub fn into_outcome(self) -> Outcome<Vec<T>> {
        if let Some(fault) = self.first_fault() {
            return Err(fault.clone());
        }
        Ok(self.items.into_iter().filter_map(Result::ok).collect())
    }
}

impl<T> FromIterator<Outcome<T>> for Outcomes<T> {
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        Outcomes {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Outcomes<T> {
    type Item = Outcome<T>;
    type IntoIter = std::vec::IntoIter<Outcome<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
