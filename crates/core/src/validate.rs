//! Validation machinery for entity factories.
//!
//! Validation is exhaustive: every violation found in a details tree is
//! recorded, and the resulting [`Fault`] message surfaces only the first
//! while the metadata carries the full list under `"errors"`.

use serde::Serialize;

use crate::outcome::Fault;

/// Machine-readable violation codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    TooSmall,
    Required,
    #[serde(rename = "invalid_enum_value")]
    InvalidEnum,
    InvalidType,
}

impl ViolationCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationCode::TooSmall => "too_small",
            ViolationCode::Required => "required",
            ViolationCode::InvalidEnum => "invalid_enum_value",
            ViolationCode::InvalidType => "invalid_type",
        }
    }
}

/// One validation failure: the offending property path (empty for
/// whole-value failures), a code, and a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    pub code: ViolationCode,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Violation {
            path: path.into(),
            code,
            message: message.into(),
        }
    }
}

/// Accumulates violations while walking a details tree.
#[derive(Debug, Default)]
pub struct Validator {
    violations: Vec<Violation>,
}

impl Validator {
    pub fn new() -> Self {
        Validator::default()
    }

    pub fn push(&mut self, path: impl Into<String>, code: ViolationCode, message: impl Into<String>) {
        self.violations.push(Violation::new(path, code, message));
    }

    /// Require `value` to be at least `min` characters long.
    pub fn require_min_len(&mut self, path: &str, value: &str, min: usize) {
        if value.chars().count() < min {
            let noun = if min == 1 { "character" } else { "characters" };
            self.push(
                path,
                ViolationCode::TooSmall,
                format!("must contain at least {min} {noun}"),
            );
        }
    }

    /// Same as [`Validator::require_min_len`] but skips absent values.
    pub fn require_min_len_opt(&mut self, path: &str, value: Option<&str>, min: usize) {
        if let Some(value) = value {
            self.require_min_len(path, value, min);
        }
    }

    /// Absorb violations found in a nested details tree, qualifying each
    /// path with `prefix` (e.g. `children.0`).
    pub fn absorb(&mut self, prefix: &str, nested: Vec<Violation>) {
        for violation in nested {
            let path = if violation.path.is_empty() {
                prefix.to_owned()
            } else {
                format!("{prefix}.{}", violation.path)
            };
            self.violations.push(Violation {
                path,
                code: violation.code,
                message: violation.message,
            });
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Build the validation [`Fault`] for an entity from a non-empty
/// violation list. The message surfaces the first violation only; the
/// metadata enumerates all of them.
pub fn validation_fault(entity: &str, violations: Vec<Violation>) -> Fault {
    let first = &violations[0];
    let message = if first.path.is_empty() {
        format!(
            "Invalid value for {entity}: '{}' ({}).",
            first.message,
            first.code.as_str()
        )
    } else {
        format!(
            "Invalid prop {} in {entity}: '{}' ({}).",
            first.path,
            first.message,
            first.code.as_str()
        )
    };
    let errors = serde_json::to_value(&violations).unwrap_or_default();
    Fault::validation(message)
        .with_metadata("errors", errors)
        .with_metadata("errorType", serde_json::Value::String("validation".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::FaultKind;

    #[test]
    fn min_len_counts_characters_not_bytes() {
        let mut v = Validator::new();
        v.require_min_len("name", "äö", 2);
        assert!(v.is_clean());
    }

    #[test]
    fn prop_failure_message_format() {
        let mut v = Validator::new();
        v.require_min_len("name", "x", 2);
        let fault = validation_fault("category", v.into_violations());
        assert_eq!(
            fault.message(),
            "Invalid prop name in category: 'must contain at least 2 characters' (too_small)."
        );
        assert_eq!(fault.kind(), FaultKind::Validation);
    }

    #[test]
    fn whole_value_failure_message_format() {
        let fault = validation_fault(
            "identifier",
            vec![Violation::new(
                "",
                ViolationCode::TooSmall,
                "must contain at least 1 character",
            )],
        );
        assert_eq!(
            fault.message(),
            "Invalid value for identifier: 'must contain at least 1 character' (too_small)."
        );
    }

    #[test]
    fn metadata_enumerates_every_violation() {
        let mut v = Validator::new();
        v.require_min_len("name", "", 2);
        v.require_min_len("slug", "", 1);
        let fault = validation_fault("category", v.into_violations());
        let errors = fault.metadata().get("errors").and_then(|e| e.as_array());
        assert_eq!(errors.map(Vec::len), Some(2));
        assert_eq!(
            fault.metadata().get("errorType"),
            Some(&serde_json::Value::String("validation".into()))
        );
    }

    #[test]
    fn absorb_qualifies_nested_paths() {
        let mut inner = Validator::new();
        inner.require_min_len("name", "x", 2);
        let mut outer = Validator::new();
        outer.absorb("children.0", inner.into_violations());
        let violations = outer.into_violations();
        assert_eq!(violations[0].path, "children.0.name");
    }
}
