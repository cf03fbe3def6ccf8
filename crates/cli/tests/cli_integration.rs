//! End-to-end tests for the `riskwise` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_store(content: &str) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    std::fs::write(file.path(), content).expect("write store");
    file
}

const VALID_STORE: &str = r#"{
    "category": {
        "health": {
            "slug": "health",
            "name": "Health",
            "shortDescription": "Staying healthy",
            "children": ["sleep"],
            "updated": "2022-01-10T09:00:00Z"
        },
        "sleep": {
            "slug": "sleep",
            "name": "Sleep",
            "shortDescription": "Getting enough sleep",
            "parentId": "health",
            "updated": "2022-01-10T10:00:00Z"
        }
    },
    "risk": {
        "sitting": {
            "category": "Health",
            "impact": "High",
            "likelihood": "Normal",
            "name": "Sedentary lifestyle",
            "type": "Risk",
            "shortDescription": "Too much sitting",
            "updated": "2022-01-10T11:00:00Z"
        }
    }
}"#;

#[test]
fn validate_accepts_a_consistent_store() {
    let store = write_store(VALID_STORE);
    Command::cargo_bin("riskwise")
        .unwrap()
        .arg("validate")
        .arg(store.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 categories, 1 risks"));
}

#[test]
fn validate_rejects_a_dangling_child_reference() {
    let store = write_store(
        r#"{
        "category": {
            "health": {
                "slug": "health",
                "name": "Health",
                "shortDescription": "Staying healthy",
                "children": ["ghost"],
                "updated": "2022-01-10T09:00:00Z"
            }
        }
    }"#,
    );
    Command::cargo_bin("riskwise")
        .unwrap()
        .arg("validate")
        .arg(store.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not find child category 'ghost'",
        ));
}

#[test]
fn validate_rejects_malformed_json() {
    let store = write_store("{not json");
    Command::cargo_bin("riskwise")
        .unwrap()
        .arg("validate")
        .arg(store.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse store JSON"));
}

#[test]
fn validate_reports_a_missing_file() {
    Command::cargo_bin("riskwise")
        .unwrap()
        .arg("validate")
        .arg("/no/such/store.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read store file"));
}
