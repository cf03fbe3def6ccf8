//! `riskwise validate` -- load a store document and check that every
//! record maps to a valid entity, including its one-level parent and
//! child references.

use std::path::Path;

use riskwise_storage::{
    shared, CategoryRepository, CategoryStore, JsonStore, RiskRepository, RiskStore,
};

pub async fn run(store_path: &Path) -> Result<(), String> {
    let store = JsonStore::load(store_path).map_err(|e| e.to_string())?;
    let store = shared(store);

    let categories = CategoryRepository::new(store.clone()).list(false).await;
    if let Some(fault) = categories.first_fault() {
        return Err(format!("store is invalid: {}", fault.message()));
    }

    let risks = RiskRepository::new(store).list(None, true).await;
    if let Some(fault) = risks.first_fault() {
        return Err(format!("store is invalid: {}", fault.message()));
    }

    println!(
        "store is valid: {} categories, {} risks",
        categories.len(),
        risks.len()
    );
    Ok(())
}
