//! Risk repository: reads mirror the category repository; `create` is
//! the only in-core mutation.

use async_trait::async_trait;

use riskwise_core::{Fault, Outcome, Outcomes, Risk, RiskCategory, RiskDetails};

use crate::record::RiskRecord;
use crate::store::{JsonStore, SharedStore};
use crate::traits::RiskStore;

#[derive(Clone)]
pub struct RiskRepository {
    store: SharedStore,
}

impl RiskRepository {
    pub fn new(store: SharedStore) -> Self {
        RiskRepository { store }
    }
}

#[async_trait]
impl RiskStore for RiskRepository {
    async fn create(&self, risk: &Risk) -> Outcome<()> {
        let mut store = self.store.write().await;
        let id = risk.id().as_str();
        if store.risk.contains_key(id) {
            return Err(Fault::conflict(format!("Risk with id '{id}' already exists")));
        }
        if let Some(parent) = risk.parent() {
            let parent_id = parent.id().as_str();
            if !store.risk.contains_key(parent_id) {
                return Err(Fault::conflict(format!(
                    "Could not find parent risk '{parent_id}'"
                )));
            }
        }
        store.risk.insert(id.to_owned(), record_of(risk));
        Ok(())
    }

    async fn fetch(&self, id: &str) -> Outcome<Risk> {
        let store = self.store.read().await;
        fetch_in(&store, id)
    }

    async fn fetch_parent(&self, child_id: &str) -> Outcome<Option<Risk>> {
        let store = self.store.read().await;
        let record = store
            .risk
            .get(child_id)
            .ok_or_else(|| Fault::not_found(format!("Could not find risk '{child_id}'")))?;
        match record.parent_id.clone() {
            Some(parent_id) => Ok(Some(fetch_in(&store, &parent_id)?)),
            None => Ok(None),
        }
    }

    // Risk records carry no child list; children are derived by scanning.
    async fn fetch_children(&self, id: &str) -> Outcomes<Risk> {
        let store = self.store.read().await;
        if !store.risk.contains_key(id) {
            return Outcomes::err(Fault::not_found(format!("Could not find risk '{id}'")));
        }
        let mut children = Vec::new();
        for (child_id, record) in &store.risk {
            if record.parent_id.as_deref() != Some(id) {
                continue;
            }
            match fetch_in(&store, child_id) {
                Ok(child) => children.push(child),
                Err(fault) => return Outcomes::err(fault),
            }
        }
        Outcomes::ok(children)
    }

    async fn list(
        &self,
        category: Option<RiskCategory>,
        include_descendants: bool,
    ) -> Outcomes<Risk> {
        let store = self.store.read().await;
        let mut risks = Vec::new();
        for (id, record) in &store.risk {
            if let Some(category) = category {
                if record.category != category {
                    continue;
                }
            }
            if !include_descendants && record.parent_id.is_some() {
                continue;
            }
            match fetch_in(&store, id) {
                Ok(risk) => risks.push(risk),
                Err(fault) => return Outcomes::err(fault),
            }
        }
        Outcomes::ok(risks)
    }
}

fn fetch_in(store: &JsonStore, id: &str) -> Outcome<Risk> {
    let record = store
        .risk
        .get(id)
        .ok_or_else(|| Fault::not_found(format!("Could not find risk '{id}'")))?;

    let parent = match &record.parent_id {
        Some(parent_id) => {
            let parent_record = store.risk.get(parent_id).ok_or_else(|| {
                Fault::not_found(format!("Could not find parent risk '{parent_id}'"))
            })?;
            Some(Box::new(shallow_details(parent_id, parent_record)))
        }
        None => None,
    };

    Risk::new(RiskDetails {
        id: id.to_owned(),
        category: record.category,
        impact: record.impact,
        likelihood: record.likelihood,
        name: record.name.clone(),
        notes: record.notes.clone(),
        parent,
        risk_type: record.risk_type,
        short_description: record.short_description.clone(),
        updated: record.updated,
    })
}

fn shallow_details(id: &str, record: &RiskRecord) -> RiskDetails {
    RiskDetails {
        id: id.to_owned(),
        category: record.category,
        impact: record.impact,
        likelihood: record.likelihood,
        name: record.name.clone(),
        notes: record.notes.clone(),
        parent: None,
        risk_type: record.risk_type,
        short_description: record.short_description.clone(),
        updated: record.updated,
    }
}

fn record_of(risk: &Risk) -> RiskRecord {
    RiskRecord {
        category: risk.category(),
        impact: risk.impact(),
        likelihood: risk.likelihood(),
        name: risk.name().to_owned(),
        notes: risk.notes().map(str::to_owned),
        parent_id: risk.parent().map(|parent| parent.id().as_str().to_owned()),
        risk_type: risk.risk_type(),
        short_description: risk.short_description().to_owned(),
        updated: risk.updated(),
    }
}
