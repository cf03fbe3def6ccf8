//! The reverse-chronological "recently updated" list.
//!
//! Merges the newest root categories and the newest risks into one
//! list capped to the requested count. Each source is independently
//! sorted and truncated to `count` before the final merge; ties on
//! equal timestamps break ascending by id at every sort site.

use std::sync::Arc;

use riskwise_core::{Outcomes, Updatable, Updated};
use riskwise_storage::{CategoryStore, RiskStore};

use crate::log::log_outcomes;

pub struct UpdatedInteractor {
    categories: Arc<dyn CategoryStore>,
    risks: Arc<dyn RiskStore>,
}

impl UpdatedInteractor {
    pub fn new(categories: Arc<dyn CategoryStore>, risks: Arc<dyn RiskStore>) -> Self {
        UpdatedInteractor { categories, risks }
    }

    /// The `count` most recently updated entries across root categories
    /// and all risks (descendants included), newest first.
    pub async fn list(&self, count: usize) -> Outcomes<Updated> {
        let categories = self.categories.list(true).await;
        if categories.first_fault().is_some() {
            log_outcomes("list_updated", &categories);
            return categories.with_only_first_fault();
        }
        let mut categories = categories.into_ok_values();
        sort_newest_first(&mut categories);

        let risks = self.risks.list(None, true).await;
        if risks.first_fault().is_some() {
            log_outcomes("list_updated", &risks);
            return risks.with_only_first_fault();
        }
        let mut risks = risks.into_ok_values();
        sort_newest_first(&mut risks);

        let mut merged: Vec<Updated> = categories
            .into_iter()
            .take(count)
            .map(Updated::Category)
            .chain(risks.into_iter().take(count).map(Updated::Risk))
            .collect();
        sort_newest_first(&mut merged);
        merged.truncate(count);

        let outcomes = Outcomes::ok(merged);
        log_outcomes("list_updated", &outcomes);
        outcomes
    }
}

fn sort_newest_first<T: Updatable>(items: &mut [T]) {
    items.sort_by(|a, b| {
        b.updated()
            .cmp(&a.updated())
            .then_with(|| a.id().cmp(b.id()))
    });
}
