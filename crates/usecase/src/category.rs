//! Category interactor: repository orchestration returning view shapes.

use std::sync::Arc;

use riskwise_core::{Outcome, Outcomes};
use riskwise_storage::CategoryStore;

use crate::log::log_outcome;
use crate::mapper;
use crate::views::CategoryView;

pub struct CategoryInteractor {
    repo: Arc<dyn CategoryStore>,
}

impl CategoryInteractor {
    pub fn new(repo: Arc<dyn CategoryStore>) -> Self {
        CategoryInteractor { repo }
    }

    pub async fn fetch(&self, id: &str) -> Outcome<CategoryView> {
        let outcome = match self.repo.fetch(id).await {
            Ok(category) => mapper::category_to_view(&category),
            Err(fault) => Err(fault),
        };
        log_outcome("fetch_category", &outcome);
        outcome
    }

    pub async fn fetch_parent(&self, child_id: &str) -> Outcome<Option<CategoryView>> {
        let outcome = match self.repo.fetch_parent(child_id).await {
            Ok(Some(parent)) => mapper::category_to_view(&parent).map(Some),
            Ok(None) => Ok(None),
            Err(fault) => Err(fault),
        };
        log_outcome("fetch_category_parent", &outcome);
        outcome
    }

    pub async fn fetch_children(&self, id: &str) -> Outcome<Vec<CategoryView>> {
        let outcome = views_of(self.repo.fetch_children(id).await);
        log_outcome("fetch_category_children", &outcome);
        outcome
    }

    pub async fn list(&self, only_root: bool) -> Outcome<Vec<CategoryView>> {
        let outcome = views_of(self.repo.list(only_root).await);
        log_outcome("list_categories", &outcome);
        outcome
    }
}

fn views_of(batch: Outcomes<riskwise_core::Category>) -> Outcome<Vec<CategoryView>> {
    let categories = batch.into_outcome()?;
    categories.iter().map(mapper::category_to_view).collect()
}
