//! Risk interactor: reads mirror the category interactor; `create`
//! maps wire input through validation and the repository write.

use std::sync::Arc;

use riskwise_core::{Outcome, Outcomes, Risk};
use riskwise_storage::RiskStore;

use crate::log::log_outcome;
use crate::mapper::{self, MarkupTranspiler};
use crate::views::{RiskInput, RiskView};

pub struct RiskInteractor {
    repo: Arc<dyn RiskStore>,
    transpiler: Arc<dyn MarkupTranspiler>,
}

impl RiskInteractor {
    pub fn new(repo: Arc<dyn RiskStore>, transpiler: Arc<dyn MarkupTranspiler>) -> Self {
        RiskInteractor { repo, transpiler }
    }

    pub async fn fetch(&self, id: &str) -> Outcome<RiskView> {
        let outcome = match self.repo.fetch(id).await {
            Ok(risk) => mapper::risk_to_view(&risk, self.transpiler.as_ref()),
            Err(fault) => Err(fault),
        };
        log_outcome("fetch_risk", &outcome);
        outcome
    }

    pub async fn fetch_parent(&self, child_id: &str) -> Outcome<Option<RiskView>> {
        let outcome = match self.repo.fetch_parent(child_id).await {
            Ok(Some(parent)) => {
                mapper::risk_to_view(&parent, self.transpiler.as_ref()).map(Some)
            }
            Ok(None) => Ok(None),
            Err(fault) => Err(fault),
        };
        log_outcome("fetch_risk_parent", &outcome);
        outcome
    }

    pub async fn fetch_children(&self, id: &str) -> Outcome<Vec<RiskView>> {
        let outcome = self.views_of(self.repo.fetch_children(id).await);
        log_outcome("fetch_risk_children", &outcome);
        outcome
    }

    pub async fn list(
        &self,
        category: Option<&str>,
        include_descendants: bool,
    ) -> Outcome<Vec<RiskView>> {
        let outcome = self.list_inner(category, include_descendants).await;
        log_outcome("list_risks", &outcome);
        outcome
    }

    async fn list_inner(
        &self,
        category: Option<&str>,
        include_descendants: bool,
    ) -> Outcome<Vec<RiskView>> {
        let category = category
            .map(mapper::risk_category_from_view)
            .transpose()?;
        self.views_of(self.repo.list(category, include_descendants).await)
    }

    /// Validate the input, resolve its declared parent, and write the
    /// record. A parent id with no backing risk is a conflict.
    pub async fn create(&self, input: &RiskInput) -> Outcome<RiskView> {
        let outcome = self.create_inner(input).await;
        log_outcome("create_risk", &outcome);
        outcome
    }

    async fn create_inner(&self, input: &RiskInput) -> Outcome<RiskView> {
        let parent = match &input.parent_id {
            Some(parent_id) => Some(self.repo.fetch(parent_id).await.map_err(|_| {
                riskwise_core::Fault::conflict(format!(
                    "Could not find parent risk '{parent_id}'"
                ))
            })?),
            None => None,
        };
        let risk = mapper::risk_from_input(input, parent.as_ref())?;
        self.repo.create(&risk).await?;
        mapper::risk_to_view(&risk, self.transpiler.as_ref())
    }

    fn views_of(&self, batch: Outcomes<Risk>) -> Outcome<Vec<RiskView>> {
        let risks = batch.into_outcome()?;
        risks
            .iter()
            .map(|risk| mapper::risk_to_view(risk, self.transpiler.as_ref()))
            .collect()
    }
}
