//! Application state shared across request handlers.

use std::sync::Arc;

use riskwise_usecase::{
    CategoryInteractor, MarkupTranspiler, RiskInteractor, UpdatedInteractor,
};

pub(crate) struct AppState {
    pub(crate) categories: CategoryInteractor,
    pub(crate) risks: RiskInteractor,
    pub(crate) updated: UpdatedInteractor,
    pub(crate) transpiler: Arc<dyn MarkupTranspiler>,
}
