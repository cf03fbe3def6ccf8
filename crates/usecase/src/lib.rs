//! riskwise-usecase: the service layer between the repositories and an
//! API/resolver surface.
//!
//! Interactors orchestrate repository calls and hand back flattened
//! view shapes; the mapper translates between validated domain entities
//! and those views, including the recursive parent flattening and the
//! markup transpilation seam.

pub mod category;
pub mod log;
pub mod mapper;
pub mod risk;
pub mod updated;
pub mod views;

pub use category::CategoryInteractor;
pub use log::log_outcome;
pub use mapper::{IdentityTranspiler, MarkupTranspiler};
pub use risk::RiskInteractor;
pub use updated::UpdatedInteractor;
pub use views::{CategoryView, RiskInput, RiskView, UpdatedView};
