//! Mapping between domain entities and usecase views.
//!
//! Parent chains are flattened recursively. Validated data is assumed
//! acyclic, but a visited-id guard converts a cycle into a clean
//! `Unhandled` fault instead of an infinite loop. Enum translation is a
//! strict 1:1 switch; an unrecognized value is a defect, never a
//! silent default.

use std::collections::HashSet;

use time::OffsetDateTime;

use riskwise_core::{
    Category, Fault, Outcome, Risk, RiskCategory, RiskDetails, RiskLevel, RiskType, Updated,
};

use crate::views::{CategoryView, RiskInput, RiskView, UpdatedView};

// ── Enum translation ─────────────────────────────────────────────────

pub fn risk_category_to_view(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Health => "HEALTH",
        RiskCategory::Wealth => "WEALTH",
        RiskCategory::Security => "SECURITY",
    }
}

pub fn risk_category_from_view(value: &str) -> Outcome<RiskCategory> {
    match value {
        "HEALTH" => Ok(RiskCategory::Health),
        "WEALTH" => Ok(RiskCategory::Wealth),
        "SECURITY" => Ok(RiskCategory::Security),
        other => Err(Fault::unhandled(format!("Unhandled risk category '{other}'"))),
    }
}

pub fn risk_level_to_view(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "HIGH",
        RiskLevel::Normal => "NORMAL",
    }
}

pub fn risk_level_from_view(value: &str) -> Outcome<RiskLevel> {
    match value {
        "HIGH" => Ok(RiskLevel::High),
        "NORMAL" => Ok(RiskLevel::Normal),
        other => Err(Fault::unhandled(format!("Unhandled risk level '{other}'"))),
    }
}

pub fn risk_type_to_view(risk_type: RiskType) -> &'static str {
    match risk_type {
        RiskType::Risk => "RISK",
        RiskType::Goal => "GOAL",
        RiskType::Condition => "CONDITION",
    }
}

pub fn risk_type_from_view(value: &str) -> Outcome<RiskType> {
    match value {
        "RISK" => Ok(RiskType::Risk),
        "GOAL" => Ok(RiskType::Goal),
        "CONDITION" => Ok(RiskType::Condition),
        other => Err(Fault::unhandled(format!("Unhandled risk type '{other}'"))),
    }
}

// ── Markup transpilation seam ────────────────────────────────────────

/// Injected collaborator that turns raw markup notes into their
/// rendered form. Called exactly once per mapped risk; the output is
/// passed through without validation.
pub trait MarkupTranspiler: Send + Sync {
    fn transpile(&self, markup: Option<&str>) -> Option<String>;
}

/// Pass-through transpiler for tests and plain-text deployments.
pub struct IdentityTranspiler;

impl MarkupTranspiler for IdentityTranspiler {
    fn transpile(&self, markup: Option<&str>) -> Option<String> {
        markup.map(str::to_owned)
    }
}

// ── Domain → view ────────────────────────────────────────────────────

pub fn category_to_view(category: &Category) -> Outcome<CategoryView> {
    let mut visited = HashSet::new();
    category_to_view_guarded(category, &mut visited)
}

fn category_to_view_guarded(
    category: &Category,
    visited: &mut HashSet<String>,
) -> Outcome<CategoryView> {
    let id = category.id().as_str();
    if !visited.insert(id.to_owned()) {
        return Err(Fault::unhandled(format!(
            "Cycle detected in category parent chain at '{id}'"
        )));
    }
    let parent = match category.parent() {
        Some(parent) => Some(Box::new(category_to_view_guarded(parent, visited)?)),
        None => None,
    };
    let mut children = Vec::with_capacity(category.children().len());
    for child in category.children() {
        // Children are owned one level deep; the guard only matters on
        // the parent chain.
        let mut child_visited = HashSet::new();
        children.push(category_to_view_guarded(child, &mut child_visited)?);
    }
    Ok(CategoryView {
        id: id.to_owned(),
        slug: category.slug().to_owned(),
        previous_slugs: category.previous_slugs().to_vec(),
        name: category.name().to_owned(),
        description: category.description().map(str::to_owned),
        short_description: category.short_description().to_owned(),
        parent,
        children,
        updated: category.updated(),
    })
}

pub fn risk_to_view(risk: &Risk, transpiler: &dyn MarkupTranspiler) -> Outcome<RiskView> {
    let mut visited = HashSet::new();
    risk_to_view_guarded(risk, transpiler, &mut visited)
}

fn risk_to_view_guarded(
    risk: &Risk,
    transpiler: &dyn MarkupTranspiler,
    visited: &mut HashSet<String>,
) -> Outcome<RiskView> {
    let id = risk.id().as_str();
    if !visited.insert(id.to_owned()) {
        return Err(Fault::unhandled(format!(
            "Cycle detected in risk parent chain at '{id}'"
        )));
    }
    let parent = match risk.parent() {
        Some(parent) => Some(Box::new(risk_to_view_guarded(parent, transpiler, visited)?)),
        None => None,
    };
    Ok(RiskView {
        id: id.to_owned(),
        category: risk_category_to_view(risk.category()).to_owned(),
        impact: risk_level_to_view(risk.impact()).to_owned(),
        likelihood: risk_level_to_view(risk.likelihood()).to_owned(),
        name: risk.name().to_owned(),
        notes: transpiler.transpile(risk.notes()),
        parent,
        risk_type: risk_type_to_view(risk.risk_type()).to_owned(),
        short_description: risk.short_description().to_owned(),
        updated: risk.updated(),
    })
}

pub fn updated_to_view(
    updated: &Updated,
    transpiler: &dyn MarkupTranspiler,
) -> Outcome<UpdatedView> {
    match updated {
        Updated::Category(category) => Ok(UpdatedView::Category(category_to_view(category)?)),
        Updated::Risk(risk) => Ok(UpdatedView::Risk(risk_to_view(risk, transpiler)?)),
    }
}

// ── View → domain ────────────────────────────────────────────────────

/// Build a domain risk from wire input, with the already-resolved
/// parent (when the input referenced one) attached as entity details.
pub fn risk_from_input(input: &RiskInput, parent: Option<&Risk>) -> Outcome<Risk> {
    Risk::new(RiskDetails {
        id: input.id.clone(),
        category: risk_category_from_view(&input.category)?,
        impact: risk_level_from_view(&input.impact)?,
        likelihood: risk_level_from_view(&input.likelihood)?,
        name: input.name.clone(),
        notes: input.notes.clone(),
        parent: parent.map(|p| Box::new(p.details())),
        risk_type: risk_type_from_view(&input.risk_type)?,
        short_description: input.short_description.clone(),
        updated: input.updated.unwrap_or_else(OffsetDateTime::now_utc),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskwise_core::{CategoryDetails, FaultKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use time::macros::datetime;

    fn category_details(id: &str, name: &str) -> CategoryDetails {
        CategoryDetails {
            id: id.to_owned(),
            slug: id.to_owned(),
            previous_slugs: Vec::new(),
            name: name.to_owned(),
            description: None,
            short_description: format!("About {name}"),
            children: Vec::new(),
            parent: None,
            updated: datetime!(2022-01-10 09:00 UTC),
        }
    }

    fn risk_details(id: &str) -> RiskDetails {
        RiskDetails {
            id: id.to_owned(),
            category: RiskCategory::Health,
            impact: RiskLevel::High,
            likelihood: RiskLevel::Normal,
            name: "Sedentary lifestyle".to_owned(),
            notes: Some("raw notes".to_owned()),
            parent: None,
            risk_type: RiskType::Risk,
            short_description: "Too much sitting".to_owned(),
            updated: datetime!(2022-01-10 11:00 UTC),
        }
    }

    #[test]
    fn category_round_trip_recovers_parent_and_child_ids() {
        let mut details = category_details("mid", "Middle category");
        details.parent = Some(Box::new(category_details("root", "Root category")));
        details.children = vec![
            category_details("leaf-a", "Leaf A"),
            category_details("leaf-b", "Leaf B"),
        ];
        let category = Category::new(details).unwrap();
        let view = category_to_view(&category).unwrap();
        assert_eq!(view.parent.as_ref().map(|p| p.id.as_str()), Some("root"));
        assert_eq!(view.children[0].id, "leaf-a");
        assert_eq!(view.children[1].id, "leaf-b");
    }

    #[test]
    fn self_referential_parent_id_is_caught_by_the_cycle_guard() {
        // A store record can declare itself as its own parent; the
        // repository then materializes two nodes with the same id.
        let mut details = category_details("a", "Self parent");
        details.parent = Some(Box::new(category_details("a", "Self parent")));
        let category = Category::new(details).unwrap();
        let fault = category_to_view(&category).unwrap_err();
        assert_eq!(
            fault.message(),
            "Cycle detected in category parent chain at 'a'"
        );
        assert_eq!(fault.kind(), FaultKind::Unhandled);
    }

    #[test]
    fn risk_view_translates_enums_to_screaming_case() {
        let risk = Risk::new(risk_details("sitting")).unwrap();
        let view = risk_to_view(&risk, &IdentityTranspiler).unwrap();
        assert_eq!(view.category, "HEALTH");
        assert_eq!(view.impact, "HIGH");
        assert_eq!(view.likelihood, "NORMAL");
        assert_eq!(view.risk_type, "RISK");
    }

    #[test]
    fn unknown_enum_string_is_an_unhandled_fault() {
        let fault = risk_category_from_view("FAME").unwrap_err();
        assert_eq!(fault.message(), "Unhandled risk category 'FAME'");
        assert_eq!(fault.kind(), FaultKind::Unhandled);
        assert_eq!(
            risk_level_from_view("EXTREME").unwrap_err().message(),
            "Unhandled risk level 'EXTREME'"
        );
        assert_eq!(
            risk_type_from_view("DREAM").unwrap_err().message(),
            "Unhandled risk type 'DREAM'"
        );
    }

    struct CountingTranspiler(AtomicUsize);

    impl MarkupTranspiler for CountingTranspiler {
        fn transpile(&self, markup: Option<&str>) -> Option<String> {
            self.0.fetch_add(1, Ordering::SeqCst);
            markup.map(|m| format!("<p>{m}</p>"))
        }
    }

    #[test]
    fn transpiler_runs_once_per_mapped_risk() {
        let mut details = risk_details("child");
        details.parent = Some(Box::new(risk_details("base")));
        let risk = Risk::new(details).unwrap();
        let transpiler = CountingTranspiler(AtomicUsize::new(0));
        let view = risk_to_view(&risk, &transpiler).unwrap();
        assert_eq!(view.notes.as_deref(), Some("<p>raw notes</p>"));
        // Once for the risk, once for its mapped parent.
        assert_eq!(transpiler.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn risk_from_input_builds_a_validated_entity() {
        let input = RiskInput {
            id: "inflation".to_owned(),
            category: "WEALTH".to_owned(),
            impact: "NORMAL".to_owned(),
            likelihood: "HIGH".to_owned(),
            name: "Inflation".to_owned(),
            notes: None,
            parent_id: None,
            risk_type: "RISK".to_owned(),
            short_description: "Prices rise".to_owned(),
            updated: Some(datetime!(2022-01-10 08:00 UTC)),
        };
        let risk = risk_from_input(&input, None).unwrap();
        assert_eq!(risk.category(), RiskCategory::Wealth);
        assert_eq!(risk.updated(), datetime!(2022-01-10 08:00 UTC));
    }

    #[test]
    fn risk_from_input_rejects_bad_enum_before_validation() {
        let input = RiskInput {
            id: "x".to_owned(),
            category: "FAME".to_owned(),
            impact: "HIGH".to_owned(),
            likelihood: "HIGH".to_owned(),
            name: "Name".to_owned(),
            notes: None,
            parent_id: None,
            risk_type: "RISK".to_owned(),
            short_description: "Short".to_owned(),
            updated: None,
        };
        let fault = risk_from_input(&input, None).unwrap_err();
        assert_eq!(fault.kind(), FaultKind::Unhandled);
    }
}
