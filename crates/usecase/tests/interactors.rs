//! Interactor-level flows: wire input in, view shapes out.

use std::sync::Arc;

use riskwise_core::FaultKind;
use riskwise_storage::{
    shared, CategoryRecord, CategoryRepository, JsonStore, RiskRepository,
};
use riskwise_usecase::{
    CategoryInteractor, IdentityTranspiler, RiskInput, RiskInteractor,
};
use time::macros::datetime;

fn risk_interactor(store: JsonStore) -> RiskInteractor {
    RiskInteractor::new(
        Arc::new(RiskRepository::new(shared(store))),
        Arc::new(IdentityTranspiler),
    )
}

fn input(id: &str) -> RiskInput {
    RiskInput {
        id: id.to_owned(),
        category: "WEALTH".to_owned(),
        impact: "NORMAL".to_owned(),
        likelihood: "HIGH".to_owned(),
        name: "Inflation".to_owned(),
        notes: Some("prices **rise**".to_owned()),
        parent_id: None,
        risk_type: "RISK".to_owned(),
        short_description: "Prices rise".to_owned(),
        updated: Some(datetime!(2022-01-10 08:00 UTC)),
    }
}

#[tokio::test]
async fn create_then_fetch_returns_the_view() {
    let interactor = risk_interactor(JsonStore::new());
    let created = interactor.create(&input("inflation")).await.unwrap();
    assert_eq!(created.category, "WEALTH");

    let fetched = interactor.fetch("inflation").await.unwrap();
    assert_eq!(fetched.id, "inflation");
    assert_eq!(fetched.notes.as_deref(), Some("prices **rise**"));
}

#[tokio::test]
async fn create_with_unknown_parent_is_a_conflict() {
    let interactor = risk_interactor(JsonStore::new());
    let mut bad = input("child");
    bad.parent_id = Some("ghost".to_owned());
    let fault = interactor.create(&bad).await.unwrap_err();
    assert_eq!(fault.kind(), FaultKind::Conflict);
    assert_eq!(fault.message(), "Could not find parent risk 'ghost'");
}

#[tokio::test]
async fn create_with_parent_links_and_lists() {
    let interactor = risk_interactor(JsonStore::new());
    interactor.create(&input("base")).await.unwrap();
    let mut child = input("derived");
    child.parent_id = Some("base".to_owned());
    let created = interactor.create(&child).await.unwrap();
    assert_eq!(created.parent.as_ref().map(|p| p.id.as_str()), Some("base"));

    let top_level = interactor.list(Some("WEALTH"), false).await.unwrap();
    let ids: Vec<&str> = top_level.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["base"]);

    let children = interactor.fetch_children("base").await.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, "derived");
}

#[tokio::test]
async fn fetch_parent_maps_the_linked_risk() {
    let interactor = risk_interactor(JsonStore::new());
    interactor.create(&input("base")).await.unwrap();
    let mut child = input("derived");
    child.parent_id = Some("base".to_owned());
    interactor.create(&child).await.unwrap();

    let parent = interactor.fetch_parent("derived").await.unwrap().unwrap();
    assert_eq!(parent.id, "base");
    assert_eq!(parent.category, "WEALTH");
    assert!(interactor.fetch_parent("base").await.unwrap().is_none());

    let fault = interactor.fetch_parent("ghost").await.unwrap_err();
    assert_eq!(fault.kind(), FaultKind::NotFound);
    assert_eq!(fault.message(), "Could not find risk 'ghost'");
}

#[tokio::test]
async fn list_rejects_an_unknown_category_filter() {
    let interactor = risk_interactor(JsonStore::new());
    let fault = interactor.list(Some("FAME"), true).await.unwrap_err();
    assert_eq!(fault.message(), "Unhandled risk category 'FAME'");
}

#[tokio::test]
async fn category_interactor_maps_parent_and_children() {
    let store = JsonStore::new()
        .with_category("root", {
            CategoryRecord {
                slug: "root".to_owned(),
                previous_slugs: Vec::new(),
                name: "Root category".to_owned(),
                description: None,
                short_description: "The root".to_owned(),
                parent_id: None,
                children: vec!["child".to_owned()],
                updated: datetime!(2022-01-10 09:00 UTC),
            }
        })
        .with_category("child", {
            CategoryRecord {
                slug: "child".to_owned(),
                previous_slugs: vec!["old-child".to_owned()],
                name: "Child category".to_owned(),
                description: Some("A child".to_owned()),
                short_description: "The child".to_owned(),
                parent_id: Some("root".to_owned()),
                children: Vec::new(),
                updated: datetime!(2022-01-10 10:00 UTC),
            }
        });
    let interactor = CategoryInteractor::new(Arc::new(CategoryRepository::new(shared(store))));

    let child = interactor.fetch("child").await.unwrap();
    assert_eq!(child.parent.as_ref().map(|p| p.id.as_str()), Some("root"));
    assert_eq!(child.previous_slugs, vec!["old-child"]);

    let parent = interactor.fetch_parent("child").await.unwrap().unwrap();
    assert_eq!(parent.id, "root");
    assert!(interactor.fetch_parent("root").await.unwrap().is_none());

    let children = interactor.fetch_children("root").await.unwrap();
    assert_eq!(children.len(), 1);

    let roots = interactor.list(true).await.unwrap();
    let ids: Vec<&str> = roots.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["root"]);
}
