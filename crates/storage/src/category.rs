//! Category repository: reads over the store with one level of
//! parent/child resolution per call.

use async_trait::async_trait;

use riskwise_core::{Category, CategoryDetails, Fault, Outcome, Outcomes};

use crate::record::CategoryRecord;
use crate::store::{JsonStore, SharedStore};
use crate::traits::CategoryStore;

#[derive(Clone)]
pub struct CategoryRepository {
    store: SharedStore,
}

impl CategoryRepository {
    pub fn new(store: SharedStore) -> Self {
        CategoryRepository { store }
    }
}

#[async_trait]
impl CategoryStore for CategoryRepository {
    // Resolution is bounded to one level per call: the parent's own
    // parent and the children's own children stay unresolved.
    async fn fetch(&self, id: &str) -> Outcome<Category> {
        let store = self.store.read().await;
        fetch_in(&store, id)
    }

    async fn fetch_parent(&self, child_id: &str) -> Outcome<Option<Category>> {
        let store = self.store.read().await;
        let record = store
            .category
            .get(child_id)
            .ok_or_else(|| Fault::not_found(format!("Could not find category '{child_id}'")))?;
        match record.parent_id.clone() {
            Some(parent_id) => Ok(Some(fetch_in(&store, &parent_id)?)),
            None => Ok(None),
        }
    }

    async fn fetch_children(&self, id: &str) -> Outcomes<Category> {
        let store = self.store.read().await;
        let record = match store.category.get(id) {
            Some(record) => record,
            None => {
                return Outcomes::err(Fault::not_found(format!("Could not find category '{id}'")))
            }
        };
        let mut children = Vec::with_capacity(record.children.len());
        for child_id in &record.children {
            match fetch_in(&store, child_id) {
                Ok(child) => children.push(child),
                Err(fault) => return Outcomes::err(fault),
            }
        }
        Outcomes::ok(children)
    }

    async fn list(&self, only_root: bool) -> Outcomes<Category> {
        let store = self.store.read().await;
        let mut categories = Vec::new();
        for (id, record) in &store.category {
            if only_root && record.parent_id.is_some() {
                continue;
            }
            match fetch_in(&store, id) {
                Ok(category) => categories.push(category),
                Err(fault) => return Outcomes::err(fault),
            }
        }
        Outcomes::ok(categories)
    }
}

fn fetch_in(store: &JsonStore, id: &str) -> Outcome<Category> {
    let record = store
        .category
        .get(id)
        .ok_or_else(|| Fault::not_found(format!("Could not find category '{id}'")))?;

    let parent = match &record.parent_id {
        Some(parent_id) => {
            let parent_record = store.category.get(parent_id).ok_or_else(|| {
                Fault::not_found(format!("Could not find parent category '{parent_id}'"))
            })?;
            Some(Box::new(shallow_details(parent_id, parent_record)))
        }
        None => None,
    };

    let mut children = Vec::with_capacity(record.children.len());
    for child_id in &record.children {
        let child_record = store.category.get(child_id).ok_or_else(|| {
            Fault::not_found(format!("Could not find child category '{child_id}'"))
        })?;
        children.push(shallow_details(child_id, child_record));
    }

    Category::new(CategoryDetails {
        id: id.to_owned(),
        slug: record.slug.clone(),
        previous_slugs: record.previous_slugs.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        short_description: record.short_description.clone(),
        children,
        parent,
        updated: record.updated,
    })
}

/// Record to details without resolving the record's own references.
fn shallow_details(id: &str, record: &CategoryRecord) -> CategoryDetails {
    CategoryDetails {
        id: id.to_owned(),
        slug: record.slug.clone(),
        previous_slugs: record.previous_slugs.clone(),
        name: record.name.clone(),
        description: record.description.clone(),
        short_description: record.short_description.clone(),
        children: Vec::new(),
        parent: None,
        updated: record.updated,
    }
}
