//! The Category entity: a slugged content grouping with a recursive
//! parent/children structure.

use time::OffsetDateTime;

use crate::outcome::Outcome;
use crate::validate::{validation_fault, Validator, Violation};

use super::{Id, Updatable};

/// Plain construction input for [`Category`]. Children and parent are
/// nested details, validated recursively by the factory.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetails {
    pub id: String,
    pub slug: String,
    /// Redirect history, insertion order preserved.
    pub previous_slugs: Vec<String>,
    pub name: String,
    pub description: Option<String>,
    pub short_description: String,
    pub children: Vec<CategoryDetails>,
    pub parent: Option<Box<CategoryDetails>>,
    pub updated: OffsetDateTime,
}

/// A validated, immutable category.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: Id,
    slug: String,
    previous_slugs: Vec<String>,
    name: String,
    description: Option<String>,
    short_description: String,
    children: Vec<Category>,
    parent: Option<Box<Category>>,
    updated: OffsetDateTime,
}

impl Category {
    /// Validate `details` and construct the entity. Every violation in
    /// the details tree is reported in the fault metadata; the message
    /// surfaces the first.
    pub fn new(details: CategoryDetails) -> Outcome<Category> {
        let mut v = Validator::new();
        validate_details(&details, &mut v);
        if !v.is_clean() {
            return Err(validation_fault("category", v.into_violations()));
        }
        Ok(Category::from_valid(details))
    }

    fn from_valid(details: CategoryDetails) -> Category {
        Category {
            id: Id(details.id),
            slug: details.slug,
            previous_slugs: details.previous_slugs,
            name: details.name,
            description: details.description,
            short_description: details.short_description,
            children: details
                .children
                .into_iter()
                .map(Category::from_valid)
                .collect(),
            parent: details
                .parent
                .map(|parent| Box::new(Category::from_valid(*parent))),
            updated: details.updated,
        }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn previous_slugs(&self) -> &[String] {
        &self.previous_slugs
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn children(&self) -> &[Category] {
        &self.children
    }

    pub fn parent(&self) -> Option<&Category> {
        self.parent.as_deref()
    }

    pub fn updated(&self) -> OffsetDateTime {
        self.updated
    }

    /// Re-derive the plain details shape. Feeding the result back into
    /// [`Category::new`] succeeds and yields a field-for-field equal
    /// entity.
    pub fn details(&self) -> CategoryDetails {
        CategoryDetails {
            id: self.id.as_str().to_owned(),
            slug: self.slug.clone(),
            previous_slugs: self.previous_slugs.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            short_description: self.short_description.clone(),
            children: self.children.iter().map(Category::details).collect(),
            parent: self.parent.as_ref().map(|p| Box::new(p.details())),
            updated: self.updated,
        }
    }
}

impl Updatable for Category {
    fn id(&self) -> &Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn updated(&self) -> OffsetDateTime {
        self.updated
    }

    fn short_description(&self) -> &str {
        &self.short_description
    }
}

fn validate_details(details: &CategoryDetails, v: &mut Validator) {
    v.require_min_len("id", &details.id, 1);
    v.require_min_len("slug", &details.slug, 1);
    for (i, slug) in details.previous_slugs.iter().enumerate() {
        v.require_min_len(&format!("previousSlugs.{i}"), slug, 1);
    }
    v.require_min_len("name", &details.name, 2);
    v.require_min_len_opt("description", details.description.as_deref(), 2);
    v.require_min_len("shortDescription", &details.short_description, 2);
    for (i, child) in details.children.iter().enumerate() {
        v.absorb(&format!("children.{i}"), violations_of(child));
    }
    if let Some(parent) = &details.parent {
        v.absorb("parent", violations_of(parent));
    }
}

fn violations_of(details: &CategoryDetails) -> Vec<Violation> {
    let mut v = Validator::new();
    validate_details(details, &mut v);
    v.into_violations()
}
