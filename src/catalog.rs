//! The catalog data model: snippets grouped into named categories, one JSON
//! document per language.

use serde::{Deserialize, Serialize};

/// One code example as it appears in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,
    pub description: String,
    /// One entry per source line, trailing blank line included.
    pub code: Vec<String>,
    pub tags: Vec<String>,
    pub author: String,
}

/// A named group of snippets. `categoryName` is the wire key the catalog UI
/// expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "categoryName")]
    pub category_name: String,
    pub snippets: Vec<Snippet>,
}

/// The full per-language document: an ordered list of categories, unique by
/// name, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageDocument(Vec<Category>);

impl LanguageDocument {
    pub fn new(categories: Vec<Category>) -> Self {
        LanguageDocument(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.0
    }

    /// Inserts a snippet under `category_name`. An exact-name match appends
    /// to that category; otherwise a new category goes to the end of the
    /// document, keeping earlier categories in place.
    pub fn insert(&mut self, category_name: &str, snippet: Snippet) {
        match self
            .0
            .iter_mut()
            .find(|c| c.category_name == category_name)
        {
            Some(category) => category.snippets.push(snippet),
            None => self.0.push(Category {
                category_name: category_name.to_string(),
                snippets: vec![snippet],
            }),
        }
    }
}
