//! Catalog Filter Engine
//!
//! A list of predicates, AND-combined, applied as a stable filter over an
//! immutable collection. Only active predicates constrain the result; the
//! input order of surviving items is preserved.
//!
//! ```text
//! items ──▶ [ text ] ──▶ [ category ] ──▶ [ price ] ──▶ [ labels ] ──▶ subset
//!            any field     exact match     inclusive      any-of
//! ```

mod predicates;

pub use predicates::{AnyLabel, CategoryMatch, PriceWithin, TextSearch};

use std::fmt;

use crate::criteria::{ArticleCriteria, ProductCriteria};
use crate::model::{Article, Product};

/// Fields an item exposes to text search and category filtering
pub trait Searchable {
    type Category: Copy + PartialEq + fmt::Display;

    /// Name or title
    fn primary_text(&self) -> &str;

    /// Summary / description fields that are present on the record
    fn descriptive_texts(&self) -> Vec<&str>;

    fn category(&self) -> Self::Category;
}

impl Searchable for Product {
    type Category = crate::model::ProductCategory;

    fn primary_text(&self) -> &str {
        &self.name
    }

    fn descriptive_texts(&self) -> Vec<&str> {
        self.short_description
            .iter()
            .chain(self.description.iter())
            .map(String::as_str)
            .collect()
    }

    fn category(&self) -> Self::Category {
        self.category
    }
}

impl Searchable for Article {
    type Category = crate::model::ArticleCategory;

    fn primary_text(&self) -> &str {
        &self.title
    }

    fn descriptive_texts(&self) -> Vec<&str> {
        vec![self.summary.as_str()]
    }

    fn category(&self) -> Self::Category {
        self.category
    }
}

/// One filter dimension
pub trait Predicate<T> {
    /// Dimension name, used in logs
    fn name(&self) -> &'static str;

    /// Inactive predicates impose no constraint
    fn is_active(&self) -> bool;

    fn matches(&self, item: &T) -> bool;
}

/// A criteria value that knows which predicates it stands for
pub trait Criteria<T> {
    fn predicates(&self) -> Vec<Box<dyn Predicate<T> + '_>>;
}

/// AND-combination of predicates over a collection of `T`
pub struct FilterEngine<'c, T> {
    predicates: Vec<Box<dyn Predicate<T> + 'c>>,
}

impl<T> Default for FilterEngine<'_, T> {
    fn default() -> Self {
        Self { predicates: Vec::new() }
    }
}

impl<'c, T> FilterEngine<'c, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_criteria<C: Criteria<T>>(criteria: &'c C) -> Self {
        Self { predicates: criteria.predicates() }
    }

    /// Add another dimension
    pub fn with(mut self, predicate: impl Predicate<T> + 'c) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    pub fn active_dimensions(&self) -> Vec<&'static str> {
        self.predicates
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.name())
            .collect()
    }

    /// Items satisfying every active predicate, in input order
    pub fn apply<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        let active: Vec<&(dyn Predicate<T> + 'c)> = self.predicates
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.as_ref())
            .collect();

        let matched: Vec<&T> = items
            .iter()
            .filter(|item| active.iter().all(|p| p.matches(item)))
            .collect();

        tracing::debug!(
            total = items.len(),
            matched = matched.len(),
            dimensions = ?self.active_dimensions(),
            "catalog filter applied"
        );

        matched
    }
}

/// Filter any collection by a criteria value
pub fn filter<'a, T, C: Criteria<T>>(items: &'a [T], criteria: &C) -> Vec<&'a T> {
    FilterEngine::from_criteria(criteria).apply(items)
}

pub fn filter_products<'a>(products: &'a [Product], criteria: &ProductCriteria) -> Vec<&'a Product> {
    filter(products, criteria)
}

pub fn filter_articles<'a>(articles: &'a [Article], criteria: &ArticleCriteria) -> Vec<&'a Article> {
    filter(articles, criteria)
}
