//! Filter Criteria
//!
//! Immutable criteria values owned by the UI shell. Every interaction
//! produces a new value; nothing here is mutated in place.

use std::collections::BTreeSet;
use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::engine::{AnyLabel, CategoryMatch, Criteria, Predicate, PriceWithin, TextSearch};
use crate::error::{CatalogError, Result};
use crate::model::{Article, ArticleCategory, EcoLabel, Product, ProductCategory};

/// Category dimension: no constraint, or one named category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "category", rename_all = "snake_case")]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Copy + PartialEq + fmt::Display> CategoryFilter<C> {
    pub fn is_active(&self) -> bool {
        matches!(self, CategoryFilter::Only(_))
    }

    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    /// "All" or the category's display name
    pub fn label(&self) -> String {
        match self {
            CategoryFilter::All => "All".into(),
            CategoryFilter::Only(category) => category.to_string(),
        }
    }

    /// The "All" option followed by every named category
    pub fn options(all: &[C]) -> Vec<Self> {
        std::iter::once(CategoryFilter::All)
            .chain(all.iter().copied().map(CategoryFilter::Only))
            .collect()
    }
}

/// Inclusive price range; `max: None` is unbounded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Option<Decimal>,
}

impl Default for PriceRange {
    fn default() -> Self {
        PricePreset::AnyPrice.range()
    }
}

impl PriceRange {
    pub fn new(min: Decimal, max: Option<Decimal>) -> Self {
        Self { min, max }
    }

    pub fn between(min: Decimal, max: Decimal) -> Self {
        Self { min, max: Some(max) }
    }

    pub fn at_least(min: Decimal) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }

    /// `min > max`; such a range contains nothing
    pub fn is_inverted(&self) -> bool {
        self.max.is_some_and(|max| self.min > max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Preset label when the range is one of the presets
    pub fn label(&self) -> String {
        if let Some(preset) = PricePreset::matching(self) {
            return preset.label().into();
        }
        match self.max {
            Some(max) => format!("${:.2} - ${:.2}", self.min, max),
            None => format!("Over ${:.2}", self.min),
        }
    }
}

/// Predefined ranges offered by the marketplace price selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PricePreset {
    AnyPrice,
    Under20,
    From20To50,
    Over50,
}

impl PricePreset {
    pub const ALL: &'static [Self] = &[
        PricePreset::AnyPrice,
        PricePreset::Under20,
        PricePreset::From20To50,
        PricePreset::Over50,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            PricePreset::AnyPrice => "Any Price",
            PricePreset::Under20 => "Under $20",
            PricePreset::From20To50 => "$20 - $50",
            PricePreset::Over50 => "Over $50",
        }
    }

    pub fn range(&self) -> PriceRange {
        match self {
            PricePreset::AnyPrice => PriceRange::at_least(Decimal::ZERO),
            PricePreset::Under20 => PriceRange::between(Decimal::ZERO, dec!(20)),
            PricePreset::From20To50 => PriceRange::between(dec!(20), dec!(50)),
            PricePreset::Over50 => PriceRange::at_least(dec!(50)),
        }
    }

    pub fn matching(range: &PriceRange) -> Option<Self> {
        Self::ALL.iter().copied().find(|preset| preset.range() == *range)
    }

    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|preset| preset.label() == label)
            .ok_or_else(|| CatalogError::UnknownPriceRange(label.to_string()))
    }
}

/// One chip in the "active filters" summary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveFilter {
    Category(String),
    Price(String),
    Label(EcoLabel),
}

impl ActiveFilter {
    pub fn label(&self) -> String {
        match self {
            ActiveFilter::Category(name) | ActiveFilter::Price(name) => name.clone(),
            ActiveFilter::Label(label) => label.to_string(),
        }
    }
}

/// Marketplace criteria
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCriteria {
    /// Raw search text; empty means no text filter
    pub search_term: String,

    pub category: CategoryFilter<ProductCategory>,

    pub price: PriceRange,

    /// Empty means no label filter
    pub labels: BTreeSet<EcoLabel>,
}

impl ProductCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter<ProductCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn with_preset(self, preset: PricePreset) -> Self {
        self.with_price(preset.range())
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = EcoLabel>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Add the label if absent, remove it if present
    pub fn toggle_label(mut self, label: EcoLabel) -> Self {
        if !self.labels.remove(&label) {
            self.labels.insert(label);
        }
        self
    }

    pub fn is_label_selected(&self, label: EcoLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn selected_preset(&self) -> Option<PricePreset> {
        PricePreset::matching(&self.price)
    }

    /// Every dimension reset to neutral in one step
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    /// Category, price and label chips, in that order
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut chips = Vec::new();
        if let CategoryFilter::Only(category) = self.category {
            chips.push(ActiveFilter::Category(category.to_string()));
        }
        if self.price != PriceRange::default() {
            chips.push(ActiveFilter::Price(self.price.label()));
        }
        chips.extend(self.labels.iter().copied().map(ActiveFilter::Label));
        chips
    }

    /// Drop the dimension a chip stands for
    pub fn without(mut self, chip: &ActiveFilter) -> Self {
        match chip {
            ActiveFilter::Category(_) => self.category = CategoryFilter::All,
            ActiveFilter::Price(_) => self.price = PriceRange::default(),
            ActiveFilter::Label(label) => {
                self.labels.remove(label);
            }
        }
        self
    }
}

impl Criteria<Product> for ProductCriteria {
    fn predicates(&self) -> Vec<Box<dyn Predicate<Product> + '_>> {
        vec![
            Box::new(TextSearch::new(&self.search_term)),
            Box::new(CategoryMatch::new(self.category)),
            Box::new(PriceWithin::new(self.price)),
            Box::new(AnyLabel::new(&self.labels)),
        ]
    }
}

/// Education catalog criteria
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleCriteria {
    pub search_term: String,

    pub category: CategoryFilter<ArticleCategory>,
}

impl ArticleCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: CategoryFilter<ArticleCategory>) -> Self {
        self.category = category;
        self
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}

impl Criteria<Article> for ArticleCriteria {
    fn predicates(&self) -> Vec<Box<dyn Predicate<Article> + '_>> {
        vec![
            Box::new(TextSearch::new(&self.search_term)),
            Box::new(CategoryMatch::new(self.category)),
        ]
    }
}
