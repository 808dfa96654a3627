//! Filter Dimensions

use std::collections::BTreeSet;

use super::{Predicate, Searchable};
use crate::criteria::{CategoryFilter, PriceRange};
use crate::model::{EcoLabel, Product};

/// Case-insensitive substring match over name, descriptions and category
pub struct TextSearch {
    needle: String,
}

impl TextSearch {
    pub fn new(term: &str) -> Self {
        Self { needle: term.to_lowercase() }
    }

    fn hit(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}

impl<T: Searchable> Predicate<T> for TextSearch {
    fn name(&self) -> &'static str {
        "search"
    }

    // Raw non-empty check; whitespace-only terms still filter
    fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    fn matches(&self, item: &T) -> bool {
        self.hit(item.primary_text())
            || item.descriptive_texts().into_iter().any(|text| self.hit(text))
            || self.hit(&item.category().to_string())
    }
}

/// Exact category equality
pub struct CategoryMatch<C> {
    filter: CategoryFilter<C>,
}

impl<C> CategoryMatch<C> {
    pub fn new(filter: CategoryFilter<C>) -> Self {
        Self { filter }
    }
}

impl<T: Searchable> Predicate<T> for CategoryMatch<T::Category> {
    fn name(&self) -> &'static str {
        "category"
    }

    fn is_active(&self) -> bool {
        self.filter.is_active()
    }

    fn matches(&self, item: &T) -> bool {
        self.filter.matches(item.category())
    }
}

/// Inclusive price bounds; always applied
pub struct PriceWithin {
    range: PriceRange,
}

impl PriceWithin {
    pub fn new(range: PriceRange) -> Self {
        if range.is_inverted() {
            tracing::warn!(min = %range.min, max = ?range.max, "inverted price range matches nothing");
        }
        Self { range }
    }
}

impl Predicate<Product> for PriceWithin {
    fn name(&self) -> &'static str {
        "price"
    }

    fn is_active(&self) -> bool {
        true
    }

    fn matches(&self, item: &Product) -> bool {
        self.range.contains(item.price)
    }
}

/// Any-of match between the product's labels and the selection
pub struct AnyLabel<'a> {
    selected: &'a BTreeSet<EcoLabel>,
}

impl<'a> AnyLabel<'a> {
    pub fn new(selected: &'a BTreeSet<EcoLabel>) -> Self {
        Self { selected }
    }
}

impl Predicate<Product> for AnyLabel<'_> {
    fn name(&self) -> &'static str {
        "labels"
    }

    fn is_active(&self) -> bool {
        !self.selected.is_empty()
    }

    fn matches(&self, item: &Product) -> bool {
        item.eco_labels.iter().any(|label| self.selected.contains(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductCategory;
    use rust_decimal_macros::dec;

    fn bottle() -> Product {
        Product::new(1, "Bamboo Water Bottle", dec!(24.99), ProductCategory::Home)
            .with_labels(&[EcoLabel::Biodegradable, EcoLabel::PlasticFree])
            .with_short_description("Stay hydrated sustainably.")
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let item = bottle();
        assert!(TextSearch::new("BAMBOO").matches(&item));
        assert!(TextSearch::new("bamboo").matches(&item));
        assert!(TextSearch::new("hydrated").matches(&item));
        assert!(TextSearch::new("home").matches(&item));
        assert!(!TextSearch::new("plastic").matches(&item));
    }

    #[test]
    fn test_text_search_inactive_when_empty() {
        assert!(!Predicate::<Product>::is_active(&TextSearch::new("")));
        assert!(Predicate::<Product>::is_active(&TextSearch::new(" ")));
    }

    #[test]
    fn test_category_match_is_exact() {
        let item = bottle();
        let home = CategoryMatch::new(CategoryFilter::Only(ProductCategory::Home));
        let kitchen = CategoryMatch::new(CategoryFilter::Only(ProductCategory::Kitchen));
        let all = CategoryMatch::new(CategoryFilter::<ProductCategory>::All);

        assert!(home.matches(&item));
        assert!(!kitchen.matches(&item));
        assert!(!Predicate::<Product>::is_active(&all));
    }

    #[test]
    fn test_any_label() {
        let item = bottle();
        let selected: BTreeSet<_> = [EcoLabel::Organic, EcoLabel::PlasticFree].into_iter().collect();
        assert!(AnyLabel::new(&selected).matches(&item));

        let selected: BTreeSet<_> = [EcoLabel::Organic].into_iter().collect();
        assert!(!AnyLabel::new(&selected).matches(&item));

        let none = BTreeSet::new();
        assert!(!AnyLabel::new(&none).is_active());
    }

    #[test]
    fn test_price_within_inverted_matches_nothing() {
        let item = bottle();
        let predicate = PriceWithin::new(PriceRange::between(dec!(30), dec!(10)));
        assert!(predicate.is_active());
        assert!(!predicate.matches(&item));
    }
}
