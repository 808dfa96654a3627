mod common;

use std::collections::BTreeSet;

use catalog_core::{
    filter_articles, filter_products, ArticleCategory, ArticleCriteria, CategoryFilter, EcoLabel,
    PricePreset, PriceRange, Product, ProductCategory, ProductCriteria,
};
use common::{ids, store};
use rust_decimal_macros::dec;

fn product_ids(products: &[&Product]) -> Vec<u32> {
    ids(products, |p| p.id)
}

fn is_subsequence(sub: &[u32], full: &[u32]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|id| rest.any(|candidate| candidate == id))
}

fn sample_criteria() -> Vec<ProductCriteria> {
    vec![
        ProductCriteria::new(),
        ProductCriteria::new().with_search_term("bamboo"),
        ProductCriteria::new().with_category(CategoryFilter::Only(ProductCategory::Accessories)),
        ProductCriteria::new().with_preset(PricePreset::Under20),
        ProductCriteria::new().toggle_label(EcoLabel::Sustainable),
        ProductCriteria::new()
            .with_search_term("o")
            .with_preset(PricePreset::From20To50)
            .toggle_label(EcoLabel::Organic)
            .toggle_label(EcoLabel::Biodegradable),
    ]
}

#[test]
fn test_neutral_criteria_is_identity() {
    let store = store();
    let all: Vec<u32> = store.products().iter().map(|p| p.id).collect();
    let result = filter_products(store.products(), &ProductCriteria::new());
    assert_eq!(product_ids(&result), all);

    let articles = filter_articles(store.articles(), &ArticleCriteria::new());
    assert_eq!(articles.len(), store.articles().len());
    assert!(articles.iter().zip(store.articles()).all(|(a, b)| a.id == b.id));
}

#[test]
fn test_filtering_is_idempotent() {
    let store = store();
    for criteria in sample_criteria() {
        let first = filter_products(store.products(), &criteria);
        let second = filter_products(store.products(), &criteria);
        assert_eq!(first, second);
    }
}

#[test]
fn test_output_preserves_input_order() {
    let store = store();
    let all: Vec<u32> = store.products().iter().map(|p| p.id).collect();
    let reversed: Vec<Product> = store.products().iter().rev().cloned().collect();
    let reversed_ids: Vec<u32> = reversed.iter().map(|p| p.id).collect();

    for criteria in sample_criteria() {
        assert!(is_subsequence(&product_ids(&filter_products(store.products(), &criteria)), &all));
        assert!(is_subsequence(&product_ids(&filter_products(&reversed, &criteria)), &reversed_ids));
    }
}

#[test]
fn test_dimensions_compose_by_intersection() {
    let store = store();
    let a = ProductCriteria::new().with_preset(PricePreset::From20To50);
    let b = ProductCriteria::new().toggle_label(EcoLabel::Biodegradable);
    let both = a.clone().toggle_label(EcoLabel::Biodegradable);

    let only_a: BTreeSet<u32> = product_ids(&filter_products(store.products(), &a)).into_iter().collect();
    let only_b: BTreeSet<u32> = product_ids(&filter_products(store.products(), &b)).into_iter().collect();
    let combined: BTreeSet<u32> = product_ids(&filter_products(store.products(), &both)).into_iter().collect();

    assert_eq!(combined, only_a.intersection(&only_b).copied().collect());
    assert_eq!(combined, [1, 5].into_iter().collect());
}

#[test]
fn test_labels_compose_by_union() {
    let store = store();
    let organic = ProductCriteria::new().toggle_label(EcoLabel::Organic);
    let recycled = ProductCriteria::new().toggle_label(EcoLabel::Recycled);
    let either = organic.clone().toggle_label(EcoLabel::Recycled);

    let mut union: BTreeSet<u32> = product_ids(&filter_products(store.products(), &organic)).into_iter().collect();
    union.extend(product_ids(&filter_products(store.products(), &recycled)));
    let combined: BTreeSet<u32> = product_ids(&filter_products(store.products(), &either)).into_iter().collect();

    assert_eq!(combined, union);
    assert_eq!(product_ids(&filter_products(store.products(), &either)), vec![2, 3, 8]);

    let cheap_either = either.with_preset(PricePreset::Under20);
    assert!(filter_products(store.products(), &cheap_either).is_empty());
}

#[test]
fn test_search_is_case_insensitive() {
    let store = store();
    for term in ["BAMBOO", "bamboo", "BaMbOo"] {
        let result = filter_products(store.products(), &ProductCriteria::new().with_search_term(term));
        assert!(result.iter().any(|p| p.name == "Bamboo Water Bottle"), "term {term}");
    }
}

#[test]
fn test_kitchen_category_scenario() {
    let store = store();
    let criteria = ProductCriteria::new().with_category(CategoryFilter::Only(ProductCategory::Kitchen));
    let names: Vec<&str> = filter_products(store.products(), &criteria)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Beeswax Food Wraps", "Reusable Bamboo Cutlery Set"]);
}

#[test]
fn test_mid_price_scenario() {
    let store = store();
    let criteria = ProductCriteria::new().with_price(PriceRange::between(dec!(20), dec!(50)));
    let result = filter_products(store.products(), &criteria);

    let prices: Vec<_> = result.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![dec!(24.99), dec!(29.99), dec!(39.99), dec!(22.99)]);
    assert!(!prices.contains(&dec!(12.99)));
    assert!(!prices.contains(&dec!(59.99)));
}

#[test]
fn test_zero_search_scenario() {
    let store = store();
    let criteria = ArticleCriteria::new().with_search_term("zero");
    let titles: Vec<&str> = filter_articles(store.articles(), &criteria)
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(titles, vec!["How to Create a Zero-Waste Kitchen"]);

    // Eco labels are not part of the searchable text
    let labelled = ProductCriteria::new().toggle_label(EcoLabel::ZeroWaste);
    assert!(!filter_products(store.products(), &labelled).is_empty());
    let searched = ProductCriteria::new().with_search_term("zero");
    assert!(filter_products(store.products(), &searched).is_empty());
}

#[test]
fn test_empty_result_then_clear_restores_everything() {
    let store = store();
    let criteria = ProductCriteria::new()
        .with_category(CategoryFilter::Only(ProductCategory::Beauty))
        .with_preset(PricePreset::Over50);
    assert!(filter_products(store.products(), &criteria).is_empty());

    let cleared = criteria.cleared();
    assert_eq!(filter_products(store.products(), &cleared).len(), store.products().len());
}

#[test]
fn test_category_all_does_not_block_other_filters() {
    let store = store();
    let criteria = ArticleCriteria::new()
        .with_category(CategoryFilter::All)
        .with_search_term("fashion");
    let ids: Vec<u32> = filter_articles(store.articles(), &criteria).iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![2, 4]);

    let criteria = criteria.with_category(CategoryFilter::Only(ArticleCategory::ProductKnowledge));
    assert_eq!(filter_articles(store.articles(), &criteria).len(), 2);
}

#[test]
fn test_inverted_price_range_matches_nothing() {
    let store = store();
    let criteria = ProductCriteria::new().with_price(PriceRange::between(dec!(50), dec!(20)));
    assert!(filter_products(store.products(), &criteria).is_empty());
}
