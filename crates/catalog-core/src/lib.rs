//! # catalog-core
//!
//! Static catalog for an eco-conscious storefront, and the multi-criteria
//! filter engine behind the Marketplace and Education pages.
//!
//! ## Filtering
//!
//! One engine serves both collections. Each criteria value expands to a list
//! of predicates that are AND-combined; inactive ones are skipped:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Dimension   Active when              Item matches when      │
//! ├──────────────────────────────────────────────────────────────┤
//! │  search      term non-empty           term ⊂ name | summary  │
//! │                                              | category      │
//! │  category    Only(c)                  item.category == c     │
//! │  price       always (products)        min <= price <= max    │
//! │  labels      selection non-empty      any label selected     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The result is a stable subsequence of the input. Filtering is pure and
//! total: no errors, no mutation, same input gives the same output.
//!
//! ## Example
//!
//! ```rust,ignore
//! use catalog_core::{CatalogStore, CategoryFilter, ProductCategory, ProductCriteria, filter_products};
//!
//! let store = CatalogStore::load()?;
//! let criteria = ProductCriteria::new()
//!     .with_category(CategoryFilter::Only(ProductCategory::Kitchen));
//!
//! for product in filter_products(store.products(), &criteria) {
//!     println!("{} {}", product.name, product.formatted_price("$"));
//! }
//! ```

pub mod config;
pub mod criteria;
pub mod engine;
pub mod error;
#[cfg(feature = "live")]
pub mod live;
pub mod model;
pub mod store;

pub use config::CatalogConfig;
pub use criteria::{
    ActiveFilter, ArticleCriteria, CategoryFilter, PricePreset, PriceRange, ProductCriteria,
};
pub use engine::{filter, filter_articles, filter_products, Criteria, FilterEngine, Predicate, Searchable};
pub use error::{CatalogError, Result};
#[cfg(feature = "live")]
pub use live::{LiveFilter, Snapshot};
pub use model::{Article, ArticleCategory, EcoLabel, Product, ProductCategory};
pub use store::CatalogStore;
