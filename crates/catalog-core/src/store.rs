//! Catalog Store
//!
//! Read-only seed collections, parsed once at startup from embedded JSON.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{CatalogError, Result};
use crate::model::{Article, Product};

const PRODUCTS_JSON: &str = include_str!("../data/products.json");
const ARTICLES_JSON: &str = include_str!("../data/articles.json");

/// Immutable product and article collections
#[derive(Clone, Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    articles: Vec<Article>,
}

impl CatalogStore {
    /// Load the bundled seed data
    pub fn load() -> Result<Self> {
        Self::from_json(PRODUCTS_JSON, ARTICLES_JSON)
    }

    pub fn from_json(products: &str, articles: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(products)?;
        let articles: Vec<Article> = serde_json::from_str(articles)?;
        Self::new(products, articles)
    }

    pub fn new(products: Vec<Product>, articles: Vec<Article>) -> Result<Self> {
        validate_products(&products)?;
        validate_articles(&articles)?;

        tracing::info!(
            products = products.len(),
            articles = articles.len(),
            "catalog seed data loaded"
        );

        Ok(Self { products, articles })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    pub fn featured_articles(&self) -> Vec<&Article> {
        self.articles.iter().filter(|a| a.featured).collect()
    }

    /// Articles not in the featured set
    pub fn recent_articles(&self) -> Vec<&Article> {
        self.articles.iter().filter(|a| !a.featured).collect()
    }

    pub fn product(&self, id: u32) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::ProductNotFound(id))
    }

    pub fn article(&self, id: u32) -> Result<&Article> {
        self.articles
            .iter()
            .find(|a| a.id == id)
            .ok_or(CatalogError::ArticleNotFound(id))
    }

    /// Resolve a product from a raw route parameter
    pub fn product_by_param(&self, raw: &str) -> Result<&Product> {
        let id = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| CatalogError::InvalidId(raw.to_string()))?;
        self.product(id)
    }

    /// Resolve an article from a raw route parameter
    pub fn article_by_param(&self, raw: &str) -> Result<&Article> {
        let id = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| CatalogError::InvalidId(raw.to_string()))?;
        self.article(id)
    }

    /// Same category, excluding `product`, first `limit` in catalog order
    pub fn related_products(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }
}

fn validate_products(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::new();
    for product in products {
        if product.id == 0 || !seen.insert(product.id) {
            return Err(CatalogError::Seed(format!("bad or duplicate product id {}", product.id)));
        }
        if product.name.trim().is_empty() {
            return Err(CatalogError::Seed(format!("product {} has no name", product.id)));
        }
        if product.price < Decimal::ZERO {
            return Err(CatalogError::Seed(format!("product {} has a negative price", product.id)));
        }
    }
    Ok(())
}

fn validate_articles(articles: &[Article]) -> Result<()> {
    let mut seen = HashSet::new();
    for article in articles {
        if article.id == 0 || !seen.insert(article.id) {
            return Err(CatalogError::Seed(format!("bad or duplicate article id {}", article.id)));
        }
        if article.title.trim().is_empty() {
            return Err(CatalogError::Seed(format!("article {} has no title", article.id)));
        }
        if article.read_time == 0 {
            return Err(CatalogError::Seed(format!("article {} has no read time", article.id)));
        }
    }
    Ok(())
}
