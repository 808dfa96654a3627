//! Error Types for the Catalog

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    #[error("Article not found: {0}")]
    ArticleNotFound(u32),

    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown eco label: {0}")]
    UnknownEcoLabel(String),

    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid seed data: {0}")]
    Seed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether this error is a missing-record lookup
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::ProductNotFound(_)
                | CatalogError::ArticleNotFound(_)
                | CatalogError::InvalidId(_)
        )
    }

    /// Convert to a message suitable for rendering in the storefront
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::ProductNotFound(_) => "Product not found.".into(),
            CatalogError::ArticleNotFound(_) => "Article not found.".into(),
            CatalogError::InvalidId(_) => "Nothing lives at this address.".into(),
            CatalogError::UnknownCategory(name) => format!("There is no category called '{}'.", name),
            CatalogError::UnknownEcoLabel(name) => format!("There is no eco label called '{}'.", name),
            CatalogError::UnknownPriceRange(name) => format!("There is no price range called '{}'.", name),
            _ => "The catalog is currently unavailable.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(CatalogError::ProductNotFound(42).is_not_found());
        assert!(CatalogError::ArticleNotFound(7).is_not_found());
        assert!(CatalogError::InvalidId("abc".into()).is_not_found());
        assert!(!CatalogError::Config("bad".into()).is_not_found());
    }

    #[test]
    fn test_user_message() {
        assert_eq!(CatalogError::ProductNotFound(42).user_message(), "Product not found.");
        assert_eq!(
            CatalogError::Seed("duplicate id".into()).user_message(),
            "The catalog is currently unavailable."
        );
    }
}
