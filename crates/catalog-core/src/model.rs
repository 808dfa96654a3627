//! Domain Models
//!
//! Catalog records for the storefront. Products and articles are seed data:
//! loaded once, never mutated. Uses `rust_decimal` for all prices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Fallback copy for products without any description
pub const DEFAULT_PRODUCT_SUMMARY: &str = "A sustainable product designed with the environment in mind. \
    Made from eco-friendly materials to reduce environmental impact.";

/// Materials shown when a product does not list its own
pub const DEFAULT_MATERIALS: &[&str] = &["Sustainable", "Eco-friendly", "Recycled"];

/// Extra gallery shots shown after a product's primary image
pub const GALLERY_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1606041008023-472dfb5e530f?q=80&w=1588&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1602143407151-7111542de6e8?q=80&w=687&auto=format&fit=crop",
];

macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $unknown:ident {
            $($variant:ident => $label:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )*
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }

            #[must_use]
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($label => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CatalogError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value).ok_or_else(|| CatalogError::$unknown(value.to_string()))
            }
        }
    };
}

catalog_enum! {
    /// Marketplace product categories
    ProductCategory, UnknownCategory {
        Home => "Home",
        Kitchen => "Kitchen",
        Clothing => "Clothing",
        Beauty => "Beauty",
        Accessories => "Accessories",
        Fitness => "Fitness",
    }
}

catalog_enum! {
    /// Education catalog categories
    ArticleCategory, UnknownCategory {
        EcoTips => "Eco Tips",
        ProductKnowledge => "Product Knowledge",
        PositiveImpacts => "Positive Impacts",
    }
}

catalog_enum! {
    /// Sustainability labels a product can carry
    EcoLabel, UnknownEcoLabel {
        Organic => "Organic",
        Recycled => "Recycled",
        Biodegradable => "Biodegradable",
        PlasticFree => "Plastic-Free",
        Vegan => "Vegan",
        FairTrade => "Fair Trade",
        ZeroWaste => "Zero-Waste",
        Sustainable => "Sustainable",
        NonToxic => "Non-Toxic",
        Compostable => "Compostable",
        Reusable => "Reusable",
    }
}

/// A marketplace product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique within the product catalog
    pub id: u32,

    pub name: String,

    /// Price in currency units
    pub price: Decimal,

    /// Primary image URI
    pub image: String,

    /// Labels in display order, no duplicates
    #[serde(default)]
    pub eco_labels: Vec<EcoLabel>,

    pub category: ProductCategory,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub short_description: Option<String>,

    #[serde(default)]
    pub materials: Option<Vec<String>>,

    #[serde(default)]
    pub featured: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        category: ProductCategory,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: String::new(),
            eco_labels: Vec::new(),
            category,
            description: None,
            short_description: None,
            materials: None,
            featured: false,
        }
    }

    pub fn with_labels(mut self, labels: &[EcoLabel]) -> Self {
        for label in labels {
            if !self.eco_labels.contains(label) {
                self.eco_labels.push(*label);
            }
        }
        self
    }

    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    pub fn has_label(&self, label: EcoLabel) -> bool {
        self.eco_labels.contains(&label)
    }

    /// Short description, then long description, then generic copy
    pub fn summary(&self) -> &str {
        self.short_description
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or(DEFAULT_PRODUCT_SUMMARY)
    }

    pub fn materials_or_default(&self) -> Vec<&str> {
        match &self.materials {
            Some(materials) if !materials.is_empty() => {
                materials.iter().map(String::as_str).collect()
            }
            _ => DEFAULT_MATERIALS.to_vec(),
        }
    }

    /// Primary image followed by the stock gallery shots
    pub fn gallery(&self) -> Vec<&str> {
        std::iter::once(self.image.as_str())
            .chain(GALLERY_IMAGES.iter().copied())
            .collect()
    }

    pub fn formatted_price(&self, currency_symbol: &str) -> String {
        format!("{}{:.2}", currency_symbol, self.price)
    }
}

/// An education article
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique within the article catalog
    pub id: u32,

    pub title: String,

    pub summary: String,

    pub image: String,

    pub category: ArticleCategory,

    /// Reading time in minutes
    pub read_time: u32,

    #[serde(default)]
    pub featured: bool,
}

impl Article {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        summary: impl Into<String>,
        category: ArticleCategory,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            image: String::new(),
            category,
            read_time: 5,
            featured: false,
        }
    }

    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_round_trip_names() {
        for category in ArticleCategory::ALL {
            assert_eq!(ArticleCategory::parse(category.as_str()), Some(*category));
        }
        assert_eq!(ArticleCategory::EcoTips.to_string(), "Eco Tips");
        assert!("All".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_eco_label_parse_is_case_sensitive() {
        assert_eq!(EcoLabel::parse("Zero-Waste"), Some(EcoLabel::ZeroWaste));
        assert_eq!(EcoLabel::parse("zero-waste"), None);
        assert_eq!(EcoLabel::ALL.len(), 11);
    }

    #[test]
    fn test_product_summary_fallbacks() {
        let mut product = Product::new(1, "Bamboo Water Bottle", dec!(24.99), ProductCategory::Home);
        assert_eq!(product.summary(), DEFAULT_PRODUCT_SUMMARY);

        product.description = Some("Long form".into());
        assert_eq!(product.summary(), "Long form");

        product.short_description = Some("Short form".into());
        assert_eq!(product.summary(), "Short form");
    }

    #[test]
    fn test_product_materials_default() {
        let mut product = Product::new(1, "Mat", dec!(39.99), ProductCategory::Fitness);
        assert_eq!(product.materials_or_default(), vec!["Sustainable", "Eco-friendly", "Recycled"]);

        product.materials = Some(vec!["Cork".into()]);
        assert_eq!(product.materials_or_default(), vec!["Cork"]);
    }

    #[test]
    fn test_with_labels_skips_duplicates() {
        let product = Product::new(1, "Wraps", dec!(18.99), ProductCategory::Kitchen)
            .with_labels(&[EcoLabel::Reusable, EcoLabel::ZeroWaste, EcoLabel::Reusable]);
        assert_eq!(product.eco_labels, vec![EcoLabel::Reusable, EcoLabel::ZeroWaste]);
    }

    #[test]
    fn test_formatted_price_and_gallery() {
        let mut product = Product::new(1, "Bottle", dec!(24.9), ProductCategory::Home);
        product.image = "primary.jpg".into();
        assert_eq!(product.formatted_price("$"), "$24.90");
        assert_eq!(product.gallery().len(), 3);
        assert_eq!(product.gallery()[0], "primary.jpg");
    }

    #[test]
    fn test_product_deserializes_camel_case() {
        let json = r#"{
            "id": 9,
            "name": "Cork Coasters",
            "price": "11.50",
            "image": "coasters.jpg",
            "ecoLabels": ["Plastic-Free", "Compostable"],
            "category": "Home",
            "shortDescription": "Natural cork."
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, dec!(11.50));
        assert_eq!(product.eco_labels, vec![EcoLabel::PlasticFree, EcoLabel::Compostable]);
        assert!(!product.featured);
        assert_eq!(product.summary(), "Natural cork.");
    }

    #[test]
    fn test_read_time_label() {
        let article = Article::new(1, "Title", "Summary", ArticleCategory::EcoTips);
        assert_eq!(article.read_time_label(), "5 min read");
    }
}
