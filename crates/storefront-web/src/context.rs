//! Shared Page Context

use std::ops::Deref;
use std::sync::Arc;

use catalog_core::CatalogStore;

/// Seed catalog, provided once by the root component
#[derive(Clone)]
pub struct Catalog(pub Arc<CatalogStore>);

impl Deref for Catalog {
    type Target = CatalogStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
