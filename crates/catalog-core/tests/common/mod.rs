use std::sync::Once;

use catalog_core::CatalogStore;

static TRACING: Once = Once::new();

/// Route engine logs to the test harness; `RUST_LOG=catalog_core=debug` to see them
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn store() -> CatalogStore {
    init_tracing();
    CatalogStore::load().expect("bundled seed data loads")
}

pub fn ids<T>(items: &[&T], id: impl Fn(&T) -> u32) -> Vec<u32> {
    items.iter().map(|item| id(item)).collect()
}
