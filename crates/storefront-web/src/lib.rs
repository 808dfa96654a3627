//! Storefront Web Frontend
//!
//! Leptos-based WASM shell for the eco marketplace. Every list it renders
//! comes from `catalog_core`; the pages only hold criteria signals.

mod app;
mod components;
mod context;
mod pages;

pub use app::App;

use std::sync::Arc;

use catalog_core::CatalogStore;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    match CatalogStore::load() {
        Ok(store) => {
            let store = Arc::new(store);
            leptos::mount::mount_to_body(move || view! { <App store=store /> });
        }
        Err(err) => {
            leptos::logging::error!("storefront catalog failed to load: {err}");
        }
    }
}
