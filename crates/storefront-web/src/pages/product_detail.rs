//! Product Detail Page

use catalog_core::{CatalogConfig, Product};
use leptos::logging;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::{LookupFailure, NotFound, ProductCard};
use crate::context::Catalog;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let params = use_params_map();

    let lookup = Memo::new(move |_| {
        let raw = params.with(|p| p.get("id")).unwrap_or_default();
        match catalog.product_by_param(&raw) {
            Ok(product) => Ok(product.clone()),
            Err(err) => {
                logging::warn!("product lookup failed: {err}");
                Err(LookupFailure::from(&err))
            }
        }
    });

    // Navigating between related products keeps the router scroll position
    Effect::new(move |_| {
        lookup.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    move || match lookup.get() {
        Ok(product) => view! { <ProductDetail product=product /> }.into_any(),
        Err(failure) => view! {
            <NotFound failure=failure back_href="/marketplace" back_label="Back to Marketplace" />
        }
        .into_any(),
    }
}

#[component]
fn ProductDetail(product: Product) -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let config = use_context::<CatalogConfig>().unwrap_or_default();

    let gallery: Vec<String> = product.gallery().into_iter().map(String::from).collect();
    let (selected_image, set_selected_image) = signal(gallery.first().cloned().unwrap_or_default());
    let (quantity, set_quantity) = signal(1_u32);

    let materials: Vec<String> = product.materials_or_default().into_iter().map(String::from).collect();
    let related: Vec<Product> = catalog
        .related_products(&product, config.related_limit)
        .into_iter()
        .cloned()
        .collect();

    view! {
        <div class="product-detail">
            <nav class="breadcrumb">
                <a href="/marketplace">"← Back to Marketplace"</a>
            </nav>

            <div class="product-detail-main">
                <div class="gallery">
                    <img class="gallery-main" src=move || selected_image.get() alt=product.name.clone() />
                    <div class="gallery-thumbs">
                        {gallery
                            .into_iter()
                            .map(|image| {
                                let src = image.clone();
                                let compare = image.clone();
                                view! {
                                    <button
                                        class=move || {
                                            if selected_image.with(|s| *s == compare) { "thumb selected" } else { "thumb" }
                                        }
                                        on:click=move |_| set_selected_image.set(image.clone())
                                    >
                                        <img src=src alt="" />
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="product-info">
                    <div class="eco-labels">
                        {product.eco_labels
                            .iter()
                            .map(|label| view! { <span class="eco-label">{label.as_str()}</span> })
                            .collect_view()}
                    </div>
                    <h1>{product.name.clone()}</h1>
                    <p class="price">{product.formatted_price(&config.currency_symbol)}</p>
                    <p class="summary">{product.summary().to_string()}</p>

                    <div class="quantity">
                        <span>"Quantity"</span>
                        <button
                            aria-label="Decrease quantity"
                            on:click=move |_| set_quantity.update(|q| *q = q.saturating_sub(1).max(1))
                        >
                            "−"
                        </button>
                        <span class="quantity-value">{move || quantity.get()}</span>
                        <button
                            aria-label="Increase quantity"
                            on:click=move |_| set_quantity.update(|q| *q = q.saturating_add(1))
                        >
                            "+"
                        </button>
                    </div>

                    // Cart, wishlist and sharing are display-only
                    <div class="actions">
                        <button class="btn btn-primary">"Add to Cart"</button>
                        <button class="icon-btn" aria-label="Add to wishlist">"♡"</button>
                        <button class="icon-btn" aria-label="Share">"⤴"</button>
                    </div>

                    <div class="materials">
                        <h3>"Materials"</h3>
                        <ul>
                            {materials.into_iter().map(|m| view! { <li>{m}</li> }).collect_view()}
                        </ul>
                    </div>

                    <div class="shipping">
                        <p>"Free shipping on orders over $50"</p>
                        <p>"Plastic-free packaging"</p>
                    </div>
                </div>
            </div>

            <Show when={
                let empty = related.is_empty();
                move || !empty
            }>
                <section class="related-products">
                    <h2>"You May Also Like"</h2>
                    <div class="product-grid">
                        {related
                            .iter()
                            .cloned()
                            .map(|product| view! { <ProductCard product=product /> })
                            .collect_view()}
                    </div>
                </section>
            </Show>
        </div>
    }
}
