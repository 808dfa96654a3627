use catalog_core::{CatalogConfig, Product};
use leptos::prelude::*;

/// Marketplace grid card; links to the product page by id
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let symbol = use_context::<CatalogConfig>().unwrap_or_default().currency_symbol;
    let href = format!("/product/{}", product.id);

    view! {
        <div class="product-card">
            <div class="product-card-media">
                <img
                    src=product.image.clone()
                    alt=product.name.clone()
                    class=move || if loaded.get() { "image-loaded" } else { "image-load" }
                    on:load=move |_| set_loaded.set(true)
                />
                <div class="eco-labels">
                    {product.eco_labels
                        .iter()
                        .map(|label| view! { <span class="eco-label">{label.as_str()}</span> })
                        .collect_view()}
                </div>
                <button class="icon-btn wishlist" aria-label="Add to wishlist">"♡"</button>
            </div>

            <div class="product-card-body">
                <span class="category">{product.category.as_str()}</span>
                <h3><a href=href>{product.name.clone()}</a></h3>
                <div class="product-card-footer">
                    <p class="price">{product.formatted_price(&symbol)}</p>
                    <button class="btn btn-primary" aria-label="Add to cart">"🛍"</button>
                </div>
            </div>
        </div>
    }
}
