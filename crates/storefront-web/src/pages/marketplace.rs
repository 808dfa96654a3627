//! Marketplace Page

use catalog_core::{
    filter_products, CategoryFilter, EcoLabel, PricePreset, Product, ProductCategory, ProductCriteria,
};
use leptos::prelude::*;

use crate::components::ProductCard;
use crate::context::Catalog;

/// Replace the criteria with a value derived from the current one
fn update_criteria(
    criteria: RwSignal<ProductCriteria>,
    change: impl FnOnce(ProductCriteria) -> ProductCriteria,
) {
    let next = change(criteria.get_untracked());
    criteria.set(next);
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let criteria = RwSignal::new(ProductCriteria::default());
    let (filters_open, set_filters_open) = signal(false);

    let filtered = Memo::new(move |_| {
        criteria.with(|criteria| {
            filter_products(catalog.products(), criteria)
                .into_iter()
                .cloned()
                .collect::<Vec<Product>>()
        })
    });

    view! {
        <div class="marketplace">
            <section class="page-header">
                <h1>"Eco-Friendly Marketplace"</h1>
                <p>
                    "Discover sustainable products that combine style, functionality, and eco-consciousness for a greener lifestyle."
                </p>
            </section>

            <div class="controls">
                <div class="search">
                    <input
                        type="text"
                        placeholder="Search products..."
                        prop:value=move || criteria.with(|c| c.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            update_criteria(criteria, |c| c.with_search_term(term));
                        }
                    />
                    <Show when=move || criteria.with(|c| !c.search_term.is_empty())>
                        <button
                            class="clear-search"
                            aria-label="Clear search"
                            on:click=move |_| update_criteria(criteria, |c| c.with_search_term(""))
                        >
                            "✕"
                        </button>
                    </Show>
                </div>

                <button class="btn filters-toggle" on:click=move |_| set_filters_open.update(|open| *open = !*open)>
                    "Filters"
                </button>

                <ActiveFilters criteria=criteria />
            </div>

            <div class="marketplace-body">
                <aside class="filters-sidebar">
                    <FilterPanel criteria=criteria />
                </aside>

                <div class=move || if filters_open.get() { "mobile-filters open" } else { "mobile-filters" }>
                    <div class="mobile-filters-header">
                        <h2>"Filters"</h2>
                        <button class="icon-btn" on:click=move |_| set_filters_open.set(false)>"✕"</button>
                    </div>
                    <FilterPanel criteria=criteria />
                    <button
                        class="btn"
                        on:click=move |_| {
                            criteria.set(ProductCriteria::default());
                            set_filters_open.set(false);
                        }
                    >
                        "Clear All Filters"
                    </button>
                    <button class="btn btn-primary" on:click=move |_| set_filters_open.set(false)>
                        "Apply Filters"
                    </button>
                </div>

                <div class="results">
                    <Show
                        when=move || !filtered.with(Vec::is_empty)
                        fallback=move || {
                            view! {
                                <div class="empty-state">
                                    <p>"No products match your criteria."</p>
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| criteria.set(ProductCriteria::default())
                                    >
                                        "Clear Filters"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div class="results-header">
                            <p>"Showing " <strong>{move || filtered.with(Vec::len)}</strong> " products"</p>
                            // Sorting is not wired to the engine; results keep catalog order
                            <select class="sort">
                                <option value="featured">"Featured"</option>
                                <option value="newest">"Newest"</option>
                                <option value="price-low">"Price: Low to High"</option>
                                <option value="price-high">"Price: High to Low"</option>
                            </select>
                        </div>
                        <div class="product-grid">
                            <For
                                each=move || filtered.get()
                                key=|product: &Product| product.id
                                children=move |product| view! { <ProductCard product=product /> }
                            />
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Category, price and eco-label selectors
#[component]
fn FilterPanel(criteria: RwSignal<ProductCriteria>) -> impl IntoView {
    let categories = CategoryFilter::options(ProductCategory::ALL);

    view! {
        <div class="filter-panel">
            <section>
                <h3>"Categories"</h3>
                {categories
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class=move || {
                                    if criteria.with(|c| c.category == option) {
                                        "filter-option selected"
                                    } else {
                                        "filter-option"
                                    }
                                }
                                on:click=move |_| update_criteria(criteria, |c| c.with_category(option))
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </section>

            <section>
                <h3>"Price Range"</h3>
                {PricePreset::ALL
                    .iter()
                    .copied()
                    .map(|preset| {
                        view! {
                            <button
                                class=move || {
                                    if criteria.with(|c| c.selected_preset() == Some(preset)) {
                                        "filter-option selected"
                                    } else {
                                        "filter-option"
                                    }
                                }
                                on:click=move |_| update_criteria(criteria, |c| c.with_preset(preset))
                            >
                                {preset.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </section>

            <section>
                <h3>"Eco Labels"</h3>
                <div class="label-chips">
                    {EcoLabel::ALL
                        .iter()
                        .copied()
                        .map(|label| {
                            view! {
                                <button
                                    class=move || {
                                        if criteria.with(|c| c.is_label_selected(label)) {
                                            "label-chip selected"
                                        } else {
                                            "label-chip"
                                        }
                                    }
                                    on:click=move |_| update_criteria(criteria, |c| c.toggle_label(label))
                                >
                                    {label.as_str()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}

/// Removable chips for each active dimension, plus "Clear all"
#[component]
fn ActiveFilters(criteria: RwSignal<ProductCriteria>) -> impl IntoView {
    view! {
        <div class="active-filters">
            {move || {
                criteria
                    .with(ProductCriteria::active_filters)
                    .into_iter()
                    .map(|chip| {
                        let label = chip.label();
                        view! {
                            <span class="chip">
                                {label}
                                <button
                                    aria-label="Remove filter"
                                    on:click=move |_| update_criteria(criteria, |c| c.without(&chip))
                                >
                                    "✕"
                                </button>
                            </span>
                        }
                    })
                    .collect_view()
            }}
            <Show when=move || criteria.with(|c| !c.active_filters().is_empty())>
                <button class="link" on:click=move |_| criteria.set(ProductCriteria::default())>
                    "Clear all"
                </button>
            </Show>
        </div>
    }
}
