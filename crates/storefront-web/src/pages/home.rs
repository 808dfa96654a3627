//! Home Page

use catalog_core::{Article, Product};
use leptos::prelude::*;

use crate::components::{EducationCard, ProductCard};
use crate::context::Catalog;

const VALUE_PROPS: &[(&str, &str, &str)] = &[
    ("🌱", "Eco-Friendly Materials", "Every product is made from renewable, recycled or biodegradable materials."),
    ("♻", "Minimal Waste", "Products designed for durability and recyclability, with minimal or plastic-free packaging."),
    ("🤝", "Ethical Production", "We partner with makers who pay fair wages and keep supply chains transparent."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let featured_products: Vec<Product> = catalog.featured_products().into_iter().cloned().collect();
    let featured_articles: Vec<Article> = catalog.featured_articles().into_iter().cloned().collect();

    view! {
        <div class="home">
            <header class="hero">
                <h1>"Shop Sustainably, Live Consciously"</h1>
                <p class="tagline">
                    "Discover eco-friendly products that are good for you and the planet."
                </p>
                <div class="cta">
                    <a href="/marketplace" class="btn btn-primary">"Explore Products"</a>
                    <a href="/education" class="btn">"Learn More"</a>
                </div>
            </header>

            <section class="features">
                <h2>"Why Choose Sustainable Products?"</h2>
                {VALUE_PROPS
                    .iter()
                    .map(|&(icon, title, description)| {
                        view! {
                            <div class="feature">
                                <h3>{icon} " " {title}</h3>
                                <p>{description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="featured-products">
                <div class="section-header">
                    <h2>"Featured Products"</h2>
                    <a href="/marketplace">"View all →"</a>
                </div>
                <div class="product-grid">
                    {featured_products
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product /> })
                        .collect_view()}
                </div>
            </section>

            <section class="featured-articles">
                <div class="section-header">
                    <h2>"Learn & Grow"</h2>
                    <a href="/education">"All articles →"</a>
                </div>
                <div class="article-grid">
                    {featured_articles
                        .into_iter()
                        .map(|article| view! { <EducationCard article=article /> })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
