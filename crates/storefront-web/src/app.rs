//! Main App Component

use std::sync::Arc;

use catalog_core::{CatalogConfig, CatalogStore};
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, Navbar};
use crate::context::Catalog;
use crate::pages::{ArticleDetailPage, EducationPage, HomePage, MarketplacePage, ProductDetailPage};

/// Root application component
#[component]
pub fn App(store: Arc<CatalogStore>) -> impl IntoView {
    provide_context(Catalog(store));
    provide_context(CatalogConfig::default());

    view! {
        <Router>
            <div class="app">
                <Navbar />
                <main class="page">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/marketplace") view=MarketplacePage />
                        <Route path=path!("/product/:id") view=ProductDetailPage />
                        <Route path=path!("/education") view=EducationPage />
                        <Route path=path!("/education/:id") view=ArticleDetailPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
