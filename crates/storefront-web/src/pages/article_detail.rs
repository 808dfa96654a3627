//! Article Detail Page

use catalog_core::Article;
use leptos::logging;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::{EducationCard, LookupFailure, NotFound};
use crate::context::Catalog;

#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let params = use_params_map();

    let lookup = {
        let catalog = catalog.clone();
        Memo::new(move |_| {
            let raw = params.with(|p| p.get("id")).unwrap_or_default();
            match catalog.article_by_param(&raw) {
                Ok(article) => Ok(article.clone()),
                Err(err) => {
                    logging::warn!("article lookup failed: {err}");
                    Err(LookupFailure::from(&err))
                }
            }
        })
    };

    move || match lookup.get() {
        Ok(article) => {
            let more: Vec<Article> = catalog
                .articles()
                .iter()
                .filter(|a| a.category == article.category && a.id != article.id)
                .cloned()
                .collect();

            view! {
                <article class="article-detail">
                    <nav class="breadcrumb">
                        <a href="/education">"← Back to Education"</a>
                    </nav>
                    <img class="article-hero" src=article.image.clone() alt=article.title.clone() />
                    <span class="category">{article.category.as_str()}</span>
                    <h1>{article.title.clone()}</h1>
                    <p class="read-time">{article.read_time_label()}</p>
                    <p class="summary">{article.summary.clone()}</p>

                    {(!more.is_empty()).then(|| view! {
                        <section class="more-articles">
                            <h2>"More in " {article.category.as_str()}</h2>
                            <div class="article-grid">
                                {more
                                    .into_iter()
                                    .map(|article| view! { <EducationCard article=article /> })
                                    .collect_view()}
                            </div>
                        </section>
                    })}
                </article>
            }
            .into_any()
        }
        Err(failure) => view! {
            <NotFound failure=failure back_href="/education" back_label="Back to Education" />
        }
        .into_any(),
    }
}
