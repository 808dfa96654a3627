//! Education Page

use catalog_core::{filter_articles, Article, ArticleCategory, ArticleCriteria, CategoryFilter};
use leptos::prelude::*;

use crate::components::EducationCard;
use crate::context::Catalog;

#[component]
pub fn EducationPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let criteria = RwSignal::new(ArticleCriteria::default());

    let filtered = {
        let catalog = catalog.clone();
        Memo::new(move |_| {
            criteria.with(|criteria| {
                filter_articles(catalog.articles(), criteria)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Article>>()
            })
        })
    };

    let featured: Vec<Article> = catalog.featured_articles().into_iter().cloned().collect();
    let recent: Vec<Article> = catalog.recent_articles().into_iter().cloned().collect();

    view! {
        <div class="education">
            <section class="page-header">
                <h1>"Sustainable Living Education"</h1>
                <p>
                    "Learn about eco-friendly practices, sustainable products, and how small changes can make a big impact on our planet."
                </p>
            </section>

            <div class="controls">
                <div class="search">
                    <input
                        type="text"
                        placeholder="Search articles..."
                        prop:value=move || criteria.with(|c| c.search_term.clone())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            let next = criteria.get_untracked().with_search_term(term);
                            criteria.set(next);
                        }
                    />
                </div>

                <div class="category-pills">
                    {CategoryFilter::options(ArticleCategory::ALL)
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if criteria.with(|c| c.category == option) {
                                            "pill selected"
                                        } else {
                                            "pill"
                                        }
                                    }
                                    on:click=move |_| {
                                        let next = criteria.get_untracked().with_category(option);
                                        criteria.set(next);
                                    }
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || criteria.with(ArticleCriteria::is_neutral)>
                <section class="featured-articles">
                    <h2>"Featured Articles"</h2>
                    <div class="article-grid">
                        {featured
                            .iter()
                            .cloned()
                            .map(|article| view! { <EducationCard article=article /> })
                            .collect_view()}
                    </div>
                </section>
            </Show>

            <section class="all-articles">
                <h2>"All Articles"</h2>
                <Show
                    when=move || !filtered.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <p>"No articles match your search criteria."</p>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| criteria.set(ArticleCriteria::default())
                                >
                                    "Reset Filters"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="article-grid">
                        <For
                            each=move || filtered.get()
                            key=|article: &Article| article.id
                            children=move |article| view! { <EducationCard article=article /> }
                        />
                    </div>
                </Show>
            </section>

            <section class="recent-articles">
                <h2>"Recently Published"</h2>
                <ul>
                    {recent
                        .into_iter()
                        .map(|article| {
                            view! {
                                <li>
                                    <a href=format!("/education/{}", article.id)>{article.title}</a>
                                    <span class="category">{article.category.as_str()}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>

            <section class="newsletter">
                <h2>"Stay Informed"</h2>
                <p>"Get new guides on sustainable living delivered to your inbox."</p>
                // Subscription is display-only
                <form on:submit=|ev| ev.prevent_default()>
                    <input type="email" placeholder="Your email address" />
                    <button type="submit" class="btn btn-primary">"Subscribe"</button>
                </form>
            </section>
        </div>
    }
}
