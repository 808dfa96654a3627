use catalog_core::Article;
use leptos::prelude::*;

#[component]
pub fn EducationCard(article: Article) -> impl IntoView {
    let (loaded, set_loaded) = signal(false);
    let href = format!("/education/{}", article.id);

    view! {
        <article class="education-card">
            <div class="education-card-media">
                <img
                    src=article.image.clone()
                    alt=article.title.clone()
                    class=move || if loaded.get() { "image-loaded" } else { "image-load" }
                    on:load=move |_| set_loaded.set(true)
                />
                <span class="category">{article.category.as_str()}</span>
            </div>
            <div class="education-card-body">
                <h3>{article.title.clone()}</h3>
                <p class="summary">{article.summary.clone()}</p>
                <div class="education-card-footer">
                    <span class="read-time">{article.read_time_label()}</span>
                    <a href=href class="read-more">"Read more →"</a>
                </div>
            </div>
        </article>
    }
}
