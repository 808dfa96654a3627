use leptos::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/marketplace", "Marketplace"),
    ("/education", "Education"),
];

/// Site header with a collapsible mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="navbar">
            <a href="/" class="brand">"EcoMarket"</a>

            <nav class="nav-links">
                {LINKS
                    .iter()
                    .map(|&(href, label)| view! { <a href=href class="nav-link">{label}</a> })
                    .collect_view()}
            </nav>

            <div class="nav-actions">
                <button class="icon-btn" aria-label="Shopping cart">"🛍"</button>
                <button
                    class="icon-btn menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <nav class="mobile-menu">
                    {LINKS
                        .iter()
                        .map(|&(href, label)| {
                            view! {
                                <a href=href class="mobile-link" on:click=move |_| set_menu_open.set(false)>
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}
