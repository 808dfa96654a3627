use chrono::{Datelike, Utc};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer-brand">
                <a href="/" class="brand">"EcoMarket"</a>
                <p>"Sustainable products and practical knowledge for a greener everyday life."</p>
            </div>

            <div class="footer-impact">
                <h3>"Our Impact"</h3>
                <div class="stats">
                    <div class="stat"><strong>"10,583"</strong><span>"Eco-products sold"</span></div>
                    <div class="stat"><strong>"5,279"</strong><span>"Trees planted"</span></div>
                    <div class="stat"><strong>"25,432"</strong><span>"Users engaged"</span></div>
                </div>
            </div>

            <blockquote class="footer-quote">
                "We do not inherit the earth from our ancestors; we borrow it from our children."
            </blockquote>

            <div class="footer-bottom">
                <p>{format!("© {year} EcoMarket. All rights reserved.")}</p>
                <a href="#">"Privacy Policy"</a>
                <a href="#">"Terms of Service"</a>
            </div>
        </footer>
    }
}
