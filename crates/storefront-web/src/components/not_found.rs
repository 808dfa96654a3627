use catalog_core::CatalogError;
use leptos::prelude::*;

/// Route lookup failure, reduced to what the page renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LookupFailure {
    pub message: String,

    /// Missing record or malformed id, as opposed to a broken catalog
    pub missing: bool,
}

impl From<&CatalogError> for LookupFailure {
    fn from(err: &CatalogError) -> Self {
        Self {
            message: err.user_message(),
            missing: err.is_not_found(),
        }
    }
}

/// Fallback view for a detail route that resolved to nothing
#[component]
pub fn NotFound(failure: LookupFailure, back_href: &'static str, back_label: &'static str) -> impl IntoView {
    view! {
        <div class=if failure.missing { "not-found" } else { "not-found unavailable" }>
            <h2>{failure.message}</h2>
            <a href=back_href class="btn btn-primary">{back_label}</a>
        </div>
    }
}
