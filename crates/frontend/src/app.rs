use crate::usecases::combine_datasets::CombinePage;
use leptos::prelude::*;
use serde::Deserialize;

/// Query-string parameters of the workbench page (`?dataset=<name>`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    /// Name of the base dataset table. Falls back to the first fetched
    /// table when absent.
    pub dataset: Option<String>,
}

/// Parse the current location's query string into [`PageParams`].
pub fn page_params() -> PageParams {
    let Some(window) = web_sys::window() else {
        return PageParams::default();
    };
    let search = window.location().search().unwrap_or_default();
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let params = page_params();

    view! { <CombinePage base_dataset=params.dataset /> }
}
