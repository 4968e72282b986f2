use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pause after the last keystroke before the term is reported, in ms.
const SEARCH_DEBOUNCE_MS: u32 = 250;

/// Text input that reports its value through `on_search` as the user
/// types, debounced so intermediate keystrokes are dropped.
#[component]
pub fn SearchInput(
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Receives the debounced search term
    on_search: Callback<String>,
    /// Inline style for the input element
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    // Only the newest pending timer may report its term.
    let generation = StoredValue::new(0u64);

    let handle_input = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        let this = generation.with_value(|g| g + 1);
        generation.set_value(this);

        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == this {
                on_search.run(term);
            }
        });
    };

    view! {
        <input
            type="search"
            class="search-input"
            placeholder=move || placeholder.get().unwrap_or_default()
            style=move || style.get().unwrap_or_default()
            on:input=handle_input
        />
    }
}
