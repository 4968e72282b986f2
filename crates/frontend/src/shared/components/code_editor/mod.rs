pub mod presets;

pub use presets::CodePresets;

use leptos::html::Textarea;
use leptos::prelude::*;
use web_sys::HtmlTextAreaElement;

/// Code editor panel: a controlled editor surface plus the presets rail.
///
/// The host owns the text; the editor pushes every change back through
/// `set_code` and holds no authoritative copy of its own.
#[component]
pub fn CodeEditor(
    /// Current text, owned by the host view
    #[prop(into)]
    code: Signal<String>,
    /// Receives the full text after every edit
    set_code: Callback<String>,
    /// Inline style for the outer panel
    #[prop(optional, into)]
    style: MaybeProp<String>,
    /// Inline style for the editor container
    #[prop(default = String::from("width: 65%; height: 100%;"), into)]
    container_style: String,
    /// Editor surface height
    #[prop(default = String::from("400px"), into)]
    height: String,
    /// Editor font size in px
    #[prop(default = 20)]
    font_size: u32,
    /// Replaces the default mount behavior (force value, cursor to
    /// document start, focus)
    #[prop(optional)]
    on_mount: Option<Callback<HtmlTextAreaElement>>,
) -> impl IntoView {
    let editor_ref = NodeRef::<Textarea>::new();
    let mounted = StoredValue::new(false);

    Effect::new(move |_| {
        let Some(editor) = editor_ref.get() else {
            return;
        };
        if mounted.get_value() {
            return;
        }
        mounted.set_value(true);

        if let Some(handler) = on_mount {
            handler.run(editor);
        } else {
            editor.set_value(&code.get_untracked());
            let _ = editor.set_selection_range(0, 0);
            let _ = editor.focus();
        }
    });

    let panel_style = move || {
        let custom = style.get().unwrap_or_default();
        let custom = custom.trim().trim_end_matches(';').trim_end();
        if custom.is_empty() {
            "display: flex; align-items: center; gap: 8px;".to_string()
        } else {
            format!("{}; display: flex; align-items: center; gap: 8px;", custom)
        }
    };

    let editor_style = format!(
        "width: 100%; height: {}; font-size: {}px; font-family: monospace; resize: none;",
        height, font_size
    );

    view! {
        <div class="code-editor" style=panel_style>
            <div class="code-editor__container" style=container_style>
                <textarea
                    node_ref=editor_ref
                    class="code-editor__input"
                    style=editor_style
                    spellcheck="false"
                    prop:value=move || code.get()
                    on:input=move |ev| set_code.run(event_target_value(&ev))
                ></textarea>
            </div>
            <CodePresets />
        </div>
    }
}
