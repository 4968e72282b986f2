use leptos::prelude::*;
use once_cell::sync::Lazy;

/// One reusable snippet shown in the presets rail.
#[derive(Debug, Clone)]
pub struct CodePreset {
    pub name: &'static str,
    pub body: &'static str,
}

/// Snippet catalog. The service executes transformation code through the
/// `run_on_column` / `run_on_dataset` entry points, so every preset is a
/// stub of one of those.
static CODE_PRESETS: Lazy<Vec<CodePreset>> = Lazy::new(|| {
    vec![
        CodePreset {
            name: "Run on column",
            body: "def run_on_column(dataset, column):\n    return column",
        },
        CodePreset {
            name: "Run on dataset",
            body: "def run_on_dataset(dataset):\n    return dataset",
        },
        CodePreset {
            name: "Fill nulls with zero",
            body: "def run_on_column(dataset, column):\n    return column.fillna(0)",
        },
        CodePreset {
            name: "Drop column",
            body: "def run_on_dataset(dataset):\n    return dataset.drop(columns=[\"column\"])",
        },
    ]
});

/// Read-only rail of reusable snippets rendered next to the editor. Not
/// coupled to the editor value.
#[component]
pub fn CodePresets() -> impl IntoView {
    view! {
        <div class="code-presets" style="width: 35%; align-self: stretch; overflow-y: auto;">
            <h3 style="font-weight: 600; margin-bottom: 8px;">"Presets"</h3>
            {CODE_PRESETS
                .iter()
                .map(|preset| {
                    view! {
                        <div class="code-presets__item" style="margin-bottom: 8px;">
                            <div class="code-presets__name" style="font-weight: 600;">{preset.name}</div>
                            <pre class="code-presets__body" style="margin: 4px 0; font-size: 13px;">{preset.body}</pre>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
