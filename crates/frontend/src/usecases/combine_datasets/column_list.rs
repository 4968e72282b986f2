use super::state::ColumnFlag;
use contracts::datasets::DatasetTable;
use leptos::prelude::*;
use std::collections::BTreeMap;

/// One dataset table inside a pool: a collapsible header plus a checkbox
/// per column. Columns that moved to the other pool are not rendered.
#[component]
pub fn DatasetColumnList(
    /// Dataset descriptor giving the table name and column order
    dataset: DatasetTable,
    /// Current flags of this table within the pool being rendered
    #[prop(into)]
    flags: Signal<BTreeMap<String, ColumnFlag>>,
    /// Called with (table, column, checked) when a checkbox flips
    select_column: Callback<(String, String, bool)>,
    /// Whether the section starts expanded
    #[prop(optional)]
    default_open: bool,
    /// Inline style for the section container
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    let (open, set_open) = signal(default_open);
    let header_name = dataset.table_name.clone();
    let table_name = dataset.table_name.clone();
    let column_names = dataset.columns.clone();

    view! {
        <div class="dataset-column-list" style=move || style.get().unwrap_or_default()>
            <div
                class="dataset-column-list__header"
                style="cursor: pointer; display: flex; justify-content: space-between; font-weight: 600;"
                on:click=move |_| set_open.update(|open| *open = !*open)
            >
                <span>{header_name}</span>
                <span>{move || if open.get() { "▾" } else { "▸" }}</span>
            </div>
            <Show when=move || open.get()>
                {
                    let table_name = table_name.clone();
                    let column_names = column_names.clone();
                    move || {
                        column_names
                            .iter()
                            .filter_map(|column| {
                                let flag = flags.with(|flags| flags.get(column).copied())?;
                                if !flag.is_present() {
                                    return None;
                                }
                                let table = table_name.clone();
                                let column_for_change = column.clone();
                                Some(view! {
                                    <label class="dataset-column-list__item" style="display: block; margin-top: 4px;">
                                        <input
                                            type="checkbox"
                                            prop:checked=flag.is_selected()
                                            on:change=move |ev| {
                                                select_column
                                                    .run((
                                                        table.clone(),
                                                        column_for_change.clone(),
                                                        event_target_checked(&ev),
                                                    ));
                                            }
                                        />
                                        " "
                                        {column.clone()}
                                    </label>
                                })
                            })
                            .collect_view()
                    }
                }
            </Show>
        </div>
    }
}
