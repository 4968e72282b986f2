use super::api;
use super::column_list::DatasetColumnList;
use super::state::ColumnSelection;
use crate::shared::components::code_editor::CodeEditor;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::typography::{HeadingTag, SubTitle};
use contracts::datasets::DatasetTable;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Two-pool column combiner: pull columns of other datasets into the base
/// dataset and push them back out.
#[component]
pub fn CombineDatasets(
    /// Base dataset table name; the first fetched table when absent
    #[prop(optional_no_strip)]
    base_dataset: Option<String>,
) -> impl IntoView {
    let (tables, set_tables) = signal::<Vec<DatasetTable>>(Vec::new());
    let (loaded, set_loaded) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let selection = RwSignal::new(ColumnSelection::default());

    // Load the dataset catalog once on mount
    Effect::new(move |_| {
        if loaded.get_untracked() {
            return;
        }
        spawn_local(async move {
            match api::fetch_datasets().await {
                Ok(response) => {
                    selection.set(ColumnSelection::from_tables(&response.tables));
                    set_tables.set(response.tables);
                    set_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to fetch datasets: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    let base = Memo::new(move |_| {
        let wanted = base_dataset.clone();
        tables.with(|tables| match wanted {
            Some(name) => tables.iter().find(|t| t.table_name == name).cloned(),
            None => tables.first().cloned(),
        })
    });

    let can_add = Memo::new(move |_| selection.with(|s| s.any_filtered_selected()));
    let show_remove = Memo::new(move |_| selection.with(|s| s.any_selected_present()));

    let select_from_available =
        Callback::new(move |(table, column, checked): (String, String, bool)| {
            selection.update(|s| {
                if let Err(e) = s.toggle_available(&table, &column, checked) {
                    log::warn!("toggle on available pool ignored: {}", e);
                }
            });
        });

    let select_from_selected =
        Callback::new(move |(table, column, checked): (String, String, bool)| {
            selection.update(|s| {
                if let Err(e) = s.toggle_selected(&table, &column, checked) {
                    log::warn!("toggle on selected pool ignored: {}", e);
                }
            });
        });

    let on_search = Callback::new(move |term: String| {
        selection.update(|s| s.set_search(term));
    });

    view! {
        <div class="combine-datasets-container">
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div
                                class="combine-datasets__error"
                                style="padding: 12px; margin-bottom: 16px; border: 1px solid var(--colorPaletteRedBorder2); border-radius: 8px;"
                            >
                                <span style="margin-right: 8px;">"⚠"</span>
                                <span>{err}</span>
                            </div>
                        }
                    })
            }}
            <Show
                when=move || loaded.get()
                fallback=|| view! { <div class="combine-datasets__empty">"No datasets available"</div> }
            >
                <div class="combine-datasets" style="display: flex; gap: 24px;">
                    <div class="combine-datasets__base" style="width: 50%;">
                        <div>
                            <SubTitle tag=HeadingTag::H3 font_size=17 style="font-weight: 600;">
                                "Base columns"
                            </SubTitle>
                            <Divider />
                        </div>
                        <div style="margin-top: 8px;">
                            {move || {
                                base.get()
                                    .map(|table| {
                                        table
                                            .columns
                                            .into_iter()
                                            .map(|column| view! { <div>{column}</div> })
                                            .collect_view()
                                    })
                            }}
                        </div>
                        <div style="margin-top: 16px;">
                            <SubTitle tag=HeadingTag::H3 font_size=17 style="font-weight: 600;">
                                "New columns"
                            </SubTitle>
                            <Divider />
                        </div>
                        <Show when=move || show_remove.get()>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| selection.update(|s| s.move_back_to_available())
                                attr:style="margin-top: 8px; height: 32px;"
                            >
                                "Remove →"
                            </Button>
                        </Show>
                        <div>
                            <For
                                each=move || tables.get()
                                key=|table| table.table_name.clone()
                                children=move |table: DatasetTable| {
                                    let name = table.table_name.clone();
                                    let name_for_flags = table.table_name.clone();
                                    let visible = Memo::new(move |_| {
                                        selection.with(|s| s.selected().table_visible(&name))
                                    });
                                    let flags = Memo::new(move |_| {
                                        selection
                                            .with(|s| {
                                                s.selected().table(&name_for_flags).cloned().unwrap_or_default()
                                            })
                                    });
                                    view! {
                                        <Show when=move || visible.get()>
                                            <DatasetColumnList
                                                dataset=table.clone()
                                                flags=flags
                                                select_column=select_from_selected
                                                default_open=true
                                                style="margin-top: 16px;"
                                            />
                                        </Show>
                                    }
                                }
                            />
                        </div>
                    </div>
                    <div class="combine-datasets__all-columns" style="width: 50%;">
                        <div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                disabled=Signal::derive(move || !can_add.get())
                                on_click=move |_| selection.update(|s| s.move_selected_to_base())
                                attr:style="height: 32px;"
                            >
                                "← Add"
                            </Button>
                            <SearchInput
                                placeholder="Search for dataset"
                                on_search=on_search
                                style="width: 300px; height: 32px; margin-top: 8px; margin-bottom: 8px; display: block;"
                            />
                        </div>
                        <div>
                            <For
                                each=move || tables.get()
                                key=|table| table.table_name.clone()
                                children=move |table: DatasetTable| {
                                    let name = table.table_name.clone();
                                    let name_for_flags = table.table_name.clone();
                                    let visible = Memo::new(move |_| {
                                        selection.with(|s| s.filtered().table_visible(&name))
                                    });
                                    let flags = Memo::new(move |_| {
                                        selection
                                            .with(|s| {
                                                s.filtered().table(&name_for_flags).cloned().unwrap_or_default()
                                            })
                                    });
                                    view! {
                                        <Show when=move || visible.get()>
                                            <DatasetColumnList
                                                dataset=table.clone()
                                                flags=flags
                                                select_column=select_from_available
                                                style="margin-top: 16px;"
                                            />
                                        </Show>
                                    }
                                }
                            />
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// Workbench page: dataset combination on top, the transformation editor
/// below it.
#[component]
pub fn CombinePage(
    /// Base dataset table name from the page query string
    #[prop(optional_no_strip)]
    base_dataset: Option<String>,
) -> impl IntoView {
    let (code, set_code) = signal(String::new());

    view! {
        <div class="combine-page" style="padding: 20px;">
            <SubTitle tag=HeadingTag::H2 font_size=24>"Combine datasets"</SubTitle>
            <div style="margin-top: 16px;">
                <CombineDatasets base_dataset=base_dataset />
            </div>
            <div style="margin-top: 24px;">
                <SubTitle tag=HeadingTag::H3 font_size=17 style="font-weight: 600;">
                    "Transformation"
                </SubTitle>
                <Divider />
                <CodeEditor
                    code=code
                    set_code=Callback::new(move |value| set_code.set(value))
                    style="margin-top: 8px;"
                />
            </div>
        </div>
    }
}
