use leptos::prelude::*;
use thaw::*;

/// Pad a row out to the header width. Rows are never validated or
/// truncated; a short row renders empty trailing cells and a long row
/// renders every cell it carries.
fn normalize_row(mut row: Vec<String>, width: usize) -> Vec<String> {
    while row.len() < width {
        row.push(String::new());
    }
    row
}

/// Table over loosely shaped data: a header row of labels and data rows
/// of already formatted cell values.
#[component]
pub fn GenericTable(
    /// Ordered column labels
    columns: Vec<String>,
    /// Data rows, each an ordered list of cell values
    rows: Vec<Vec<String>>,
    /// Invoked with the column label when a header cell is clicked
    #[prop(optional)]
    on_column_click: Option<Callback<String>>,
) -> impl IntoView {
    let width = columns.len();

    view! {
        <div class="generic-table custom-scrollbar" style="overflow-x: auto;">
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns
                            .into_iter()
                            .map(|label| {
                                let label_for_click = label.clone();
                                view! {
                                    <TableHeaderCell
                                        attr:class="generic-table__header-cell"
                                        on:click=move |_| {
                                            if let Some(handler) = on_column_click {
                                                handler.run(label_for_click.clone());
                                            }
                                        }
                                    >
                                        {label}
                                    </TableHeaderCell>
                                }
                            })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <TableRow>
                                    {normalize_row(row, width)
                                        .into_iter()
                                        .map(|cell| view! { <TableCell>{cell}</TableCell> })
                                        .collect_view()}
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
