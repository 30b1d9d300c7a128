//! Data Grid Component
//!
//! Read-only table with sortable headers and client-side pagination.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::grid::{cycle_sort, page_count, page_label, page_range, sorted_rows, SortDirection, SortModel};
use crate::models::{GridColumn, GridRow};

/// Tables view: the sample rows from the configuration
#[component]
pub fn TablesView() -> impl IntoView {
    let ctx = use_app_context();
    let (columns, rows, page_size) = ctx.config.with_value(|c| {
        (c.grid.columns.clone(), c.grid.rows.clone(), c.grid.page_size)
    });

    view! {
        <section class="view tables-view">
            <DataGrid columns=columns rows=rows page_size=page_size />
        </section>
    }
}

#[component]
pub fn DataGrid(
    columns: Vec<GridColumn>,
    rows: Vec<GridRow>,
    page_size: usize,
) -> impl IntoView {
    let (sort, set_sort) = signal(None::<SortModel>);
    let (page, set_page) = signal(0usize);

    let total = rows.len();
    let columns = StoredValue::new(columns);
    let rows = StoredValue::new(rows);

    let on_header_click = move |field: String| {
        set_sort.update(|s| *s = cycle_sort(s.as_ref(), &field));
        set_page.set(0);
    };

    let visible_rows = move || {
        let sort = sort.get();
        let range = page_range(total, page_size, page.get());
        rows.with_value(|rows| {
            sorted_rows(rows, sort.as_ref())[range]
                .iter()
                .map(|row| (*row).clone())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="data-grid">
            <table>
                <thead>
                    <tr>
                        {columns.with_value(|cols| cols.iter().map(|col| {
                            let field = col.field.clone();
                            let indicator_field = col.field.clone();
                            let indicator = move || match sort.get() {
                                Some(s) if s.field == indicator_field => match s.direction {
                                    SortDirection::Asc => " ▲",
                                    SortDirection::Desc => " ▼",
                                },
                                _ => "",
                            };
                            view! {
                                <th
                                    style=format!("width: {}px;", col.width)
                                    on:click=move |_| on_header_click(field.clone())
                                >
                                    {col.header_name.clone()}
                                    <span class="sort-indicator">{indicator}</span>
                                </th>
                            }
                        }).collect_view())}
                    </tr>
                </thead>
                <tbody>
                    {move || visible_rows().into_iter().map(|row| {
                        columns.with_value(|cols| view! {
                            <tr>
                                {cols.iter().map(|col| view! { <td>{row.cell_text(&col.field)}</td> }).collect_view()}
                            </tr>
                        })
                    }).collect_view()}
                </tbody>
            </table>

            <div class="grid-footer">
                <span class="page-label">{move || page_label(total, page_size, page.get())}</span>
                <button
                    class="page-btn"
                    disabled=move || page.get() == 0
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                >
                    "‹"
                </button>
                <button
                    class="page-btn"
                    disabled=move || page.get() + 1 >= page_count(total, page_size)
                    on:click=move |_| set_page.update(|p| if *p + 1 < page_count(total, page_size) { *p += 1 })
                >
                    "›"
                </button>
            </div>
        </div>
    }
}
