//! Sortable, selectable data table.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use leptos::*;
use market_ui_headless::{
    duplicate_keys, resolve_body, sorted_indices, ColumnAlign, ColumnVisibility, Controllable,
    SelectAllState, SelectionSet, SortDirection, SortState, SortStrategy, SortValue, TableBody,
    DEFAULT_SKELETON_ROWS,
};

use crate::primitives::{bool_token, merge_layout_class, CheckboxField, EmptyState};
use crate::{Icon, IconName, IconSize};

/// Column definition for [`DataTable`].
pub struct TableColumn<R> {
    /// Stable column key, reported in [`SortState`].
    pub key: String,
    /// Header label.
    pub header: String,
    /// Cell alignment.
    pub align: ColumnAlign,
    /// Responsive hiding.
    pub visibility: ColumnVisibility,
    /// Whether clicking the header cycles the sort.
    pub sortable: bool,
    accessor: Rc<dyn Fn(&R) -> SortValue>,
    render: Option<Rc<dyn Fn(&R) -> View>>,
}

impl<R> Clone for TableColumn<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            align: self.align,
            visibility: self.visibility,
            sortable: self.sortable,
            accessor: Rc::clone(&self.accessor),
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for TableColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("align", &self.align)
            .field("visibility", &self.visibility)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish_non_exhaustive()
    }
}

impl<R> TableColumn<R> {
    /// Creates a column whose cells and sort keys come from `accessor`.
    pub fn new<V>(
        key: impl Into<String>,
        header: impl Into<String>,
        accessor: impl Fn(&R) -> V + 'static,
    ) -> Self
    where
        V: Into<SortValue>,
    {
        Self {
            key: key.into(),
            header: header.into(),
            align: ColumnAlign::Left,
            visibility: ColumnVisibility::default(),
            sortable: false,
            accessor: Rc::new(move |row| accessor(row).into()),
            render: None,
        }
    }

    /// Replaces the default text cell with a custom view. Sorting still uses the accessor.
    pub fn render<V>(mut self, render: impl Fn(&R) -> V + 'static) -> Self
    where
        V: IntoView,
    {
        self.render = Some(Rc::new(move |row| render(row).into_view()));
        self
    }

    /// Makes the header a sort control.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets cell alignment.
    pub fn align(mut self, align: ColumnAlign) -> Self {
        self.align = align;
        self
    }

    /// Hides the column below the small breakpoint.
    pub fn hide_below_sm(mut self) -> Self {
        self.visibility.hide_below_sm = true;
        self
    }

    /// Hides the column below the medium breakpoint.
    pub fn hide_below_md(mut self) -> Self {
        self.visibility.hide_below_md = true;
        self
    }

    /// Sort value for `row`.
    pub fn value(&self, row: &R) -> SortValue {
        (self.accessor)(row)
    }

    fn cell(&self, row: &R) -> View {
        match &self.render {
            Some(render) => render(row),
            None => display_sort_value(&self.value(row)).into_view(),
        }
    }
}

/// Default cell text for an accessor value.
pub fn display_sort_value(value: &SortValue) -> String {
    match value {
        SortValue::Missing => String::new(),
        SortValue::Bool(true) => "Sí".to_string(),
        SortValue::Bool(false) => "No".to_string(),
        SortValue::Integer(value) => value.to_string(),
        SortValue::Number(value) => value.to_string(),
        SortValue::Text(value) => value.clone(),
        SortValue::Date(value) => value.format("%d/%m/%Y").to_string(),
    }
}

fn column_value<R>(columns: &[TableColumn<R>], row: &R, key: &str) -> SortValue {
    columns
        .iter()
        .find(|column| column.key == key)
        .map(|column| column.value(row))
        .unwrap_or_default()
}

/// Row indices in display order for the active sort.
fn display_order<R>(
    columns: &[TableColumn<R>],
    rows: &[R],
    sort: &SortState,
    strategy: SortStrategy,
) -> Vec<usize> {
    sorted_indices(rows, sort, strategy, |row, key| column_value(columns, row, key))
}

/// Row keys in display order.
fn displayed_keys<R, K>(rows: &[R], order: &[usize], key_of: impl Fn(&R) -> K) -> Vec<K> {
    order.iter().map(|&index| key_of(&rows[index])).collect()
}

/// Selected keys in displayed row order, followed by selected keys that are not on screen.
fn ordered_selection<K: Clone + Eq + Hash>(selection: &SelectionSet<K>, visible: &[K]) -> Vec<K> {
    let mut seen: HashSet<&K> = HashSet::with_capacity(selection.len());
    let mut ordered = Vec::with_capacity(selection.len());
    for key in visible.iter().chain(selection.iter()) {
        if selection.contains(key) && seen.insert(key) {
            ordered.push(key.clone());
        }
    }
    ordered
}

#[component]
/// Data table with optional local sorting, keyed row selection, and loading/empty bodies.
///
/// Rows are identified by `key_accessor`. Selection follows keys, not positions, so it survives
/// re-sorting. Supplying `selected_keys` makes selection controlled.
pub fn DataTable<R, K, KF>(
    columns: Vec<TableColumn<R>>,
    #[prop(into)] data: MaybeSignal<Vec<R>>,
    key_accessor: KF,
    #[prop(optional)] selectable: bool,
    #[prop(optional, into)] selected_keys: Option<MaybeSignal<Vec<K>>>,
    #[prop(optional)] on_selection_change: Option<Callback<Vec<K>>>,
    #[prop(default = SortStrategy::Local)] sort_strategy: SortStrategy,
    #[prop(optional)] default_sort: SortState,
    #[prop(optional)] on_sort_change: Option<Callback<SortState>>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(default = DEFAULT_SKELETON_ROWS)] skeleton_rows: usize,
    #[prop(default = "No hay datos para mostrar".to_string(), into)] empty_message: String,
    #[prop(default = IconName::Inbox)] empty_icon: IconName,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView
where
    R: Clone + 'static,
    K: Clone + Eq + Hash + fmt::Debug + 'static,
    KF: Fn(&R) -> K + 'static,
{
    let data = Signal::derive(move || data.get());
    let columns = store_value(columns);
    let key_of = store_value(key_accessor);
    let sort = create_rw_signal(default_sort);
    let selection = create_rw_signal(Controllable::resolve(
        selected_keys
            .as_ref()
            .map(|keys| keys.get_untracked().into_iter().collect::<SelectionSet<K>>()),
        SelectionSet::new,
    ));

    if let Some(selected_keys) = selected_keys {
        create_effect(move |_| {
            let next: SelectionSet<K> = selected_keys.get().into_iter().collect();
            selection.update(|selection| {
                selection.sync(next);
            });
        });
    }

    let order = Signal::derive(move || {
        data.with(|rows| {
            sort.with(|sort| {
                columns.with_value(|columns| display_order(columns, rows, sort, sort_strategy))
            })
        })
    });
    let visible_keys = Signal::derive(move || {
        data.with(|rows| {
            order.with(|order| key_of.with_value(|key_of| displayed_keys(rows, order, key_of)))
        })
    });

    create_effect(move |_| {
        let duplicates = visible_keys.with(|keys| duplicate_keys(keys.iter().cloned()));
        if !duplicates.is_empty() {
            logging::warn!(
                "DataTable received duplicate row keys {duplicates:?}; rows sharing a key share selection"
            );
        }
    });

    let report_selection = move |next: SelectionSet<K>| {
        let ordered = visible_keys.with_untracked(|visible| ordered_selection(&next, visible));
        selection.update(|selection| {
            selection.request(next);
        });
        if let Some(on_selection_change) = on_selection_change {
            on_selection_change.call(ordered);
        }
    };
    let toggle_row = move |key: K| {
        let mut next = selection.with_untracked(|selection| selection.get().clone());
        next.toggle(key);
        report_selection(next);
    };
    let toggle_all = move || {
        let mut next = selection.with_untracked(|selection| selection.get().clone());
        visible_keys.with_untracked(|visible| next.toggle_all(visible));
        report_selection(next);
    };
    let activate_sort = move |key: String| {
        let next = sort.with_untracked(|sort| sort.activate(&key));
        sort.set(next.clone());
        if let Some(on_sort_change) = on_sort_change {
            on_sort_change.call(next);
        }
    };

    let body = Signal::derive(move || {
        resolve_body(loading.get(), data.with(Vec::len), skeleton_rows)
    });
    let coverage = Signal::derive(move || {
        visible_keys.with(|visible| selection.with(|selection| selection.get().coverage(visible)))
    });
    let column_count = columns.with_value(Vec::len) + usize::from(selectable);
    let empty_message = store_value(empty_message);

    let header_cells = move || {
        columns.with_value(|columns| {
            columns
                .iter()
                .map(|column| {
                    let key = column.key.clone();
                    let aria_sort = {
                        let key = key.clone();
                        move || {
                            sort.with(|sort| {
                                sort.direction_for(&key)
                                    .map(|direction| direction.aria_sort())
                                    .unwrap_or("none")
                            })
                        }
                    };
                    let header = column.header.clone();
                    let content = if column.sortable {
                        let icon_key = key.clone();
                        let sort_icon = move || {
                            let icon = match sort.with(|sort| sort.direction_for(&icon_key)) {
                                Some(SortDirection::Ascending) => IconName::SortAscending,
                                Some(SortDirection::Descending) => IconName::SortDescending,
                                None => IconName::Sortable,
                            };
                            view! { <Icon icon size=IconSize::Xs /> }
                        };
                        view! {
                            <button
                                type="button"
                                class="ui-table-sort"
                                data-ui-slot="sort-trigger"
                                on:click=move |_| activate_sort(key.clone())
                            >
                                <span>{header}</span>
                                {sort_icon}
                            </button>
                        }
                        .into_view()
                    } else {
                        header.into_view()
                    };
                    view! {
                        <th
                            scope="col"
                            aria-sort=aria_sort
                            data-ui-align=column.align.token()
                            data-ui-hide=column.visibility.token()
                            data-ui-sortable=bool_token(column.sortable)
                        >
                            {content}
                        </th>
                    }
                })
                .collect_view()
        })
    };

    let skeleton_body = move |rows: usize| {
        view! {
            <tbody data-ui-state="loading" aria-busy="true">
                {(0..rows)
                    .map(|_| {
                        view! {
                            <tr data-ui-slot="skeleton-row">
                                {(0..column_count)
                                    .map(|_| view! {
                                        <td><span class="ui-skeleton" data-ui-kind="skeleton"></span></td>
                                    })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        }
    };

    let data_body = move || {
        let rows = data.get();
        view! {
            <tbody>
                {order
                    .get()
                    .into_iter()
                    .map(|index| {
                        let row = rows[index].clone();
                        let key = key_of.with_value(|key_of| key_of(&row));
                        let row_key = key.clone();
                        let selected = Signal::derive(move || {
                            selection.with(|selection| selection.get().contains(&row_key))
                        });
                        let checkbox = selectable.then(|| {
                            let key = key.clone();
                            view! {
                                <td data-ui-slot="select">
                                    <CheckboxField
                                        aria_label="Seleccionar fila".to_string()
                                        checked=selected
                                        on_change=Callback::new(move |_: web_sys::Event| {
                                            toggle_row(key.clone())
                                        })
                                    />
                                </td>
                            }
                        });
                        let cells = columns.with_value(|columns| {
                            columns
                                .iter()
                                .map(|column| {
                                    view! {
                                        <td
                                            data-ui-align=column.align.token()
                                            data-ui-hide=column.visibility.token()
                                        >
                                            {column.cell(&row)}
                                        </td>
                                    }
                                })
                                .collect_view()
                        });
                        view! {
                            <tr
                                aria-selected=move || selectable.then(|| bool_token(selected.get()))
                                data-ui-state=move || if selected.get() { "selected" } else { "idle" }
                            >
                                {checkbox}
                                {cells}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-data-table", layout_class)
            data-ui-primitive="true"
            data-ui-kind="data-table"
            data-ui-sort-strategy=match sort_strategy {
                SortStrategy::Local => "local",
                SortStrategy::Delegated => "delegated",
            }
        >
            <table aria-label=aria_label aria-busy=move || bool_token(loading.get())>
                <thead>
                    <tr>
                        {selectable.then(|| view! {
                            <th scope="col" data-ui-slot="select">
                                <CheckboxField
                                    aria_label="Seleccionar todas las filas".to_string()
                                    checked=Signal::derive(move || coverage.get() == SelectAllState::All)
                                    indeterminate=Signal::derive(move || coverage.get() == SelectAllState::Partial)
                                    disabled=Signal::derive(move || body.get() != TableBody::Rows)
                                    on_change=Callback::new(move |_: web_sys::Event| toggle_all())
                                />
                            </th>
                        })}
                        {header_cells}
                    </tr>
                </thead>
                {move || match body.get() {
                    TableBody::Loading { rows } => skeleton_body(rows).into_view(),
                    TableBody::Empty => ().into_view(),
                    TableBody::Rows => data_body().into_view(),
                }}
            </table>
            <Show when=move || body.get() == TableBody::Empty fallback=|| ()>
                <EmptyState icon=empty_icon>{empty_message.get_value()}</EmptyState>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Clone)]
    struct Order {
        id: &'static str,
        buyer: &'static str,
        total: Option<f64>,
    }

    fn columns() -> Vec<TableColumn<Order>> {
        vec![
            TableColumn::new("buyer", "Comprador", |order: &Order| order.buyer).sortable(),
            TableColumn::new("total", "Total", |order: &Order| order.total)
                .sortable()
                .align(ColumnAlign::Right)
                .hide_below_sm(),
        ]
    }

    #[test]
    fn column_lookup_uses_the_accessor_for_the_key() {
        let order = Order {
            id: "A-1",
            buyer: "Lucía",
            total: Some(120.5),
        };
        let columns = columns();
        assert_eq!(
            column_value(&columns, &order, "buyer"),
            SortValue::Text("Lucía".to_string())
        );
        assert_eq!(column_value(&columns, &order, "total"), SortValue::Number(120.5));
        assert_eq!(column_value(&columns, &order, "missing"), SortValue::Missing);
        assert_eq!(columns[1].visibility.token(), "below-sm");
        assert_eq!(order.id, "A-1");
    }

    #[test]
    fn default_cell_text_covers_each_value_kind() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 5).expect("valid date");
        assert_eq!(display_sort_value(&SortValue::Missing), "");
        assert_eq!(display_sort_value(&SortValue::Bool(true)), "Sí");
        assert_eq!(display_sort_value(&SortValue::Integer(42)), "42");
        assert_eq!(display_sort_value(&SortValue::Date(date)), "05/06/2024");
    }

    #[test]
    fn reported_selection_follows_row_order_then_offscreen_keys() {
        let selection: SelectionSet<&str> = ["c", "a", "z"].into_iter().collect();
        assert_eq!(
            ordered_selection(&selection, &["a", "b", "c"]),
            vec!["a", "c", "z"]
        );
    }

    #[test]
    fn reported_selection_follows_the_sorted_rows() {
        let rows = vec![
            Order {
                id: "A-1",
                buyer: "Lucía",
                total: Some(120.0),
            },
            Order {
                id: "A-2",
                buyer: "Mateo",
                total: Some(980.0),
            },
            Order {
                id: "A-3",
                buyer: "Ximena",
                total: Some(450.0),
            },
        ];
        let columns = columns();
        let sort = SortState::by("total", SortDirection::Descending);
        let order = display_order(&columns, &rows, &sort, SortStrategy::Local);
        let keys = displayed_keys(&rows, &order, |order: &Order| order.id);
        assert_eq!(keys, vec!["A-2", "A-3", "A-1"]);

        let selection: SelectionSet<&str> = ["A-1", "A-3"].into_iter().collect();
        assert_eq!(ordered_selection(&selection, &keys), vec!["A-3", "A-1"]);

        let delegated = display_order(&columns, &rows, &sort, SortStrategy::Delegated);
        assert_eq!(delegated, vec![0, 1, 2]);
    }
}
