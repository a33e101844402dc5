use std::time::Duration;

use chrono::{Datelike, NaiveDate, Weekday};
use leptos::*;
use leptos_meta::*;
use market_ui::clock;
use market_ui::prelude::*;
use market_ui_headless::{format_date, RequestGuard};

use crate::fixtures::{filter_orders, format_mxn, parse_orders, Order, OrderStatus, ORDERS_JSON};

const SIMULATED_LATENCY: Duration = Duration::from_millis(450);
const ALL_STATUSES: &str = "all";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Panel de vendedor" />
        <Meta
            name="description"
            content="Pedidos, envíos y estados de un taller artesanal en el marketplace."
        />

        <main class="site-root">
            <SellerDashboard />
        </main>
    }
}

fn order_columns() -> Vec<TableColumn<Order>> {
    vec![
        TableColumn::new("id", "Pedido", |order: &Order| order.id.clone()).sortable(),
        TableColumn::new("buyer", "Comprador", |order: &Order| order.buyer.clone()).sortable(),
        TableColumn::new("buyer_age", "Edad", |order: &Order| order.buyer_age)
            .sortable()
            .align(ColumnAlign::Right)
            .hide_below_md(),
        TableColumn::new("product", "Producto", |order: &Order| order.product.clone())
            .hide_below_sm(),
        TableColumn::new("status", "Estado", |order: &Order| order.status.label())
            .render(|order: &Order| status_badge(order.status)),
        TableColumn::new("total", "Total", |order: &Order| order.total)
            .sortable()
            .align(ColumnAlign::Right)
            .render(|order: &Order| order.total.map(format_mxn).unwrap_or_default()),
        TableColumn::new("placed_on", "Fecha", |order: &Order| order.placed_on)
            .sortable()
            .render(|order: &Order| {
                format_date(order.placed_on, DateFormat::Medium, Locale::EsMx)
            }),
    ]
}

fn status_badge(status: OrderStatus) -> impl IntoView {
    let label = status.label();
    view! { <Badge tone=status.tone()>{label}</Badge> }
}

fn status_options() -> Vec<DropdownOption> {
    let mut options = vec![DropdownOption::new(ALL_STATUSES, "Todos los estados")];
    options.extend(
        OrderStatus::ALL
            .into_iter()
            .map(|status| DropdownOption::new(status.token(), status.label())),
    );
    options.push(DropdownOption::new("returned", "Devuelto").disabled());
    options
}

fn ship_date_summary(value: PickerValue) -> String {
    match value {
        PickerValue::Unset => "Sin fecha de envío".to_string(),
        PickerValue::Cleared => "Fecha de envío eliminada".to_string(),
        PickerValue::Date(date) => format!(
            "Envío programado: {}",
            format_date(date, DateFormat::Long, Locale::EsMx)
        ),
    }
}

fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

#[component]
pub fn SellerDashboard() -> impl IntoView {
    let orders = create_rw_signal(Vec::<Order>::new());
    let loading = create_rw_signal(true);
    let guard = RequestGuard::new();

    let load = {
        let guard = guard.clone();
        move || {
            let ticket = guard.begin();
            let guard = guard.clone();
            loading.set(true);
            let scheduled = set_timeout_with_handle(
                move || {
                    if !guard.is_current(ticket) {
                        logging::warn!("discarding stale order load");
                        return;
                    }
                    match parse_orders(ORDERS_JSON) {
                        Ok(loaded) => {
                            logging::log!("loaded {} orders", loaded.len());
                            orders.set(loaded);
                        }
                        Err(err) => {
                            logging::warn!("{err}");
                            orders.set(Vec::new());
                        }
                    }
                    loading.set(false);
                },
                SIMULATED_LATENCY,
            );
            if let Err(err) = scheduled {
                logging::warn!("order load could not be scheduled: {err:?}");
                loading.set(false);
            }
        }
    };
    load();
    on_cleanup(move || guard.invalidate());

    let status_filter = create_rw_signal(None::<OrderStatus>);
    let visible = Signal::derive(move || {
        orders.with(|orders| filter_orders(orders, status_filter.get()))
    });
    let selected = create_rw_signal(Vec::<String>::new());
    let sort_note = create_rw_signal(String::new());

    let today = clock::today();
    let ship_date = create_rw_signal(PickerValue::Unset);

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Lg layout_class="seller-dashboard">
            <Heading level=1>"Panel de vendedor"</Heading>

            <Panel aria_label="Pedidos recientes" busy=loading>
                <PaneHeader
                    title="Pedidos recientes".to_string()
                    meta=Signal::derive(move || {
                        let count = selected.with(Vec::len);
                        match count {
                            0 => sort_note.get(),
                            1 => "1 pedido seleccionado".to_string(),
                            n => format!("{n} pedidos seleccionados"),
                        }
                    })
                >
                    <Popover
                        trigger=PopoverTrigger::Hover
                        placement=Placement::BottomEnd
                        aria_label="Ayuda de pedidos"
                        header=|| view! { <Text role=TextRole::Label>"Cómo usar la tabla"</Text> }
                        content=|| view! {
                            <Text tone=TextTone::Secondary>
                                "Ordena por columna con un clic; el tercer clic restaura el orden original. "
                                "La selección se conserva al reordenar."
                            </Text>
                        }
                    >
                        <Button
                            variant=ButtonVariant::Ghost
                            size=ButtonSize::Sm
                            aria_label="Ayuda".to_string()
                            leading_icon=IconName::Info
                        />
                    </Popover>
                    <Dropdown
                        options=status_options()
                        default_value=ALL_STATUSES.to_string()
                        variant=DropdownVariant::Outline
                        size=ButtonSize::Sm
                        aria_label="Filtrar por estado"
                        on_change=Callback::new(move |value: String| {
                            status_filter.set(OrderStatus::from_token(&value));
                        })
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_: ev::MouseEvent| load())
                    >
                        "Recargar"
                    </Button>
                </PaneHeader>

                <DataTable
                    columns=order_columns()
                    data=visible
                    key_accessor=|order: &Order| order.id.clone()
                    selectable=true
                    on_selection_change=Callback::new(move |keys: Vec<String>| selected.set(keys))
                    on_sort_change=Callback::new(move |sort: SortState| {
                        let note = match (sort.key(), sort.direction()) {
                            (Some(key), Some(direction)) => format!("Orden: {key} ({})", direction.token()),
                            _ => String::new(),
                        };
                        sort_note.set(note);
                    })
                    loading=loading
                    aria_label="Pedidos recientes"
                    empty_message="No hay pedidos con este estado"
                />
            </Panel>

            <Cluster gap=LayoutGap::Lg align=LayoutAlign::Start>
                <Panel aria_label="Programar envío">
                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Label>"Fecha de envío"</Text>
                        <DatePicker
                            value=Signal::derive(move || ship_date.get().date())
                            on_change=Callback::new(move |change: Option<NaiveDate>| {
                                ship_date.update(|value| *value = value.apply(change));
                            })
                            min_date=today
                            disabled_dates=DisabledDates::predicate(is_sunday)
                            date_format=DateFormat::Long
                            aria_label="Fecha de envío"
                        />
                        <Text role=TextRole::Caption tone=TextTone::Secondary>
                            {move || ship_date_summary(ship_date.get())}
                        </Text>
                    </Stack>
                </Panel>

                <Panel aria_label="Weekly cutoff">
                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Label>"Weekly cutoff"</Text>
                        <DatePicker
                            variant=PickerVariant::Inline
                            locale=Locale::EnUs
                            week_start=WeekStart::Monday
                            clearable=false
                            aria_label="Weekly cutoff"
                        />
                    </Stack>
                </Panel>
            </Cluster>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use market_ui_headless::SortValue;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn status_filter_offers_every_status_plus_all() {
        let options = status_options();
        let values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["all", "pending", "shipped", "delivered", "cancelled", "returned"]
        );
        assert!(options.last().is_some_and(|option| option.disabled));
        assert_eq!(OrderStatus::from_token(ALL_STATUSES), None);
    }

    #[test]
    fn ship_date_summary_distinguishes_cleared_from_unset() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 20).expect("valid date");
        assert_eq!(ship_date_summary(PickerValue::Unset), "Sin fecha de envío");
        assert_eq!(
            ship_date_summary(PickerValue::Date(date).apply(None)),
            "Fecha de envío eliminada"
        );
        assert_eq!(
            ship_date_summary(PickerValue::Date(date)),
            "Envío programado: 20 de junio de 2024"
        );
    }

    #[test]
    fn sundays_are_not_shipping_days() {
        let sunday = NaiveDate::from_ymd_opt(2024, 6, 16).expect("valid date");
        assert!(is_sunday(sunday));
        assert!(!is_sunday(sunday.succ_opt().expect("valid date")));
    }

    #[test]
    fn table_columns_sort_by_their_accessors() {
        let orders = parse_orders(ORDERS_JSON).expect("fixture decodes");
        let columns = order_columns();
        let keys: Vec<&str> = columns.iter().map(|column| column.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["id", "buyer", "buyer_age", "product", "status", "total", "placed_on"]
        );
        assert!(columns[5].value(&orders[3]).is_missing());
        assert_eq!(
            columns[4].value(&orders[3]),
            SortValue::Text("Cancelado".to_string())
        );
    }
}
