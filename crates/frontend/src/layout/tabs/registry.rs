//! Маппинг tab.key → View

use super::tab_labels::EVENT_DETAIL_PREFIX;
use crate::dashboards::d400_sales_report::ui::SalesReport;
use crate::domain::a001_flower::ui::list::FlowerList;
use crate::domain::a002_container::ui::list::ContainerList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_product::ui::list::ProductList;
use crate::domain::a006_event::ui::details::EventDetails;
use crate::domain::a006_event::ui::list::EventList;
use crate::domain::a007_route::ui::viewer::RouteViewer;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u502_order_board::OrderBoard;
use contracts::domain::a006_event::EventId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Контент вкладки по ключу; неизвестный ключ даёт заглушку
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "a001_flores" => view! { <FlowerList /> }.into_any(),
        "a002_envases" => view! { <ContainerList /> }.into_any(),
        "a003_proveedores" => view! { <SupplierList /> }.into_any(),
        "a004_productos" => view! { <ProductList /> }.into_any(),
        "a006_eventos" => view! { <EventList /> }.into_any(),
        "a007_rutas" => view! { <RouteViewer /> }.into_any(),
        "u502_order_board" => view! { <OrderBoard /> }.into_any(),
        "d400_sales_report" => view! { <SalesReport /> }.into_any(),

        k if k.starts_with(EVENT_DETAIL_PREFIX) => {
            let raw_id = &k[EVENT_DETAIL_PREFIX.len()..];
            let id = if raw_id == "new" {
                None
            } else {
                match EventId::from_string(raw_id) {
                    Ok(id) => Some(id),
                    Err(e) => {
                        log::warn!("Unknown event tab '{}': {}", k, e);
                        return unknown_tab(k);
                    }
                }
            };
            let tab_key = k.to_string();
            let on_close = Callback::new(move |_| tabs_store.close_tab(&tab_key));
            view! { <EventDetails id=id tab_key=k.to_string() on_close=on_close /> }.into_any()
        }

        _ => unknown_tab(key),
    }
}

fn unknown_tab(key: &str) -> AnyView {
    log::warn!("No content registered for tab '{}'", key);
    view! { <div class="placeholder">{format!("Página no encontrada: {}", key)}</div> }.into_any()
}
