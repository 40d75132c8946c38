use crate::dashboards::d400_sales_report::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{format_date, parse_input_date, to_input_value, today};
use crate::shared::icons::icon;
use crate::shared::number_format::format_clp;
use contracts::dashboards::d400_sales_report::{
    bar_width_percent, SalesReport as Report, SalesReportDashboard, SalesReportRequest,
};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn bar(label: String, value: f64, max: f64, caption: String) -> impl IntoView {
    view! {
        <div class="bar-row">
            <span class="bar-row__label">{label}</span>
            <div class="bar-row__track">
                <div class="bar-row__fill" style=format!("width: {:.1}%", bar_width_percent(value, max))></div>
            </div>
            <span class="bar-row__value">{caption}</span>
        </div>
    }
}

/// Дашборд продаж за период
#[component]
pub fn SalesReport() -> impl IntoView {
    let request = RwSignal::new(SalesReportRequest::month_to_date(today()));
    let data = RwSignal::new(None::<Report>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Перезагрузка при каждом изменении периода
    Effect::new(move |_| {
        let req = request.get();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::get_sales_report(req).await {
                Ok(report) => data.set(Some(report)),
                Err(e) => {
                    log::error!("Failed to load sales report: {}", e);
                    error.set(Some(format!("No se pudo cargar el reporte: {}", e)));
                }
            }
            loading.set(false);
        });
    });

    let metric = move |f: fn(&Report) -> f64| Signal::derive(move || data.with(|d| d.as_ref().map(f)));

    view! {
        <div class="page page--dashboard">
            <PageHeader
                title=SalesReportDashboard::TITLE
                subtitle=Signal::derive(move || {
                    let r = request.get();
                    Some(format!("{} - {}", format_date(r.date_from), format_date(r.date_to)))
                })
            >
                <input
                    type="date"
                    prop:value=move || to_input_value(Some(request.get().date_from))
                    on:change=move |ev| {
                        if let Some(d) = parse_input_date(&event_target_value(&ev)) {
                            request.update(|r| *r = SalesReportRequest { date_from: d, ..*r }.normalized());
                        }
                    }
                />
                <input
                    type="date"
                    prop:value=move || to_input_value(Some(request.get().date_to))
                    on:change=move |ev| {
                        if let Some(d) = parse_input_date(&event_target_value(&ev)) {
                            request.update(|r| *r = SalesReportRequest { date_to: d, ..*r }.normalized());
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| request.set(SalesReportRequest::month_to_date(today()))
                >
                    "Este mes"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| request.set(SalesReportRequest::last_days(today(), 7))
                >
                    "7 días"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| request.set(SalesReportRequest::last_days(today(), 30))
                >
                    "30 días"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| request.update(|_| {})
                    disabled=loading
                >
                    {icon("refresh")}
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="stat-grid">
                <StatCard
                    label="Ventas"
                    icon_name="dollar-sign"
                    value=metric(|r| r.total_sales)
                    format=ValueFormat::clp()
                    change_percent=Signal::derive(move || data.with(|d| d.as_ref().and_then(|r| r.sales_change_percent)))
                    status=Signal::derive(move || {
                        IndicatorStatus::for_change(data.with(|d| d.as_ref().and_then(|r| r.sales_change_percent)))
                    })
                />
                <StatCard
                    label="Pedidos"
                    icon_name="orders"
                    value=metric(|r| r.order_count as f64)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Ticket promedio"
                    icon_name="bar-chart"
                    value=metric(|r| r.average_ticket)
                    format=ValueFormat::clp()
                />
                <StatCard
                    label="Margen bruto"
                    icon_name="percent"
                    value=metric(Report::gross_margin)
                    format=ValueFormat::clp()
                    subtitle=Signal::derive(move || {
                        data.with(|d| d.as_ref().map(|r| format!("{:.1}% de las ventas", r.gross_margin_percent())))
                    })
                    status=Signal::derive(move || {
                        data.with(|d| {
                            d.as_ref()
                                .map(|r| IndicatorStatus::for_margin_percent(r.gross_margin_percent()))
                                .unwrap_or_default()
                        })
                    })
                />
            </div>

            {move || {
                data.get().map(|report| {
                    let max_daily = report.max_daily();
                    let max_product = report.top_products.iter().map(|p| p.total).fold(0.0, f64::max);
                    let max_category = report.by_category.iter().map(|c| c.total).fold(0.0, f64::max);
                    view! {
                        <div class="dashboard-grid">
                            <section class="card">
                                <h3>"Ventas diarias"</h3>
                                {report.daily.into_iter().map(|d| {
                                    bar(format_date(d.date), d.total, max_daily, format!("{} · {} ped.", format_clp(d.total), d.orders))
                                }).collect_view()}
                            </section>
                            <section class="card">
                                <h3>"Productos más vendidos"</h3>
                                {report.top_products.into_iter().map(|p| {
                                    bar(p.product, p.total, max_product, format!("{} · {} u.", format_clp(p.total), p.quantity))
                                }).collect_view()}
                            </section>
                            <section class="card">
                                <h3>"Por categoría"</h3>
                                {report.by_category.into_iter().map(|c| {
                                    bar(c.category, c.total, max_category, format_clp(c.total))
                                }).collect_view()}
                            </section>
                        </div>
                    }
                })
            }}
        </div>
    }
}
