use super::model;
use crate::shared::components::badge::Badge;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::{parse_input_date, to_input_value, today};
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::map_ffi;
use crate::usecases::u502_order_board::model as order_api;
use contracts::domain::a005_order::OrderId;
use contracts::domain::a007_route::{Route, RouteStop};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_envelope::ApiError;
use contracts::usecases::u502_order_board::{MoveOrderRequest, OrderState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const MAP_CONTAINER: &str = "route-map";

#[component]
pub fn RouteViewer() -> impl IntoView {
    let date = RwSignal::new(today());
    let route = RwSignal::new(None::<Route>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let apply_route = move |result: Result<Route, ApiError>| match result {
        Ok(r) => {
            log::info!("Ruta {}: {} paradas", r.date, r.stops.len());
            map_ffi::show_route(Some(&r));
            route.set(Some(r));
            error.set(None);
        }
        Err(e) => {
            map_ffi::show_route(None);
            route.set(None);
            error.set(Some(format!("No se pudo obtener la ruta: {}", e)));
        }
    };

    let fetch = move || {
        let day = date.get_untracked();
        busy.set(true);
        spawn_local(async move {
            apply_route(model::fetch_route(day).await);
            busy.set(false);
        });
    };

    let optimize = move || {
        let day = date.get_untracked();
        busy.set(true);
        spawn_local(async move {
            apply_route(model::optimize_route(day).await);
            busy.set(false);
        });
    };

    let update_stop = move |order_id: OrderId, patch: fn(&mut RouteStop)| {
        route.update(|r| {
            if let Some(r) = r.as_mut() {
                if let Some(stop) = r.stop_mut(order_id) {
                    patch(stop);
                }
                map_ffi::show_route(Some(r));
            }
        });
    };

    let mark_urgent = move |order_id: OrderId| {
        spawn_local(async move {
            match order_api::set_urgent(order_id, true).await {
                Ok(()) => update_stop(order_id, |s| s.urgent = true),
                Err(e) => alert(&format!("No se pudo marcar como urgente: {}", e)),
            }
        });
    };

    let mark_dispatched = move |order_id: OrderId| {
        let request = MoveOrderRequest {
            state: OrderState::Dispatched,
        };
        spawn_local(async move {
            match order_api::move_order(order_id, &request).await {
                Ok(()) => update_stop(order_id, |s| s.dispatched = true),
                Err(e) => alert(&format!("No se pudo marcar como despachado: {}", e)),
            }
        });
    };

    let print = move || {
        let Some(id) = route.with_untracked(|r| r.as_ref().map(|r| r.id)) else {
            return;
        };
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.open_with_url_and_target(&model::print_url(id), "_blank") {
                log::error!("window.open failed: {:?}", e);
            }
        }
    };

    // Контейнер карты появляется в DOM к моменту первого запуска эффекта
    Effect::new(move |_| {
        map_ffi::init(MAP_CONTAINER);
        fetch();
    });

    view! {
        <div class="page page--route">
            <PageHeader
                title=Route::list_name()
                subtitle=Signal::derive(move || {
                    route.with(|r| {
                        r.as_ref().map(|r| {
                            format!(
                                "{} paradas · {} pendientes · {:.1} km · {:.0} min",
                                r.stops.len(),
                                r.pending_count(),
                                r.distance_km,
                                r.duration_min,
                            )
                        })
                    })
                })
            >
                <input
                    type="date"
                    prop:value=move || to_input_value(Some(date.get()))
                    on:change=move |ev| {
                        if let Some(d) = parse_input_date(&event_target_value(&ev)) {
                            date.set(d);
                            fetch();
                        }
                    }
                />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| optimize() disabled=busy>
                    {icon("truck")}
                    " Optimizar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| print()
                    disabled=Signal::derive(move || route.with(Option::is_none))
                >
                    {icon("printer")}
                    " Imprimir"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="route">
                <ol class="route__stops">
                    {move || {
                        route.with(|r| {
                            r.as_ref()
                                .map(|r| {
                                    r.ordered_stops()
                                        .into_iter()
                                        .map(|stop| {
                                            let order_id = stop.order_id;
                                            let urgent = stop.urgent;
                                            let dispatched = stop.dispatched;
                                            view! {
                                                <li
                                                    class="route__stop"
                                                    class:route__stop--done=dispatched
                                                    on:click=move |_| map_ffi::focus_stop(order_id.value())
                                                >
                                                    <span class="route__position">{stop.position}</span>
                                                    <div class="route__info">
                                                        <div class="route__customer">
                                                            {stop.customer.clone()}
                                                            {urgent.then(|| view! { <Badge variant="error">"Urgente"</Badge> })}
                                                            {dispatched.then(|| view! { <Badge variant="success">"Despachado"</Badge> })}
                                                        </div>
                                                        <div class="route__address">{stop.address.clone()}</div>
                                                    </div>
                                                    <div class="route__actions">
                                                        <button
                                                            class="icon-btn"
                                                            title="Marcar urgente"
                                                            disabled={urgent}
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                mark_urgent(order_id);
                                                            }
                                                        >
                                                            {icon("alert-triangle")}
                                                        </button>
                                                        <button
                                                            class="icon-btn"
                                                            title="Marcar despachado"
                                                            disabled={dispatched}
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                mark_dispatched(order_id);
                                                            }
                                                        >
                                                            {icon("check")}
                                                        </button>
                                                    </div>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                })
                        })
                    }}
                </ol>
                <div id=MAP_CONTAINER class="route__map"></div>
            </div>
        </div>
    }
}
