use super::card::{CardActions, OrderCard};
use super::model;
use crate::domain::a005_order::ui::details::OrderDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::today;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::a005_order::{Order, OrderId};
use contracts::domain::common::AggregateId;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_order_board::{
    group_orders, move_request, BoardColumn, BoardKind, BoardQuery, OrderBoardUseCase, OrderState,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn OrderBoard() -> impl IntoView {
    let orders = RwSignal::new(Vec::<Order>::new());
    let kind = RwSignal::new(BoardKind::Kanban);
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let drop_target = RwSignal::new(None::<OrderState>);
    let modal_stack = expect_context::<ModalStackService>();

    let fetch = move |query: BoardQuery| {
        loading.set(true);
        spawn_local(async move {
            match model::fetch_orders(query).await {
                Ok(list) => {
                    orders.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("No se pudieron cargar los pedidos: {}", e))),
            }
            loading.set(false);
        });
    };
    // После действий оператора даты не пересчитываются: заказ остаётся там, куда его положили
    let refresh = move || fetch(BoardQuery::after_move());

    let move_order = move |order_id: OrderId, target: OrderState| {
        let Some(order) =
            orders.with_untracked(|list| list.iter().find(|o| o.id == order_id).cloned())
        else {
            return;
        };
        let Some((id, request)) = move_request(&order, kind.get_untracked(), target, today()) else {
            return;
        };
        spawn_local(async move {
            match model::move_order(id, &request).await {
                Ok(()) => {
                    log::info!("Pedido {} -> {}", id, request.state);
                    refresh();
                }
                Err(e) => alert(&format!("No se pudo mover el pedido #{}: {}", id, e)),
            }
        });
    };

    let actions = CardActions {
        toggle_urgent: Callback::new(move |(id, urgent): (OrderId, bool)| {
            spawn_local(async move {
                match model::set_urgent(id, urgent).await {
                    Ok(()) => refresh(),
                    Err(e) => alert(&format!("No se pudo actualizar el pedido #{}: {}", id, e)),
                }
            });
        }),
        confirm_recipe: Callback::new(move |id: OrderId| {
            if !confirm(&format!(
                "¿Confirmar la receta del pedido #{}? Se descontará el stock.",
                id
            )) {
                return;
            }
            spawn_local(async move {
                match model::confirm_recipe(id).await {
                    Ok(()) => {
                        log::info!("Receta confirmada: pedido {}", id);
                        refresh();
                    }
                    Err(e) => alert(&format!("No se pudo confirmar la receta: {}", e)),
                }
            });
        }),
        upload_photo: Callback::new(move |(id, file): (OrderId, web_sys::File)| {
            spawn_local(async move {
                match model::upload_photo(id, &file).await {
                    Ok(photo) => {
                        orders.update(|list| {
                            if let Some(o) = list.iter_mut().find(|o| o.id == id) {
                                o.photo_url = Some(photo.url);
                            }
                        });
                    }
                    Err(e) => alert(&format!("No se pudo subir la foto: {}", e)),
                }
            });
        }),
    };

    let open_new_order = move || {
        modal_stack.push_with_class(Some("order-details-modal".to_string()), move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                fetch(BoardQuery::initial());
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <OrderDetails on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    let column_view = move |column: BoardColumn| {
        let state = column.state;
        let count = column.orders.len();
        let urgent = column.urgent_count();
        let cards = column
            .orders
            .into_iter()
            .map(|order| view! { <OrderCard order=order actions=actions /> })
            .collect_view();

        view! {
            <div
                class=format!("board__column board__column--{}", state.accent())
                class:board__column--drop=move || drop_target.get() == Some(state)
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drop_target.set(Some(state));
                }
                on:dragleave=move |_| drop_target.set(None)
                on:drop=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    drop_target.set(None);
                    let raw = ev
                        .data_transfer()
                        .and_then(|dt| dt.get_data("text/plain").ok())
                        .unwrap_or_default();
                    match OrderId::from_string(&raw) {
                        Ok(id) => move_order(id, state),
                        Err(e) => log::warn!("Drop without order id: {}", e),
                    }
                }
            >
                <div class="board__column-header">
                    <span class="board__column-title">{state.label()}</span>
                    <span class="board__column-count">{count}</span>
                    {(urgent > 0).then(|| view! {
                        <span class="board__column-urgent" title="Urgentes">{format!("! {}", urgent)}</span>
                    })}
                </div>
                <div class="board__cards">{cards}</div>
            </div>
        }
    };

    fetch(BoardQuery::initial());

    view! {
        <div class="page page--board">
            <PageHeader
                title=OrderBoardUseCase::display_name()
                subtitle=Signal::derive(move || Some(format!("{} pedidos", orders.with(Vec::len))))
            >
                <div class="segmented">
                    {[BoardKind::Kanban, BoardKind::Simplified]
                        .into_iter()
                        .map(|k| view! {
                            <button
                                class="segmented__item"
                                class:segmented__item--active=move || kind.get() == k
                                on:click=move |_| kind.set(k)
                            >
                                {k.title()}
                            </button>
                        })
                        .collect_view()}
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_new_order()>
                    {icon("plus")}
                    " Nuevo pedido"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch(BoardQuery::initial())
                    disabled=loading
                >
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="board">
                {move || {
                    group_orders(&orders.get(), kind.get(), today())
                        .into_iter()
                        .map(column_view)
                        .collect_view()
                }}
            </div>
        </div>
    }
}
