use crate::shared::components::badge::Badge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::file_input::selected_file;
use crate::shared::icons::icon;
use crate::shared::number_format::format_clp;
use contracts::domain::a005_order::{Order, OrderId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;

/// Действия карточки; обработчики живут в доске
#[derive(Clone, Copy)]
pub struct CardActions {
    pub toggle_urgent: Callback<(OrderId, bool)>,
    pub confirm_recipe: Callback<OrderId>,
    pub upload_photo: Callback<(OrderId, web_sys::File)>,
}

#[component]
pub fn OrderCard(order: Order, actions: CardActions) -> impl IntoView {
    let id = order.id;
    let urgent = order.urgent;
    let photo_input_id = format!("order-photo-{}", id);

    let on_drag_start = move |ev: leptos::ev::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", &id.as_string());
            dt.set_effect_allowed("move");
        }
    };

    view! {
        <div
            class="order-card"
            class:order-card--urgent=urgent
            draggable="true"
            on:dragstart=on_drag_start
        >
            <div class="order-card__header">
                <span class="order-card__id">{format!("#{}", id)}</span>
                {urgent.then(|| view! { <Badge variant="error">"Urgente"</Badge> })}
                {order.recipe_confirmed.then(|| view! { <Badge variant="success">"Receta OK"</Badge> })}
            </div>
            <div class="order-card__customer">{order.customer_name.clone()}</div>
            <div class="order-card__product">
                {format!("{} × {}", order.product_name, order.quantity)}
            </div>
            <div class="order-card__meta">
                <span>{icon("calendar")} {format_optional_date(order.delivery_date)}</span>
                <span class="num">{format_clp(order.total)}</span>
            </div>
            {(!order.address.is_empty()).then(|| view! {
                <div class="order-card__address">{order.address.clone()}</div>
            })}
            {order.photo_url.clone().map(|src| {
                let href = src.clone();
                view! {
                <a class="order-card__photo" href=href target="_blank">
                    <img src=src alt="Foto de entrega" />
                </a>
                }
            })}
            <div class="order-card__actions">
                <button
                    class="icon-btn"
                    title=if urgent { "Quitar urgencia" } else { "Marcar urgente" }
                    on:click=move |_| actions.toggle_urgent.run((id, !urgent))
                >
                    {icon("alert-triangle")}
                </button>
                {(!order.recipe_confirmed).then(|| view! {
                    <button
                        class="icon-btn"
                        title="Confirmar receta y descontar stock"
                        on:click=move |_| actions.confirm_recipe.run(id)
                    >
                        {icon("check")}
                    </button>
                })}
                <label class="icon-btn" title="Subir foto" for=photo_input_id.clone()>
                    {icon("camera")}
                </label>
                <input
                    id=photo_input_id
                    class="visually-hidden"
                    type="file"
                    accept="image/*"
                    on:change=move |ev| {
                        if let Some(file) = selected_file(&ev) {
                            actions.upload_photo.run((id, file));
                        }
                    }
                />
            </div>
        </div>
    }
}
