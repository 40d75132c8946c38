use super::model;
use crate::shared::date_utils::to_input_value;
use crate::shared::icons::icon;
use crate::shared::number_format::format_clp;
use contracts::domain::a004_product::{Product, ProductId};
use contracts::domain::a005_order::{OrderDto, OrderFormAction};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn OrderDetails(on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(OrderDto::new_for_insert());
    let products = RwSignal::new(Vec::<Product>::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let dispatch = move |action: OrderFormAction| {
        let mut result = Ok(());
        form.update(|f| result = f.apply(action));
        if let Err(e) = result {
            error.set(Some(e.to_string()));
        }
    };

    spawn_local(async move {
        match model::fetch_products().await {
            Ok(list) => products.set(list),
            Err(e) => error.set(Some(format!("No se pudieron cargar los productos: {}", e))),
        }
    });

    let selected_total = move || {
        form.with(|f| {
            let price = products.with(|list| {
                list.iter()
                    .find(|p| Some(p.id) == f.product_id)
                    .map(|p| p.price)
            })?;
            Some(price * f.quantity as f64)
        })
    };

    let save = move || {
        let dto = form.get_untracked();
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match model::create_order(&dto).await {
                Ok(()) => {
                    log::info!("Pedido creado: {}", dto.customer_name);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(format!("No se pudo crear el pedido: {}", e))),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="details-container order-details">
            <div class="details-header">
                <h3>"Nuevo pedido"</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="order-customer">"Cliente"</label>
                    <input
                        type="text"
                        id="order-customer"
                        prop:value=move || form.with(|f| f.customer_name.clone())
                        on:input=move |ev| dispatch(OrderFormAction::CustomerName(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="order-phone">"Teléfono"</label>
                    <input
                        type="tel"
                        id="order-phone"
                        placeholder="+569..."
                        prop:value=move || form.with(|f| f.customer_phone.clone())
                        on:input=move |ev| dispatch(OrderFormAction::CustomerPhone(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="order-address">"Dirección de entrega"</label>
                    <input
                        type="text"
                        id="order-address"
                        prop:value=move || form.with(|f| f.address.clone())
                        on:input=move |ev| dispatch(OrderFormAction::Address(event_target_value(&ev)))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="order-product">"Producto"</label>
                        <select
                            id="order-product"
                            on:change=move |ev| {
                                let id = ProductId::from_string(&event_target_value(&ev)).ok();
                                dispatch(OrderFormAction::Product(id));
                            }
                        >
                            <option value="" selected={move || form.with(|f| f.product_id.is_none())}>
                                "Seleccionar..."
                            </option>
                            <For
                                each=move || products.get()
                                key=|p| p.id
                                children=move |p: Product| {
                                    let id = p.id;
                                    view! {
                                        <option
                                            value=id.as_string()
                                            selected={move || form.with(|f| f.product_id == Some(id))}
                                        >
                                            {format!("{} ({})", p.name, format_clp(p.price))}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="order-quantity">"Cantidad"</label>
                        <input
                            type="number"
                            id="order-quantity"
                            min="1"
                            prop:value=move || form.with(|f| f.quantity.to_string())
                            on:change=move |ev| dispatch(OrderFormAction::Quantity(event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-group">
                        <label for="order-date">"Fecha de entrega"</label>
                        <input
                            type="date"
                            id="order-date"
                            prop:value=move || form.with(|f| to_input_value(f.delivery_date))
                            on:change=move |ev| dispatch(OrderFormAction::DeliveryDate(event_target_value(&ev)))
                        />
                    </div>
                </div>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.urgent)
                        on:change=move |ev| dispatch(OrderFormAction::Urgent(event_target_checked(&ev)))
                    />
                    " Urgente"
                </label>

                <div class="form-group">
                    <label for="order-notes">"Notas"</label>
                    <textarea
                        id="order-notes"
                        rows="2"
                        placeholder="Mensaje de tarjeta, indicaciones..."
                        prop:value=move || form.with(|f| f.notes.clone())
                        on:input=move |ev| dispatch(OrderFormAction::Notes(event_target_value(&ev)))
                    />
                </div>

                {move || selected_total().map(|total| view! {
                    <div class="order-details__total">"Total: " {format_clp(total)}</div>
                })}
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| save() disabled=saving>
                    {icon("save")}
                    " Crear pedido"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| dispatch(OrderFormAction::Clear)
                >
                    " Limpiar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    " Cancelar"
                </Button>
            </div>
        </div>
    }
}
