use super::view_model::ProductDetailsViewModel;
use crate::shared::file_input::selected_file;
use crate::shared::icons::icon;
use crate::shared::number_format::format_input_amount;
use contracts::domain::a004_product::Product;
use contracts::shared::validation::{parse_amount, sanitize_amount};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    product: Option<Product>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(product.as_ref());

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar producto" } else { "Nuevo producto" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="product-name">"Nombre"</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-category">"Categoría"</label>
                    <input
                        type="text"
                        id="product-category"
                        placeholder="Ramos, Cajas, Arreglos..."
                        prop:value=move || vm.form.with(|f| f.category.clone())
                        on:input=move |ev| vm.form.update(|f| f.category = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-price">"Precio"</label>
                    <input
                        type="number"
                        id="product-price"
                        min="0"
                        prop:value=move || vm.form.with(|f| format_input_amount(f.price))
                        on:change=move |ev| {
                            match parse_amount(&event_target_value(&ev), "Precio") {
                                Ok(v) => vm.form.update(|f| f.price = sanitize_amount(v)),
                                Err(e) => vm.error.set(Some(e.to_string())),
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="product-colors">"Colores (separados por coma)"</label>
                    <input
                        type="text"
                        id="product-colors"
                        placeholder="Rojo, Blanco"
                        prop:value=move || vm.colors_text.get()
                        on:input=move |ev| vm.colors_text.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="product-details">"Descripción"</label>
                    <textarea
                        id="product-details"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.details.clone())
                        on:input=move |ev| vm.form.update(|f| f.details = event_target_value(&ev))
                    />
                </div>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.with(|f| f.active)
                        on:change=move |ev| vm.form.update(|f| f.active = event_target_checked(&ev))
                    />
                    " Activo"
                </label>

                <Show when=move || vm.is_edit_mode()>
                    <div class="form-group product-details__image">
                        <label>"Imagen"</label>
                        {move || vm.image_url.get().map(|src| view! { <img src=src alt="" /> })}
                        <input
                            type="file"
                            accept="image/*"
                            disabled=move || vm.uploading.get()
                            on:change=move |ev| {
                                if let Some(file) = selected_file(&ev) {
                                    vm.upload_command(file);
                                }
                            }
                        />
                    </div>
                </Show>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(on_saved)
                    disabled=vm.saving
                >
                    {icon("save")}
                    " Guardar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {icon("x")}
                    " Cancelar"
                </Button>
            </div>
        </div>
    }
}
