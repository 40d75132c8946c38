mod state;

use crate::domain::a004_product::ui::details::ProductDetails;
use crate::shared::components::page_header::PageHeader;
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list, SearchInput};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::number_format::format_clp;
use crate::usecases::u501_cost_simulation::CostSimulatorView;
use contracts::domain::a004_product::Product;
use contracts::domain::common::AggregateRoot;
use contracts::usecases::u501_cost_simulation::LinePolicy;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::ProductRow;
use thaw::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let items = RwSignal::new(Vec::<ProductRow>::new());
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("name".to_string());
    let sort_ascending = RwSignal::new(true);
    let modal_stack = expect_context::<ModalStackService>();

    let fetch = move || {
        spawn_local(async move {
            match http::get_json::<Vec<Product>>(&Product::list_path()).await {
                Ok(v) => {
                    items.set(v.into_iter().map(ProductRow).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("No se pudieron cargar los productos: {}", e))),
            }
        });
    };

    let visible = move || {
        let mut rows = filter_list(items.get(), &search.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let toggle_sort = move |field: &'static str| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|a| *a = !*a);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    };

    let open_details = move |product: Option<Product>| {
        modal_stack.push_with_class(Some("product-details-modal".to_string()), move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                fetch();
            });
            let on_cancel = Callback::new(move |_| handle.close());
            view! { <ProductDetails product=product.clone() on_saved=on_saved on_cancel=on_cancel /> }
                .into_any()
        });
    };

    let open_simulation = move |product: Product, policy: LinePolicy| {
        modal_stack.push_with_class(Some("simulator-modal".to_string()), move |handle| {
            let on_saved = Callback::new(move |_| fetch());
            let on_close = Callback::new(move |_| handle.close());
            view! {
                <CostSimulatorView
                    product=product.clone()
                    policy=policy
                    on_saved=on_saved
                    on_close=on_close
                />
            }
            .into_any()
        });
    };

    let header_cell = move |field: &'static str, label: &'static str| {
        view! {
            <th class="sortable" on:click=move |_| toggle_sort(field)>
                {label}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader
                title=Product::list_name()
                subtitle=Signal::derive(move || Some(format!("{} productos", items.with(Vec::len))))
            >
                <SearchInput value=search on_change=Callback::new(move |v| search.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_details(None)>
                    {icon("plus")}
                    " Nuevo producto"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <table class="table">
                <thead>
                    <tr>
                        <th></th>
                        {header_cell("name", "Nombre")}
                        {header_cell("category", "Categoría")}
                        {header_cell("colors", "Colores")}
                        {header_cell("price", "Precio")}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|ProductRow(product)| {
                                let colors = product
                                    .colors
                                    .iter()
                                    .map(|c| c.name.as_str())
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                let image = product.image_url.clone();
                                let for_edit = product.clone();
                                let for_sim = product.clone();
                                let for_recipe = product.clone();
                                view! {
                                    <tr class:table__row--inactive={!product.active}>
                                        <td class="table__thumb">
                                            {image.map(|src| view! { <img src=src alt="" /> })}
                                        </td>
                                        <td>{product.name.clone()}</td>
                                        <td>{product.category.clone()}</td>
                                        <td>{colors}</td>
                                        <td class="num">{format_clp(product.price)}</td>
                                        <td class="table__actions">
                                            <button
                                                class="icon-btn"
                                                title="Simular costos"
                                                on:click=move |_| open_simulation(for_sim.clone(), LinePolicy::SIMULATOR)
                                            >
                                                {icon("calculator")}
                                            </button>
                                            <button
                                                class="icon-btn"
                                                title="Editar receta"
                                                on:click=move |_| open_simulation(for_recipe.clone(), LinePolicy::RECIPE_EDITOR)
                                            >
                                                {icon("flower")}
                                            </button>
                                            <button
                                                class="icon-btn"
                                                title="Editar producto"
                                                on:click=move |_| open_details(Some(for_edit.clone()))
                                            >
                                                {icon("products")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
