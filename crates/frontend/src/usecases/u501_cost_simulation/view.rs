use super::view_model::SimulatorViewModel;
use crate::shared::components::stat_card::StatCard;
use crate::shared::dialogs::confirm;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_clp, format_input_amount};
use contracts::domain::a001_flower::FlowerId;
use contracts::domain::a002_container::ContainerId;
use contracts::domain::a004_product::{Product, ProductColorId};
use contracts::domain::common::AggregateId;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::usecases::u501_cost_simulation::{
    ColorGroup, FlowerLine, LineChange, LinePolicy, SimulationAction, SimulationTotals,
};
use leptos::prelude::*;
use thaw::*;

/// Вариант выбора цветка: (id, подпись)
type FlowerOption = (FlowerId, String);

fn line_row(
    vm: SimulatorViewModel,
    color_id: ProductColorId,
    line: FlowerLine,
    options: Vec<FlowerOption>,
    can_remove: bool,
) -> impl IntoView {
    let line_id = line.line_id;
    let selected = line.flower_id;
    // Выбранный цветок вне списка (например, удалён из инвентаря) всё равно показывается
    let orphan = selected
        .filter(|id| !options.iter().any(|(o, _)| o == id))
        .map(|id| (id, line.flower_name.clone()));

    view! {
        <tr class="simulator__line">
            <td>
                <select on:change=move |ev| {
                    let flower = FlowerId::from_string(&event_target_value(&ev)).ok();
                    vm.dispatch(SimulationAction::UpdateLine {
                        color_id,
                        line_id,
                        change: LineChange::Flower(flower),
                    });
                }>
                    <option value="" selected=selected.is_none()>"Sin flor"</option>
                    {orphan
                        .into_iter()
                        .chain(options)
                        .map(|(id, label)| {
                            view! {
                                <option value=id.as_string() selected={selected == Some(id)}>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td>
                <input
                    class="simulator__qty"
                    type="number"
                    min="0"
                    step="1"
                    prop:value=line.quantity.to_string()
                    on:change=move |ev| {
                        vm.dispatch(SimulationAction::UpdateLine {
                            color_id,
                            line_id,
                            change: LineChange::quantity_from_input(&event_target_value(&ev)),
                        });
                    }
                />
            </td>
            <td class="num">{format_clp(line.unit_cost)}</td>
            <td class="num">{format_clp(line.cost())}</td>
            <td>
                <button
                    class="icon-btn icon-btn--danger"
                    title="Quitar flor"
                    disabled={!can_remove}
                    on:click=move |_| vm.dispatch(SimulationAction::RemoveLine { color_id, line_id })
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}

fn group_section(
    vm: SimulatorViewModel,
    group: ColorGroup,
    options: Vec<FlowerOption>,
    can_remove: bool,
) -> impl IntoView {
    let color_id = group.color_id;
    let group_cost = group.cost();
    let has_options = !options.is_empty();
    let rows = group
        .lines
        .into_iter()
        .map(|line| line_row(vm, color_id, line, options.clone(), can_remove))
        .collect_view();

    view! {
        <section class="simulator__group">
            <header class="simulator__group-header">
                <h3>{group.color_name}</h3>
                <span class="simulator__group-cost">{format_clp(group_cost)}</span>
            </header>
            {(!has_options).then(|| view! {
                <div class="alert alert--warning">
                    {icon("alert-triangle")}
                    " No hay flores en inventario para este color"
                </div>
            })}
            <table class="simulator__lines">
                <thead>
                    <tr>
                        <th>"Flor"</th>
                        <th>"Cantidad"</th>
                        <th class="num">"Costo unitario"</th>
                        <th class="num">"Subtotal"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <button
                class="button button--secondary button--small"
                on:click=move |_| vm.dispatch(SimulationAction::AddLine { color_id })
            >
                {icon("plus")}
                " Agregar flor"
            </button>
        </section>
    }
}

/// Окно симуляции себестоимости (или редактирования рецепта) продукта
#[component]
pub fn CostSimulatorView(
    product: Product,
    policy: LinePolicy,
    /// Рецепт сохранён: список продуктов перечитывается
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title = if policy == LinePolicy::RECIPE_EDITOR {
        format!("Receta · {}", product.name)
    } else {
        format!("Simulador de costos · {}", product.name)
    };
    let list_price = product.price;
    let vm = SimulatorViewModel::new(product, policy);
    vm.load();

    let groups_view = move || {
        vm.simulation.with(|sim| {
            let Some(sim) = sim else {
                return view! { <div class="placeholder">"Cargando receta..."</div> }.into_any();
            };
            if sim.groups().next().is_none() {
                return view! {
                    <div class="placeholder">"El producto no tiene colores configurados"</div>
                }
                .into_any();
            }
            sim.groups()
                .map(|group| {
                    let options = sim
                        .available_flowers(group.color_id)
                        .into_iter()
                        .map(|f| (f.id, format!("{} ({})", f.name, format_clp(f.unit_cost))))
                        .collect::<Vec<_>>();
                    let can_remove = sim.can_remove_line(group.color_id);
                    group_section(vm, group.clone(), options, can_remove)
                })
                .collect_view()
                .into_any()
        })
    };

    let container_select = move || {
        vm.simulation.with(|sim| {
            sim.as_ref().map(|sim| {
                let current = sim.container().map(|c| c.container_id);
                let options = sim
                    .catalog()
                    .containers
                    .iter()
                    .map(|c| {
                        let label = format!("{} ({})", c.name, format_clp(c.unit_cost));
                        view! {
                            <option value=c.id.as_string() selected={current == Some(c.id)}>
                                {label}
                            </option>
                        }
                    })
                    .collect_view();
                view! {
                    <select on:change=move |ev| {
                        let id = ContainerId::from_string(&event_target_value(&ev)).ok();
                        vm.dispatch(SimulationAction::SetContainer(id));
                    }>
                        <option value="" selected=current.is_none()>"Sin envase"</option>
                        {options}
                    </select>
                }
            })
        })
    };

    let sale_price_value = move || {
        vm.simulation
            .with(|sim| sim.as_ref().map(|s| format_input_amount(s.sale_price())))
            .unwrap_or_default()
    };

    let total = |f: fn(&SimulationTotals) -> f64| {
        Signal::derive(move || vm.totals().map(|t| f(&t)))
    };
    let margin_status =
        Signal::derive(move || vm.totals().map_or(IndicatorStatus::Neutral, |t| {
            IndicatorStatus::for_margin_percent(t.margin_percent)
        }));

    let close = move || {
        if !vm.is_dirty() || confirm("Hay cambios sin guardar. ¿Cerrar de todos modos?") {
            on_close.run(());
        }
    };

    view! {
        <div class="details-container simulator">
            <div class="details-header">
                <h2>{title}</h2>
                <button class="icon-btn" title="Cerrar" on:click=move |_| close()>{icon("x")}</button>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="simulator__body">
                <div class="simulator__groups">{groups_view}</div>

                <aside class="simulator__summary">
                    <div class="form-group">
                        <label>"Envase"</label>
                        {container_select}
                    </div>
                    <div class="form-group">
                        <label>"Precio de venta"</label>
                        <input
                            type="number"
                            min="0"
                            prop:value=sale_price_value
                            on:change=move |ev| {
                                vm.dispatch(SimulationAction::sale_price_from_input(&event_target_value(&ev)))
                            }
                        />
                        <small>{format!("Precio de lista: {}", format_clp(list_price))}</small>
                    </div>

                    <div class="simulator__cards">
                        <StatCard label="Costo flores" icon_name="flower" value=total(|t| t.total_flower_cost) format=ValueFormat::clp() />
                        <StatCard label="Costo envase" icon_name="package" value=total(|t| t.total_container_cost) format=ValueFormat::clp() />
                        <StatCard label="Costo total" icon_name="calculator" value=total(|t| t.total_cost) format=ValueFormat::clp() />
                        <StatCard label="Margen" icon_name="dollar-sign" value=total(|t| t.margin) format=ValueFormat::clp() status=margin_status />
                        <StatCard
                            label="Margen %"
                            icon_name="percent"
                            value=total(|t| t.margin_percent)
                            format=ValueFormat::Percent { decimals: 1 }
                            status=margin_status
                        />
                    </div>
                </aside>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.dispatch(SimulationAction::Reset)
                    disabled=Signal::derive(move || !vm.is_dirty())
                >
                    {icon("undo")}
                    " Restablecer receta"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save(on_saved)
                    disabled=Signal::derive(move || {
                        vm.saving.get() || vm.simulation.with(|s| s.is_none())
                    })
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Guardando..." } else { " Guardar receta" }}
                </Button>
            </div>
        </div>
    }
}
