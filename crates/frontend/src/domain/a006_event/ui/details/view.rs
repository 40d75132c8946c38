use super::model;
use crate::domain::a006_event::ui::list::open_event_tab;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{parse_input_date, to_input_value};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_clp, format_input_amount};
use contracts::domain::a006_event::{Event, EventDto, EventId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::usecases::u503_event_quote::{item_cost, EventQuote, QuoteAction};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn EventDetails(id: Option<EventId>, tab_key: String, on_close: Callback<()>) -> impl IntoView {
    let tabs = expect_context::<AppGlobalContext>();
    let tab_key = StoredValue::new(tab_key);
    let form = RwSignal::new(EventDto {
        margin_percent: 30.0,
        ..EventDto::default()
    });
    let quote = RwSignal::new(EventQuote::from_dto(&form.get_untracked()));
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(id.is_some());
    let saving = RwSignal::new(false);

    if let Some(id) = id {
        spawn_local(async move {
            match model::fetch_event(id).await {
                Ok(event) => {
                    let dto = EventDto::from(&event);
                    quote.set(EventQuote::from_dto(&dto));
                    form.set(dto);
                }
                Err(e) => error.set(Some(format!("No se pudo cargar el evento: {}", e))),
            }
            loading.set(false);
        });
    }

    let dispatch = move |action: QuoteAction| {
        let mut result = Ok(());
        quote.update(|q| result = q.apply(action));
        match result {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let totals = Memo::new(move |_| quote.with(EventQuote::totals));

    let save = move || {
        let mut dto = form.get_untracked();
        quote.with_untracked(|q| q.write_into(&mut dto));
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        let was_new = dto.id.is_none();
        saving.set(true);
        spawn_local(async move {
            match model::save_event(&dto).await {
                Ok(event) => {
                    log::info!("Evento guardado: {} ({})", event.name, event.id);
                    if was_new {
                        // Вкладка "new" заменяется вкладкой сохранённой записи
                        on_close.run(());
                        open_event_tab(tabs, Some(event.id.to_string()));
                    } else {
                        tab_key.with_value(|key| {
                            tabs.update_tab_title(key, &detail_tab_label(Event::element_name(), &event.name))
                        });
                        form.set(EventDto::from(&event));
                    }
                }
                Err(e) => error.set(Some(format!("No se pudo guardar el evento: {}", e))),
            }
            saving.set(false);
        });
    };

    let item_row = move |idx: usize| {
        let item = quote.with_untracked(|q| q.items.get(idx).cloned());
        item.map(|item| {
            let cost = item_cost(&item);
            view! {
                <tr>
                    <td>
                        <input
                            type="text"
                            placeholder="Centro de mesa, arco, ramo..."
                            prop:value=item.description
                            on:change=move |ev| dispatch(QuoteAction::SetDescription(idx, event_target_value(&ev)))
                        />
                    </td>
                    <td>
                        <input
                            type="number"
                            min="0"
                            class="input--narrow"
                            prop:value=item.quantity.to_string()
                            on:change=move |ev| dispatch(QuoteAction::SetQuantity(idx, event_target_value(&ev)))
                        />
                    </td>
                    <td>
                        <input
                            type="number"
                            min="0"
                            prop:value=format_input_amount(item.unit_cost)
                            on:change=move |ev| dispatch(QuoteAction::SetUnitCost(idx, event_target_value(&ev)))
                        />
                    </td>
                    <td class="num">{format_clp(cost)}</td>
                    <td>
                        <button
                            class="icon-btn"
                            title="Quitar"
                            on:click=move |_| dispatch(QuoteAction::RemoveItem(idx))
                        >
                            {icon("delete")}
                        </button>
                    </td>
                </tr>
            }
        })
    };

    view! {
        <div class="page event-details">
            <div class="details-header">
                <h2>{move || form.with(|f| if f.id.is_some() { f.name.clone() } else { "Nuevo evento".to_string() })}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <Show when=move || !loading.get() fallback=|| view! { <div class="placeholder">"Cargando..."</div> }>
                <div class="details-form">
                    <div class="form-row">
                        <div class="form-group">
                            <label for="event-name">"Evento"</label>
                            <input
                                type="text"
                                id="event-name"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="event-customer">"Cliente"</label>
                            <input
                                type="text"
                                id="event-customer"
                                prop:value=move || form.with(|f| f.customer.clone())
                                on:input=move |ev| form.update(|f| f.customer = event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="event-date">"Fecha"</label>
                            <input
                                type="date"
                                id="event-date"
                                prop:value=move || form.with(|f| to_input_value(f.date))
                                on:change=move |ev| form.update(|f| f.date = parse_input_date(&event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-group">
                            <label for="event-venue">"Lugar"</label>
                            <input
                                type="text"
                                id="event-venue"
                                prop:value=move || form.with(|f| f.venue.clone())
                                on:input=move |ev| form.update(|f| f.venue = event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>

                <h3>"Partidas de costo"</h3>
                <table class="table quote-table">
                    <thead>
                        <tr>
                            <th>"Descripción"</th>
                            <th>"Cantidad"</th>
                            <th>"Costo unitario"</th>
                            <th class="num">"Subtotal"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let count = quote.with(|q| q.items.len());
                            (0..count).filter_map(item_row).collect_view()
                        }}
                    </tbody>
                </table>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| dispatch(QuoteAction::AddItem)>
                    {icon("plus")}
                    " Agregar partida"
                </Button>

                <div class="form-group quote-margin">
                    <label for="event-margin">"Margen (%)"</label>
                    <input
                        type="number"
                        id="event-margin"
                        min="0"
                        prop:value=move || quote.with(|q| format_input_amount(q.margin_percent))
                        on:change=move |ev| dispatch(QuoteAction::SetMargin(event_target_value(&ev)))
                    />
                </div>

                <div class="stat-grid">
                    <StatCard
                        label="Costo total"
                        icon_name="calculator"
                        value=Signal::derive(move || Some(totals.get().total_cost))
                        format=ValueFormat::clp()
                    />
                    <StatCard
                        label="Margen"
                        icon_name="percent"
                        value=Signal::derive(move || Some(totals.get().margin))
                        format=ValueFormat::clp()
                        status=Signal::derive(move || {
                            IndicatorStatus::for_margin_percent(totals.get().margin_percent)
                        })
                    />
                    <StatCard
                        label="Precio propuesto"
                        icon_name="dollar-sign"
                        value=Signal::derive(move || Some(totals.get().proposed_price))
                        format=ValueFormat::clp()
                    />
                </div>
            </Show>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| save() disabled=saving>
                    {icon("save")}
                    " Guardar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    {icon("x")}
                    " Cerrar"
                </Button>
            </div>
        </div>
    }
}
