mod state;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{title_for_key, EVENT_DETAIL_PREFIX};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_optional_date;
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, get_sort_indicator, sort_list, SearchInput};
use crate::shared::number_format::{format_clp, format_percent};
use contracts::domain::a006_event::Event;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::EventRow;
use thaw::*;

/// Открыть вкладку события; `None` - новое событие
pub fn open_event_tab(tabs: AppGlobalContext, id: Option<String>) {
    let key = format!("{}{}", EVENT_DETAIL_PREFIX, id.as_deref().unwrap_or("new"));
    tabs.open_tab(&key, &title_for_key(&key));
}

#[component]
pub fn EventList() -> impl IntoView {
    let tabs = expect_context::<AppGlobalContext>();
    let items = RwSignal::new(Vec::<EventRow>::new());
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("date".to_string());
    let sort_ascending = RwSignal::new(true);

    let fetch = move || {
        spawn_local(async move {
            match http::get_json::<Vec<Event>>(&Event::list_path()).await {
                Ok(v) => {
                    items.set(v.into_iter().map(EventRow).collect());
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("No se pudieron cargar los eventos: {}", e))),
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
                title=Event::list_name()
                subtitle=Signal::derive(move || Some(format!("{} eventos", items.with(Vec::len))))
            >
                <SearchInput value=search on_change=Callback::new(move |v| search.set(v)) />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_event_tab(tabs, None)>
                    {icon("plus")}
                    " Nuevo evento"
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
                        {header_cell("date", "Fecha")}
                        {header_cell("name", "Evento")}
                        {header_cell("customer", "Cliente")}
                        <th>"Lugar"</th>
                        <th class="num">"Margen"</th>
                        {header_cell("price", "Precio propuesto")}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|row| {
                                let price = row.price();
                                let event = row.0;
                                let id = event.id.to_string();
                                view! {
                                    <tr
                                        class="table__row--clickable"
                                        on:click=move |_| open_event_tab(tabs, Some(id.clone()))
                                    >
                                        <td>{format_optional_date(event.date)}</td>
                                        <td>{event.name}</td>
                                        <td>{event.customer}</td>
                                        <td>{event.venue}</td>
                                        <td class="num">{format_percent(event.margin_percent)}</td>
                                        <td class="num">{format_clp(price)}</td>
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
