//! Сетка инвентаря с редактированием по ячейкам
//!
//! Клик по ячейке открывает поле ввода. Enter или потеря фокуса сохраняют
//! значение (PUT с одним полем), Escape отменяет. При ошибке сохранения
//! сетка перезагружается с сервера.

use crate::shared::components::page_header::PageHeader;
use crate::shared::dialogs::{alert, confirm};
use crate::shared::http;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_number, cmp_text, get_sort_indicator, SearchInput};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::editable::{EditableField, EditableRecord};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use std::cmp::Ordering;
use thaw::*;

fn compare_cells<T: EditableRecord>(a: &T, b: &T, field: T::Field) -> Ordering {
    let (x, y) = (a.field_value(field), b.field_value(field));
    if field.is_numeric() {
        let parse = |s: &str| s.trim().parse::<f64>().unwrap_or(0.0);
        cmp_number(parse(&x), parse(&y))
    } else {
        cmp_text(&x, &y)
    }
}

fn matches_row<T: EditableRecord>(row: &T, needle: &str) -> bool {
    needle.is_empty()
        || T::fields()
            .iter()
            .any(|f| row.field_value(*f).to_lowercase().contains(needle))
}

/// Страница-сетка для коллекции `T`
pub fn inventory_grid<T>() -> impl IntoView
where
    T: EditableRecord + AggregateRoot + DeserializeOwned + Send + Sync + 'static,
    T::Id: Send + Sync + 'static,
{
    let rows = RwSignal::new(Vec::<T>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let editing = RwSignal::new(None::<(T::Id, usize)>);
    let edit_text = RwSignal::new(String::new());
    let filter = RwSignal::new(String::new());
    let sort_col = RwSignal::new(0usize);
    let ascending = RwSignal::new(true);
    let new_name = RwSignal::new(String::new());

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match http::get_json::<Vec<T>>(&T::list_path()).await {
                Ok(list) => {
                    rows.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!(
                    "No se pudo cargar {}: {}",
                    T::list_name().to_lowercase(),
                    e
                ))),
            }
            loading.set(false);
        });
    };

    let visible = move || {
        let needle = filter.get().trim().to_lowercase();
        let mut list: Vec<T> = rows
            .get()
            .into_iter()
            .filter(|r| matches_row(r, &needle))
            .collect();
        if let Some(field) = T::fields().get(sort_col.get()).copied() {
            let asc = ascending.get();
            list.sort_by(|a, b| {
                let cmp = compare_cells(a, b, field);
                if asc {
                    cmp
                } else {
                    cmp.reverse()
                }
            });
        }
        list
    };

    let toggle_sort = move |idx: usize| {
        if sort_col.get_untracked() == idx {
            ascending.update(|a| *a = !*a);
        } else {
            sort_col.set(idx);
            ascending.set(true);
        }
    };

    let commit = move || {
        let Some((id, idx)) = editing.get_untracked() else {
            return;
        };
        editing.set(None);
        let Some(field) = T::fields().get(idx).copied() else {
            return;
        };
        let Some(row) = rows.with_untracked(|list| list.iter().find(|r| r.id() == id).cloned())
        else {
            return;
        };
        let raw = edit_text.get_untracked();
        if raw.trim() == row.field_value(field).trim() {
            return;
        }
        match row.edit_cell(field, &raw) {
            Err(e) => alert(&e.to_string()),
            Ok((updated, patch)) => spawn_local(async move {
                match http::put_unit(&T::item_path(id), &patch).await {
                    Ok(()) => {
                        log::info!(
                            "{} {}: {} actualizado",
                            T::element_name(),
                            id.as_string(),
                            field.key()
                        );
                        rows.update(|list| {
                            if let Some(slot) = list.iter_mut().find(|r| r.id() == id) {
                                *slot = updated;
                            }
                        });
                    }
                    Err(e) => {
                        alert(&format!("No se pudo guardar: {}", e));
                        fetch();
                    }
                }
            }),
        }
    };

    let create = move || {
        let draft = match T::draft(&new_name.get_untracked()) {
            Ok(d) => d,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        spawn_local(async move {
            match http::post_unit(&T::list_path(), &draft).await {
                Ok(()) => {
                    new_name.set(String::new());
                    fetch();
                }
                Err(e) => alert(&format!("No se pudo crear: {}", e)),
            }
        });
    };

    let remove = move |id: T::Id, name: String| {
        if !confirm(&format!("¿Eliminar \"{}\"?", name)) {
            return;
        }
        spawn_local(async move {
            if let Err(e) = http::delete(&T::item_path(id)).await {
                alert(&format!("No se pudo eliminar: {}", e));
            }
            fetch();
        });
    };

    let cell = move |row: &T, idx: usize, field: T::Field| {
        let id = row.id();
        let value = row.field_value(field);
        let numeric = field.is_numeric();
        let is_editing = move || editing.get() == Some((id, idx));
        let start_value = value.clone();

        view! {
            <td
                class="grid__cell"
                class:grid__cell--numeric=numeric
                title="Clic para editar"
                on:click=move |_| {
                    if !is_editing() {
                        edit_text.set(start_value.clone());
                        editing.set(Some((id, idx)));
                    }
                }
            >
                {move || {
                    if is_editing() {
                        let input_ref = NodeRef::<html::Input>::new();
                        Effect::new(move |_| {
                            if let Some(el) = input_ref.get() {
                                let _ = el.focus();
                            }
                        });
                        view! {
                            <input
                                node_ref=input_ref
                                class="grid__input"
                                type=if numeric { "number" } else { "text" }
                                prop:value=move || edit_text.get()
                                on:input=move |ev| edit_text.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    match ev.key().as_str() {
                                        "Enter" => commit(),
                                        "Escape" => editing.set(None),
                                        _ => {}
                                    }
                                }
                                on:blur=move |_| commit()
                            />
                        }
                        .into_any()
                    } else {
                        view! { <span>{value.clone()}</span> }.into_any()
                    }
                }}
            </td>
        }
    };

    let summary = move || {
        let list = rows.get();
        let attention = list.iter().filter(|r| r.needs_attention()).count();
        if attention > 0 {
            format!("{} registros, {} bajo stock", list.len(), attention)
        } else {
            format!("{} registros", list.len())
        }
    };

    fetch();

    view! {
        <div class="page">
            <PageHeader title=T::list_name() subtitle=Signal::derive(move || Some(summary()))>
                <SearchInput value=filter on_change=Callback::new(move |v| filter.set(v)) />
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=loading
                >
                    {icon("refresh")}
                    " Actualizar"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="grid__create">
                    <input
                        type="text"
                        placeholder=format!("Nuevo: {}", T::element_name().to_lowercase())
                        prop:value=move || new_name.get()
                        on:input=move |ev| new_name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                create();
                            }
                        }
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| create()>
                        {icon("plus")}
                        " Agregar"
                    </Button>
                </div>

                <table class="grid">
                    <thead>
                        <tr>
                            {T::fields()
                                .iter()
                                .enumerate()
                                .map(|(idx, field)| {
                                    let label = field.label();
                                    let numeric = field.is_numeric();
                                    view! {
                                        <th
                                            class="grid__header"
                                            class:grid__cell--numeric=numeric
                                            on:click=move |_| toggle_sort(idx)
                                        >
                                            {label}
                                            {move || {
                                                let current = sort_col.get().to_string();
                                                get_sort_indicator(&current, &idx.to_string(), ascending.get())
                                            }}
                                        </th>
                                    }
                                })
                                .collect_view()}
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            visible()
                                .into_iter()
                                .map(|row| {
                                    let id = row.id();
                                    let name = row.description().to_string();
                                    let attention = row.needs_attention();
                                    let cells = T::fields()
                                        .iter()
                                        .enumerate()
                                        .map(|(idx, field)| cell(&row, idx, *field))
                                        .collect_view();
                                    view! {
                                        <tr class="grid__row" class:grid__row--attention=attention>
                                            {cells}
                                            <td class="grid__actions">
                                                <button
                                                    class="icon-btn icon-btn--danger"
                                                    title="Eliminar"
                                                    on:click=move |_| remove(id, name.clone())
                                                >
                                                    {icon("delete")}
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
        </div>
    }
}
