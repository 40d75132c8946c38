//! Сайдбар со сворачиваемыми группами меню

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "pedidos",
            label: "Pedidos",
            icon: "orders",
            items: vec![("u502_order_board", "kanban"), ("a007_rutas", "map")],
            admin_only: false,
        },
        MenuGroup {
            id: "catalogo",
            label: "Catálogo",
            icon: "products",
            items: vec![("a004_productos", "products"), ("a006_eventos", "calendar")],
            admin_only: false,
        },
        MenuGroup {
            id: "inventario",
            label: "Inventario",
            icon: "inventory",
            items: vec![
                ("a001_flores", "flower"),
                ("a002_envases", "package"),
                ("a003_proveedores", "suppliers"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "reportes",
            label: "Reportes",
            icon: "bar-chart",
            items: vec![("d400_sales_report", "dollar-sign")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let auth_state = use_auth();

    // Группа заказов раскрыта сразу
    let expanded_groups = RwSignal::new(vec!["pedidos".to_string()]);

    let toggle_group = move |gid: &'static str| {
        expanded_groups.update(|items| {
            if let Some(pos) = items.iter().position(|x| x == gid) {
                items.remove(pos);
            } else {
                items.push(gid.to_string());
            }
        });
    };

    view! {
        <div class="app-sidebar__content">
            {move || {
                let is_admin = auth_state.with(|s| s.is_admin());
                get_menu_groups()
                    .into_iter()
                    .filter(|group| !group.admin_only || is_admin)
                    .map(|group| {
                        let gid = group.id;
                        view! {
                            <div>
                                <div
                                    class="app-sidebar__item"
                                    style:padding-left="12px"
                                    on:click=move |_| toggle_group(gid)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(group.icon)}
                                        <span>{group.label}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || {
                                            expanded_groups.with(|g| g.iter().any(|x| x == gid))
                                        }
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>

                                <Show when=move || expanded_groups.with(|g| g.iter().any(|x| x == gid))>
                                    <div class="app-sidebar__children">
                                        {group
                                            .items
                                            .clone()
                                            .into_iter()
                                            .map(|(key, icon_name)| {
                                                let label = tab_label_for_key(key);
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            ctx.active.with(|a| a.as_deref() == Some(key))
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| ctx.open_tab(key, label)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
