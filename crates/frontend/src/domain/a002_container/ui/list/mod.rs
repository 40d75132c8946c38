use crate::shared::components::inventory_grid::inventory_grid;
use contracts::domain::a002_container::Container;
use leptos::prelude::*;

#[component]
pub fn ContainerList() -> impl IntoView {
    inventory_grid::<Container>()
}
