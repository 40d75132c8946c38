use crate::shared::components::inventory_grid::inventory_grid;
use contracts::domain::a003_supplier::Supplier;
use leptos::prelude::*;

#[component]
pub fn SupplierList() -> impl IntoView {
    inventory_grid::<Supplier>()
}
