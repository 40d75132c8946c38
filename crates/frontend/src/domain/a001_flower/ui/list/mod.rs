use crate::shared::components::inventory_grid::inventory_grid;
use contracts::domain::a001_flower::Flower;
use leptos::prelude::*;

/// Flores: строки с остатком не выше минимума подсвечены
#[component]
pub fn FlowerList() -> impl IntoView {
    inventory_grid::<Flower>()
}
