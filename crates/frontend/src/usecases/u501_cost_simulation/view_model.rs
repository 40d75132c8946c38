use super::model;
use crate::shared::dialogs::alert;
use contracts::domain::a004_product::Product;
use contracts::usecases::u501_cost_simulation::{
    CostSimulation, LinePolicy, SimulationAction, SimulationTotals,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SimulatorViewModel {
    pub product: StoredValue<Product>,
    pub policy: LinePolicy,
    /// None, пока рецепт и справочники не загружены
    pub simulation: RwSignal<Option<CostSimulation>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl SimulatorViewModel {
    pub fn new(product: Product, policy: LinePolicy) -> Self {
        Self {
            product: StoredValue::new(product),
            policy,
            simulation: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            let product = vm.product.get_value();
            let result = async {
                let catalog = model::fetch_catalog().await?;
                let recipe = model::fetch_recipe(product.id).await?;
                Ok::<_, contracts::shared::api_envelope::ApiError>((catalog, recipe))
            }
            .await;
            match result {
                Ok((catalog, recipe)) => {
                    vm.simulation.set(Some(CostSimulation::from_recipe(
                        &product, recipe, catalog, vm.policy,
                    )));
                    vm.error.set(None);
                }
                Err(e) => {
                    let msg = format!("No se pudo cargar la receta: {}", e);
                    alert(&msg);
                    vm.error.set(Some(msg));
                }
            }
            vm.loading.set(false);
        });
    }

    /// Передать действие редьюсеру
    pub fn dispatch(&self, action: SimulationAction) {
        self.simulation.update(|sim| {
            if let Some(sim) = sim {
                sim.apply(action);
            }
        });
    }

    pub fn totals(&self) -> Option<SimulationTotals> {
        self.simulation
            .with(|sim| sim.as_ref().map(CostSimulation::compute_totals))
    }

    pub fn is_dirty(&self) -> bool {
        self.simulation
            .with(|sim| sim.as_ref().is_some_and(CostSimulation::is_dirty))
    }

    /// Сохранить рецепт; после успеха рецепт перечитывается с сервера
    pub fn save(&self, on_saved: Callback<()>) {
        let Some(recipe) = self
            .simulation
            .with_untracked(|sim| sim.as_ref().map(CostSimulation::to_recipe))
        else {
            return;
        };
        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            match model::save_recipe(&recipe).await {
                Ok(()) => {
                    log::info!("Receta guardada: producto {}", recipe.product_id);
                    match model::fetch_recipe(recipe.product_id).await {
                        Ok(fresh) => vm.simulation.update(|sim| {
                            if let Some(sim) = sim {
                                sim.replace_recipe(fresh);
                            }
                        }),
                        Err(e) => alert(&format!("Receta guardada, pero no se pudo recargar: {}", e)),
                    }
                    on_saved.run(());
                }
                Err(e) => alert(&format!("No se pudo guardar la receta: {}", e)),
            }
            vm.saving.set(false);
        });
    }
}
