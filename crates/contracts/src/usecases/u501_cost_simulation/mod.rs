pub mod color_match;
pub mod line_policy;
pub mod simulation;
pub mod totals;

pub use color_match::{color_matches, flowers_for_color};
pub use line_policy::LinePolicy;
pub use simulation::{
    ColorGroup, ContainerSelection, CostSimulation, FlowerLine, LineChange, LineId,
    SimulationAction, SimulationCatalog,
};
pub use totals::SimulationTotals;

use crate::usecases::common::UseCaseMetadata;

pub struct CostSimulationUseCase;

impl UseCaseMetadata for CostSimulationUseCase {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "cost_simulation"
    }

    fn display_name() -> &'static str {
        "Simulador de costos"
    }

    fn description() -> &'static str {
        "Costo de receta por grupo de color, envase y margen sobre el precio de venta"
    }
}
