//! Симулятор себестоимости и редактор рецепта продукта
//!
//! Оба окна работают поверх одного `CostSimulation` и отличаются только
//! политикой удаления строк (`LinePolicy`).

mod model;
mod view;
mod view_model;

pub use view::CostSimulatorView;
pub use view_model::SimulatorViewModel;
