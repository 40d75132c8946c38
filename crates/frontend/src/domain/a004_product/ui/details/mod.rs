//! Форма продукта: model (API), view_model (состояние и команды), view

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
