//! Маршрут доставки на день: список остановок и карта

mod model;
mod view;

pub use view::RouteViewer;
