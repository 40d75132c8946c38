//! Карточка события с котировкой

mod model;
mod view;

pub use view::EventDetails;
