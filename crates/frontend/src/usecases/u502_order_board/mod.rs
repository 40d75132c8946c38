//! Доска заказов: колонки по дате доставки и этапу подготовки

mod card;
pub mod model;
mod view;

pub use view::OrderBoard;
