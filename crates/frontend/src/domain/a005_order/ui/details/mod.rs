//! Форма нового заказа

mod model;
mod view;

pub use view::OrderDetails;
