pub mod common;
pub mod u501_cost_simulation;
pub mod u502_order_board;
pub mod u503_event_quote;
