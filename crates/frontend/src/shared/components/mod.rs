pub mod badge;
pub mod inventory_grid;
pub mod page_header;
pub mod stat_card;
