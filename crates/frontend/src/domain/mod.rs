pub mod a001_flower;
pub mod a002_container;
pub mod a003_supplier;
pub mod a004_product;
pub mod a005_order;
pub mod a006_event;
pub mod a007_route;
