pub mod aggregate;

pub use aggregate::{Flower, FlowerDto, FlowerField, FlowerId};
