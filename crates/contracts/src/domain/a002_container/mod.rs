pub mod aggregate;

pub use aggregate::{Container, ContainerDto, ContainerField, ContainerId};
