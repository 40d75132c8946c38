pub mod aggregate;

pub use aggregate::{Supplier, SupplierDto, SupplierField, SupplierId};
