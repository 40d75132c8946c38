pub mod aggregate;
pub mod form;

pub use aggregate::{Order, OrderDto, OrderId, UploadedPhoto};
pub use form::{OrderFormAction, UrgentPatch};
