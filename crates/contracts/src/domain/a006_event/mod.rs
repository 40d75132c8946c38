pub mod aggregate;

pub use aggregate::{Event, EventDto, EventId, EventItem};
