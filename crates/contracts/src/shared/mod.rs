pub mod api_envelope;
pub mod editable;
pub mod indicators;
pub mod serde_helpers;
pub mod validation;
