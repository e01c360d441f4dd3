//! Registration dialog state and constraint validation

pub mod types;
pub mod validation;

pub use types::{RegisterAction, RegisterPayload, RegisterState, SubmitOutcome};
pub use validation::{check_field, validation_message, FieldId, FieldKind, Validity};
