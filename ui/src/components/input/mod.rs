pub mod validated_input;
pub mod validation_feedback;

pub use validated_input::{InputType, ValidatedInput};
pub use validation_feedback::FieldErrorFeedback;
