//! Temperature submission form state and single-attempt POST path

pub mod submit;
pub mod types;

pub use submit::{submission_effects, submit_reading};
pub use types::{echo_summary, TemperatureAction, TemperatureFormState, TemperatureReading};
