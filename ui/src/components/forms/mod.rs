pub mod register_dialog;
pub mod temperature_form;

pub use register_dialog::RegisterDialog;
pub use temperature_form::TemperatureForm;
