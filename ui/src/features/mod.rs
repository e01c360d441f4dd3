//! Feature logic, kept free of view code so the reducers and validators are
//! testable off-browser.
//!
//! - **gallery**: remote gallery loading and normalization
//! - **temperature**: reading submission form
//! - **register**: modal registration dialog and field validation
//! - **toast**: transient notification stack

pub mod gallery;
pub mod register;
pub mod temperature;
pub mod toast;
