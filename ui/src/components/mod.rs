//! User Interface Components
//!
//! Reusable Dioxus components for the board:
//!
//! - **forms**: temperature submission form and the registration dialog
//! - **display**: gallery grid, loading indicator, and toast stack
//! - **input**: validated input fields and inline error feedback

pub mod display;
pub mod forms;
pub mod input;
