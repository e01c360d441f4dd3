//! This crate contains all shared UI components for the room climate board.

pub mod app;
pub use app::HomePage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
