//! Gallery loading, response normalization, and render state

pub mod loader;
pub mod types;

pub use loader::{load_effects, load_gallery};
pub use types::{
    normalize_gallery_response, GalleryAction, GalleryError, GalleryItem, GalleryState,
    MAX_RENDERED_ITEMS,
};
