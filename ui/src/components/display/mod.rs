pub mod gallery_grid;
pub mod loading_indicator;
pub mod toast_host;

pub use gallery_grid::GalleryGrid;
pub use loading_indicator::LoadingIndicator;
pub use toast_host::ToastHost;
