use dioxus::prelude::*;

use super::loading_indicator::LoadingIndicator;
use crate::features::gallery::{GalleryItem, GalleryState};

#[derive(Props, PartialEq, Clone)]
pub struct GalleryGridProps {
    pub state: GalleryState,
}

#[component]
pub fn GalleryGrid(props: GalleryGridProps) -> Element {
    rsx! {
        div {
            class: "gallery-section",

            if props.state.is_loading {
                LoadingIndicator { message: "Loading images...".to_string() }
            }

            if props.state.is_empty {
                p {
                    class: "gallery-empty",
                    "No images to show yet."
                }
            }

            div {
                class: "gallery-grid",
                for item in props.state.items.iter() {
                    GalleryCard { key: "{item.id}", item: item.clone() }
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
struct GalleryCardProps {
    item: GalleryItem,
}

#[component]
fn GalleryCard(props: GalleryCardProps) -> Element {
    let item = &props.item;
    // Some API variants ship no email; fall back to the id line
    let caption = match &item.email {
        Some(email) => email.clone(),
        None => format!("ID: {}", item.id),
    };

    rsx! {
        div {
            class: "gallery-item",
            img {
                src: "{item.avatar_url()}",
                alt: "{item.name}",
            }
            div {
                class: "gallery-caption",
                strong { "{item.name}" }
                br {}
                span { "{caption}" }
            }
        }
    }
}
