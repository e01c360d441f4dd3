use dioxus::prelude::*;

use super::types::{normalize_gallery_response, GalleryAction};
use crate::features::toast::{ToastAction, ToastKind};
use crate::services::client::{ApiClient, FetchError};
use crate::services::config::ApiConfig;
use crate::{console_error, console_info};

/// Maps a completed fetch to the reducer action and the toast it raises.
///
/// A malformed body and an exhausted retry budget both end the load and
/// surface an error toast; an empty item list is the empty state, not an
/// error. `generation` is threaded through so the reducer can drop stale
/// completions.
pub fn load_effects(
    generation: u64,
    result: Result<serde_json::Value, FetchError>,
) -> (GalleryAction, Option<ToastAction>) {
    match result {
        Ok(value) => match normalize_gallery_response(value) {
            Ok(items) => (GalleryAction::Loaded { generation, items }, None),
            Err(_) => (
                GalleryAction::LoadFailed { generation },
                Some(ToastAction::Push {
                    message: "Could not read the gallery response.".to_string(),
                    kind: ToastKind::Error,
                }),
            ),
        },
        Err(_) => (
            GalleryAction::LoadFailed { generation },
            Some(ToastAction::Push {
                message: "Could not load images. Check your connection.".to_string(),
                kind: ToastKind::Error,
            }),
        ),
    }
}

/// Fetches the gallery with retry and publishes the outcome.
///
/// `generation` is the stamp handed out by `GalleryState::begin_load` for
/// this load; the reducer drops the completion if a newer load has started
/// in the meantime. The loading flag is cleared on every path.
pub async fn load_gallery(
    client: ApiClient,
    config: ApiConfig,
    generation: u64,
    dispatch: EventHandler<GalleryAction>,
    notify: EventHandler<ToastAction>,
) {
    let url = config.gallery_url.clone();
    let result = config
        .retry
        .run(|| {
            let client = client.clone();
            let url = url.clone();
            async move { client.get_json(&url).await }
        })
        .await;

    match &result {
        Ok(_) => console_info!("[Gallery] Fetch completed"),
        Err(e) => console_error!("[Gallery] Load failed: {}", e),
    }

    let (action, toast) = load_effects(generation, result);
    dispatch.call(action);
    if let Some(toast) = toast {
        notify.call(toast);
    }
}
