use serde::{Deserialize, Serialize};
use thiserror::Error;

/// At most this many cards are rendered, however large the response
pub const MAX_RENDERED_ITEMS: usize = 4;

/// One gallery entry after normalization. The upstream APIs disagree on
/// field names, so the serde aliases absorb the known variants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: u64,
    #[serde(alias = "first_name")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl GalleryItem {
    /// The item's own avatar when the API provides one, otherwise a derived
    /// image keyed by item id.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(url) => url.clone(),
            None => format!("https://robohash.org/{}?set=set4&size=150x150", self.id),
        }
    }
}

/// The gallery endpoints ship either a bare array or a `{"data": [...]}`
/// envelope. Anything else is an explicit error rather than a silent guess.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum GalleryPayload {
    Enveloped { data: Vec<GalleryItem> },
    Bare(Vec<GalleryItem>),
}

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("Unrecognized gallery response shape: {detail}")]
    UnrecognizedShape { detail: String },
}

/// Normalizes a raw gallery response into items, capped at
/// [`MAX_RENDERED_ITEMS`].
pub fn normalize_gallery_response(
    value: serde_json::Value,
) -> Result<Vec<GalleryItem>, GalleryError> {
    let payload: GalleryPayload =
        serde_json::from_value(value).map_err(|e| GalleryError::UnrecognizedShape {
            detail: e.to_string(),
        })?;

    let mut items = match payload {
        GalleryPayload::Enveloped { data } => data,
        GalleryPayload::Bare(items) => items,
    };
    items.truncate(MAX_RENDERED_ITEMS);
    Ok(items)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    pub items: Vec<GalleryItem>,
    pub is_loading: bool,
    pub is_empty: bool,
    /// Stamp of the newest load; stale completions are dropped
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    /// A load finished with items (possibly zero)
    Loaded { generation: u64, items: Vec<GalleryItem> },
    /// A load failed after retries; the toast is raised by the caller
    LoadFailed { generation: u64 },
}

impl GalleryState {
    /// Starts a load: clears the prior render, shows the loader, and hands
    /// out the generation stamp the completion must carry. Completions for
    /// older generations are ignored, so rapid refreshes never interleave
    /// renders.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.items.clear();
        self.is_empty = false;
        self.is_loading = true;
        self.generation
    }

    pub fn reduce_in_place(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::Loaded { generation, items } => {
                if generation == self.generation {
                    self.is_empty = items.is_empty();
                    self.items = items;
                    self.is_loading = false;
                }
            }
            GalleryAction::LoadFailed { generation } => {
                if generation == self.generation {
                    self.is_loading = false;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: u64) -> serde_json::Value {
        json!({ "id": id, "name": format!("User {id}"), "email": format!("u{id}@example.com") })
    }

    #[test]
    fn test_normalize_bare_array() {
        let items = normalize_gallery_response(json!([user(1), user(2)])).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "User 1");
        assert_eq!(items[1].email.as_deref(), Some("u2@example.com"));
    }

    #[test]
    fn test_normalize_enveloped_array() {
        let items = normalize_gallery_response(json!({ "data": [user(7)] })).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 7);
    }

    #[test]
    fn test_normalize_accepts_first_name_and_avatar_variant() {
        let items = normalize_gallery_response(json!({ "data": [
            { "id": 3, "first_name": "Ada", "avatar": "https://img.example/3.jpg" }
        ]}))
        .unwrap();
        assert_eq!(items[0].name, "Ada");
        assert_eq!(items[0].avatar_url(), "https://img.example/3.jpg");
    }

    #[test]
    fn test_avatar_url_is_derived_when_absent() {
        let items = normalize_gallery_response(json!([user(5)])).unwrap();
        assert_eq!(
            items[0].avatar_url(),
            "https://robohash.org/5?set=set4&size=150x150"
        );
    }

    #[test]
    fn test_normalize_caps_at_four_items() {
        let many: Vec<_> = (1..=10).map(user).collect();
        let items = normalize_gallery_response(json!(many)).unwrap();
        assert_eq!(items.len(), MAX_RENDERED_ITEMS);
        assert_eq!(items[3].id, 4);
    }

    #[test]
    fn test_normalize_rejects_unrecognized_shape() {
        let result = normalize_gallery_response(json!({ "users": [user(1)] }));
        assert!(matches!(
            result,
            Err(GalleryError::UnrecognizedShape { .. })
        ));
    }

    #[test]
    fn test_empty_response_is_empty_state_not_error() {
        let items = normalize_gallery_response(json!([])).unwrap();
        assert!(items.is_empty());

        let mut state = GalleryState::default();
        let generation = state.begin_load();
        state.reduce_in_place(GalleryAction::Loaded {
            generation,
            items,
        });
        assert!(state.is_empty);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut state = GalleryState::default();
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(first < second);

        // The older load completes after the newer one started
        state.reduce_in_place(GalleryAction::Loaded {
            generation: first,
            items: vec![GalleryItem {
                id: 1,
                name: "stale".to_string(),
                email: None,
                avatar: None,
            }],
        });
        assert!(state.is_loading);
        assert!(state.items.is_empty());

        state.reduce_in_place(GalleryAction::Loaded {
            generation: second,
            items: vec![],
        });
        assert!(!state.is_loading);
        assert!(state.is_empty);
    }

    #[test]
    fn test_loader_hidden_on_failure() {
        let mut state = GalleryState::default();
        let generation = state.begin_load();
        assert!(state.is_loading);

        state.reduce_in_place(GalleryAction::LoadFailed { generation });
        assert!(!state.is_loading);
        assert!(!state.is_empty);
        assert!(state.items.is_empty());
    }
}
