use dioxus::prelude::*;

use crate::components::display::{GalleryGrid, ToastHost};
use crate::components::forms::{RegisterDialog, TemperatureForm};
use crate::features::gallery::{load_gallery, GalleryAction, GalleryState};
use crate::features::register::{RegisterAction, RegisterState};
use crate::features::temperature::{TemperatureAction, TemperatureFormState};
use crate::features::toast::{ToastAction, ToastStack, TOAST_LIFETIME_MS};
use crate::services::client::ApiClient;
use crate::services::config::ApiConfig;
use crate::utils::sleep_ms;

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

/// Page root: owns every feature's state and injects the dispatchers,
/// client, and config into the children.
#[component]
pub fn HomePage() -> Element {
    let client = use_context_provider(ApiClient::new);
    let config = use_context_provider(ApiConfig::default);

    let mut gallery_state = use_signal(GalleryState::default);
    let temp_state = use_signal(TemperatureFormState::default);
    let mut register_state = use_signal(RegisterState::default);
    let mut toast_stack = use_signal(ToastStack::default);

    // Dispatch functions - in-place reduction preserves Signal reactivity
    let gallery_dispatch = EventHandler::new(move |action: GalleryAction| {
        gallery_state.with_mut(|s| s.reduce_in_place(action));
    });
    let temp_dispatch = EventHandler::new({
        let mut temp_state = temp_state;
        move |action: TemperatureAction| {
            temp_state.with_mut(|s| s.reduce_in_place(action));
        }
    });
    let register_dispatch = EventHandler::new(move |action: RegisterAction| {
        register_state.with_mut(|s| s.reduce_in_place(action));
    });

    // Pushing a toast arms its own dismissal timer; each toast is an
    // independent timer with no shared state beyond the stack entry
    let notify = EventHandler::new(move |action: ToastAction| {
        let pushed = toast_stack.with_mut(|s| s.reduce_in_place(action));
        if let Some(id) = pushed {
            spawn(async move {
                sleep_ms(TOAST_LIFETIME_MS).await;
                toast_stack.with_mut(|s| {
                    s.reduce_in_place(ToastAction::Dismiss(id));
                });
            });
        }
    });

    let start_gallery_load = {
        let client = client.clone();
        let config = config.clone();
        move || {
            let generation = gallery_state.with_mut(|s| s.begin_load());
            let client = client.clone();
            let config = config.clone();
            spawn(async move {
                load_gallery(client, config, generation, gallery_dispatch, notify).await;
            });
        }
    };

    // Initial load when the page mounts
    use_effect({
        let mut start_gallery_load = start_gallery_load.clone();
        move || {
            start_gallery_load();
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        div {
            class: "board-container",

            div {
                class: "title-container",
                h1 {
                    class: "board-title",
                    "Room Climate Board"
                }
                div {
                    class: "title-actions",
                    button {
                        class: "refresh-button",
                        onclick: {
                            let mut start_gallery_load = start_gallery_load.clone();
                            move |_| start_gallery_load()
                        },
                        "Refresh gallery"
                    }
                    button {
                        class: "open-register-button",
                        onclick: move |_| register_dispatch.call(RegisterAction::Open),
                        "Register"
                    }
                }
            }

            GalleryGrid { state: gallery_state() }

            TemperatureForm {
                state: temp_state,
                dispatch: temp_dispatch,
                notify: notify,
            }

            RegisterDialog {
                state: register_state,
                dispatch: register_dispatch,
            }

            ToastHost {
                toasts: toast_stack().toasts,
                on_dismiss: move |id| {
                    toast_stack.with_mut(|s| {
                        s.reduce_in_place(ToastAction::Dismiss(id));
                    });
                },
            }
        }
    }
}
