use dioxus::prelude::*;

use crate::components::input::{InputType, ValidatedInput};
use crate::features::temperature::{submit_reading, TemperatureAction, TemperatureFormState};
use crate::features::toast::ToastAction;
use crate::services::client::ApiClient;
use crate::services::config::ApiConfig;

#[derive(Props, PartialEq, Clone)]
pub struct TemperatureFormProps {
    pub state: Signal<TemperatureFormState>,
    pub dispatch: EventHandler<TemperatureAction>,
    pub notify: EventHandler<ToastAction>,
}

#[component]
pub fn TemperatureForm(props: TemperatureFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let notify = props.notify;

    let client: ApiClient = use_context();
    let config: ApiConfig = use_context();

    // Every control is disabled while a submission is in flight
    let disabled = state().is_submitting;

    rsx! {
        form {
            class: "temp-form",
            onsubmit: move |event| {
                event.prevent_default();
                let Some(reading) = state().reading() else {
                    return;
                };
                if state().is_submitting {
                    return;
                }

                dispatch.call(TemperatureAction::SetSubmitting(true));
                let client = client.clone();
                let submit_url = config.submit_url.clone();
                spawn(async move {
                    submit_reading(client, submit_url, reading, dispatch, notify).await;
                });
            },

            h2 {
                class: "form-title",
                "Report a temperature"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Room:"
                }
                ValidatedInput {
                    value: state().room_id,
                    placeholder: "e.g. kitchen".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    disabled: disabled,
                    on_change: move |data: String| {
                        dispatch.call(TemperatureAction::SetRoomId(data));
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Temperature (°C):"
                }
                ValidatedInput {
                    value: state().temperature,
                    placeholder: "e.g. 21.5".to_string(),
                    input_type: InputType::Number,
                    input_class: "input-field".to_string(),
                    disabled: disabled,
                    on_change: move |data: String| {
                        dispatch.call(TemperatureAction::SetTemperature(data));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: disabled || state().reading().is_none(),
                    if state().is_submitting { "Sending..." } else { "Send reading" }
                }
            }
        }
    }
}
