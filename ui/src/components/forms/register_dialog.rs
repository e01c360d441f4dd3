use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::input::{FieldErrorFeedback, InputType, ValidatedInput};
use crate::console_info;
use crate::features::register::{FieldId, RegisterAction, RegisterState, SubmitOutcome};

#[derive(Props, PartialEq, Clone)]
pub struct RegisterDialogProps {
    pub state: Signal<RegisterState>,
    pub dispatch: EventHandler<RegisterAction>,
}

/// Modal registration dialog.
///
/// Closes on the cancel button, the cross icon, the backdrop, or a valid
/// submit; every close path resets the fields and clears the error spans.
/// Field validation runs on blur and, once a field is marked invalid, on
/// every input event until it turns valid again.
#[component]
pub fn RegisterDialog(props: RegisterDialogProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;

    // Mounted element handles, so submit can focus the first invalid field
    let username_el: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let email_el: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let password_el: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    if !state().is_open {
        return rsx! {};
    }

    let password_type = if state().password_visible {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        // Clicks on the backdrop close the dialog; clicks inside the content
        // box are stopped before they reach it
        div {
            class: "dialog-backdrop",
            onclick: move |_| dispatch.call(RegisterAction::Close),

            div {
                class: "dialog",
                onclick: move |event| event.stop_propagation(),

                button {
                    class: "dialog-cross",
                    r#type: "button",
                    onclick: move |_| dispatch.call(RegisterAction::Close),
                    "×"
                }

                h2 {
                    class: "dialog-title",
                    "Create an account"
                }

                form {
                    class: "register-form",
                    onsubmit: move |event| {
                        event.prevent_default();
                        let outcome = state.write().submit();
                        match outcome {
                            SubmitOutcome::Accepted(payload) => {
                                console_info!(
                                    "[Register] Submitted: {}",
                                    serde_json::to_string(&payload).unwrap_or_default()
                                );
                                dispatch.call(RegisterAction::Close);
                            }
                            SubmitOutcome::Rejected { first_invalid } => {
                                let handle = match first_invalid {
                                    FieldId::Username => username_el(),
                                    FieldId::Email => email_el(),
                                    FieldId::Password => password_el(),
                                };
                                if let Some(el) = handle {
                                    spawn(async move {
                                        let _ = el.set_focus(true).await;
                                    });
                                }
                            }
                        }
                    },

                    div {
                        class: "input-section",
                        label {
                            class: "input-label",
                            "Username:"
                        }
                        ValidatedInput {
                            value: state().username,
                            placeholder: "At least 3 characters".to_string(),
                            input_type: InputType::Text,
                            input_class: "input-field".to_string(),
                            disabled: false,
                            on_change: move |data: String| {
                                dispatch.call(RegisterAction::SetField(FieldId::Username, data));
                            },
                            on_blur: move |_| dispatch.call(RegisterAction::Blur(FieldId::Username)),
                            on_mounted: {
                                let mut username_el = username_el;
                                move |el| username_el.set(Some(el))
                            }
                        }
                        FieldErrorFeedback {
                            field: FieldId::Username,
                            validity: state().error(FieldId::Username)
                        }
                    }

                    div {
                        class: "input-section",
                        label {
                            class: "input-label",
                            "Email:"
                        }
                        ValidatedInput {
                            value: state().email,
                            placeholder: "you@example.com".to_string(),
                            input_type: InputType::Email,
                            input_class: "input-field".to_string(),
                            disabled: false,
                            on_change: move |data: String| {
                                dispatch.call(RegisterAction::SetField(FieldId::Email, data));
                            },
                            on_blur: move |_| dispatch.call(RegisterAction::Blur(FieldId::Email)),
                            on_mounted: {
                                let mut email_el = email_el;
                                move |el| email_el.set(Some(el))
                            }
                        }
                        FieldErrorFeedback {
                            field: FieldId::Email,
                            validity: state().error(FieldId::Email)
                        }
                    }

                    div {
                        class: "input-section",
                        label {
                            class: "input-label",
                            "Password:"
                        }
                        div {
                            class: "password-row",
                            ValidatedInput {
                                value: state().password,
                                placeholder: "At least 8 characters".to_string(),
                                input_type: password_type,
                                input_class: "input-field".to_string(),
                                disabled: false,
                                on_change: move |data: String| {
                                    dispatch.call(RegisterAction::SetField(FieldId::Password, data));
                                },
                                on_blur: move |_| dispatch.call(RegisterAction::Blur(FieldId::Password)),
                                on_mounted: {
                                    let mut password_el = password_el;
                                    move |el| password_el.set(Some(el))
                                }
                            }
                            // Visible only while the control stays pressed
                            button {
                                class: "password-reveal",
                                r#type: "button",
                                onpointerdown: move |_| dispatch.call(RegisterAction::SetPasswordVisible(true)),
                                onpointerup: move |_| dispatch.call(RegisterAction::SetPasswordVisible(false)),
                                onpointerleave: move |_| dispatch.call(RegisterAction::SetPasswordVisible(false)),
                                "👁"
                            }
                        }
                        FieldErrorFeedback {
                            field: FieldId::Password,
                            validity: state().error(FieldId::Password)
                        }
                    }

                    div {
                        class: "button-section",
                        button {
                            class: "close-button",
                            r#type: "button",
                            onclick: move |_| dispatch.call(RegisterAction::Close),
                            "Cancel"
                        }
                        button {
                            class: "register-button",
                            r#type: "submit",
                            "Register"
                        }
                    }
                }
            }
        }
    }
}
