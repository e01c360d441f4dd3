use dioxus::prelude::*;

use crate::features::register::{validation_message, FieldId, Validity};

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorFeedbackProps {
    pub field: FieldId,
    pub validity: Option<Validity>,
}

/// Inline per-field error span. Renders nothing while the field is valid or
/// untouched, so closing and reopening the dialog starts clean.
#[component]
pub fn FieldErrorFeedback(props: FieldErrorFeedbackProps) -> Element {
    let message = props
        .validity
        .and_then(|v| validation_message(props.field, &v));

    match message {
        Some(text) => rsx! {
            span {
                class: "field-error",
                style: "color: #ef4444; display: block; margin-top: 4px; font-size: 0.85em;",
                "{text}"
            }
        },
        None => rsx! {},
    }
}
