use std::rc::Rc;

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
    Number,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
            InputType::Number => "number",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    /// Blur hook for validate-on-blur fields
    #[props(default)]
    pub on_blur: Option<EventHandler<()>>,
    /// Hands the mounted element back to the parent so it can drive focus
    #[props(default)]
    pub on_mounted: Option<EventHandler<Rc<MountedData>>>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let on_change = props.on_change;
    let on_blur = props.on_blur;
    let on_mounted = props.on_mounted;

    rsx! {
        input {
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| on_change.call(event.value()),
            onblur: move |_| {
                if let Some(handler) = &on_blur {
                    handler.call(());
                }
            },
            onmounted: move |event| {
                if let Some(handler) = &on_mounted {
                    handler.call(event.data());
                }
            },
        }
    }
}
