use dioxus::prelude::*;

use crate::features::toast::Toast;

#[derive(Props, PartialEq, Clone)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: EventHandler<u64>,
}

/// Fixed-position stack of transient notifications. Auto-dismiss timers are
/// armed where toasts are pushed; this component only renders the stack and
/// wires the manual close buttons.
#[component]
pub fn ToastHost(props: ToastHostProps) -> Element {
    let on_dismiss = props.on_dismiss;

    rsx! {
        div {
            class: "toast-container",
            for toast in props.toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: "{toast.kind.as_class()}",
                    span { "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| on_dismiss.call(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}
