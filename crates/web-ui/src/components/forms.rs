//! Form components shared by the gallery and moderation pages

use dioxus::prelude::*;

/// Props for the Input component
#[derive(Props, Clone, PartialEq)]
pub struct InputProps {
    /// Input label
    pub label: String,
    /// Input type (text, date, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Current value
    pub value: String,
    /// Placeholder text
    #[props(default = String::new())]
    pub placeholder: String,
    /// Callback when value changes
    pub oninput: EventHandler<String>,
}

/// Text input component with label
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{props.label}" }
            input {
                r#type: "{props.input_type}",
                class: "form-input",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |evt| props.oninput.call(evt.value().clone())
            }
        }
    }
}

/// Props for the Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Button content
    pub children: Element,
    /// Button variant (primary, secondary, ghost)
    #[props(default = "primary".to_string())]
    pub variant: String,
    /// Button size (small, medium, large)
    #[props(default = "medium".to_string())]
    pub size: String,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Click handler
    #[props(default = EventHandler::default())]
    pub onclick: EventHandler<MouseEvent>,
}

/// Button component with variants
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let button_class = format!("btn btn-{} btn-{}", props.variant, props.size);

    rsx! {
        button {
            r#type: "button",
            class: "{button_class}",
            disabled: props.disabled,
            onclick: move |evt| {
                if !props.disabled {
                    props.onclick.call(evt)
                }
            },
            {props.children}
        }
    }
}
