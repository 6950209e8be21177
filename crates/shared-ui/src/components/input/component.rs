use dioxus::prelude::*;

/// Single-line input with an optional label and inline error.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label",
                    "{label}"
                    if required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            input {
                r#type: "{input_type}",
                name: "{name}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                "aria-invalid": error.is_some(),
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| {
                    if let Some(handler) = &on_blur {
                        handler.call(evt);
                    }
                },
                ..merged,
            }
            if let Some(msg) = error.as_ref() {
                p { class: "field-error", "{msg}" }
            }
        }
    }
}
