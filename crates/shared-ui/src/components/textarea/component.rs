use dioxus::prelude::*;

/// Visual variant for textareas.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextareaVariant {
    #[default]
    Default,
    /// Monospace, no wrapping. Used for the schema JSON editor.
    Code,
}

impl TextareaVariant {
    fn class(&self) -> &'static str {
        match self {
            TextareaVariant::Default => "default",
            TextareaVariant::Code => "code",
        }
    }
}

/// Multi-line text input with an optional label and inline error.
#[component]
pub fn Textarea(
    #[props(default)] variant: TextareaVariant,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: Option<EventHandler<FocusEvent>>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = 4)] rows: u32,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "textarea", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label",
                    "{label}"
                    if required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            textarea {
                name: "{name}",
                rows: "{rows}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                spellcheck: variant != TextareaVariant::Code,
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
