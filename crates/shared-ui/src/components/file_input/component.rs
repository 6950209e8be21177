use dioxus::prelude::*;

/// File picker with a label, the current selection and an error line.
///
/// `on_change` receives the raw input event so callers can read the picked
/// files with `evt.files()`.
#[component]
pub fn FileInput(
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default = true)] multiple: bool,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    /// Labels of the files currently selected.
    #[props(default)]
    selected: Vec<String>,
    #[props(default)] error: Option<String>,
    #[props(default)] on_change: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "file-input-wrapper",
            if !label.is_empty() {
                label { class: "file-input-label",
                    "{label}"
                    if required {
                        span { class: "required-mark", " *" }
                    }
                }
            }
            input {
                class: "file-input",
                r#type: "file",
                name: "{name}",
                multiple: multiple,
                disabled: disabled,
                "aria-invalid": error.is_some(),
                onchange: move |evt| on_change.call(evt),
            }
            if !selected.is_empty() {
                ul { class: "file-input-selection",
                    for file in selected.iter() {
                        li { key: "{file}", "{file}" }
                    }
                }
            }
            if let Some(msg) = error.as_ref() {
                p { class: "field-error", "{msg}" }
            }
        }
    }
}
