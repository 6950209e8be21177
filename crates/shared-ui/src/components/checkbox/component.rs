use dioxus::prelude::*;

/// Native checkbox with an inline label, reporting the new checked state.
#[component]
pub fn Checkbox(
    #[props(default = false)] checked: bool,
    #[props(default)] on_change: EventHandler<bool>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "checkbox",
            input {
                r#type: "checkbox",
                checked: checked,
                disabled: disabled,
                onchange: move |evt: FormEvent| on_change.call(evt.checked()),
            }
            if !label.is_empty() {
                span { class: "checkbox-label", "{label}" }
            }
        }
    }
}
