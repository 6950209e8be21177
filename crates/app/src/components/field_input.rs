use dioxus::prelude::*;
use shared_types::{Field, FieldType, SelectedFile};
use shared_ui::{FileInput, FormSelect, Input, Textarea};

/// One schema field rendered as the control its type calls for.
///
/// Text-like controls report raw input through `on_value`. File fields read
/// the picked files into memory and report them through `on_files`.
#[component]
pub fn FieldInput(
    field: Field,
    #[props(default)] value: String,
    /// Labels of the files currently chosen for a file field.
    #[props(default)]
    selected: Vec<String>,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
    #[props(default)] on_value: EventHandler<String>,
    #[props(default)] on_files: EventHandler<Vec<SelectedFile>>,
) -> Element {
    let label = field.label.clone();
    let name = field.name.clone();
    let required = field.required;

    match field.field_type {
        FieldType::Textarea => rsx! {
            Textarea {
                label,
                name,
                value,
                required,
                disabled,
                error,
                on_input: move |evt: FormEvent| on_value.call(evt.value()),
            }
        },
        FieldType::Select => {
            let options = field.options().to_vec();
            let current = value.clone();
            rsx! {
                FormSelect {
                    label,
                    name,
                    value,
                    required,
                    disabled,
                    error,
                    onchange: move |evt: Event<FormData>| on_value.call(evt.value()),
                    ChoiceOptions { choices: options, value: current }
                }
            }
        }
        FieldType::File => rsx! {
            FileInput {
                label,
                name,
                required,
                disabled,
                selected,
                error,
                on_change: move |evt: FormEvent| async move {
                    on_files.call(read_picked_files(&evt).await);
                },
            }
        },
        FieldType::Text | FieldType::Number | FieldType::Email => rsx! {
            Input {
                label,
                name,
                input_type: field.field_type.as_str().to_string(),
                value,
                required,
                disabled,
                error,
                on_input: move |evt: FormEvent| on_value.call(evt.value()),
            }
        },
    }
}

/// The placeholder followed by one option per choice, in schema order.
#[component]
pub fn ChoiceOptions(choices: Vec<String>, #[props(default)] value: String) -> Element {
    rsx! {
        option { value: "", selected: value.is_empty(), "Select..." }
        for choice in choices {
            option {
                key: "{choice}",
                value: "{choice}",
                selected: choice == value,
                "{choice}"
            }
        }
    }
}

async fn read_picked_files(evt: &FormEvent) -> Vec<SelectedFile> {
    let mut picked = Vec::new();
    for file in evt.files() {
        let file_name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => picked.push(SelectedFile::new(
                file_name,
                file.content_type(),
                bytes.to_vec(),
            )),
            Err(_) => tracing::warn!(file = %file_name, "could not read selected file"),
        }
    }
    picked
}
