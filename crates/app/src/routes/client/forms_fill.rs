//! Filling in a form. Long forms are paged; answers survive paging and are
//! sent together from the last page.

use std::collections::HashMap;

use dioxus::prelude::*;
use gateway::api;
use shared_types::{
    Answers, Field, FileSelections, FormId, FormSchema, InFlight, SelectedFile, StepAction,
    StepState, SubmissionPayload,
};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Form, FormActions, SkeletonRows,
};

use crate::components::{FieldInput, StepIndicator};
use crate::notify;
use crate::routes::Route;
use crate::use_api;

#[component]
pub fn FormsFillPage(id: FormId) -> Element {
    let api = use_api();

    let form = use_resource(move || {
        let api = api.clone();
        async move { api::get_form(&api, id).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./forms_fill.css") }

        div { class: "container fill-page",
            match &*form.read() {
                Some(Ok(Some(schema))) => rsx! {
                    FillForm { form_id: id, schema: schema.clone() }
                },
                Some(Ok(None)) => rsx! {
                    div { class: "fill-not-found",
                        h2 { "Form not found" }
                        p { "This form does not exist or is no longer available." }
                        Link { to: Route::FormsList {}, "Back to forms" }
                    }
                },
                Some(Err(e)) => {
                    let message = e.friendly_message("Could not load this form");
                    rsx! {
                        div { class: "page-error", role: "alert", "{message}" }
                    }
                }
                None => rsx! {
                    SkeletonRows { count: 5 }
                },
            }
        }
    }
}

#[component]
fn FillForm(form_id: FormId, schema: FormSchema) -> Element {
    let api = use_api();
    let toast = use_toast();
    let field_count = schema.fields.len();

    let answers = use_signal(Answers::new);
    let files = use_signal(FileSelections::new);
    let mut steps = use_signal(move || StepState::new(field_count));
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut submitting = use_signal(InFlight::default);

    let submit_schema = schema.clone();
    let handle_submit = move |_: FormEvent| {
        if submitting.read().is_busy() {
            return;
        }
        let schema = submit_schema.clone();
        let state = steps();

        match state.action() {
            StepAction::Advance => {
                let page = state.plan().page(&schema.fields, state.step());
                let checked = answers.read().validate(page, &files.read());
                match checked {
                    Ok(()) => {
                        errors.set(HashMap::new());
                        steps.write().on_submit();
                    }
                    Err(e) => errors.set(e.field_errors),
                }
            }
            StepAction::Submit => {
                let checked = answers.read().validate(&schema.fields, &files.read());
                if let Err(e) = checked {
                    if let Some(index) = schema
                        .fields
                        .iter()
                        .position(|f| e.field_errors.contains_key(&f.name))
                    {
                        steps.write().jump_to_field(index);
                    }
                    notify::invalid(&toast, e.message.clone());
                    errors.set(e.field_errors);
                    return;
                }

                errors.set(HashMap::new());
                let payload =
                    SubmissionPayload::build(form_id, &schema, &answers.read(), &files.read());
                if !submitting.write().try_begin() {
                    return;
                }
                let api = api.clone();
                spawn(async move {
                    match api::submit_form(&api, &payload).await {
                        Ok(()) => {
                            tracing::info!(form_id, files = payload.files.len(), "submission sent");
                            notify::success(&toast, "Your submission was received");
                            navigator().push(Route::MySubmissions {});
                        }
                        Err(e) => {
                            notify::failure(&toast, &e, "Could not submit the form");
                            submitting.write().finish();
                        }
                    }
                });
            }
        }
    };

    let handle_back = move |_: MouseEvent| {
        errors.set(HashMap::new());
        steps.write().back();
    };

    let state = steps();
    let plan = state.plan();
    let visible: Vec<Field> = plan.page(&schema.fields, state.step()).to_vec();
    let busy = submitting.read().is_busy();
    let primary_label = if busy {
        "Submitting..."
    } else {
        state.primary_label()
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{schema.name}" }
                if !schema.description.is_empty() {
                    CardDescription { "{schema.description}" }
                }
            }
            CardContent {
                if plan.is_multi_step() {
                    StepIndicator {
                        step: state.step(),
                        total: plan.total_steps(),
                        percent: state.progress_percent(),
                    }
                }
                Form { onsubmit: handle_submit,
                    if visible.is_empty() {
                        p { class: "empty-state", "This form has no questions." }
                    }
                    for field in visible {
                        FillField {
                            key: "{field.name}",
                            field: field.clone(),
                            answers,
                            files,
                            errors,
                            disabled: busy,
                        }
                    }
                    FormActions {
                        if !state.is_first() {
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: busy,
                                onclick: handle_back,
                                "Back"
                            }
                        }
                        Button { button_type: "submit", disabled: busy, "{primary_label}" }
                    }
                }
            }
        }
    }
}

/// One field bound to the shared answer state. Editing a field clears its error.
#[component]
fn FillField(
    field: Field,
    answers: Signal<Answers>,
    files: Signal<FileSelections>,
    errors: Signal<HashMap<String, String>>,
    disabled: bool,
) -> Element {
    let value = answers.read().input_value(&field.name);
    let selected = files.read().labels(&field.name);
    let error = errors.read().get(&field.name).cloned();

    let mut answers = answers;
    let mut files = files;
    let mut errors = errors;
    let value_field = field.clone();
    let files_field = field.name.clone();

    rsx! {
        FieldInput {
            field,
            value,
            selected,
            error,
            disabled,
            on_value: move |raw: String| {
                answers.write().set(&value_field, raw);
                errors.write().remove(&value_field.name);
            },
            on_files: move |picked: Vec<SelectedFile>| {
                files.write().set(files_field.clone(), picked);
                errors.write().remove(&files_field);
            },
        }
    }
}
