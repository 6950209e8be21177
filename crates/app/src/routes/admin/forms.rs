//! Form authoring and management.
//!
//! The builder assembles fields one at a time and proposes a JSON rendering
//! of the schema. The administrator may edit that text by hand; the text is
//! what gets posted.

use dioxus::prelude::*;
use gateway::api;
use shared_types::{
    AppError, Field, FieldDraft, FieldType, FormBuilder, FormId, FormSchema, InFlight,
    JsonDraft, BUILDER_FIELD_TYPES,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Checkbox, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableEmpty, DataTableHeader, DataTableRow, FormSelect, Input, PageHeader, PageSubtitle,
    PageTitle, SkeletonRows, Textarea, TextareaVariant,
};

use crate::notify;
use crate::use_api;

#[component]
pub fn FormsPage() -> Element {
    let api = use_api();

    let mut forms = use_resource(move || {
        let api = api.clone();
        async move { api::list_forms(&api).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "container",
            PageHeader {
                PageTitle { "Forms" }
                PageSubtitle { "Build onboarding forms and manage the ones clients see" }
            }

            BuilderPanel { on_created: move |_| forms.restart() }

            section { class: "forms-section",
                h2 { class: "section-title", "Existing forms" }
                match &*forms.read() {
                    Some(Ok(list)) => rsx! {
                        FormsTable { forms: list.clone(), on_deleted: move |_| forms.restart() }
                    },
                    Some(Err(e)) => {
                        let message = e.friendly_message("Could not load forms");
                        rsx! {
                            div { class: "page-error", role: "alert", "{message}" }
                        }
                    }
                    None => rsx! {
                        SkeletonRows { count: 3 }
                    },
                }
            }
        }
    }
}

/// Replace the preview with the builder's rendering unless it holds manual edits.
fn refresh_preview(builder: Signal<FormBuilder>, mut json: Signal<JsonDraft>) {
    if json.read().is_edited() {
        return;
    }
    let text = builder.read().preview_json();
    json.write().propose(text);
}

fn initial_preview() -> JsonDraft {
    let mut json = JsonDraft::default();
    json.propose(FormBuilder::new().preview_json());
    json
}

/// Toast text for a preview that cannot be posted.
fn describe_invalid(error: &AppError) -> String {
    let mut details: Vec<&String> = error.field_errors.values().collect();
    details.sort();
    match details.first() {
        Some(first) => format!("{}: {first}", error.message),
        None => format!("Invalid form JSON: {}", error.message),
    }
}

#[component]
fn BuilderPanel(on_created: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut builder = use_signal(FormBuilder::new);
    let mut draft = use_signal(FieldDraft::default);
    let mut json = use_signal(initial_preview);
    let mut draft_error = use_signal(|| Option::<String>::None);
    let mut creating = use_signal(InFlight::default);

    let handle_add = move |_: MouseEvent| {
        let current = draft.read().clone();
        let added = builder.write().add_field(&current);
        match added {
            Ok(true) => {
                draft_error.set(None);
                draft.set(FieldDraft {
                    field_type: current.field_type,
                    ..FieldDraft::default()
                });
                refresh_preview(builder, json);
            }
            Ok(false) => draft_error.set(Some("Field name and label are required".to_string())),
            Err(e) => draft_error.set(Some(e.message)),
        }
    };

    let handle_remove = move |name: String| {
        builder.write().remove_field(&name);
        refresh_preview(builder, json);
    };

    let handle_regenerate = move |_: MouseEvent| {
        let text = builder.read().preview_json();
        json.write().propose(text);
    };

    let handle_create = move |_: MouseEvent| {
        if creating.read().is_busy() {
            return;
        }
        let parsed = json.read().parse();
        let schema = match parsed {
            Ok(schema) => schema,
            Err(e) => {
                tracing::debug!(error = %e, "form JSON rejected before posting");
                notify::invalid(&toast, describe_invalid(&e));
                return;
            }
        };

        if !creating.write().try_begin() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            match api::create_form(&api, &schema).await {
                Ok(created) => {
                    tracing::info!(form_id = ?created.id, name = %created.name, "form created");
                    notify::success(&toast, format!("Form \"{}\" created", created.name));
                    builder.write().reset();
                    draft.set(FieldDraft::default());
                    draft_error.set(None);
                    json.set(initial_preview());
                    on_created.call(());
                }
                Err(e) => notify::failure(&toast, &e, "Could not create the form"),
            }
            creating.write().finish();
        });
    };

    let current = draft.read().clone();
    let type_key = current.field_type.as_str().to_string();
    let is_select = current.field_type == FieldType::Select;
    let type_options: Vec<(&'static str, &'static str)> = BUILDER_FIELD_TYPES
        .iter()
        .map(|t| (t.as_str(), t.display_name()))
        .collect();
    let form_name = builder.read().name.clone();
    let form_description = builder.read().description.clone();
    let fields = builder.read().fields().to_vec();
    let json_text = json.read().text().to_string();
    let edited = json.read().is_edited();
    let busy = creating.read().is_busy();

    rsx! {
        div { class: "builder-grid",
            Card {
                CardHeader {
                    CardTitle { "New form" }
                    CardDescription { "Add fields one at a time, then review the JSON before creating." }
                }
                CardContent {
                    Input {
                        label: "Form name",
                        name: "form_name",
                        value: form_name,
                        required: true,
                        on_input: move |evt: FormEvent| builder.write().name = evt.value(),
                        on_blur: move |_: FocusEvent| refresh_preview(builder, json),
                    }
                    Textarea {
                        label: "Description",
                        name: "form_description",
                        rows: 2,
                        value: form_description,
                        on_input: move |evt: FormEvent| builder.write().description = evt.value(),
                        on_blur: move |_: FocusEvent| refresh_preview(builder, json),
                    }

                    fieldset { class: "builder-draft",
                        legend { "Add field" }
                        div { class: "builder-draft-row",
                            Input {
                                label: "Label",
                                name: "field_label",
                                value: current.label.clone(),
                                placeholder: "Business Name",
                                on_input: move |evt: FormEvent| draft.write().label = evt.value(),
                            }
                            Input {
                                label: "Name",
                                name: "field_name",
                                value: current.name.clone(),
                                placeholder: "business_name",
                                on_input: move |evt: FormEvent| draft.write().name = evt.value(),
                            }
                        }
                        div { class: "builder-draft-row",
                            FormSelect {
                                label: "Type",
                                name: "field_type",
                                value: type_key.clone(),
                                onchange: move |evt: Event<FormData>| {
                                    draft.write().field_type = FieldType::from_key(&evt.value());
                                },
                                for (key, label) in type_options.iter() {
                                    option {
                                        value: "{key}",
                                        selected: *key == type_key,
                                        "{label}"
                                    }
                                }
                            }
                            Checkbox {
                                label: "Required",
                                checked: current.required,
                                on_change: move |checked: bool| draft.write().required = checked,
                            }
                        }
                        if is_select {
                            Input {
                                label: "Choices",
                                name: "field_choices",
                                value: current.choices.clone(),
                                placeholder: "LLC, Sole trader, Partnership",
                                on_input: move |evt: FormEvent| draft.write().choices = evt.value(),
                            }
                        }
                        if let Some(err) = draft_error() {
                            p { class: "field-error", "{err}" }
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: handle_add,
                            "Add field"
                        }
                    }

                    AuthoredFields { fields, on_remove: handle_remove }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "JSON preview" }
                    CardDescription { "Edits made here are what gets created." }
                }
                CardContent {
                    Textarea {
                        variant: TextareaVariant::Code,
                        name: "form_json",
                        rows: 20,
                        value: json_text,
                        on_input: move |evt: FormEvent| json.write().edit(evt.value()),
                    }
                    if edited {
                        div { class: "builder-edited",
                            span { "Edited by hand. New fields will not update this text." }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: handle_regenerate,
                                "Regenerate from fields"
                            }
                        }
                    }
                    Button {
                        disabled: busy,
                        onclick: handle_create,
                        if busy { "Creating..." } else { "Create form" }
                    }
                }
            }
        }
    }
}

#[component]
fn AuthoredFields(fields: Vec<Field>, on_remove: EventHandler<String>) -> Element {
    if fields.is_empty() {
        return rsx! {
            p { class: "empty-state", "No fields yet." }
        };
    }

    rsx! {
        ul { class: "builder-fields",
            for field in fields {
                AuthoredFieldRow { key: "{field.name}", field: field.clone(), on_remove }
            }
        }
    }
}

#[component]
fn AuthoredFieldRow(field: Field, on_remove: EventHandler<String>) -> Element {
    let name = field.name.clone();
    let choices = field.options().join(", ");
    let type_label = field.field_type.display_name();

    rsx! {
        li { class: "builder-field",
            div { class: "builder-field-text",
                span { class: "builder-field-label", "{field.label}" }
                code { class: "builder-field-name", "{field.name}" }
                if !choices.is_empty() {
                    span { class: "builder-field-choices", "{choices}" }
                }
            }
            div { class: "builder-field-meta",
                Badge { variant: BadgeVariant::Secondary, "{type_label}" }
                if field.required {
                    Badge { variant: BadgeVariant::Outline, "Required" }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_: MouseEvent| on_remove.call(name.clone()),
                    "Remove"
                }
            }
        }
    }
}

#[component]
fn FormsTable(forms: Vec<FormSchema>, on_deleted: EventHandler<()>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Description" }
                DataTableColumn { "Fields" }
                DataTableColumn { "" }
            }
            DataTableBody {
                if forms.is_empty() {
                    DataTableEmpty { colspan: 4, message: "No forms yet. Create one above." }
                }
                for form in forms {
                    if let Some(id) = form.id {
                        FormRow { key: "{id}", id, form: form.clone(), on_deleted }
                    }
                }
            }
        }
    }
}

#[component]
fn FormRow(id: FormId, form: FormSchema, on_deleted: EventHandler<()>) -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut deleting = use_signal(InFlight::default);
    let field_count = form.fields.len();
    let name = form.name.clone();

    let handle_delete = move |_: MouseEvent| {
        if !deleting.write().try_begin() {
            return;
        }
        let api = api.clone();
        let name = name.clone();
        spawn(async move {
            match api::delete_form(&api, id).await {
                Ok(()) => {
                    tracing::info!(form_id = id, "form deleted");
                    notify::success(&toast, format!("Form \"{name}\" deleted"));
                    on_deleted.call(());
                }
                Err(e) => {
                    notify::failure(&toast, &e, "Could not delete the form");
                    deleting.write().finish();
                }
            }
        });
    };
    let busy = deleting.read().is_busy();

    rsx! {
        DataTableRow {
            DataTableCell { "{form.name}" }
            DataTableCell { "{form.description}" }
            DataTableCell { "{field_count}" }
            DataTableCell {
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: busy,
                    onclick: handle_delete,
                    if busy { "Deleting..." } else { "Delete" }
                }
            }
        }
    }
}
