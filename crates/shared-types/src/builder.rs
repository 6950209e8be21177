//! Admin form authoring.
//!
//! [`FormBuilder`] assembles a field list one field at a time and proposes a
//! JSON rendering of the schema. The administrator may edit that text
//! freely; whatever the text says at submit time is what gets posted.

use std::collections::HashMap;

use crate::error::AppError;
use crate::form::{parse_choices, Field, FieldType, FormSchema};

/// The "Add Field" inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDraft {
    pub label: String,
    pub name: String,
    pub field_type: FieldType,
    pub required: bool,
    /// Comma-separated, only used for select fields.
    pub choices: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBuilder {
    pub name: String,
    pub description: String,
    fields: Vec<Field>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Append the drafted field.
    ///
    /// Returns `Ok(false)` without changes when the name or label is blank.
    pub fn add_field(&mut self, draft: &FieldDraft) -> Result<bool, AppError> {
        let name = draft.name.trim();
        let label = draft.label.trim();
        if name.is_empty() || label.is_empty() {
            return Ok(false);
        }
        if self.fields.iter().any(|f| f.name == name) {
            return Err(field_error(name, format!("A field named '{name}' already exists")));
        }

        let choices = if draft.field_type == FieldType::Select {
            let parsed = parse_choices(&draft.choices);
            if parsed.is_empty() {
                return Err(field_error(
                    "choices",
                    "Select fields need at least one choice".to_string(),
                ));
            }
            Some(parsed)
        } else {
            None
        };

        self.fields.push(Field {
            name: name.to_string(),
            label: label.to_string(),
            field_type: draft.field_type,
            required: draft.required,
            choices,
        });
        Ok(true)
    }

    pub fn remove_field(&mut self, name: &str) {
        self.fields.retain(|f| f.name != name);
    }

    pub fn schema(&self) -> FormSchema {
        FormSchema::new(self.name.clone(), self.description.clone(), self.fields.clone())
    }

    /// Pretty JSON (two-space indent) of the current schema.
    pub fn preview_json(&self) -> String {
        serde_json::to_string_pretty(&self.schema()).unwrap_or_default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn field_error(field: &str, message: String) -> AppError {
    let mut errors = HashMap::new();
    errors.insert(field.to_string(), message.clone());
    AppError::validation(message, errors)
}

/// The editable JSON text box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonDraft {
    text: String,
    edited: bool,
}

impl JsonDraft {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text holds manual edits made since the last proposal.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Replace the text with a builder-generated rendering.
    pub fn propose(&mut self, text: String) {
        self.text = text;
        self.edited = false;
    }

    /// Record a manual edit.
    pub fn edit(&mut self, text: String) {
        if text != self.text {
            self.text = text;
            self.edited = true;
        }
    }

    /// Parse the text as it stands now.
    pub fn parse(&self) -> Result<FormSchema, AppError> {
        parse_schema_json(&self.text)
    }
}

/// Parse and validate JSON text into a schema ready to post.
pub fn parse_schema_json(text: &str) -> Result<FormSchema, AppError> {
    let schema: FormSchema =
        serde_json::from_str(text).map_err(|e| AppError::malformed(e.to_string()))?;
    schema.validate()?;
    Ok(schema)
}
