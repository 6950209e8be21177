use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::AppError;

/// Schema version written by the builder.
pub const SCHEMA_VERSION: u32 = 1;

pub type FormId = i64;

/// Input control used to collect a field's answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Email,
    Textarea,
    Select,
    File,
}

/// Field types offered by the builder, in menu order.
pub const BUILDER_FIELD_TYPES: &[FieldType] = &[
    FieldType::Text,
    FieldType::Number,
    FieldType::Textarea,
    FieldType::Select,
    FieldType::File,
];

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Email => "email",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::File => "file",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Email => "Email",
            FieldType::Textarea => "Textarea",
            FieldType::Select => "Select",
            FieldType::File => "File Upload",
        }
    }

    /// Parse a `<select>` value, falling back to text.
    pub fn from_key(s: &str) -> Self {
        match s {
            "number" => FieldType::Number,
            "email" => FieldType::Email,
            "textarea" => FieldType::Textarea,
            "select" => FieldType::Select,
            "file" => FieldType::File,
            _ => FieldType::Text,
        }
    }
}

/// One question on a form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Field {
    /// Answer key; unique within a form.
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    /// Present iff `field_type` is `Select`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl Field {
    /// Check the `choices` invariant and that the field is addressable.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Field name is required".to_string());
        }
        if self.label.trim().is_empty() {
            return Err(format!("Field '{}' needs a label", self.name));
        }
        match (self.field_type, &self.choices) {
            (FieldType::Select, Some(choices)) if !choices.is_empty() => Ok(()),
            (FieldType::Select, _) => Err(format!(
                "Select field '{}' needs at least one choice",
                self.name
            )),
            (_, Some(_)) => Err(format!(
                "Only select fields may have choices ('{}' is {})",
                self.name,
                self.field_type.as_str()
            )),
            (_, None) => Ok(()),
        }
    }

    /// Options rendered for a select control.
    pub fn options(&self) -> &[String] {
        self.choices.as_deref().unwrap_or(&[])
    }
}

/// Split a comma-separated choices string into trimmed, non-empty entries.
pub fn parse_choices(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// An admin-authored form definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FormId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl FormSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            fields,
            schema_version: SCHEMA_VERSION,
        }
    }

    /// Structural checks run before a schema is posted.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = HashMap::new();
        if self.name.trim().is_empty() {
            errors.insert("name".to_string(), "Form name is required".to_string());
        }
        if self.schema_version != SCHEMA_VERSION {
            errors.insert(
                "schema_version".to_string(),
                format!("Unsupported schema version {}", self.schema_version),
            );
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if let Err(msg) = field.validate() {
                errors.insert(field.name.clone(), msg);
            } else if !seen.insert(field.name.as_str()) {
                errors.insert(
                    field.name.clone(),
                    format!("Duplicate field name '{}'", field.name),
                );
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Invalid form schema", errors))
        }
    }
}
