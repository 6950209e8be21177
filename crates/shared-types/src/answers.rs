use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::AppError;
use crate::form::{Field, FieldType, FormSchema};
use crate::upload::FileSelections;

/// A single answer, tagged by the kind of control that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerValue {
    Text(String),
    /// Raw input text; checked to be numeric by the validator.
    Number(String),
    Choice(String),
    /// Names of the files selected for a file field.
    Files(Vec<String>),
}

impl AnswerValue {
    /// Wrap raw input from a control of the given type.
    pub fn from_input(field_type: FieldType, raw: String) -> Self {
        match field_type {
            FieldType::Number => AnswerValue::Number(raw),
            FieldType::Select => AnswerValue::Choice(raw),
            FieldType::File => AnswerValue::Files(vec![raw]),
            FieldType::Text | FieldType::Email | FieldType::Textarea => AnswerValue::Text(raw),
        }
    }

    /// Value to bind back into the control.
    pub fn as_input(&self) -> String {
        match self {
            AnswerValue::Text(s) | AnswerValue::Number(s) | AnswerValue::Choice(s) => s.clone(),
            AnswerValue::Files(names) => names.join(", "),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Text(s) | AnswerValue::Number(s) | AnswerValue::Choice(s) => {
                s.trim().is_empty()
            }
            AnswerValue::Files(names) => names.is_empty(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            AnswerValue::Text(s) | AnswerValue::Number(s) | AnswerValue::Choice(s) => {
                Value::String(s.clone())
            }
            AnswerValue::Files(names) => {
                Value::Array(names.iter().cloned().map(Value::String).collect())
            }
        }
    }
}

/// Answers collected so far, keyed by field name. Survives page changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    values: HashMap<String, AnswerValue>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record raw input for `field`.
    pub fn set(&mut self, field: &Field, raw: impl Into<String>) {
        self.values.insert(
            field.name.clone(),
            AnswerValue::from_input(field.field_type, raw.into()),
        );
    }

    pub fn get(&self, name: &str) -> Option<&AnswerValue> {
        self.values.get(name)
    }

    /// Current control value; unset fields read as the empty string.
    pub fn input_value(&self, name: &str) -> String {
        self.values
            .get(name)
            .map(AnswerValue::as_input)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check `fields` against the collected answers and file selections.
    pub fn validate(&self, fields: &[Field], files: &FileSelections) -> Result<(), AppError> {
        let mut errors = HashMap::new();
        for field in fields {
            if let Some(msg) = self.check_field(field, files) {
                errors.insert(field.name.clone(), msg);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Please fix the highlighted fields", errors))
        }
    }

    fn check_field(&self, field: &Field, files: &FileSelections) -> Option<String> {
        if field.field_type == FieldType::File {
            return (field.required && files.get(&field.name).is_empty())
                .then(|| "Please choose at least one file".to_string());
        }

        let value = self.input_value(&field.name);
        let value = value.trim();
        if value.is_empty() {
            return field
                .required
                .then(|| format!("{} is required", field.label));
        }

        match field.field_type {
            FieldType::Number => match value.parse::<f64>() {
                Ok(n) if n.is_finite() => None,
                _ => Some(format!("{} must be a number", field.label)),
            },
            FieldType::Select => (!field.options().iter().any(|c| c == value))
                .then(|| format!("Choose one of the listed options for {}", field.label)),
            FieldType::Email => (!looks_like_email(value))
                .then(|| format!("{} must be an email address", field.label)),
            _ => None,
        }
    }

    /// Full answer mapping in schema order: every non-file field (unset as
    /// `""`) and, for file fields, the selected file names.
    pub fn to_json_map(&self, schema: &FormSchema, files: &FileSelections) -> Map<String, Value> {
        let mut map = Map::new();
        for field in &schema.fields {
            let value = if field.field_type == FieldType::File {
                AnswerValue::Files(files.names(&field.name)).to_json()
            } else {
                self.values
                    .get(&field.name)
                    .map(AnswerValue::to_json)
                    .unwrap_or_else(|| Value::String(String::new()))
            };
            map.insert(field.name.clone(), value);
        }
        map
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}
