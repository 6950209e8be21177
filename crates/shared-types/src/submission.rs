use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::answers::Answers;
use crate::form::{FormId, FormSchema};
use crate::upload::{FileSelections, SelectedFile};

/// A stored attachment of a submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionFile {
    pub id: i64,
    /// URL of the stored file.
    pub file: String,
}

impl SubmissionFile {
    /// Last path segment of the file URL, without any query string.
    pub fn display_name(&self) -> String {
        let path = self.file.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or(path)
            .to_string()
    }
}

/// A client's answers to one form, as returned by `GET api/submissions/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: i64,
    pub form: FormId,
    /// Answers keyed by field name, in the order the backend sent them.
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub files: Vec<SubmissionFile>,
    pub created_at: String,
}

impl Submission {
    /// Every answer as a display pair, in insertion order.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.data
            .iter()
            .map(|(k, v)| (k.clone(), display_value(v)))
            .collect()
    }

    /// Card heading: the first non-blank string answer, or the record id.
    pub fn title(&self) -> String {
        self.data
            .values()
            .find_map(|v| v.as_str().map(str::trim).filter(|s| !s.is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Submission #{}", self.id))
    }
}

/// Render an arbitrary JSON answer for display.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// The `limit` newest submissions, newest first.
pub fn most_recent(submissions: &[Submission], limit: usize) -> Vec<Submission> {
    let mut sorted = submissions.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    sorted.truncate(limit);
    sorted
}

/// Form names keyed by id, for labelling submissions.
pub fn form_names(forms: &[FormSchema]) -> HashMap<FormId, String> {
    forms
        .iter()
        .filter_map(|f| f.id.map(|id| (id, f.name.clone())))
        .collect()
}

/// Submission activity for one form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormActivity {
    pub form_id: FormId,
    pub name: String,
    pub submissions: usize,
    pub last_submitted: Option<String>,
}

/// Per-form submission counts, busiest form first. Forms with no
/// submissions are included; submissions for unknown forms are grouped
/// under `Form #id`.
pub fn activity_by_form(forms: &[FormSchema], submissions: &[Submission]) -> Vec<FormActivity> {
    let names = form_names(forms);
    let mut by_form: HashMap<FormId, FormActivity> = names
        .iter()
        .map(|(id, name)| {
            (
                *id,
                FormActivity {
                    form_id: *id,
                    name: name.clone(),
                    submissions: 0,
                    last_submitted: None,
                },
            )
        })
        .collect();

    for sub in submissions {
        let entry = by_form.entry(sub.form).or_insert_with(|| FormActivity {
            form_id: sub.form,
            name: format!("Form #{}", sub.form),
            submissions: 0,
            last_submitted: None,
        });
        entry.submissions += 1;
        if entry
            .last_submitted
            .as_ref()
            .map_or(true, |last| sub.created_at > *last)
        {
            entry.last_submitted = Some(sub.created_at.clone());
        }
    }

    let mut activity: Vec<FormActivity> = by_form.into_values().collect();
    activity.sort_by(|a, b| {
        b.submissions
            .cmp(&a.submissions)
            .then_with(|| a.name.cmp(&b.name))
    });
    activity
}

/// Everything sent to `POST api/forms/submit/`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    pub form_id: FormId,
    /// JSON-encoded answer mapping (the `data` part).
    pub data: String,
    /// Files for the shared `files` part, in upload order.
    pub files: Vec<SelectedFile>,
}

impl SubmissionPayload {
    pub fn build(
        form_id: FormId,
        schema: &FormSchema,
        answers: &Answers,
        selections: &FileSelections,
    ) -> Self {
        let data = Value::Object(answers.to_json_map(schema, selections)).to_string();
        Self {
            form_id,
            data,
            files: selections.ordered(schema),
        }
    }
}
