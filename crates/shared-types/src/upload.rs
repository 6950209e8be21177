use std::collections::BTreeMap;

use crate::form::FormSchema;

/// A file picked in the browser, read into memory for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| mime_from_filename(&name).to_string());
        Self {
            name,
            content_type,
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// "name (size)", as listed under the file picker.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, format_file_size(self.size()))
    }
}

/// Guess a content type from the file extension.
pub fn mime_from_filename(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    let ext = lower.rsplit_once('.').map(|(_, e)| e).unwrap_or("");
    match ext {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "txt" => "text/plain",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Human-readable byte count ("1.2 MB").
pub fn format_file_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Files chosen per file-type field. Picking files for one field replaces
/// that field's set only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileSelections {
    by_field: BTreeMap<String, Vec<SelectedFile>>,
}

impl FileSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection for `field`. An empty list clears it.
    pub fn set(&mut self, field: impl Into<String>, files: Vec<SelectedFile>) {
        let field = field.into();
        if files.is_empty() {
            self.by_field.remove(&field);
        } else {
            self.by_field.insert(field, files);
        }
    }

    pub fn get(&self, field: &str) -> &[SelectedFile] {
        self.by_field.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn names(&self, field: &str) -> Vec<String> {
        self.get(field).iter().map(|f| f.name.clone()).collect()
    }

    pub fn labels(&self, field: &str) -> Vec<String> {
        self.get(field).iter().map(SelectedFile::label).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }

    /// Every selected file, ordered by the schema's field order and then by
    /// selection order. Selections for fields the schema lacks are skipped.
    pub fn ordered(&self, schema: &FormSchema) -> Vec<SelectedFile> {
        schema
            .fields
            .iter()
            .flat_map(|f| self.get(&f.name).iter().cloned())
            .collect()
    }
}
