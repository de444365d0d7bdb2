/// Name of the multipart field carrying the uploaded document.
pub const FILE_FIELD: &str = "file";
/// Optional field selecting a hosted analysis provider.
pub const PROVIDER_KEY_FIELD: &str = "nebius_key";

/// Snapshot of the upload form at submit time, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    pub fields: Vec<FormField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text { name: String, value: String },
    File { name: String, file: FileUpload },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(FormField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, file: FileUpload) -> Self {
        self.fields.push(FormField::File {
            name: name.into(),
            file,
        });
        self
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter_map(|field| match field {
                FormField::File { file, .. } => Some(file.file_name.as_str()),
                FormField::Text { .. } => None,
            })
            .collect()
    }
}
