//! Transport-neutral multipart payload.
//!
//! Forms build a [`FormPayload`]; each transport (reqwest natively, the
//! browser `FormData` in the frontend) turns it into its own multipart type.

/// A file attached to a multipart request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Guess the MIME type from the file extension.
    pub fn from_name(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }
}

/// MIME type of common image extensions; `application/octet-stream` otherwise.
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Ordered text fields plus keyed file parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
    files: Vec<(String, FilePart)>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Add a text field only when `value` is not blank.
    pub fn text_if_present(&mut self, key: impl Into<String>, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.fields.push((key.into(), value.to_string()));
        }
        self
    }

    /// Booleans always go out as `true` / `false`.
    pub fn flag(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        self.text(key, if value { "true" } else { "false" })
    }

    pub fn file(&mut self, key: impl Into<String>, part: FilePart) -> &mut Self {
        self.files.push((key.into(), part));
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn files(&self) -> &[(String, FilePart)] {
        &self.files
    }

    /// First text value under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_file(&self, key: &str) -> bool {
        self.files.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .map(|(k, _)| k.as_str())
            .chain(self.files.iter().map(|(k, _)| k.as_str()))
    }
}
