//! Values that cross the IPC boundary to the webview.
//!
//! Every command answers with one of these plain values. Failures are
//! carried in-band so a call from the presentation layer never rejects.

use base64::Engine;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::path::Path;

/// A PDF found directly inside a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PdfFileEntry {
    /// Basename including the extension.
    pub name: String,
    pub path: String,
    /// Extension with its leading dot, in the case it was found (`.pdf`, `.PDF`).
    pub extension: String,
}

/// Outcome of reading a whole file.
///
/// Serialized as `{ success: true, data, path }` or `{ success: false, error }`,
/// with `data` as standard base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReadResult {
    Success { data: Vec<u8>, path: String },
    Failure { error: String },
}

impl FileReadResult {
    pub fn success(data: Vec<u8>, path: &Path) -> Self {
        Self::Success {
            data,
            path: path.to_string_lossy().into_owned(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        if error.is_empty() {
            return Self::Failure {
                error: "Unknown error".to_string(),
            };
        }
        Self::Failure { error }
    }
}

impl Serialize for FileReadResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success { data, path } => {
                let mut state = serializer.serialize_struct("FileReadResult", 3)?;
                state.serialize_field("success", &true)?;
                let encoded = base64::engine::general_purpose::STANDARD.encode(data);
                state.serialize_field("data", &encoded)?;
                state.serialize_field("path", path)?;
                state.end()
            }
            Self::Failure { error } => {
                let mut state = serializer.serialize_struct("FileReadResult", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
                state.end()
            }
        }
    }
}
