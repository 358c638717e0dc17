//! Submission Representation
//!
//! A submission is one student's source file. Its identifier is the stored
//! file name, which by convention encodes
//! `{student_name}_{student_id}_{original_filename}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsed submission identifier
///
/// Parsing never fails: identifiers that do not split into exactly three
/// `_`-separated parts keep the whole identifier as the filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId {
    /// Identifier exactly as stored
    pub raw: String,

    /// Student name (first part), if the convention applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,

    /// Student ID (second part), if the convention applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,

    /// Original filename
    pub filename: String,
}

impl SubmissionId {
    /// Parse a stored identifier
    ///
    /// # Example
    /// ```
    /// use codesim_engine::shared::SubmissionId;
    ///
    /// let id = SubmissionId::parse("alice_42_main.py");
    /// assert_eq!(id.student_name.as_deref(), Some("alice"));
    /// assert_eq!(id.student_id.as_deref(), Some("42"));
    /// assert_eq!(id.filename, "main.py");
    ///
    /// let loose = SubmissionId::parse("my_main_file_v2.py");
    /// assert_eq!(loose.student_name, None);
    /// assert_eq!(loose.filename, "my_main_file_v2.py");
    /// ```
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parts: Vec<&str> = raw.split('_').collect();

        if let [name, id, filename] = parts.as_slice() {
            return Self {
                student_name: Some((*name).to_string()),
                student_id: Some((*id).to_string()),
                filename: (*filename).to_string(),
                raw,
            };
        }

        Self {
            student_name: None,
            student_id: None,
            filename: raw.clone(),
            raw,
        }
    }

    /// Identifier as stored
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the identifier follows the `name_id_filename` convention
    pub fn is_conventional(&self) -> bool {
        self.student_name.is_some()
    }

    /// Human-readable label for reports
    pub fn display_name(&self) -> String {
        match (&self.student_name, &self.student_id) {
            (Some(name), Some(id)) => format!("{} ({}) - {}", name, id, self.filename),
            _ => self.filename.clone(),
        }
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for SubmissionId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for SubmissionId {
    fn from(raw: String) -> Self {
        Self::parse(raw)
    }
}

/// One source file taking part in a comparison run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Submission identifier
    pub id: SubmissionId,

    /// Raw text content
    pub content: String,
}

impl Submission {
    /// Create a submission from an identifier and its content
    pub fn new(id: impl Into<SubmissionId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Identifier as stored
    pub fn identifier(&self) -> &str {
        self.id.as_str()
    }
}
