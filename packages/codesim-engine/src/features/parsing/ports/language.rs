//! Language identifier

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Java,
}

impl LanguageId {
    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Java => "java",
        }
    }

    /// Get language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyi" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            _ => None,
        }
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Python => &["py", "pyi"],
            LanguageId::Java => &["java"],
        }
    }

    /// Node kinds that hold comments in this grammar
    pub fn comment_kinds(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Python => &["comment"],
            LanguageId::Java => &["line_comment", "block_comment", "comment"],
        }
    }

    /// Node kinds the grammar accepts but the language version does not
    ///
    /// tree-sitter-python still parses Python 2 statements.
    pub fn rejected_kinds(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Python => &["print_statement", "exec_statement"],
            LanguageId::Java => &[],
        }
    }

    pub fn all() -> &'static [LanguageId] {
        &[LanguageId::Python, LanguageId::Java]
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LanguageId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "python" | "py" => Ok(LanguageId::Python),
            "java" => Ok(LanguageId::Java),
            other => Err(ConfigError::UnknownLanguage(other.to_string())),
        }
    }
}
