//! Token Normalizer
//!
//! Surface-level view of a source: the text with every newline, tab and space
//! removed. Nothing else changes (case, identifiers, punctuation and any other
//! whitespace such as `\r` are kept verbatim, in order).

/// Whitespace-free character stream of a source text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    chars: Vec<char>,
}

impl TokenStream {
    /// Normalize raw source text
    ///
    /// # Example
    /// ```
    /// use codesim_engine::features::parsing::TokenStream;
    ///
    /// let stream = TokenStream::normalize("def f(x):\n\treturn x + 1\n");
    /// assert_eq!(stream.as_string(), "deff(x):returnx+1");
    /// ```
    pub fn normalize(source: &str) -> Self {
        Self {
            chars: source
                .chars()
                .filter(|c| !matches!(c, '\n' | '\t' | ' '))
                .collect(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}
