//! Extractor registry keyed by language

use std::sync::Arc;

use ahash::AHashMap;

use super::TreeSitterExtractor;
use crate::features::parsing::ports::{LanguageId, StructuralExtractor};

/// Registry of structural extractors
pub struct ExtractorRegistry {
    extractors: AHashMap<LanguageId, Arc<dyn StructuralExtractor>>,
}

impl ExtractorRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            extractors: AHashMap::new(),
        }
    }

    /// Registry with the built-in tree-sitter grammars
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for language in LanguageId::all() {
            registry.register(Arc::new(TreeSitterExtractor::new(*language)));
        }
        registry
    }

    /// Register (or replace) the extractor for its language
    pub fn register(&mut self, extractor: Arc<dyn StructuralExtractor>) {
        self.extractors.insert(extractor.language(), extractor);
    }

    pub fn get(&self, language: LanguageId) -> Option<Arc<dyn StructuralExtractor>> {
        self.extractors.get(&language).cloned()
    }

    pub fn supports(&self, language: LanguageId) -> bool {
        self.extractors.contains_key(&language)
    }

    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
