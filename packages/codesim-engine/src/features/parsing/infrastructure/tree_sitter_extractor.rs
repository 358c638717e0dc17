//! Tree-sitter structural extractor
//!
//! Labels are the kinds of every named, non-extra node plus every operator
//! token (`+`, `<`, `and`, `+=`, ...), in breadth-first order from the root
//! (the same visiting order as a breadth-first AST walk: the module first,
//! then its statements, then their children, ...). Comments are extras and
//! never contribute a label.

use std::collections::VecDeque;
use std::ops::Range;

use tree_sitter::{Node, Parser as TSParser, Tree};

use crate::features::parsing::domain::{ParseFailure, StructuralSequence};
use crate::features::parsing::ports::{LanguageId, StructuralExtractor};

/// Tree-sitter based structural extractor
#[derive(Debug, Clone, Copy)]
pub struct TreeSitterExtractor {
    language: LanguageId,
}

impl TreeSitterExtractor {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }

    /// Create a Python extractor
    pub fn python() -> Self {
        Self::new(LanguageId::Python)
    }

    /// Create a Java extractor
    pub fn java() -> Self {
        Self::new(LanguageId::Java)
    }

    /// Get the tree-sitter language
    fn ts_language(&self) -> tree_sitter::Language {
        match self.language {
            LanguageId::Python => tree_sitter_python::language(),
            LanguageId::Java => tree_sitter_java::language(),
        }
    }

    fn parse(&self, source: &str) -> Result<Tree, ParseFailure> {
        // Parsers are not Sync; one per call keeps the extractor shareable
        let mut parser = TSParser::new();
        parser
            .set_language(&self.ts_language())
            .map_err(|e| ParseFailure::Language(e.to_string()))?;

        parser.parse(source, None).ok_or(ParseFailure::Aborted)
    }

    /// First error node (pre-order) and total error count
    fn find_errors(root: Node) -> Option<ParseFailure> {
        if !root.has_error() {
            return None;
        }

        let mut first: Option<(usize, usize)> = None;
        let mut error_count = 0;
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if node.is_error() || node.is_missing() {
                error_count += 1;
                let pos = node.start_position();
                let candidate = (pos.row + 1, pos.column);
                if first.map_or(true, |f| candidate < f) {
                    first = Some(candidate);
                }
            }

            if node.has_error() {
                let mut cursor = node.walk();
                stack.extend(node.children(&mut cursor));
            }
        }

        let (line, column) = first.unwrap_or((1, 0));
        Some(ParseFailure::Syntax {
            error_count: error_count.max(1),
            line,
            column,
        })
    }

    /// Anonymous children that still carry meaning: operator tokens
    fn is_operator(parent: Node, child: Node, field: Option<&str>) -> bool {
        matches!(field, Some("operator" | "operators"))
            || (parent.kind() == "not_operator" && child.kind() == "not")
    }

    /// Breadth-first walk over named, non-extra nodes and operator tokens
    fn collect_labels(root: Node) -> Vec<&'static str> {
        let mut labels = Vec::new();
        let mut queue = VecDeque::from([root]);

        while let Some(node) = queue.pop_front() {
            labels.push(node.kind());

            let mut cursor = node.walk();
            if !cursor.goto_first_child() {
                continue;
            }
            loop {
                let child = cursor.node();
                let keep = if child.is_named() {
                    !child.is_extra()
                } else {
                    Self::is_operator(node, child, cursor.field_name())
                };
                if keep {
                    queue.push_back(child);
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }

        labels
    }

    /// First node (pre-order) the grammar accepts but the language rejects
    fn find_rejected(&self, root: Node) -> Option<ParseFailure> {
        let rejected = self.language.rejected_kinds();
        if rejected.is_empty() {
            return None;
        }

        let mut error_count = 0;
        let mut first: Option<(usize, usize)> = None;
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            if rejected.contains(&node.kind()) {
                error_count += 1;
                let pos = node.start_position();
                let candidate = (pos.row + 1, pos.column);
                if first.map_or(true, |f| candidate < f) {
                    first = Some(candidate);
                }
            }
            let mut cursor = node.walk();
            stack.extend(node.named_children(&mut cursor));
        }

        first.map(|(line, column)| ParseFailure::Syntax {
            error_count,
            line,
            column,
        })
    }

    /// Byte ranges of comment nodes, in source order
    fn comment_ranges(&self, tree: &Tree) -> Vec<Range<usize>> {
        let kinds = self.language.comment_kinds();
        let mut ranges = Vec::new();
        let mut stack = vec![tree.root_node()];

        while let Some(node) = stack.pop() {
            if kinds.contains(&node.kind()) {
                ranges.push(node.byte_range());
                continue;
            }
            let mut cursor = node.walk();
            stack.extend(node.children(&mut cursor));
        }

        ranges.sort_by_key(|r| r.start);
        ranges
    }
}

impl StructuralExtractor for TreeSitterExtractor {
    fn language(&self) -> LanguageId {
        self.language
    }

    fn extract(&self, source: &str) -> Result<StructuralSequence, ParseFailure> {
        let tree = self.parse(source)?;
        let root = tree.root_node();

        if let Some(failure) = Self::find_errors(root).or_else(|| self.find_rejected(root)) {
            return Err(failure);
        }

        Ok(StructuralSequence::new(Self::collect_labels(root)))
    }

    fn strip_comments(&self, source: &str) -> String {
        let ranges = match self.parse(source) {
            Ok(tree) => self.comment_ranges(&tree),
            Err(_) => Vec::new(),
        };

        let mut kept = String::with_capacity(source.len());
        let mut last = 0;
        for range in ranges {
            if range.start < last {
                continue;
            }
            kept.push_str(source.get(last..range.start).unwrap_or(""));
            last = range.end;
        }
        kept.push_str(source.get(last..).unwrap_or(""));

        kept.lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
