//! Structural label sequence

/// Ordered node-kind labels from a full breadth-first walk of a parse tree
///
/// Labels are grammar node-kind names (`module`, `function_definition`,
/// `identifier`, ...). The walk order is fixed, so the same source always
/// yields the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralSequence {
    labels: Vec<&'static str>,
}

impl StructuralSequence {
    pub fn new(labels: Vec<&'static str>) -> Self {
        Self { labels }
    }

    /// Sequence of an unparseable source
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl From<Vec<&'static str>> for StructuralSequence {
    fn from(labels: Vec<&'static str>) -> Self {
        Self::new(labels)
    }
}
