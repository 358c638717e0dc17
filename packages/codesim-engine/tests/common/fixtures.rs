//! Source fixtures

use std::sync::Mutex;

use codesim_engine::{Classification, ClassifierError, Submission, TextClassifier};

/// A valid 50-line Python module
pub fn fifty_line_python() -> String {
    (0..10)
        .map(|i| {
            format!(
                "def step_{i}(values):\n    total = 0\n    for v in values:\n        total += v * {i}\n    return total\n"
            )
        })
        .collect()
}

pub const ORIGINAL: &str = r#"def average(numbers):
    if not numbers:
        return 0
    total = 0
    for n in numbers:
        total += n
    return total / len(numbers)

print(average([1, 2, 3]))
"#;

/// `ORIGINAL` with its identifiers renamed
pub const RENAMED: &str = r#"def mean(values):
    if not values:
        return 0
    acc = 0
    for x in values:
        acc += x
    return acc / len(values)

print(mean([1, 2, 3]))
"#;

pub const TRIVIAL: &str = "pass\n";

pub const SYNTAX_ERROR: &str = "def broken(:\n    return 1\n";

pub const JAVA_ORIGINAL: &str = r#"public class Counter {
    private int count = 0;

    public void increment() {
        count += 1;
    }

    public int get() {
        return count;
    }
}
"#;

pub fn submissions(items: &[(&str, &str)]) -> Vec<Submission> {
    items
        .iter()
        .map(|(id, content)| Submission::new(*id, *content))
        .collect()
}

/// Classifier returning a fixed answer and recording what it was sent
pub struct StubClassifier {
    reply: Result<Classification, ClassifierError>,
    pub calls: Mutex<Vec<(String, usize)>>,
}

impl StubClassifier {
    pub fn label(label: &str, score: f64) -> Self {
        Self {
            reply: Ok(Classification::new(label, score)),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(ClassifierError::Model(message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl TextClassifier for StubClassifier {
    fn classify(&self, text: &str, max_length: usize) -> Result<Classification, ClassifierError> {
        self.calls.lock().unwrap().push((text.to_string(), max_length));
        self.reply.clone()
    }
}
