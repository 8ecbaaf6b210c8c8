//! Ordered set of detected stack labels

use super::StackLabel;
use serde::Serialize;

/// The outcome of one detection pass: unique labels in the order the rules
/// contributed them.
///
/// Duplicates are dropped on insert, so membership checks are real set
/// operations rather than substring probes on an accumulator string. An
/// empty result normalizes to `{common}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StackResult {
    labels: Vec<StackLabel>,
}

impl StackResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label, keeping first-occurrence order. Returns whether the
    /// label was newly inserted.
    pub fn push(&mut self, label: StackLabel) -> bool {
        if self.contains(label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    pub fn contains(&self, label: StackLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = StackLabel> + '_ {
        self.labels.iter().copied()
    }

    pub fn labels(&self) -> &[StackLabel] {
        &self.labels
    }

    /// Replace an empty result with the `common` fallback.
    pub fn normalized(mut self) -> Self {
        if self.labels.is_empty() {
            self.labels.push(StackLabel::Common);
        }
        self
    }

    /// Comma-separated wire form, e.g. `laravel,nextjs`. This exact string
    /// is the stdout contract of `agentpack detect`.
    pub fn to_csv(&self) -> String {
        self.labels
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<StackLabel> for StackResult {
    fn from_iter<I: IntoIterator<Item = StackLabel>>(iter: I) -> Self {
        let mut result = Self::new();
        for label in iter {
            result.push(label);
        }
        result
    }
}
