//! Append-only record of a generator's past exchanges.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One completed exchange: the primary input and the generated output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Value of the generator's primary input
    input: String,
    /// Text returned by the language model
    output: String,
}

impl HistoryEntry {
    /// Creates an entry.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Ordered exchanges for one generator.
///
/// Entries are only ever appended, and only after a successful call. The
/// history is shown to the user and never fed back into prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    entries: Vec<HistoryEntry>,
}

impl ConversationHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, input: impl Into<String>, output: impl Into<String>) {
        self.entries.push(HistoryEntry::new(input, output));
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded exchanges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent exchange.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Renders the buffer as `Human: ...` / `AI: ...` lines.
    ///
    /// An empty history renders as an empty string.
    pub fn transcript(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("Human: {}\nAI: {}", e.input, e.output))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
