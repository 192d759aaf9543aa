use std::fmt;

use pmr_core::RenameMap;
use tracing::trace;

/// Module names appear JSON-escaped in the raw document.
pub fn escape_backslashes(s: &str) -> String {
    s.replace('\\', "\\\\")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRename {
    pub from: String,
    pub to: String,
    pub occurrences: usize,
}

impl fmt::Display for AppliedRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "renaming {} to {}", self.from, self.to)
    }
}

/// Plain substring substitution over the raw text.
///
/// Matches are not scoped to JSON strings, and every rename runs on the
/// output of the previous one.
#[derive(Debug, Default)]
pub struct TextReplacer {
    pub applied: Vec<AppliedRename>,
}

impl TextReplacer {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn replace(&mut self, text: String, original: &str, replacement: &str) -> String {
        let from = escape_backslashes(original);
        let to = escape_backslashes(replacement);

        let occurrences = if from.is_empty() {
            0
        } else {
            text.matches(from.as_str()).count()
        };

        trace!(%from, %to, occurrences, "replace");

        let text = if occurrences > 0 && from != to {
            text.replace(from.as_str(), &to)
        } else {
            text
        };

        self.applied.push(AppliedRename {
            from,
            to,
            occurrences,
        });

        text
    }

    pub fn replace_all(mut self, text: String, map: &RenameMap) -> (String, Vec<AppliedRename>) {
        let text = map.iter().fold(text, |text, entry| {
            self.replace(text, &entry.original, &entry.replacement)
        });

        (text, self.applied)
    }
}
