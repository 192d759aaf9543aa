use rustc_hash::FxHashSet;
use tracing::debug;

use super::{NameAllocator, ShortenPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub original: String,
    pub replacement: String,
}

impl RenameEntry {
    pub fn is_identity(&self) -> bool {
        self.original == self.replacement
    }
}

/// Original module name to replacement, in the order the names were seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenameMap {
    entries: Vec<RenameEntry>,
}

impl RenameMap {
    pub fn build<I, S>(names: I, policy: &ShortenPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut allocator = NameAllocator::new();
        let mut seen = FxHashSet::default();
        let mut entries = vec![];

        for name in names {
            let original = name.as_ref();

            if !seen.insert(original.to_string()) {
                debug!(original, "skip duplicate module name");
                continue;
            }

            let replacement = if policy.qualifies(original) {
                let candidate = policy.shorten(original);
                debug!(original, %candidate, "shorten module name");
                allocator.alloc(original, candidate)
            } else {
                allocator.commit_identity(original);
                original.to_string()
            };

            entries.push(RenameEntry {
                original: original.to_string(),
                replacement,
            });
        }

        Self { entries }
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.original == original)
            .map(|entry| entry.replacement.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenameEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RenameMap {
    type Item = &'a RenameEntry;
    type IntoIter = std::slice::Iter<'a, RenameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
