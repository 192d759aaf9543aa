use rustc_hash::FxHashSet;
use tracing::debug;

/// Hands out replacement names, keeping them apart from the ones already committed.
#[derive(Debug, Default)]
pub struct NameAllocator {
    committed: Vec<String>,
    used: FxHashSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Default::default()
    }

    fn commit(&mut self, name: String) {
        self.used.insert(name.clone());
        self.committed.push(name);
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn commit_identity(&mut self, name: &str) {
        self.commit(name.to_string());
    }

    /// Commits `candidate` as the replacement of `original`.
    ///
    /// Committed names are walked in commit order. Each one equal to the
    /// current candidate appends `_<length of original>` and the walk goes on
    /// with the suffixed name. Names before the match are not looked at again,
    /// so the result can still clash with an earlier entry.
    pub fn alloc(&mut self, original: &str, candidate: String) -> String {
        let mut name = candidate;

        if self.is_used(&name) {
            let suffix = format!("_{}", original.chars().count());

            for committed in &self.committed {
                if *committed == name {
                    debug!(original, clashed = %name, "name collision");
                    name.push_str(&suffix);
                }
            }
        }

        self.commit(name.clone());

        name
    }
}
