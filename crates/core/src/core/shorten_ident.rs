use itertools::Itertools;
use tracing::debug;

use super::constant::{
    MAX_SEGMENT_LEN, PARAMOD_PREFIX, SEGMENT_SEPARATOR, SUB_SEGMENT_SEPARATOR,
};

/// Decides which module names are shortened and how far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenPolicy {
    pub prefix: String,
    pub max_segment_len: usize,
}

impl Default for ShortenPolicy {
    fn default() -> Self {
        Self {
            prefix: PARAMOD_PREFIX.to_string(),
            max_segment_len: MAX_SEGMENT_LEN,
        }
    }
}

impl ShortenPolicy {
    pub fn new(prefix: impl Into<String>, max_segment_len: usize) -> Self {
        Self {
            prefix: prefix.into(),
            max_segment_len,
        }
    }

    pub fn qualifies(&self, name: &str) -> bool {
        name.starts_with(self.prefix.as_str())
    }

    fn is_over_length(&self, s: &str) -> bool {
        s.chars().count() > self.max_segment_len
    }

    /// Drops the first over-length `$` piece of a segment, later ones are kept.
    fn prune_segment(&self, segment: &str) -> String {
        let mut removed = false;

        segment
            .split(SUB_SEGMENT_SEPARATOR)
            .filter(|piece| {
                if !removed && self.is_over_length(piece) {
                    removed = true;
                    return false;
                }

                true
            })
            .join(SUB_SEGMENT_SEPARATOR)
    }

    fn should_discard(&self, segment: &str) -> bool {
        segment.is_empty() || segment == SEGMENT_SEPARATOR || self.is_over_length(segment)
    }

    /// Shortens a `\`-separated module name.
    ///
    /// Segments are pruned left to right. The scan stops at the first segment
    /// that has to be discarded: everything after it is carried over untouched.
    pub fn shorten(&self, name: &str) -> String {
        let mut segments = name.split(SEGMENT_SEPARATOR);
        let mut kept = vec![];

        for segment in segments.by_ref() {
            let pruned = self.prune_segment(segment);

            if self.should_discard(&pruned) {
                debug!(segment, "discard segment");
                break;
            }

            kept.push(pruned);
        }

        kept.into_iter()
            .chain(segments.map(str::to_string))
            .join(SEGMENT_SEPARATOR)
    }
}
