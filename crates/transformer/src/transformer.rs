use pmr_core::{constant, RenameMap, ShortenPolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{
    collector::collect_module_names,
    replacer::{AppliedRename, TextReplacer},
};

type Result<T> = anyhow::Result<T>;

pub const DEFAULT_MODULE_KEY: &str = "modules";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_segment_length: Option<usize>,
}

impl TransformOption {
    pub fn module_key(&self) -> &str {
        self.module_key.as_deref().unwrap_or(DEFAULT_MODULE_KEY)
    }

    pub fn policy(&self) -> ShortenPolicy {
        ShortenPolicy::new(
            self.prefix.as_deref().unwrap_or(constant::PARAMOD_PREFIX),
            self.max_segment_length.unwrap_or(constant::MAX_SEGMENT_LEN),
        )
    }

    /// Fields set in `other` win.
    pub fn merge(self, other: TransformOption) -> Self {
        Self {
            module_key: other.module_key.or(self.module_key),
            prefix: other.prefix.or(self.prefix),
            max_segment_length: other.max_segment_length.or(self.max_segment_length),
        }
    }
}

#[derive(Debug)]
pub struct TransformOutput {
    pub content: String,
    pub renames: Vec<AppliedRename>,
}

pub fn build_rename_map(content: &str, options: &TransformOption) -> Result<RenameMap> {
    let names = collect_module_names(content, options.module_key())?;

    Ok(RenameMap::build(names, &options.policy()))
}

pub fn transform(content: String, options: TransformOption) -> Result<TransformOutput> {
    // collection
    let map = build_rename_map(&content, &options)?;

    debug!(
        modules = map.len(),
        shortened = map.iter().filter(|entry| !entry.is_identity()).count(),
        "built rename map"
    );

    // substitution on the raw text keeps the original formatting
    let (content, renames) = TextReplacer::new().replace_all(content, &map);

    info!(renames = renames.len(), "renamed modules");

    Ok(TransformOutput { content, renames })
}
