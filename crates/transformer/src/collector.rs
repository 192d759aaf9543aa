use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::debug;

/// Module names of the netlist, in document order.
pub fn collect_module_names(content: &str, module_key: &str) -> Result<Vec<String>> {
    let document: Value =
        serde_json::from_str(content).context("failed to parse netlist as JSON")?;

    let Value::Object(root) = document else {
        bail!("netlist must be a JSON object");
    };

    let Some(modules) = root.get(module_key) else {
        bail!("netlist has no `{module_key}` collection");
    };

    let Some(modules) = modules.as_object() else {
        bail!("`{module_key}` must map module names to definitions");
    };

    let names = modules.keys().cloned().collect::<Vec<_>>();

    debug!(count = names.len(), module_key, "collected module names");

    Ok(names)
}
