//! Browser-extension manifest fragment for the generated icons
//!
//! Mirrors the `icons` and `action.default_icon` members of a WebExtension
//! `manifest.json`, so the output can be pasted straight into the extension's
//! manifest:
//!
//! ```json
//! {
//!   "icons": { "16": "assets/icon16.png", "48": "assets/icon48.png" },
//!   "action": { "default_icon": { "16": "assets/icon16.png" } }
//! }
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

/// File name the fragment is written under
pub const MANIFEST_FILE_NAME: &str = "icons.json";

/// Root of the manifest fragment
#[derive(Serialize, Debug, Clone)]
pub struct ManifestFragment {
    /// Icons shown on the extensions page, in the store and as the favicon
    pub icons: IconMap,

    /// Toolbar button; omitted when the extension declares no action icons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

/// The `action` member of the manifest
#[derive(Serialize, Debug, Clone)]
pub struct Action {
    pub default_icon: IconMap,
}

/// Pixel size to icon path; serde_json writes the sizes as string keys in
/// numeric order
pub type IconMap = BTreeMap<u32, String>;

impl ManifestFragment {
    /// Build a fragment listing `files` as `(size, filename)` pairs under
    /// `prefix`, for both the extension icons and the toolbar action
    pub fn for_icons(prefix: &str, files: &[(u32, &str)]) -> Self {
        let prefix = prefix.trim_end_matches('/');
        let icons: IconMap = files
            .iter()
            .map(|&(size, filename)| {
                let path = if prefix.is_empty() {
                    filename.to_string()
                } else {
                    format!("{prefix}/{filename}")
                };
                (size, path)
            })
            .collect();

        Self {
            action: Some(Action {
                default_icon: icons.clone(),
            }),
            icons,
        }
    }
}

/// Write `fragment` as pretty-printed JSON to `dir`/[`MANIFEST_FILE_NAME`]
pub fn write_manifest_json(dir: &Path, fragment: &ManifestFragment) -> Result<()> {
    let json =
        serde_json::to_string_pretty(fragment).context("Failed to serialize icons.json")?;

    let path = dir.join(MANIFEST_FILE_NAME);
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
