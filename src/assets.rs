use serde::Deserialize;
use std::{collections::HashMap, path::Path, sync::OnceLock};
use thiserror::Error;
use tokio::fs;

/// Hashed file names of the bundled stylesheet and script, relative to the
/// public folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltAssets {
	pub css: &'static str,
	pub js: &'static str,
}

static ASSETS: OnceLock<BuiltAssets> = OnceLock::new();

const UNBUNDLED: BuiltAssets = BuiltAssets {
	css: "main.css",
	js: "main.js",
};

impl BuiltAssets {
	/// Reads `manifest.json` (as written by vite) from the public folder.
	pub async fn init(dir: impl AsRef<Path>) -> Result<(), AssetError> {
		let manifest = fs::read_to_string(dir.as_ref().join("manifest.json")).await?;
		let assets = Self::from_manifest(&manifest)?;
		let _ = ASSETS.set(assets);

		Ok(())
	}

	fn from_manifest(manifest: &str) -> Result<Self, AssetError> {
		let entries: HashMap<String, AssetManifestEntry> = serde_json::from_str(manifest)?;
		let file = |name: &str| -> Result<&'static str, AssetError> {
			let entry = entries
				.get(name)
				.ok_or_else(|| AssetError::MissingAsset(name.to_owned()))?;

			let file: Box<str> = entry.file.as_str().into();
			Ok(Box::leak(file))
		};

		Ok(BuiltAssets {
			css: file("main.css")?,
			js: file("main.ts")?,
		})
	}

	/// The assets found at startup, or the unbundled names when there was no
	/// usable manifest.
	pub fn assets() -> &'static Self {
		ASSETS.get().unwrap_or(&UNBUNDLED)
	}
}

#[derive(Debug, Error)]
pub enum AssetError {
	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error("missing asset: {0}")]
	MissingAsset(String),
}

#[derive(Deserialize)]
struct AssetManifestEntry {
	file: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reads_entry_files_from_manifest() {
		let manifest = r#"{
			"main.css": { "file": "assets/main-3f2a.css", "src": "main.css" },
			"main.ts": { "file": "assets/main-9c1d.js", "src": "main.ts", "isEntry": true }
		}"#;

		let assets = BuiltAssets::from_manifest(manifest).unwrap();
		assert_eq!(assets.css, "assets/main-3f2a.css");
		assert_eq!(assets.js, "assets/main-9c1d.js");
	}

	#[test]
	fn missing_entry_is_reported() {
		let manifest = r#"{ "main.css": { "file": "assets/main.css" } }"#;

		match BuiltAssets::from_manifest(manifest) {
			Err(AssetError::MissingAsset(name)) => assert_eq!(name, "main.ts"),
			other => panic!("unexpected result: {other:?}"),
		}
	}
}
