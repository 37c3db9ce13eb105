//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

use stringtab::table::InputDocument;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Parse a fixture input document.
pub fn load_fixture(name: &str) -> InputDocument {
	InputDocument::open(fixture_path(name)).expect("fixture document parses")
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Fresh per-test scratch file path under the target directory.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("stringtab-scratch");
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	let path = dir.join(format!("{}-{name}", std::process::id()));
	let _ = std::fs::remove_file(&path);
	path
}
