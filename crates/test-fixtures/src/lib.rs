//! Golden scenario loader shared by the workspace's integration tests.
//!
//! Fixtures live under `crates/test-fixtures/golden/` as JSON files and are
//! deserialized into whatever type the calling test declares.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root of the fixture tree, found by walking up from the calling crate.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures").join("golden")
}

/// Load and deserialize a JSON fixture, relative to `golden/`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// All JSON files in a fixture subdirectory, sorted by file name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load every fixture in `subdir`, relative paths resolved for the caller.
pub fn load_all<T: DeserializeOwned>(subdir: &str) -> Vec<(String, T)> {
    list_fixtures(subdir)
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            Some((name.clone(), load_fixture(&format!("{subdir}/{name}"))))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "golden fixture directory not found");
    }

    #[test]
    fn decision_scenarios_are_present() {
        let files = list_fixtures("decisions");
        assert_eq!(files.len(), 4);
        for name in [
            "decisions/scenario_a_legal_below_threshold.json",
            "decisions/scenario_b_business_auto_ok.json",
            "decisions/scenario_c_deterministic_rule.json",
            "decisions/scenario_d_default_category.json",
            "ambiguity/scenario_e_human_review.json",
        ] {
            assert!(fixture_exists(name), "{name}");
        }
    }

    #[test]
    fn fixtures_parse_as_json() {
        for subdir in ["decisions", "ambiguity"] {
            for (name, value) in load_all::<serde_json::Value>(subdir) {
                assert!(value.get("name").is_some(), "{name} has no name");
                assert!(value.get("expected").is_some(), "{name} has no expected block");
            }
        }
    }
}
