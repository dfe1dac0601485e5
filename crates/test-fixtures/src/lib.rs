//! Test fixtures for Cadence: golden scenario loader, record/event builders,
//! and an in-memory implementation of every collaborator trait with fault
//! injection.

pub mod builders;
pub mod store;

pub use builders::*;
pub use store::{Component, Fault, InMemoryStore};

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("crates/test-fixtures/fixtures").exists() {
        if path.join("fixtures/golden").exists() {
            return path.join("fixtures");
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("crates/test-fixtures/fixtures")
}

/// Load and deserialize a JSON fixture file.
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

/// A golden habit scenario: a completion pattern ending on `today` and the
/// streak state it must produce.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GoldenHabitScenario {
    pub name: String,
    pub today: chrono::NaiveDate,
    pub pattern: Vec<bool>,
    pub expected_current_streak: u32,
    pub expected_longest_streak: u32,
    pub expected_consistency: f64,
}
