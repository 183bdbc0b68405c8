#![deny(clippy::all)]
//! End-to-end tests for the lockfile filter
//!
//! This crate exercises the full parse → filter → serialize pipeline against
//! real-shaped Yarn Berry lockfile fixtures from the workspace `fixtures/`
//! directory.

use std::path::Path;

/// Load a fixture file from the fixtures directory
pub fn load_fixture(filename: &str) -> String {
  let fixture_path = Path::new(env!("CARGO_MANIFEST_DIR"))
    .parent()
    .unwrap()
    .parent()
    .unwrap()
    .join("fixtures")
    .join(filename);

  std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
    panic!(
      "Failed to read fixture file {}: {}",
      fixture_path.display(),
      e
    )
  })
}

/// Load a fixture file from a path
pub fn load_fixture_from_path(fixture_path: &Path) -> String {
  std::fs::read_to_string(fixture_path).unwrap_or_else(|e| {
    panic!(
      "Failed to read fixture file {}: {}",
      fixture_path.display(),
      e
    )
  })
}
