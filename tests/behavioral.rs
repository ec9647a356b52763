// ABOUTME: Behavioral test suite for the on-disk parts of gh-pair
//
// These tests exercise real files and real git repositories rather than mocks.

#[path = "behavioral/fixtures.rs"]
pub mod fixtures;

#[path = "behavioral/pair_persistence.rs"]
mod pair_persistence;

#[path = "behavioral/hook_install.rs"]
mod hook_install;

#[path = "behavioral/config_loading.rs"]
mod config_loading;
