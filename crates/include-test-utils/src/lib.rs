//! Shared test utilities for the include workspace.
//!
//! Dev-dependency only. [`Fixtures`] lays out the resource files the
//! resolution tests include by name.

pub mod fixtures;

pub use fixtures::Fixtures;
