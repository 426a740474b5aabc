//! Typed storage for scene-description parameters.
//!
//! A scene file hands every shape, light, and texture a bag of loosely-typed
//! values. [`ParamSet`] keeps that bag strongly typed on the Rust side: each
//! entry is tagged with its [`Value`] kind, and the `find_one_*` accessors
//! look values up by name with a caller-supplied default.
//!
//! The `find_one_*` accessors and the [`testutils`] fixture helpers are
//! generated by the `lumen` CLI and merged into this crate by hand; the
//! `lumen-codegen` crate holds the generators and the sync tests that keep
//! the merged copies from drifting.

pub mod geometry;
mod params;
pub mod spectrum;
pub mod testutils;

pub use params::{ParamEntry, ParamList, ParamSet, Value};

/// Floating-point type used throughout the renderer.
pub type Float = f32;
