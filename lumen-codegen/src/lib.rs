//! Code generation for the repetitive, per-kind parts of `lumen-params`.
//!
//! One registry of wrapped value kinds drives two generators:
//!
//! - [`AccessorsFragment`] - the typed `find_one_*` lookups on `ParamSet`
//! - [`FixturesFragment`] - the `testutils` fixture-constructor module
//!
//! Both render to a `String` the CLI prints to stdout. Generated text is
//! reviewed and merged into `lumen-params` by hand, so a generator run can
//! never clobber hand-written code; the tests in `tests/merged_sync.rs`
//! keep the merged copies from drifting.

mod accessors;
mod builder;
mod fixtures;
mod registry;

pub use accessors::AccessorsFragment;
pub use builder::CodeBuilder;
pub use fixtures::FixturesFragment;
pub use registry::{VALUE_KINDS, ValueKind};
