use clap::Args;
use eyre::Result;
use lumen_codegen::{FixturesFragment, VALUE_KINDS};

/// Emits the complete testutils module, ready to replace
/// lumen-params/src/testutils.rs.
///
/// Output goes to stdout only. Review the diff against the merged copy,
/// redirect into place, and run the lumen-codegen sync tests.
#[derive(Args)]
pub struct FixturesCommand {}

impl FixturesCommand {
    pub fn run(&self) -> Result<()> {
        print!("{}", FixturesFragment::new(VALUE_KINDS).render());
        Ok(())
    }
}
