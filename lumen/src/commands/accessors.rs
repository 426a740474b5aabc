use clap::Args;
use eyre::Result;
use lumen_codegen::{AccessorsFragment, VALUE_KINDS};

/// Emits one typed lookup per registry kind, ready to paste into
/// `impl ParamSet` in lumen-params.
///
/// Output goes to stdout only. Review the diff against the merged copy,
/// paste, and run the lumen-codegen sync tests.
#[derive(Args)]
pub struct AccessorsCommand {}

impl AccessorsCommand {
    pub fn run(&self) -> Result<()> {
        print!("{}", AccessorsFragment::new(VALUE_KINDS).render());
        Ok(())
    }
}
