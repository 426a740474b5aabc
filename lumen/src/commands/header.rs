use std::path::PathBuf;

use chrono::Datelike;
use clap::Args;
use eyre::Result;

/// With explicit PATHS exactly those files are processed, and an
/// unrecognized extension is an error. Without PATHS the tree under --root
/// is walked, skipping unrecognized files along with .git and target.
#[derive(Args)]
pub struct HeaderCommand {
    /// Files to process (default: every recognized source under --root)
    pub paths: Vec<PathBuf>,

    /// Report files missing a header without modifying them (exit 1 if any)
    #[arg(long)]
    pub check: bool,

    /// Directory to walk when no paths are given
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

impl HeaderCommand {
    pub fn run(&self) -> Result<()> {
        let paths = if self.paths.is_empty() {
            lumen_header::source_files(&self.root)?
        } else {
            self.paths.clone()
        };

        if self.check {
            let missing = lumen_header::check_paths(&paths)?;
            if !missing.is_empty() {
                eprintln!("error: {} file(s) are missing a license header:", missing.len());
                for path in &missing {
                    eprintln!("  {}", path.display());
                }
                eprintln!("Run `lumen header` to fix.");
                std::process::exit(1);
            }
            println!("{} file(s) checked, all carry a license header", paths.len());
        } else {
            let year = chrono::Local::now().year();
            let fixed = lumen_header::fix_paths(&paths, year)?;
            for path in &fixed {
                println!("Added license header to {}", path.display());
            }
            println!("{} file(s) checked, {} updated", paths.len(), fixed.len());
        }

        Ok(())
    }
}
