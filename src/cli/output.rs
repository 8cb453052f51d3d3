use std::{fs, path::PathBuf};

use clap::Parser;

use crate::prelude::*;

#[must_use]
#[derive(Parser)]
pub struct OutputArgs {
    /// Write to the file instead of the standard output.
    #[clap(long = "output", short = 'o')]
    pub path: Option<PathBuf>,
}

impl OutputArgs {
    pub fn emit(&self, text: &str) -> Result {
        match &self.path {
            Some(path) => {
                fs::write(path, text)
                    .with_context(|| format!("failed to write `{}`", path.display()))?;
                info!(path = %path.display(), "written");
            }
            None => {
                println!("{text}");
            }
        }
        Ok(())
    }
}
