use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use nlxread::NlxReader;

#[derive(Args)]
pub struct AsciiArgs {
    /// Path to a .p position file
    input: PathBuf,
}

impl AsciiArgs {
    pub fn run(self) -> Result<()> {
        let out = NlxReader::new().export_position_ascii(&self.input)?;
        println!("{}", out.display());
        Ok(())
    }
}
