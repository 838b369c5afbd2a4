use std::path::PathBuf;

use anyhow::Result;
use arrow::util::pretty::pretty_format_batches;
use clap::Args;

use super::DecodeArgs;

#[derive(Args)]
pub struct InfoArgs {
    /// Path to a .Nev, .p or .Ncs file
    input: PathBuf,

    /// Number of leading rows to print
    #[arg(long, default_value_t = 10)]
    head: usize,

    #[command(flatten)]
    decode: DecodeArgs,
}

impl InfoArgs {
    pub fn run(self) -> Result<()> {
        let decoded = self.decode.reader().read(&self.input)?;
        let diagnostics = decoded.diagnostics();

        println!("format:         {}", decoded.format());
        println!("records:        {}", diagnostics.records);
        println!("rows:           {}", decoded.len());
        println!("trailing bytes: {}", diagnostics.trailing_bytes);
        if !diagnostics.sample_rates.is_empty() {
            println!("sample rates:   {}", join(&diagnostics.sample_rates));
            println!("channels:       {}", join(&diagnostics.channels));
            println!("short blocks:   {}", diagnostics.short_blocks);
        }
        for notice in &diagnostics.notices {
            println!("notice:         {notice}");
        }

        if self.head > 0 {
            let batch = decoded.to_record_batch()?;
            let head = batch.slice(0, self.head.min(batch.num_rows()));
            println!("{}", pretty_format_batches(&[head])?);
        }
        Ok(())
    }
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
