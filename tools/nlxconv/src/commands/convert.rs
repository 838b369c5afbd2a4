use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};

use super::DecodeArgs;
use crate::{
    format::OutputFormat,
    writer::{CsvWriter, JsonlWriter, ParquetWriter, RecordBatchWriter},
};

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to a .Nev, .p or .Ncs file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Jsonl)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rows per written batch
    #[arg(long, default_value_t = 65_536, value_parser = clap::value_parser!(u64).range(1..))]
    batch_size: u64,

    #[command(flatten)]
    decode: DecodeArgs,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        let reader = self.decode.reader();
        let decoded = reader.read(&self.input)?;
        let batch = decoded.to_record_batch()?;
        tracing::info!(
            format = %decoded.format(),
            rows = batch.num_rows(),
            notices = decoded.diagnostics().notices.len(),
            "decoded input"
        );

        let mut writer: Box<dyn RecordBatchWriter> = match self.format {
            OutputFormat::Jsonl => Box::new(JsonlWriter::new(self.output.as_deref())?),
            OutputFormat::Csv => Box::new(CsvWriter::new(self.output.as_deref())?),
            OutputFormat::Parquet => {
                let path = self
                    .output
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("Parquet output requires -o <file>"))?;
                Box::new(ParquetWriter::new(path, batch.schema())?)
            }
        };

        let total = batch.num_rows();
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})",
            )?
            .progress_chars("=>-"),
        );

        let step = usize::try_from(self.batch_size).unwrap_or(usize::MAX);
        let mut offset = 0;
        while offset < total {
            let len = step.min(total - offset);
            writer.write_batch(&batch.slice(offset, len))?;
            pb.inc(len as u64);
            offset += len;
        }

        writer.finish()?;
        pb.finish_with_message("done");
        Ok(())
    }
}
