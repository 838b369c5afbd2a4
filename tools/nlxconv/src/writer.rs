use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use arrow::{datatypes::SchemaRef, record_batch::RecordBatch};

pub trait RecordBatchWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

fn open_dest(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

// --- JSON Lines ---

pub struct JsonlWriter {
    dest: Box<dyn Write>,
    flush_each_batch: bool,
}

impl JsonlWriter {
    pub fn new(output: Option<&Path>) -> Result<Self> {
        Ok(Self {
            dest: open_dest(output)?,
            flush_each_batch: output.is_none(),
        })
    }
}

impl RecordBatchWriter for JsonlWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        let mut json_writer = arrow::json::LineDelimitedWriter::new(Vec::new());
        json_writer.write(batch)?;
        json_writer.finish()?;
        self.dest.write_all(&json_writer.into_inner())?;
        if self.flush_each_batch {
            self.dest.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}

// --- CSV ---

pub struct CsvWriter {
    dest: Box<dyn Write>,
    header_written: bool,
    flush_each_batch: bool,
}

impl CsvWriter {
    pub fn new(output: Option<&Path>) -> Result<Self> {
        Ok(Self {
            dest: open_dest(output)?,
            header_written: false,
            flush_each_batch: output.is_none(),
        })
    }
}

impl RecordBatchWriter for CsvWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        let with_header = !self.header_written;
        self.header_written = true;
        let mut csv_writer = arrow::csv::WriterBuilder::new()
            .with_header(with_header)
            .build(&mut self.dest);
        csv_writer.write(batch)?;
        drop(csv_writer);
        if self.flush_each_batch {
            self.dest.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}

// --- Parquet ---

/// The schema is known before the first batch, so an empty input still
/// produces a valid file with zero rows.
pub struct ParquetWriter {
    output_path: PathBuf,
    inner: Option<parquet::arrow::ArrowWriter<fs::File>>,
}

impl ParquetWriter {
    pub fn new(output: &Path, schema: SchemaRef) -> Result<Self> {
        let file = fs::File::create(output)?;
        let props = parquet::file::properties::WriterProperties::builder().build();
        let inner = parquet::arrow::ArrowWriter::try_new(file, schema, Some(props))?;
        Ok(Self {
            output_path: output.to_path_buf(),
            inner: Some(inner),
        })
    }
}

impl RecordBatchWriter for ParquetWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        match self.inner.as_mut() {
            Some(writer) => writer.write(batch)?,
            None => anyhow::bail!("parquet writer already finished"),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(writer) = self.inner.take() {
            writer.close()?;
            tracing::info!(path = %self.output_path.display(), "parquet file written");
        }
        Ok(())
    }
}
