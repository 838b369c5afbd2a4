//! Plain-text rendering of position data.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use nlxread_core::PositionTrack;

use crate::{
    decode::{decode_positions, split_position_header},
    error::NlxReadError,
    format::FileFormat,
    reader::{NlxReader, open_checked},
};

/// Write `header` verbatim followed by one `ts,x,y,dir` line per sample.
///
/// Timestamp and direction are truncated to integers; coordinates keep four
/// decimals.
pub fn write_position_ascii<W: Write>(
    header: &[u8],
    track: &PositionTrack,
    mut out: W,
) -> io::Result<()> {
    out.write_all(header)?;
    for s in track.iter() {
        writeln!(
            out,
            "{},{:.4},{:.4},{}",
            s.timestamp as i64, s.x, s.y, s.direction as i64
        )?;
    }
    out.flush()
}

impl NlxReader {
    /// Write `<input>.ascii` next to a position file and return its path.
    pub fn export_position_ascii(&self, path: &Path) -> Result<PathBuf, NlxReadError> {
        let data = open_checked(path, FileFormat::Position)?;
        let (header, _) = split_position_header(&data)?;
        let track = decode_positions(data, self.options())?.into_data();

        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".ascii");
        let out_path = path.with_file_name(name);

        let out = BufWriter::new(fs::File::create(&out_path)?);
        write_position_ascii(&header, &track, out)?;
        tracing::info!(path = %out_path.display(), samples = track.len(), "wrote position ascii");
        Ok(out_path)
    }
}

