//! Bit-granular read cursor over an immutable byte buffer.

use bytes::Bytes;

use crate::{
    encoding::{FieldEncoding, FieldValue},
    error::CursorError,
};

/// Read position over a shared byte buffer, tracked in bits.
///
/// Every read either consumes exactly the requested width or fails with
/// [`CursorError::EndOfStream`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct BitCursor {
    buf: Bytes,
    pos: u64,
}

impl BitCursor {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self {
            buf: buf.into(),
            pos: 0,
        }
    }

    /// The whole underlying buffer, independent of the read position.
    pub fn buffer(&self) -> &Bytes {
        &self.buf
    }

    pub fn len_bits(&self) -> u64 {
        self.buf.len() as u64 * 8
    }

    /// Current read position in bits.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Current read position in whole bytes, rounded down.
    pub fn byte_position(&self) -> usize {
        (self.pos / 8) as usize
    }

    pub fn is_aligned(&self) -> bool {
        self.pos % 8 == 0
    }

    pub fn remaining_bits(&self) -> u64 {
        self.len_bits() - self.pos
    }

    /// Seek to an absolute bit offset. The end of the buffer is a valid target.
    pub fn set_position(&mut self, bits: u64) -> Result<(), CursorError> {
        if bits > self.len_bits() {
            return Err(CursorError::PositionOutOfRange {
                position: bits,
                len: self.len_bits(),
            });
        }
        self.pos = bits;
        Ok(())
    }

    pub fn skip(&mut self, bits: u64) -> Result<(), CursorError> {
        self.ensure(bits)?;
        self.pos += bits;
        Ok(())
    }

    pub fn skip_bytes(&mut self, len: usize) -> Result<(), CursorError> {
        self.skip(len as u64 * 8)
    }

    /// Read one field and advance past it.
    pub fn read(&mut self, encoding: FieldEncoding) -> Result<FieldValue, CursorError> {
        encoding.validate()?;
        let bits = encoding.bits();
        let raw = self.take(u64::from(bits))?;
        Ok(match encoding {
            FieldEncoding::UIntLe(_) => FieldValue::UInt(le_uint(&raw)),
            FieldEncoding::IntLe(_) => FieldValue::Int(sign_extend(le_uint(&raw), bits)),
            FieldEncoding::FloatLe(32) => {
                FieldValue::Float(f64::from(f32::from_bits(le_uint(&raw) as u32)))
            }
            FieldEncoding::FloatLe(_) => FieldValue::Float(f64::from_bits(le_uint(&raw))),
            FieldEncoding::Bytes(_) => FieldValue::Bytes(raw),
        })
    }

    /// Read `count` consecutive fields of the same encoding.
    ///
    /// The whole run is checked against the remaining length up front, so a
    /// short run consumes nothing.
    pub fn read_many(
        &mut self,
        encoding: FieldEncoding,
        count: usize,
    ) -> Result<Vec<FieldValue>, CursorError> {
        encoding.validate()?;
        self.ensure(u64::from(encoding.bits()) * count as u64)?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.read(encoding)?);
        }
        Ok(out)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes, CursorError> {
        self.take(len as u64 * 8)
    }

    /// Byte offset of the first occurrence of `token` at or after the current
    /// position, rounded up to a byte boundary. The cursor does not move.
    pub fn find(&self, token: &[u8]) -> Option<usize> {
        let start = self.pos.div_ceil(8) as usize;
        let haystack = self.buf.get(start..)?;
        if token.is_empty() {
            return Some(start);
        }
        haystack
            .windows(token.len())
            .position(|window| window == token)
            .map(|offset| start + offset)
    }

    fn ensure(&self, bits: u64) -> Result<(), CursorError> {
        let remaining = self.remaining_bits();
        if bits > remaining {
            return Err(CursorError::EndOfStream {
                requested: bits,
                remaining,
            });
        }
        Ok(())
    }

    /// Consume `bits` (a multiple of 8) and return them regrouped into bytes.
    fn take(&mut self, bits: u64) -> Result<Bytes, CursorError> {
        self.ensure(bits)?;
        let len = (bits / 8) as usize;
        let start = self.byte_position();
        let out = if self.is_aligned() {
            self.buf.slice(start..start + len)
        } else {
            // The range spans one extra byte; `ensure` guarantees it exists.
            let shift = (self.pos % 8) as u32;
            (0..len)
                .map(|i| {
                    let hi = self.buf[start + i] << shift;
                    let lo = self.buf[start + i + 1] >> (8 - shift);
                    hi | lo
                })
                .collect::<Vec<u8>>()
                .into()
        };
        self.pos += bits;
        Ok(out)
    }
}

fn le_uint(raw: &[u8]) -> u64 {
    raw.iter()
        .rev()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

fn sign_extend(value: u64, bits: u32) -> i64 {
    let unused = 64 - bits;
    ((value << unused) as i64) >> unused
}
