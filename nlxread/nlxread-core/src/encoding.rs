//! Field encodings understood by [`BitCursor`](crate::BitCursor) and the values
//! they decode to.

use std::fmt;

use bytes::Bytes;

use crate::error::CursorError;

/// Numeric or raw encoding of a single fixed-width field.
///
/// Widths are in bits. All numeric encodings are little-endian, which is the
/// only byte order used by the supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEncoding {
    /// Unsigned integer, width a multiple of 8 in `8..=64`.
    UIntLe(u32),
    /// Two's-complement signed integer, width a multiple of 8 in `8..=64`.
    IntLe(u32),
    /// IEEE-754 float, width 32 or 64.
    FloatLe(u32),
    /// Raw byte field, width a non-zero multiple of 8.
    Bytes(u32),
}

impl FieldEncoding {
    pub const U8: Self = Self::UIntLe(8);
    pub const U16: Self = Self::UIntLe(16);
    pub const U32: Self = Self::UIntLe(32);
    pub const U64: Self = Self::UIntLe(64);
    pub const I8: Self = Self::IntLe(8);
    pub const I16: Self = Self::IntLe(16);
    pub const I32: Self = Self::IntLe(32);
    pub const I64: Self = Self::IntLe(64);
    pub const F32: Self = Self::FloatLe(32);
    pub const F64: Self = Self::FloatLe(64);

    /// Raw field of `len` bytes.
    pub const fn bytes(len: u32) -> Self {
        Self::Bytes(len * 8)
    }

    pub const fn bits(&self) -> u32 {
        match *self {
            Self::UIntLe(b) | Self::IntLe(b) | Self::FloatLe(b) | Self::Bytes(b) => b,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::UIntLe(_) => "uintle",
            Self::IntLe(_) => "intle",
            Self::FloatLe(_) => "floatle",
            Self::Bytes(_) => "bytes",
        }
    }

    /// Check that the declared width can be decoded.
    pub fn validate(&self) -> Result<(), CursorError> {
        let bits = self.bits();
        let ok = match self {
            Self::UIntLe(_) | Self::IntLe(_) => bits % 8 == 0 && (8..=64).contains(&bits),
            Self::FloatLe(_) => bits == 32 || bits == 64,
            Self::Bytes(_) => bits % 8 == 0 && bits > 0,
        };
        if ok {
            Ok(())
        } else {
            Err(CursorError::UnsupportedWidth {
                encoding: self.kind_name(),
                bits,
            })
        }
    }
}

impl fmt::Display for FieldEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind_name(), self.bits())
    }
}

/// Value produced by reading one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    UInt(u64),
    Int(i64),
    Float(f64),
    Bytes(Bytes),
}

impl FieldValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::UInt(_) => "uint",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Bytes(_) => "bytes",
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            FieldValue::Bytes(v) => Some(v),
            _ => None,
        }
    }
}
