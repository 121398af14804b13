//! Sequential, endian-selectable reader over an in-memory byte buffer.
//!
//! The reader owns a cursor and a byte-order mode. The mode is set by the
//! caller immediately before each group of multi-byte reads, so the byte
//! order of every field is visible at the call site that decodes it.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use encoding_rs::WINDOWS_1252;

use crate::error::{Result, ShpError};

/// Indexable byte buffer the decoder reads from.
///
/// Acquiring the bytes (file, network, clipboard, ...) is left to the
/// caller; the decoder only needs the length and random access by offset.
pub trait ByteSource {
    /// Total number of bytes.
    fn len(&self) -> usize;

    /// Byte at `offset`. Callers guarantee `offset < len()`.
    fn byte_at(&self, offset: usize) -> u8;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteSource for [u8] {
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    fn byte_at(&self, offset: usize) -> u8 {
        self[offset]
    }
}

impl ByteSource for Vec<u8> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn byte_at(&self, offset: usize) -> u8 {
        self[offset]
    }
}

impl<T: ByteSource + ?Sized> ByteSource for &T {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn byte_at(&self, offset: usize) -> u8 {
        (**self).byte_at(offset)
    }
}

/// Byte order applied to multi-byte reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

impl Endian {
    fn u16(self, buf: &[u8]) -> u16 {
        match self {
            Endian::Big => BigEndian::read_u16(buf),
            Endian::Little => LittleEndian::read_u16(buf),
        }
    }

    fn u32(self, buf: &[u8]) -> u32 {
        match self {
            Endian::Big => BigEndian::read_u32(buf),
            Endian::Little => LittleEndian::read_u32(buf),
        }
    }

    fn f64(self, buf: &[u8]) -> f64 {
        match self {
            Endian::Big => BigEndian::read_f64(buf),
            Endian::Little => LittleEndian::read_f64(buf),
        }
    }
}

/// Strategy for decoding 64-bit floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatDecoding {
    /// Bit-exact IEEE-754 reinterpretation.
    #[default]
    Native,
    /// Arithmetic reconstruction from the high and low 32-bit words.
    ///
    /// See [`f64_from_words`] for its limitations.
    Composed,
}

/// Rebuild an IEEE-754 double from its high and low 32-bit words.
///
/// Sign and the 11-bit biased exponent come from the high word; the 52-bit
/// mantissa is split across both words. A zero exponent field is decoded
/// without the implicit leading bit, which covers zero and subnormals.
///
/// NaN and infinity bit patterns are not recognized: an all-ones exponent is
/// treated as an ordinary exponent of 1024 and overflows to infinity.
pub fn f64_from_words(high: u32, low: u32) -> f64 {
    let sign = if high >> 31 != 0 { -1.0 } else { 1.0 };
    let exponent_bits = ((high >> 20) & 0x7ff) as i32;
    let (implicit, exponent) = if exponent_bits == 0 {
        (0.0, -1022)
    } else {
        (1.0, exponent_bits - 1023)
    };

    let mantissa = implicit
        + f64::from(high & 0x000f_ffff) / 2f64.powi(20)
        + f64::from(low) / 2f64.powi(52);

    sign * mantissa * 2f64.powi(exponent)
}

/// Cursor over a [`ByteSource`] with a switchable byte order.
pub struct ByteReader<S: ByteSource> {
    source: S,
    position: usize,
    endian: Endian,
    float_decoding: FloatDecoding,
}

impl<S: ByteSource> ByteReader<S> {
    /// Create a reader at offset 0 in big-endian mode.
    pub fn new(source: S) -> Self {
        Self {
            source,
            position: 0,
            endian: Endian::Big,
            float_decoding: FloatDecoding::Native,
        }
    }

    /// Select the float decoding strategy.
    pub fn with_float_decoding(mut self, float_decoding: FloatDecoding) -> Self {
        self.float_decoding = float_decoding;
        self
    }

    /// Total buffer length.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.source.len().saturating_sub(self.position)
    }

    /// Current byte order.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Set the byte order for the following reads.
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Advance the cursor without decoding.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.ensure(count)?;
        self.position += count;
        Ok(())
    }

    fn ensure(&self, count: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < count {
            return Err(ShpError::UnexpectedEof {
                offset: self.position,
                needed: count - remaining,
            });
        }
        Ok(())
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N)?;
        let mut buf = [0u8; N];
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.source.byte_at(self.position + i);
        }
        self.position += N;
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.take::<1>()?;
        Ok(byte)
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let buf = self.take::<2>()?;
        Ok(self.endian.u16(&buf))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let buf = self.take::<4>()?;
        Ok(self.endian.u32(&buf))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Read a 64-bit float using the configured [`FloatDecoding`].
    pub fn read_f64(&mut self) -> Result<f64> {
        let buf = self.take::<8>()?;
        let value = match self.float_decoding {
            FloatDecoding::Native => self.endian.f64(&buf),
            FloatDecoding::Composed => {
                let (high, low) = match self.endian {
                    Endian::Big => (self.endian.u32(&buf[..4]), self.endian.u32(&buf[4..])),
                    Endian::Little => (self.endian.u32(&buf[4..]), self.endian.u32(&buf[..4])),
                };
                f64_from_words(high, low)
            }
        };
        Ok(value)
    }

    /// Read `length` bytes as single-byte (Windows-1252) text.
    pub fn read_string(&mut self, length: usize) -> Result<String> {
        self.ensure(length)?;
        let bytes: Vec<u8> = (self.position..self.position + length)
            .map(|offset| self.source.byte_at(offset))
            .collect();
        self.position += length;
        let (text, _, _) = WINDOWS_1252.decode(&bytes);
        Ok(text.into_owned())
    }

    /// Read one byte as a character.
    pub fn read_char(&mut self) -> Result<char> {
        let text = self.read_string(1)?;
        Ok(text.chars().next().unwrap_or('\u{FFFD}'))
    }
}
