//! Cursor-style little-endian reader over a borrowed byte slice.
//!
//! Every read is bounds-checked and returns [`DecodeError::Overrun`] instead
//! of panicking. Floats are returned bit-for-bit.

use crate::error::DecodeError;

/// Sequential little-endian reader.
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current cursor offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Unread tail of the buffer. Does not advance the cursor.
    pub fn rest(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or_default()
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let overrun = DecodeError::Overrun {
            offset: self.pos,
            needed: N,
            len: self.data.len(),
        };
        let end = self.pos.checked_add(N).ok_or_else(|| overrun.clone())?;
        let bytes = self.data.get(self.pos..end).ok_or(overrun)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        self.pos = end;
        Ok(out)
    }

    #[inline]
    pub fn u8(&mut self) -> Result<u8, DecodeError> {
        self.take::<1>().map(|[b]| b)
    }

    #[inline]
    pub fn i8(&mut self) -> Result<i8, DecodeError> {
        self.take::<1>().map(i8::from_le_bytes)
    }

    /// Reads a byte as an on/off flag (non-zero is `true`).
    #[inline]
    pub fn flag(&mut self) -> Result<bool, DecodeError> {
        self.u8().map(|b| b != 0)
    }

    #[inline]
    pub fn u16_le(&mut self) -> Result<u16, DecodeError> {
        self.take().map(u16::from_le_bytes)
    }

    #[inline]
    pub fn i16_le(&mut self) -> Result<i16, DecodeError> {
        self.take().map(i16::from_le_bytes)
    }

    #[inline]
    pub fn u32_le(&mut self) -> Result<u32, DecodeError> {
        self.take().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn u64_le(&mut self) -> Result<u64, DecodeError> {
        self.take().map(u64::from_le_bytes)
    }

    #[inline]
    pub fn f32_le(&mut self) -> Result<f32, DecodeError> {
        self.take().map(f32::from_le_bytes)
    }

    #[inline]
    pub fn f64_le(&mut self) -> Result<f64, DecodeError> {
        self.take().map(f64::from_le_bytes)
    }

    pub fn u8_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        self.take()
    }

    pub fn u16_le_array<const N: usize>(&mut self) -> Result<[u16; N], DecodeError> {
        let mut arr = [0u16; N];
        for item in arr.iter_mut() {
            *item = self.u16_le()?;
        }
        Ok(arr)
    }

    pub fn f32_le_array<const N: usize>(&mut self) -> Result<[f32; N], DecodeError> {
        let mut arr = [0.0f32; N];
        for item in arr.iter_mut() {
            *item = self.f32_le()?;
        }
        Ok(arr)
    }

    /// Reads an `N`-byte, NUL-terminated UTF-8 text field.
    ///
    /// Text stops at the first NUL (or at `N` bytes if there is none).
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing.
    pub fn fixed_str<const N: usize>(&mut self) -> Result<String, DecodeError> {
        let raw: [u8; N] = self.take()?;
        let text = raw.split(|&b| b == 0).next().unwrap_or_default();
        Ok(String::from_utf8_lossy(text).into_owned())
    }

    /// Reads `N` consecutive fixed-stride records.
    pub fn records<T, const N: usize>(
        &mut self,
        parse: impl FnMut(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<[T; N], DecodeError> {
        let offset = self.pos;
        let items = self.record_vec(N, parse)?;
        // `record_vec` yields exactly N items or an error, so this cannot fail.
        items
            .try_into()
            .map_err(|items: Vec<T>| DecodeError::Overrun {
                offset,
                needed: N,
                len: items.len(),
            })
    }

    /// Reads `count` consecutive fixed-stride records into a `Vec`.
    pub fn record_vec<T>(
        &mut self,
        count: usize,
        mut parse: impl FnMut(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, DecodeError> {
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(parse(self)?);
        }
        Ok(items)
    }

    pub fn skip(&mut self, n: usize) -> Result<(), DecodeError> {
        let overrun = DecodeError::Overrun {
            offset: self.pos,
            needed: n,
            len: self.data.len(),
        };
        match self.pos.checked_add(n) {
            Some(end) if end <= self.data.len() => {
                self.pos = end;
                Ok(())
            }
            _ => Err(overrun),
        }
    }
}
