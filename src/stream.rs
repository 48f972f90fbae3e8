//! Forward-only byte stream primitives.
//!
//! Property payloads are laid out strictly sequentially: the width of record
//! N+1 is only known after record N has been fully consumed. The cursor here
//! therefore never seeks backward and never peeks without consuming; every
//! read is exact-or-error.

use std::io::{self, Read};

use bytes::Bytes;
use zerocopy::{F32, F64, I16, I32, I64, LE, U16, U32, U64};

use crate::error::{Error, Result};

/// Largest up-front allocation for a length-prefixed payload.
///
/// A corrupt length prefix can declare gigabytes; the buffer only grows as
/// bytes actually arrive, so a truncated stream fails before exhausting
/// memory.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// A forward-only cursor over property set bytes.
///
/// Wraps any [`Read`] source and exposes "read exactly K bytes or fail"
/// semantics. Running out of bytes mid-field yields
/// [`Error::TruncatedStream`]; partial reads are never silently zero-filled.
///
/// # Examples
///
/// ```
/// use oleps::PropertyStream;
///
/// let data = [0x2A, 0x00, 0x00, 0x00];
/// let mut stream = PropertyStream::new(&data[..]);
/// assert_eq!(stream.read_u32().unwrap(), 42);
/// ```
#[derive(Debug)]
pub struct PropertyStream<R: Read> {
    inner: R,
}

impl<R: Read> PropertyStream<R> {
    /// Wrap a reader positioned at the start of a record.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consume the stream and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Fill `buf` completely or fail with the byte count that was available.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(Error::TruncatedStream {
                        expected: buf.len(),
                        available: filled,
                    });
                },
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Read a single unsigned byte.
    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a single signed byte.
    #[inline]
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(U16::<LE>::from_bytes(buf).get())
    }

    /// Read a little-endian i16.
    #[inline]
    pub fn read_i16(&mut self) -> Result<i16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(I16::<LE>::from_bytes(buf).get())
    }

    /// Read a little-endian u32.
    #[inline]
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(U32::<LE>::from_bytes(buf).get())
    }

    /// Read a little-endian i32.
    #[inline]
    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(I32::<LE>::from_bytes(buf).get())
    }

    /// Read a little-endian u64.
    #[inline]
    pub fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(U64::<LE>::from_bytes(buf).get())
    }

    /// Read a little-endian i64.
    #[inline]
    pub fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(I64::<LE>::from_bytes(buf).get())
    }

    /// Read a little-endian IEEE-754 single.
    #[inline]
    pub fn read_f32(&mut self) -> Result<f32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(F32::<LE>::from_bytes(buf).get())
    }

    /// Read a little-endian IEEE-754 double.
    #[inline]
    pub fn read_f64(&mut self) -> Result<f64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(F64::<LE>::from_bytes(buf).get())
    }

    /// Read a fixed-size byte array.
    #[inline]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `len` bytes into an owned buffer.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        let mut chunk = [0u8; 4096];
        while buf.len() < len {
            let want = (len - buf.len()).min(chunk.len());
            match self.inner.read(&mut chunk[..want]) {
                Ok(0) => {
                    return Err(Error::TruncatedStream {
                        expected: len,
                        available: buf.len(),
                    });
                },
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Bytes::from(buf))
    }

    /// Discard exactly `n` bytes.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        let mut remaining = n;
        let mut scratch = [0u8; 64];
        while remaining > 0 {
            let want = remaining.min(scratch.len());
            match self.inner.read(&mut scratch[..want]) {
                Ok(0) => {
                    return Err(Error::TruncatedStream {
                        expected: n,
                        available: n - remaining,
                    });
                },
                Ok(read) => remaining -= read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
