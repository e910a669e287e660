/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

use crate::bytestream::PxlByteReaderTrait;

/// Errors produced by byte sources
pub enum PxlIoError {
    /// The source ran out of bytes mid-read.
    ///
    /// `requested` is the number of bytes the caller asked for, `read`
    /// how many the source could still provide.
    EndOfStream { requested: usize, read: usize },
    /// An error bubbled up from an underlying `std::io` stream that is
    /// not an end-of-file condition.
    #[cfg(feature = "std")]
    StdIoError(std::io::Error),
    /// Any other error.
    Generic(&'static str)
}

impl Debug for PxlIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PxlIoError::EndOfStream { requested, read } => {
                writeln!(
                    f,
                    "End of stream, requested {requested} bytes but only {read} were available"
                )
            }
            #[cfg(feature = "std")]
            PxlIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error: {err}")
            }
            PxlIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

/// An owned in-memory byte source.
///
/// Wraps anything that can be viewed as a byte slice and walks it forward,
/// never back. This is the source to reach for when the whole input is
/// already in memory; it works without `std`.
///
/// # Example
/// ```
/// use pxl_core::bytestream::{PxlByteReaderTrait, PxlCursor};
///
/// let mut cursor = PxlCursor::new([1_u8, 2, 3]);
/// assert_eq!(cursor.peek_byte().unwrap(), 1);
/// assert_eq!(cursor.read_byte().unwrap(), 1);
/// assert_eq!(cursor.read_byte().unwrap(), 2);
/// ```
pub struct PxlCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> PxlCursor<T> {
    /// Create a new cursor positioned at the start of `stream`.
    pub const fn new(stream: T) -> PxlCursor<T> {
        PxlCursor {
            stream,
            position: 0
        }
    }

    /// Number of bytes consumed so far.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.stream.as_ref().len().saturating_sub(self.position)
    }
}

impl<T: AsRef<[u8]>> PxlByteReaderTrait for PxlCursor<T> {
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, PxlIoError> {
        match self.stream.as_ref().get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(PxlIoError::EndOfStream {
                requested: 1,
                read:      0
            })
        }
    }

    #[inline(always)]
    fn peek_byte(&mut self) -> Result<u8, PxlIoError> {
        match self.stream.as_ref().get(self.position) {
            Some(byte) => Ok(*byte),
            None => Err(PxlIoError::EndOfStream {
                requested: 1,
                read:      0
            })
        }
    }

    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), PxlIoError> {
        let remaining = self.remaining();

        if remaining < buf.len() {
            // position stays untouched on a failed read
            return Err(PxlIoError::EndOfStream {
                requested: buf.len(),
                read:      remaining
            });
        }
        let start = self.position;
        buf.copy_from_slice(&self.stream.as_ref()[start..start + buf.len()]);
        self.position += buf.len();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_reads_consume() {
        let mut cursor = PxlCursor::new(b"abc".as_slice());

        assert_eq!(cursor.read_byte().unwrap(), b'a');
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut cursor = PxlCursor::new(b"xy".as_slice());

        assert_eq!(cursor.peek_byte().unwrap(), b'x');
        assert_eq!(cursor.peek_byte().unwrap(), b'x');
        assert_eq!(cursor.read_byte().unwrap(), b'x');
        assert_eq!(cursor.peek_byte().unwrap(), b'y');
    }

    #[test]
    fn short_read_reports_available_bytes() {
        let mut cursor = PxlCursor::new(b"abc".as_slice());
        let mut sink = [0_u8; 5];

        let err = cursor.read_exact_bytes(&mut sink).unwrap_err();
        assert!(matches!(
            err,
            PxlIoError::EndOfStream {
                requested: 5,
                read:      3
            }
        ));
        // a failed exact read consumes nothing
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn const_reads_return_arrays() {
        let mut cursor = PxlCursor::new([9_u8, 8, 7]);

        let bytes: [u8; 2] = cursor.read_const_bytes().unwrap();
        assert_eq!(bytes, [9, 8]);
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn eof_read_is_an_error() {
        let mut cursor = PxlCursor::new(b"".as_slice());

        assert!(cursor.read_byte().is_err());
        assert!(cursor.peek_byte().is_err());
    }
}
