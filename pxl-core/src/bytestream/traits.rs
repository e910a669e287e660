/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits for reading bytes in the pxl family of decoders

use crate::bytestream::reader::PxlIoError;

/// The input trait implemented for byte sources.
///
/// This provides the handful of operations the decoders need from their
/// input: exact-length forward reads and a single byte of lookahead.
/// Anything that can do those two things can feed a decoder, in-memory
/// buffers and buffered streams alike.
///
/// Implementations never rewind. Once a byte has been returned from
/// [`read_byte`](Self::read_byte) or [`read_exact_bytes`](Self::read_exact_bytes)
/// it is gone; [`peek_byte`](Self::peek_byte) is the only way to look at a
/// byte without consuming it.
pub trait PxlByteReaderTrait {
    /// Read a single byte from the source.
    ///
    /// # Errors
    /// Returns [`PxlIoError::EndOfStream`] if the source is exhausted.
    fn read_byte(&mut self) -> Result<u8, PxlIoError>;

    /// Return the next byte without consuming it.
    ///
    /// A subsequent [`read_byte`](Self::read_byte) returns the same byte.
    ///
    /// # Errors
    /// Returns [`PxlIoError::EndOfStream`] if the source is exhausted.
    fn peek_byte(&mut self) -> Result<u8, PxlIoError>;

    /// Read exactly the bytes required to fill `buf`.
    ///
    /// # Errors
    /// Returns [`PxlIoError::EndOfStream`] if the source holds fewer bytes
    /// than `buf` wants, with `requested` and `read` describing the short
    /// read.
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), PxlIoError>;

    /// Read a compile-time known number of bytes, returning them by value.
    ///
    /// Convenience wrapper over [`read_exact_bytes`](Self::read_exact_bytes)
    /// for fixed-size reads such as magic bytes and pixel groups.
    fn read_const_bytes<const N: usize>(&mut self) -> Result<[u8; N], PxlIoError> {
        let mut buf = [0_u8; N];
        self.read_exact_bytes(&mut buf)?;
        Ok(buf)
    }
}
