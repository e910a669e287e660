/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use pxl_core::bytestream::PxlIoError;

/// Errors possible when decoding a binary pixmap.
///
/// Every grammar violation is terminal for the decode call; the decoder
/// performs no recovery and returns all failure information here rather
/// than logging it.
pub enum PpmDecodeErrors {
    /// The first three bytes of the stream were not exactly `P6\n`
    InvalidMagic([u8; 3]),
    /// The width and height line did not scan as two decimal integers
    /// followed by a newline
    BadDimensions(&'static str),
    /// A dimension scanned successfully but was negative
    NegativeDimension(i64),
    /// The parsed dimensions describe a pixel buffer no allocation
    /// could hold
    InvalidDimensions(usize, usize),
    /// The maximum channel value line did not scan as a decimal integer
    /// followed by a newline
    BadMaxVal(&'static str),
    /// The maximum channel value is not 255, the only supported channel
    /// depth
    UnsupportedMaxVal(i64),
    /// The stream ended before `width * height` RGB triplets arrived,
    /// expected and received raw byte counts
    TruncatedPixelData(usize, usize),
    /// The stream ended inside the named header stage.
    ///
    /// Reported separately from content mismatches so a caller feeding the
    /// decoder a partially received stream can tell "wait for more bytes"
    /// apart from "this will never be valid".
    UnexpectedEndOfInput(&'static str),
    /// A dimension is larger than the configured limit, `(limit, found)`
    LargeDimensions(usize, usize),
    /// Any other error
    Generic(&'static str),
    /// A non end-of-file error from the underlying stream
    IoError(PxlIoError)
}

impl Debug for PpmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagic(magic) => {
                writeln!(f, "Invalid magic bytes {magic:?}, expected [80, 54, 10] (`P6\\n`)")
            }
            Self::BadDimensions(reason) => {
                writeln!(f, "Bad image dimensions: {reason}")
            }
            Self::NegativeDimension(value) => {
                writeln!(f, "Negative image dimension {value}")
            }
            Self::InvalidDimensions(width, height) => {
                writeln!(f, "Dimensions {width}x{height} overflow the pixel buffer size")
            }
            Self::BadMaxVal(reason) => {
                writeln!(f, "Bad maximum channel value: {reason}")
            }
            Self::UnsupportedMaxVal(value) => {
                writeln!(f, "Unsupported maximum channel value {value}, only 255 is supported")
            }
            Self::TruncatedPixelData(expected, found) => {
                writeln!(f, "Expected {expected} bytes of pixel data but found {found}")
            }
            Self::UnexpectedEndOfInput(stage) => {
                writeln!(f, "Unexpected end of input while reading {stage}")
            }
            Self::LargeDimensions(limit, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {limit} but found {found}"
                )
            }
            Self::Generic(reason) => {
                writeln!(f, "{reason}")
            }
            Self::IoError(err) => {
                writeln!(f, "I/O error: {err:?}")
            }
        }
    }
}
