/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use pxl_ppm::PpmDecodeErrors;

use crate::codecs::ImageFormat;

/// All errors possible when handling images in this crate
pub enum ImageErrors {
    /// The PPM decoder reported an error
    PpmDecodeErrors(PpmDecodeErrors),
    /// No registered format matched the probe bytes
    UnknownFormat,
    /// The format matched but no decoder for it is compiled in
    NoDecoderForFormat(ImageFormat),
    /// A pixel buffer does not match the dimensions it was paired with
    InvalidBufferSize { expected: usize, found: usize }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PpmDecodeErrors(error) => {
                writeln!(f, "PPM decoding failed: {error:?}")
            }
            Self::UnknownFormat => {
                writeln!(f, "No registered format matches the probe bytes")
            }
            Self::NoDecoderForFormat(format) => {
                writeln!(f, "No decoder is available for format {format:?}")
            }
            Self::InvalidBufferSize { expected, found } => {
                writeln!(
                    f,
                    "Expected a pixel buffer of {expected} bytes but found {found}"
                )
            }
        }
    }
}
