/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A strict decoder for binary portable pixmap (`P6`) images.
//!
//! The wire format is a short ASCII header followed by raw pixel bytes:
//!
//! ```text
//! "P6" "\n"
//! ( "#" <any bytes except \n> "\n" )*      ; zero or more comment lines
//! <decimal width> " " <decimal height> "\n"
//! "255" "\n"
//! <width * height RGB triplets, 3 bytes per pixel, no separators>
//! ```
//!
//! Decoding produces an RGBA buffer of exactly `width * height * 4` bytes
//! with the alpha channel forced to `0xFF`, or a header-only
//! [`PpmInfo`] record when pixel data is not needed.
//!
//! Only the binary RGB variant with a maximum channel value of 255 is
//! supported; the other netpbm formats (`P1`-`P5`, `P7`, PFM) and wider
//! channel depths are rejected, not approximated.
//!
//! # Example
//! ```
//! use pxl_core::bytestream::PxlCursor;
//! use pxl_ppm::PpmDecoder;
//!
//! let file = b"P6\n1 1\n255\n\x10\x20\x30";
//! let mut decoder = PpmDecoder::new(PxlCursor::new(file));
//!
//! let pixels = decoder.decode().unwrap();
//! assert_eq!(pixels, [0x10, 0x20, 0x30, 0xFF]);
//! ```
pub use crate::decoder::*;
pub use crate::errors::PpmDecodeErrors;

mod decoder;
mod errors;
