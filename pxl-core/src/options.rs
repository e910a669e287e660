/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global decoder options

/// Decoder options
///
/// Sanity limits a caller can tune before handing a decoder a byte
/// source. Dimensions larger than the configured maximums are rejected
/// before any pixel allocation happens.
///
/// # Example
/// ```
/// use pxl_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default().set_max_width(256);
/// assert_eq!(options.get_max_width(), 256);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum image width decoders will accept
    max_width:  usize,
    /// Maximum image height decoders will accept
    max_height: usize
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  1 << 17,
            max_height: 1 << 17
        }
    }
}

impl DecoderOptions {
    /// Change the maximum width a decoder will accept
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Change the maximum height a decoder will accept
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Maximum width a decoder will accept
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Maximum height a decoder will accept
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }
}
