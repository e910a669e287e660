/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single decoded image
//!
//! An image is a width, a height and an interleaved RGBA pixel buffer
//! whose length is exactly `width * height * 4`. That invariant is
//! enforced at construction; an [`Image`] in hand is always fully
//! populated, decoders never hand out partially decoded buffers.

use pxl_core::bit_depth::BitDepth;
use pxl_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::metadata::ImageMetadata;

/// Number of bytes a single RGBA pixel occupies
pub const RGBA_STRIDE: usize = 4;

/// A single decoded image
#[derive(Clone, Debug)]
pub struct Image {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    depth:      BitDepth,
    pixels:     Vec<u8>
}

impl Image {
    /// Create an image from an interleaved RGBA buffer.
    ///
    /// # Errors
    /// Returns [`ImageErrors::InvalidBufferSize`] if `pixels` is not
    /// exactly `width * height * 4` bytes long.
    pub fn from_rgba8(pixels: Vec<u8>, width: usize, height: usize) -> Result<Image, ImageErrors> {
        let expected = width
            .checked_mul(height)
            .and_then(|count| count.checked_mul(RGBA_STRIDE));

        match expected {
            Some(expected) if expected == pixels.len() => Ok(Image {
                width,
                height,
                colorspace: ColorSpace::RGBA,
                depth: BitDepth::Eight,
                pixels
            }),
            _ => Err(ImageErrors::InvalidBufferSize {
                expected: expected.unwrap_or(usize::MAX),
                found:    pixels.len()
            })
        }
    }

    /// Get image dimensions as a tuple of (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the colorspace of the pixel buffer
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Get the bit depth of the pixel buffer
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Borrow the interleaved RGBA pixels, row-major order
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image returning its pixel buffer
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Layout metadata describing this image
    pub const fn metadata(&self) -> ImageMetadata {
        ImageMetadata {
            colorspace: self.colorspace,
            width:      self.width,
            height:     self.height
        }
    }
}
