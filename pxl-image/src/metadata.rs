/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image metadata
//!
//! Header-level information a decoder can report without touching
//! pixel data.

use pxl_core::colorspace::ColorSpace;

/// Layout metadata for an image.
///
/// Produced by [`DecoderTrait::read_metadata`](crate::traits::DecoderTrait::read_metadata);
/// describes the buffer a full decode would return.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageMetadata {
    /// Colorspace of the decoded pixel buffer
    pub colorspace: ColorSpace,
    /// Image width in pixels
    pub width:      usize,
    /// Image height in pixels
    pub height:     usize
}
