/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits implemented by the format decoders

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageMetadata;

/// The interface a format decoder exposes to the registry.
///
/// These are the only two entry points the host side ever drives: a full
/// decode producing an [`Image`], and a header-only probe producing
/// [`ImageMetadata`]. One decoder instance serves exactly one of them.
pub trait DecoderTrait {
    /// Decode the whole stream into an image
    fn decode(&mut self) -> Result<Image, ImageErrors>;

    /// Read enough of the header to describe the image without reading
    /// pixel data
    fn read_metadata(&mut self) -> Result<ImageMetadata, ImageErrors>;

    /// Name of this decoder
    fn name(&self) -> &'static str;
}

impl core::fmt::Debug for dyn DecoderTrait + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
