/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Glue between the binary pixmap decoder and the host registry

use pxl_core::bytestream::PxlByteReaderTrait;
use pxl_ppm::{P6_MAGIC, PpmDecodeErrors, PpmDecoder};

use crate::codecs::{FormatRegistry, ImageFormat};
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageMetadata;
use crate::traits::DecoderTrait;

/// Register the binary pixmap decoder with a host registry.
///
/// Called once by the hosting application at startup; registration is
/// never a side effect of linking this crate in.
pub fn register(registry: &mut FormatRegistry) {
    registry.register("ppm", &P6_MAGIC, ImageFormat::Ppm);
}

impl<T> DecoderTrait for PpmDecoder<T>
where
    T: PxlByteReaderTrait
{
    fn decode(&mut self) -> Result<Image, ImageErrors> {
        let pixels = self.decode()?;

        // a successful decode always leaves the headers populated
        let (width, height) = self.dimensions().unwrap();

        Image::from_rgba8(pixels, width, height)
    }

    fn read_metadata(&mut self) -> Result<ImageMetadata, ImageErrors> {
        let info = self.decode_info()?;

        Ok(ImageMetadata {
            colorspace: info.color_model,
            width:      info.width,
            height:     info.height
        })
    }

    fn name(&self) -> &'static str {
        "PPM Decoder"
    }
}

impl From<PpmDecodeErrors> for ImageErrors {
    fn from(error: PpmDecodeErrors) -> Self {
        ImageErrors::PpmDecodeErrors(error)
    }
}
