/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for the codecs the library understands
//!
//! The [`FormatRegistry`] here is the dispatch mechanism a hosting
//! application drives: it is built explicitly at startup, holds a probe
//! table of magic bytes, and exposes exactly two operations over a
//! matched decoder, a full decode and a header-only probe. The registry
//! never interprets file contents itself; probe bytes select a decoder
//! and everything after that is the decoder's business.

use log::trace;
use pxl_core::bytestream::{PxlByteReaderTrait, PxlCursor};
use pxl_core::options::DecoderOptions;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::metadata::ImageMetadata;
use crate::traits::DecoderTrait;

pub mod ppm;

/// All image formats the registry can dispatch to
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ImageFormat {
    /// Binary portable pixmap
    Ppm,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Return true if this format has a decoder compiled in
    pub const fn has_decoder(self) -> bool {
        matches!(self, ImageFormat::Ppm)
    }

    /// Build a decoder for this format over `source` with default options
    pub fn decoder<'a, T>(&self, source: T) -> Result<Box<dyn DecoderTrait + 'a>, ImageErrors>
    where
        T: PxlByteReaderTrait + 'a
    {
        self.decoder_with_options(source, DecoderOptions::default())
    }

    /// Build a decoder for this format over `source`
    pub fn decoder_with_options<'a, T>(
        &self, source: T, options: DecoderOptions
    ) -> Result<Box<dyn DecoderTrait + 'a>, ImageErrors>
    where
        T: PxlByteReaderTrait + 'a
    {
        match self {
            ImageFormat::Ppm => Ok(Box::new(pxl_ppm::PpmDecoder::new_with_options(
                source, options
            ))),
            ImageFormat::Unknown => Err(ImageErrors::NoDecoderForFormat(*self))
        }
    }
}

/// One registered format: a name, the probe bytes that identify it and
/// the format they select.
struct RegisteredFormat {
    name:   &'static str,
    magic:  &'static [u8],
    format: ImageFormat
}

/// A probe-based format dispatch table.
///
/// Owned by the hosting application and filled by explicit
/// [`register`](Self::register) calls at startup. The probe bytes are
/// used only to select among registered decoders, never to drive any
/// decode logic.
pub struct FormatRegistry {
    formats: Vec<RegisteredFormat>
}

impl FormatRegistry {
    /// Create an empty registry that knows no formats
    pub const fn new() -> FormatRegistry {
        FormatRegistry {
            formats: Vec::new()
        }
    }

    /// Create a registry with every decoder this crate ships registered
    pub fn with_default_formats() -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        ppm::register(&mut registry);
        registry
    }

    /// Register a format under `name`, selected whenever a stream starts
    /// with `magic`
    pub fn register(&mut self, name: &'static str, magic: &'static [u8], format: ImageFormat) {
        trace!("Registering format {name} for {format:?}");

        self.formats.push(RegisteredFormat {
            name,
            magic,
            format
        });
    }

    /// Match the leading bytes of a stream against the registered probe
    /// patterns
    pub fn guess_format(&self, probe: &[u8]) -> Option<ImageFormat> {
        self.formats
            .iter()
            .find(|entry| probe.starts_with(entry.magic))
            .map(|entry| entry.format)
    }

    /// Name under which the matching format was registered
    pub fn format_name(&self, probe: &[u8]) -> Option<&'static str> {
        self.formats
            .iter()
            .find(|entry| probe.starts_with(entry.magic))
            .map(|entry| entry.name)
    }

    /// Decode an in-memory file, choosing the decoder by its magic bytes.
    ///
    /// This is one of the two entry points the registry exposes over a
    /// decoder; the other is [`read_metadata`](Self::read_metadata).
    pub fn read<T>(&self, data: T, options: DecoderOptions) -> Result<Image, ImageErrors>
    where
        T: AsRef<[u8]>
    {
        let format = self
            .guess_format(data.as_ref())
            .ok_or(ImageErrors::UnknownFormat)?;

        let mut decoder = format.decoder_with_options(PxlCursor::new(data), options)?;
        decoder.decode()
    }

    /// Read the header of an in-memory file, choosing the decoder by its
    /// magic bytes, without materializing pixel data.
    pub fn read_metadata<T>(
        &self, data: T, options: DecoderOptions
    ) -> Result<ImageMetadata, ImageErrors>
    where
        T: AsRef<[u8]>
    {
        let format = self
            .guess_format(data.as_ref())
            .ok_or(ImageErrors::UnknownFormat)?;

        let mut decoder = format.decoder_with_options(PxlCursor::new(data), options)?;
        decoder.read_metadata()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        FormatRegistry::new()
    }
}
