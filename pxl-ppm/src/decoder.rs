/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::info;
use pxl_core::bit_depth::BitDepth;
use pxl_core::bytestream::{PxlByteReaderTrait, PxlIoError};
use pxl_core::colorspace::ColorSpace;
use pxl_core::options::DecoderOptions;

use crate::errors::PpmDecodeErrors;

/// The exact byte sequence introducing a binary pixmap.
///
/// Format registries dispatch on these three bytes alone, so the match is
/// byte-exact, terminating newline included; a `P6` followed by anything
/// else belongs to some other file.
pub const P6_MAGIC: [u8; 3] = *b"P6\n";

/// The only maximum channel value this decoder accepts.
///
/// Any other value would need channel rescaling, which is out of scope,
/// so it is treated as unsupported rather than merely different.
const SUPPORTED_MAX_VAL: i64 = 255;

/// Header-only information about a binary pixmap.
///
/// Everything a caller needs to lay out the decoded image without the
/// decoder ever touching pixel data.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PpmInfo {
    /// Colorspace of the buffer a full decode would produce.
    ///
    /// Always [`ColorSpace::RGBA`] for this decoder.
    pub color_model: ColorSpace,
    /// Image width in pixels
    pub width:       usize,
    /// Image height in pixels
    pub height:      usize
}

/// An instance of a binary pixmap (`P6`) decoder.
///
/// The decoder owns its byte source for the duration of the decode and
/// consumes it strictly forward. A decode is a single pass through
/// magic, comments, dimensions, maximum channel value and pixel data;
/// any stage failure is terminal and no partially built image is ever
/// returned.
pub struct PpmDecoder<T: PxlByteReaderTrait> {
    stream:          T,
    width:           usize,
    height:          usize,
    decoded_headers: bool,
    probed:          bool,
    colorspace:      ColorSpace,
    depth:           BitDepth,
    options:         DecoderOptions
}

impl<T: PxlByteReaderTrait> PpmDecoder<T> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - `source`: the stream holding PPM encoded bytes
    ///
    /// # Example
    /// ```
    /// use pxl_core::bytestream::PxlCursor;
    /// use pxl_ppm::PpmDecoder;
    ///
    /// let mut decoder = PpmDecoder::new(PxlCursor::new(b"NOT VALID PPM"));
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(source: T) -> PpmDecoder<T> {
        PpmDecoder::new_with_options(source, DecoderOptions::default())
    }

    /// Create a new decoder with the specified options
    ///
    /// # Arguments
    /// - `source`: the stream holding PPM encoded bytes
    /// - `options`: modified options for the decoder
    ///
    /// # Example
    /// ```
    /// use pxl_core::bytestream::PxlCursor;
    /// use pxl_core::options::DecoderOptions;
    /// use pxl_ppm::PpmDecoder;
    ///
    /// let options = DecoderOptions::default().set_max_width(16);
    /// let mut decoder = PpmDecoder::new_with_options(PxlCursor::new(b"P6\n90 1\n255\n"), options);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new_with_options(source: T, options: DecoderOptions) -> PpmDecoder<T> {
        PpmDecoder {
            stream: source,
            width: 0,
            height: 0,
            decoded_headers: false,
            probed: false,
            colorspace: ColorSpace::Unknown,
            depth: BitDepth::Unknown,
            options
        }
    }

    /// Read the whole PPM header and store it in internal state.
    ///
    /// Runs the magic, comment, dimension and maximum channel value
    /// stages in order, stopping at the first byte of pixel data.
    /// Calling this after headers were already decoded is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), PpmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        if self.probed {
            return Err(PpmDecodeErrors::Generic(
                "cannot continue a full decode after a header-only probe"
            ));
        }
        self.read_magic()?;
        self.skip_comments()?;
        self.read_dimensions()?;
        self.read_max_val()?;

        self.decoded_headers = true;

        Ok(())
    }

    /// Read enough of the header to describe the image, skipping the
    /// maximum channel value and all pixel data.
    ///
    /// This is the entry point for callers that want layout metadata
    /// without materializing pixels. The decoder is consumed-in-place:
    /// after probing, the same instance cannot run a full decode since
    /// its stream position is mid-header.
    pub fn decode_info(&mut self) -> Result<PpmInfo, PpmDecodeErrors> {
        if self.decoded_headers || self.probed {
            return Err(PpmDecodeErrors::Generic(
                "header-only probe requires a fresh decoder"
            ));
        }
        self.read_magic()?;
        self.skip_comments()?;
        self.read_dimensions()?;

        self.probed = true;

        Ok(PpmInfo {
            color_model: ColorSpace::RGBA,
            width:       self.width,
            height:      self.height
        })
    }

    /// Decode a PPM stream, returning interleaved RGBA bytes.
    ///
    /// The returned buffer holds exactly `width * height * 4` bytes in
    /// row-major order with the alpha byte of every pixel set to `0xFF`,
    /// since the format carries no alpha of its own.
    pub fn decode(&mut self) -> Result<Vec<u8>, PpmDecodeErrors> {
        self.decode_headers()?;

        let (width, height) = (self.width, self.height);

        let pixel_count = width
            .checked_mul(height)
            .ok_or(PpmDecodeErrors::InvalidDimensions(width, height))?;
        let output_size = pixel_count
            .checked_mul(self.output_colorspace().num_components())
            .and_then(|size| size.checked_mul(self.depth.size_of()))
            .ok_or(PpmDecodeErrors::InvalidDimensions(width, height))?;

        let source_size = pixel_count * self.colorspace.num_components();

        let mut pixels = vec![0_u8; output_size];

        for (position, pixel) in pixels.chunks_exact_mut(4).enumerate() {
            let rgb: [u8; 3] = self.stream.read_const_bytes().map_err(|e| match e {
                PxlIoError::EndOfStream { read, .. } => {
                    PpmDecodeErrors::TruncatedPixelData(source_size, position * 3 + read)
                }
                other => PpmDecodeErrors::IoError(other)
            })?;

            pixel[..3].copy_from_slice(&rgb);
            pixel[3] = 0xFF;
        }

        Ok(pixels)
    }

    /// Consume exactly the three magic bytes `P6\n`.
    fn read_magic(&mut self) -> Result<(), PpmDecodeErrors> {
        let magic: [u8; 3] = self
            .stream
            .read_const_bytes()
            .map_err(|e| header_error(e, "magic"))?;

        if magic != P6_MAGIC {
            return Err(PpmDecodeErrors::InvalidMagic(magic));
        }
        self.colorspace = ColorSpace::RGB;
        info!("Colorspace: {:?}", self.colorspace);

        Ok(())
    }

    /// Skip over comment lines.
    ///
    /// While the next byte is `#`, consume through and including the next
    /// newline. Stops at the first non-`#` byte without consuming it;
    /// blank lines are not tolerated.
    fn skip_comments(&mut self) -> Result<(), PpmDecodeErrors> {
        loop {
            let byte = self
                .stream
                .peek_byte()
                .map_err(|e| header_error(e, "comments"))?;

            if byte != b'#' {
                return Ok(());
            }
            loop {
                let byte = self
                    .stream
                    .read_byte()
                    .map_err(|e| header_error(e, "comments"))?;

                if byte == b'\n' {
                    break;
                }
            }
        }
    }

    /// Scan two whitespace separated decimal integers followed by a
    /// newline and validate them as image dimensions.
    fn read_dimensions(&mut self) -> Result<(), PpmDecodeErrors> {
        let width = self
            .get_integer("dimensions")?
            .ok_or(PpmDecodeErrors::BadDimensions("expected a decimal width"))?;

        self.skip_blanks()?;

        let height = self
            .get_integer("dimensions")?
            .ok_or(PpmDecodeErrors::BadDimensions("expected a decimal height"))?;

        self.skip_blanks()?;

        let terminator = self
            .stream
            .read_byte()
            .map_err(|e| header_error(e, "dimensions"))?;

        if terminator != b'\n' {
            return Err(PpmDecodeErrors::BadDimensions(
                "width and height must be terminated by a newline"
            ));
        }

        // the scan accepts a sign, so reject what it let through
        if width < 0 {
            return Err(PpmDecodeErrors::NegativeDimension(width));
        }
        if height < 0 {
            return Err(PpmDecodeErrors::NegativeDimension(height));
        }

        let width = usize::try_from(width)
            .map_err(|_| PpmDecodeErrors::BadDimensions("width out of range"))?;
        let height = usize::try_from(height)
            .map_err(|_| PpmDecodeErrors::BadDimensions("height out of range"))?;

        if width > self.options.get_max_width() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PpmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                height
            ));
        }

        self.width = width;
        self.height = height;

        info!("Width: {}, height: {}", self.width, self.height);

        Ok(())
    }

    /// Scan the maximum channel value line and reject any depth other
    /// than single-byte channels.
    fn read_max_val(&mut self) -> Result<(), PpmDecodeErrors> {
        let max_val = self.get_integer("maxval")?.ok_or(PpmDecodeErrors::BadMaxVal(
            "expected a decimal maximum channel value"
        ))?;

        self.skip_blanks()?;

        let terminator = self
            .stream
            .read_byte()
            .map_err(|e| header_error(e, "maxval"))?;

        if terminator != b'\n' {
            return Err(PpmDecodeErrors::BadMaxVal(
                "maximum channel value must be terminated by a newline"
            ));
        }

        if max_val != SUPPORTED_MAX_VAL {
            return Err(PpmDecodeErrors::UnsupportedMaxVal(max_val));
        }
        self.depth = BitDepth::Eight;
        info!("Bit depth: {:?}", self.depth);

        Ok(())
    }

    /// Scan one optionally signed decimal integer, leaving the first
    /// non-digit byte in the stream.
    ///
    /// Returns `Ok(None)` when no digits could be scanned or the value
    /// does not fit in an `i64`.
    fn get_integer(&mut self, stage: &'static str) -> Result<Option<i64>, PpmDecodeErrors> {
        let mut value = 0_i64;
        let mut sign = 1_i64;
        let mut seen_digit = false;

        let first = self
            .stream
            .peek_byte()
            .map_err(|e| header_error(e, stage))?;

        if first == b'-' {
            self.stream
                .read_byte()
                .map_err(|e| header_error(e, stage))?;
            sign = -1;
        }

        loop {
            let byte = match self.stream.peek_byte() {
                Ok(byte) => byte,
                // the terminator check after us reports end of input
                Err(PxlIoError::EndOfStream { .. }) => break,
                Err(other) => return Err(PpmDecodeErrors::IoError(other))
            };

            if !byte.is_ascii_digit() {
                break;
            }
            self.stream
                .read_byte()
                .map_err(|e| header_error(e, stage))?;

            value = match value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(byte - b'0')))
            {
                Some(v) => v,
                None => return Ok(None)
            };
            seen_digit = true;
        }

        if !seen_digit {
            return Ok(None);
        }
        Ok(Some(sign * value))
    }

    /// Consume a run of spaces and tabs, which may be empty.
    fn skip_blanks(&mut self) -> Result<(), PpmDecodeErrors> {
        loop {
            match self.stream.peek_byte() {
                Ok(b' ' | b'\t') => {
                    self.stream
                        .read_byte()
                        .map_err(PpmDecodeErrors::IoError)?;
                }
                Ok(_) => return Ok(()),
                // let whoever reads next report the end of input
                Err(PxlIoError::EndOfStream { .. }) => return Ok(()),
                Err(other) => return Err(PpmDecodeErrors::IoError(other))
            }
        }
    }

    /// Return the image dimensions or `None` if the headers have not
    /// been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Return the colorspace of the encoded pixel data or `None` if the
    /// headers have not been decoded.
    ///
    /// This is always [`ColorSpace::RGB`] for a valid stream; the decoded
    /// output is expanded to [`ColorSpace::RGBA`], see
    /// [`output_colorspace`](Self::output_colorspace).
    pub const fn colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            return Some(self.colorspace);
        }
        None
    }

    /// Colorspace of the buffer [`decode`](Self::decode) produces.
    ///
    /// This is always RGBA
    pub const fn output_colorspace(&self) -> ColorSpace {
        ColorSpace::RGBA
    }

    /// Return the image bit depth or `None` if the headers have not
    /// been decoded
    pub const fn bit_depth(&self) -> Option<BitDepth> {
        if self.decoded_headers {
            return Some(self.depth);
        }
        None
    }
}

/// Map a stream error inside the header to the decoder taxonomy.
///
/// End of stream while still inside the header means the caller may simply
/// not have received the whole file yet, which is reported differently
/// from content that can never be valid.
fn header_error(error: PxlIoError, stage: &'static str) -> PpmDecodeErrors {
    match error {
        PxlIoError::EndOfStream { .. } => PpmDecodeErrors::UnexpectedEndOfInput(stage),
        other => PpmDecodeErrors::IoError(other)
    }
}
