/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pxl_core::bytestream::PxlCursor;
use pxl_core::colorspace::ColorSpace;
use pxl_core::options::DecoderOptions;
use pxl_image::codecs::{ppm, FormatRegistry, ImageFormat};
use pxl_image::errors::ImageErrors;
use pxl_image::image::Image;
use pxl_image::metadata::ImageMetadata;
use pxl_ppm::PpmDecodeErrors;

const ONE_PIXEL: &[u8] = b"P6\n1 1\n255\n\x10\x20\x30";

#[test]
fn probe_bytes_select_the_ppm_decoder() {
    let registry = FormatRegistry::with_default_formats();

    assert_eq!(registry.guess_format(ONE_PIXEL), Some(ImageFormat::Ppm));
    assert_eq!(registry.format_name(ONE_PIXEL), Some("ppm"));
}

#[test]
fn probe_match_is_byte_exact() {
    let registry = FormatRegistry::with_default_formats();

    // a P6 without its newline is some other file
    assert_eq!(registry.guess_format(b"P6 1 1\n"), None);
    assert_eq!(registry.guess_format(b"P5\n1 1\n"), None);
    assert_eq!(registry.guess_format(b""), None);
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = FormatRegistry::new();

    let err = registry.read(ONE_PIXEL, DecoderOptions::default()).unwrap_err();
    assert!(matches!(err, ImageErrors::UnknownFormat));
}

#[test]
fn explicit_registration_enables_decoding() {
    let mut registry = FormatRegistry::new();
    ppm::register(&mut registry);

    let image = registry.read(ONE_PIXEL, DecoderOptions::default()).unwrap();

    assert_eq!(image.dimensions(), (1, 1));
    assert_eq!(image.pixels(), [0x10, 0x20, 0x30, 0xFF]);
}

#[test]
fn read_returns_a_fully_populated_image() {
    let registry = FormatRegistry::with_default_formats();
    let data = b"P6\n2 2\n255\n\x00\x00\x00\x01\x01\x01\x02\x02\x02\x03\x03\x03";

    let image = registry.read(data, DecoderOptions::default()).unwrap();

    assert_eq!(image.dimensions(), (2, 2));
    assert_eq!(image.colorspace(), ColorSpace::RGBA);
    assert_eq!(image.pixels().len(), 2 * 2 * 4);
    assert_eq!(&image.pixels()[4..8], [1, 1, 1, 0xFF]);
}

#[test]
fn read_metadata_skips_pixel_data() {
    let registry = FormatRegistry::with_default_formats();

    // no maxval line and no pixels, the probe must not miss them
    let metadata = registry
        .read_metadata(b"P6\n800 600\n", DecoderOptions::default())
        .unwrap();

    assert_eq!(
        metadata,
        ImageMetadata {
            colorspace: ColorSpace::RGBA,
            width:      800,
            height:     600
        }
    );
}

#[test]
fn decode_failures_surface_through_the_registry() {
    let registry = FormatRegistry::with_default_formats();

    let err = registry
        .read(b"P6\n1 1\n255\n\0", DecoderOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        ImageErrors::PpmDecodeErrors(PpmDecodeErrors::TruncatedPixelData(3, 1))
    ));
}

#[test]
fn registry_options_reach_the_decoder() {
    let registry = FormatRegistry::with_default_formats();
    let options = DecoderOptions::default().set_max_height(4);

    let err = registry.read(b"P6\n1 5\n255\n", options).unwrap_err();

    assert!(matches!(
        err,
        ImageErrors::PpmDecodeErrors(PpmDecodeErrors::LargeDimensions(4, 5))
    ));
}

#[test]
fn decoder_reports_its_name() {
    let decoder = ImageFormat::Ppm.decoder(PxlCursor::new(ONE_PIXEL)).unwrap();

    assert_eq!(decoder.name(), "PPM Decoder");
}

#[test]
fn unknown_format_has_no_decoder() {
    assert!(!ImageFormat::Unknown.has_decoder());

    let err = ImageFormat::Unknown
        .decoder(PxlCursor::new(ONE_PIXEL))
        .unwrap_err();
    assert!(matches!(
        err,
        ImageErrors::NoDecoderForFormat(ImageFormat::Unknown)
    ));
}

#[test]
fn image_buffer_length_is_checked() {
    let err = Image::from_rgba8(vec![0_u8; 3], 1, 1).unwrap_err();

    assert!(matches!(
        err,
        ImageErrors::InvalidBufferSize {
            expected: 4,
            found:    3
        }
    ));
}

#[test]
fn image_round_trips_its_buffer() {
    let image = Image::from_rgba8(vec![7_u8; 8], 2, 1).unwrap();

    assert_eq!(image.dimensions(), (2, 1));
    assert_eq!(image.metadata().width, 2);
    assert_eq!(image.into_pixels(), vec![7_u8; 8]);
}
