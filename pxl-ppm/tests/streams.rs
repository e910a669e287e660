/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding from `std::io` sources instead of in-memory cursors

use std::io::{BufReader, Cursor};

use pxl_core::bytestream::PxlCursor;
use pxl_ppm::{PpmDecodeErrors, PpmDecoder};

const TWO_BY_TWO: &[u8] = b"P6\n2 2\n255\n\x00\x00\x00\x01\x01\x01\x02\x02\x02\x03\x03\x03";

#[test]
fn buffered_stream_decodes() {
    let stream = BufReader::new(Cursor::new(TWO_BY_TWO.to_vec()));
    let mut decoder = PpmDecoder::new(stream);

    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((2, 2)));
    assert_eq!(pixels.len(), 2 * 2 * 4);
}

#[test]
fn tiny_buffer_capacity_still_decodes() {
    // single byte lookahead must survive a pathologically small buffer
    let stream = BufReader::with_capacity(1, Cursor::new(TWO_BY_TWO.to_vec()));
    let mut decoder = PpmDecoder::new(stream);

    let pixels = decoder.decode().unwrap();
    assert_eq!(pixels.len(), 16);
}

#[test]
fn std_cursor_decodes() {
    let mut decoder = PpmDecoder::new(Cursor::new(TWO_BY_TWO));

    let pixels = decoder.decode().unwrap();
    assert_eq!(&pixels[..4], [0, 0, 0, 0xFF]);
}

#[test]
fn sources_agree_on_output() {
    let from_cursor = PpmDecoder::new(PxlCursor::new(TWO_BY_TWO)).decode().unwrap();
    let from_stream = PpmDecoder::new(BufReader::new(Cursor::new(TWO_BY_TWO.to_vec())))
        .decode()
        .unwrap();

    assert_eq!(from_cursor, from_stream);
}

#[test]
fn buffered_stream_reports_truncation() {
    let stream = BufReader::new(Cursor::new(b"P6\n1 1\n255\n\0\0".to_vec()));
    let mut decoder = PpmDecoder::new(stream);

    let err = decoder.decode().unwrap_err();
    assert!(matches!(err, PpmDecodeErrors::TruncatedPixelData(3, _)));
}

#[test]
fn buffered_stream_reports_header_eof() {
    let stream = BufReader::new(Cursor::new(b"P6".to_vec()));
    let mut decoder = PpmDecoder::new(stream);

    let err = decoder.decode().unwrap_err();
    assert!(matches!(err, PpmDecodeErrors::UnexpectedEndOfInput("magic")));
}
