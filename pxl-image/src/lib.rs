/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The host side of the pxl decoders.
//!
//! This crate ties the individual format decoders together: it owns the
//! [`Image`](crate::image::Image) struct the decoders produce, the
//! [`DecoderTrait`](crate::traits::DecoderTrait) they implement, and a
//! [`FormatRegistry`](crate::codecs::FormatRegistry) that selects a decoder
//! by matching magic bytes.
//!
//! Registration is explicit. A hosting application builds its registry
//! once at startup, either with every format this crate ships or by
//! registering formats one by one; nothing registers itself as a side
//! effect of being linked in.
//!
//! # Example
//! ```
//! use pxl_core::options::DecoderOptions;
//! use pxl_image::codecs::FormatRegistry;
//!
//! let registry = FormatRegistry::with_default_formats();
//!
//! let file = b"P6\n1 1\n255\n\x01\x02\x03";
//! let image = registry.read(file, DecoderOptions::default()).unwrap();
//!
//! assert_eq!(image.dimensions(), (1, 1));
//! assert_eq!(image.pixels(), [0x01, 0x02, 0x03, 0xFF]);
//! ```
pub mod codecs;
pub mod errors;
pub mod image;
pub mod metadata;
pub mod traits;
