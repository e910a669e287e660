/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all `pxl` crates
//!
//! This crate provides the small set of building blocks shared by the
//! decoders in the `pxl` family of crates.
//!
//! It currently contains
//!
//! - Forward-only byte sources with single byte lookahead
//! - Colorspace and bit depth information shared by images
//! - Image decoder options
//!
//! The crate is `no_std` by default, the `std` feature adds byte source
//! implementations for types in `std::io`.
//!
//! # Features
//! - `std`: byte source implementations for [`std::io::Cursor`] and
//!   [`std::io::BufReader`]
//! - `serde`: serialization for some of the data structures present
//!   in the crate
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bit_depth;
pub mod bytestream;
pub mod colorspace;
pub mod options;
pub mod serde;
