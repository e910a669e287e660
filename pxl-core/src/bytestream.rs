/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Forward-only byte sources
//!
//! This module defines [`PxlByteReaderTrait`], the input abstraction used by
//! every decoder in the `pxl` family, together with [`PxlCursor`], an owned
//! in-memory implementation that works without `std`.
//!
//! Sources are consumed strictly forward. The only lookahead a decoder may
//! rely on is a single byte via [`peek_byte`](PxlByteReaderTrait::peek_byte),
//! which keeps the trait implementable on top of plain buffered streams such
//! as sockets and pipes, with no `Seek` requirement anywhere.
pub use reader::{PxlCursor, PxlIoError};
pub use traits::PxlByteReaderTrait;

mod reader;
mod std_readers;
mod traits;
