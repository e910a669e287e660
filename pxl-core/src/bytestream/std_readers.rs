/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "std")]

use std::io::{BufRead, BufReader, Cursor, Read};

use crate::bytestream::reader::PxlIoError;
use crate::bytestream::PxlByteReaderTrait;

fn map_io_error(error: std::io::Error, requested: usize) -> PxlIoError {
    if error.kind() == std::io::ErrorKind::UnexpectedEof {
        PxlIoError::EndOfStream { requested, read: 0 }
    } else {
        PxlIoError::StdIoError(error)
    }
}

impl<T> PxlByteReaderTrait for Cursor<T>
where
    T: AsRef<[u8]>
{
    #[inline(always)]
    fn read_byte(&mut self) -> Result<u8, PxlIoError> {
        let byte = self.peek_byte()?;
        self.set_position(self.position() + 1);
        Ok(byte)
    }

    #[inline(always)]
    fn peek_byte(&mut self) -> Result<u8, PxlIoError> {
        let position = usize::try_from(self.position()).map_err(|_| PxlIoError::EndOfStream {
            requested: 1,
            read:      0
        })?;

        match self.get_ref().as_ref().get(position) {
            Some(byte) => Ok(*byte),
            None => Err(PxlIoError::EndOfStream {
                requested: 1,
                read:      0
            })
        }
    }

    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), PxlIoError> {
        let requested = buf.len();
        let position = self.position() as usize;
        let available = self.get_ref().as_ref().len().saturating_sub(position);

        if available < requested {
            return Err(PxlIoError::EndOfStream {
                requested,
                read: available
            });
        }
        self.read_exact(buf).map_err(|e| map_io_error(e, requested))
    }
}

/// Byte source implementation for plain buffered streams.
///
/// The one byte of lookahead the decoders need comes from the reader's
/// internal buffer, so the wrapped stream only has to implement [`Read`];
/// sockets, pipes and files all qualify without any `Seek` support.
impl<R: Read> PxlByteReaderTrait for BufReader<R> {
    fn read_byte(&mut self) -> Result<u8, PxlIoError> {
        let mut buf = [0_u8; 1];
        self.read_exact(&mut buf).map_err(|e| map_io_error(e, 1))?;
        Ok(buf[0])
    }

    fn peek_byte(&mut self) -> Result<u8, PxlIoError> {
        let buffered = self.fill_buf().map_err(|e| map_io_error(e, 1))?;

        match buffered.first() {
            Some(byte) => Ok(*byte),
            None => Err(PxlIoError::EndOfStream {
                requested: 1,
                read:      0
            })
        }
    }

    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), PxlIoError> {
        self.read_exact(buf).map_err(|e| map_io_error(e, buf.len()))
    }
}
