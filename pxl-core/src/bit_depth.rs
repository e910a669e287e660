/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth information

/// The number of bits needed to represent one image channel value
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Channels are stored in a [`u8`] and use the whole 0-255 range.
    Eight,
    /// Sixteen bit depth.
    ///
    /// Channels are stored in a [`u16`] and use the whole 0-65535 range.
    Sixteen,
    /// Bit depth information is unknown
    Unknown
}

impl BitDepth {
    /// Size in bytes of the smallest rust type that can
    /// store a single channel of this depth
    pub const fn size_of(&self) -> usize {
        match self {
            Self::Eight | Self::Unknown => 1,
            Self::Sixteen => 2
        }
    }

    /// The highest channel value this depth can represent
    pub const fn max_value(&self) -> u16 {
        match self {
            Self::Eight | Self::Unknown => u8::MAX as u16,
            Self::Sixteen => u16::MAX
        }
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self::Unknown
    }
}
