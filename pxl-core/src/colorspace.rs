/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image colorspace information and utilities

/// All colorspaces the pxl crates understand
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, green, blue
    RGB,
    /// Red, green, blue, alpha
    RGBA,
    /// Grayscale
    Luma,
    /// The colorspace is unknown
    Unknown
}

impl ColorSpace {
    /// Number of color components a pixel of this colorspace occupies
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4,
            Self::Luma => 1,
            Self::Unknown => 0
        }
    }

    /// Returns true if the colorspace has an alpha component
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA)
    }
}
