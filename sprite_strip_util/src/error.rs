// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use glam::UVec2;
use image::ImageError;
use oxipng::PngError;
use std::path::PathBuf;
use std::{error, fmt, io};

/// Everything that can abort [`pack_strip`][`crate::pack_strip`]. Finding no frames is not an
/// error.
#[derive(Debug)]
pub enum Error {
    /// Reading the input directory or a frame, or writing the output, failed.
    Io { path: PathBuf, source: io::Error },
    /// A frame file has no digits to order it by.
    MissingOrdinal { name: String },
    /// A frame could not be decoded as an image.
    Decode { path: PathBuf, source: ImageError },
    /// The finished sheet could not be encoded.
    Encode { source: ImageError },
    /// Lossless png optimization failed.
    Optimize { source: PngError },
    /// Frames must be at least 1x1.
    InvalidFrameSize { size: UVec2 },
    /// Frame extension must not be empty.
    InvalidExtension,
    /// `frames * frame width` doesn't fit in a `u32`.
    SheetTooLarge { frame_width: u32, frames: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::MissingOrdinal { name } => {
                write!(f, "frame {:?} has no digits to order it by", name)
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode {}: {}", path.display(), source)
            }
            Self::Encode { source } => write!(f, "failed to encode png: {}", source),
            Self::Optimize { source } => write!(f, "failed to optimize png: {}", source),
            Self::InvalidFrameSize { size } => {
                write!(f, "invalid frame size {}x{}", size.x, size.y)
            }
            Self::InvalidExtension => write!(f, "frame extension must not be empty"),
            Self::SheetTooLarge {
                frame_width,
                frames,
            } => write!(
                f,
                "{} frames of width {} don't fit in one sheet",
                frames, frame_width
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } | Self::Encode { source } => Some(source),
            Self::Optimize { source } => Some(source),
            _ => None,
        }
    }
}
