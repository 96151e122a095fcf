// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Packs a folder of numbered frames into a single row sprite sheet with a transparent
//! background.

pub mod discover;
mod error;
pub mod normalize;
pub mod pack;
pub mod sheet;
pub mod write;

pub use discover::{discover_frames, ordinal, FrameFile, Ordinal};
pub use error::Error;
pub use pack::{pack_strip, PackParams, PackReport};
pub use sheet::Sheet;

/// Width every frame is stretched to.
pub const FRAME_WIDTH: u32 = 64;
/// Height every frame is stretched to.
pub const FRAME_HEIGHT: u32 = 64;
/// Where the sheet is written, relative to the working directory.
pub const OUTPUT_NAME: &str = "beryl_sheet.png";
/// Where the frames are read from, relative to the working directory.
pub const FOLDER_NAME: &str = "beryl_frames";
/// Only files whose names end in this are frames.
pub const FRAME_EXTENSION: &str = ".png";
