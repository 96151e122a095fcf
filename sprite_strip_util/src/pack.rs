// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::discover::discover_frames;
use crate::normalize::{load_frame, normalize};
use crate::sheet::Sheet;
use crate::write::write_sheet;
use crate::{Error, FOLDER_NAME, FRAME_EXTENSION, FRAME_HEIGHT, FRAME_WIDTH, OUTPUT_NAME};
use glam::{uvec2, UVec2};
use log::info;
use std::path::PathBuf;

/// Parameters of [`pack_strip`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackParams {
    /// Directory holding the numbered frames such as "beryl_frames".
    pub input: PathBuf,
    /// Sheet to write such as "beryl_sheet.png". Replaced if it exists.
    pub output: PathBuf,
    /// Every frame is stretched to this size.
    pub frame_size: UVec2,
    /// Only files ending in this are frames such as ".png".
    pub extension: String,
    /// Run the encoded png through oxipng.
    pub optimize: bool,
}

impl Default for PackParams {
    fn default() -> Self {
        Self {
            input: PathBuf::from(FOLDER_NAME),
            output: PathBuf::from(OUTPUT_NAME),
            frame_size: uvec2(FRAME_WIDTH, FRAME_HEIGHT),
            extension: FRAME_EXTENSION.to_owned(),
            optimize: false,
        }
    }
}

impl PackParams {
    fn validate(&self) -> Result<(), Error> {
        if self.frame_size.x == 0 || self.frame_size.y == 0 {
            return Err(Error::InvalidFrameSize {
                size: self.frame_size,
            });
        }
        if self.extension.is_empty() {
            return Err(Error::InvalidExtension);
        }
        Ok(())
    }
}

/// Summary of a sheet written by [`pack_strip`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PackReport {
    pub output: PathBuf,
    pub frames: u32,
    pub dimensions: UVec2,
}

/// Packs every frame in `params.input` into one row, in ordinal order, and writes the sheet to
/// `params.output`.
///
/// Returns `Ok(None)` without writing anything if there are no frames. Any other problem aborts
/// before the output is touched, except for a failed write itself.
pub fn pack_strip(params: &PackParams) -> Result<Option<PackReport>, Error> {
    params.validate()?;

    let files = discover_frames(&params.input, &params.extension)?;
    if files.is_empty() {
        info!(
            "No {} frames found in {}!",
            params.extension,
            params.input.display()
        );
        return Ok(None);
    }

    info!("Found {} frames. Packing...", files.len());

    let mut sheet = Sheet::new(params.frame_size, files.len())?;

    for (index, file) in (0u32..).zip(&files) {
        let frame = normalize(&load_frame(&file.path)?, params.frame_size);
        let x = sheet.paste(index, &frame);
        info!("Packed {} at x={}", file.name, x);
    }

    let frames = sheet.frames();
    let dimensions = sheet.dimensions();
    write_sheet(sheet.image(), &params.output, params.optimize)?;

    info!("Done! Saved to {}", params.output.display());

    Ok(Some(PackReport {
        output: params.output.clone(),
        frames,
        dimensions,
    }))
}
