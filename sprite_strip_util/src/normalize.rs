// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::Error;
use glam::UVec2;
use image::imageops::{resize, FilterType};
use image::io::Reader;
use image::RgbaImage;
use log::debug;
use std::path::Path;

/// Decodes the image at `path` as RGBA. The file is closed before returning.
pub fn load_frame(path: &Path) -> Result<RgbaImage, Error> {
    let image = Reader::open(path)
        .map_err(Error::io(path))?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_owned(),
            source,
        })?;
    Ok(image.into_rgba8())
}

/// Stretches `image` to exactly `size` with nearest neighbor sampling, so pixel art stays sharp.
pub fn normalize(image: &RgbaImage, size: UVec2) -> RgbaImage {
    let (width, height) = image.dimensions();
    if (width, height) == (size.x, size.y) {
        return image.clone();
    }

    if size.x > width || size.y > height {
        debug!(
            "Upscaling from {}x{} to {}x{}",
            width, height, size.x, size.y
        );
    }

    resize(image, size.x, size.y, FilterType::Nearest)
}
