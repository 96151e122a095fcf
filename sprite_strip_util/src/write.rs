// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::Error;
use image::{codecs::png, ColorType, ImageEncoder, RgbaImage};
use log::debug;
use oxipng::{optimize_from_memory, Headers, Options};
use std::fs;
use std::path::Path;

/// Encodes `image` as an RGBA png, optionally shrinking it losslessly.
pub fn encode_png(image: &RgbaImage, optimize: bool) -> Result<Vec<u8>, Error> {
    let mut unoptimized = Vec::new();
    png::PngEncoder::new(&mut unoptimized)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ColorType::Rgba8,
        )
        .map_err(|source| Error::Encode { source })?;

    if !optimize {
        return Ok(unoptimized);
    }

    let optimized = optimize_from_memory(
        &unoptimized,
        &Options {
            bit_depth_reduction: true,
            color_type_reduction: true,
            palette_reduction: true,
            grayscale_reduction: true,
            strip: Headers::Safe,
            ..Options::default()
        },
    )
    .map_err(|source| Error::Optimize { source })?;

    debug!(
        "Optimized png from {} to {} bytes",
        unoptimized.len(),
        optimized.len()
    );
    Ok(optimized)
}

/// Writes `image` to `path` as a png, replacing whatever is there. Encoding happens before the
/// file is touched.
pub fn write_sheet(image: &RgbaImage, path: &Path, optimize: bool) -> Result<(), Error> {
    let encoded = encode_png(image, optimize)?;
    fs::write(path, encoded).map_err(Error::io(path))
}

#[cfg(test)]
mod tests {
    use crate::test_util::scratch_dir;
    use crate::write::{encode_png, write_sheet};
    use crate::Error;
    use image::{Rgba, RgbaImage};

    fn checkerboard() -> RgbaImage {
        RgbaImage::from_fn(16, 8, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 255, 255, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn optimized_decodes_identically() {
        let image = checkerboard();
        for optimize in [false, true] {
            let encoded = encode_png(&image, optimize).unwrap();
            let decoded = image::load_from_memory(&encoded).unwrap().into_rgba8();
            assert_eq!(decoded, image, "optimize={}", optimize);
        }
    }

    #[test]
    fn overwrites() {
        let dir = scratch_dir("write_overwrites");
        let path = dir.join("sheet.png");
        std::fs::write(&path, b"stale").unwrap();

        write_sheet(&checkerboard(), &path, false).unwrap();
        let decoded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (16, 8));
    }

    #[test]
    fn write_failure() {
        let dir = scratch_dir("write_failure");
        let path = dir.join("missing").join("sheet.png");
        assert!(matches!(
            write_sheet(&checkerboard(), &path, false),
            Err(Error::Io { path: p, .. }) if p == path
        ));
    }
}
