// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::Error;
use glam::{uvec2, UVec2};
use image::imageops::replace;
use image::RgbaImage;

/// A single row of equally sized frame slots on a transparent canvas.
pub struct Sheet {
    image: RgbaImage,
    frame_size: UVec2,
    frames: u32,
}

impl Sheet {
    /// Allocates a fully transparent canvas of `frame_size.x * frames` by `frame_size.y`.
    pub fn new(frame_size: UVec2, frames: usize) -> Result<Self, Error> {
        if frame_size.x == 0 || frame_size.y == 0 {
            return Err(Error::InvalidFrameSize { size: frame_size });
        }

        let too_large = || Error::SheetTooLarge {
            frame_width: frame_size.x,
            frames,
        };
        let frames = u32::try_from(frames).map_err(|_| too_large())?;
        let width = frame_size.x.checked_mul(frames).ok_or_else(too_large)?;

        Ok(Self {
            // Zeroed pixels are transparent black.
            image: RgbaImage::new(width, frame_size.y),
            frame_size,
            frames,
        })
    }

    /// Horizontal offset of slot `index`.
    pub fn slot_offset(&self, index: u32) -> u32 {
        index * self.frame_size.x
    }

    /// Copies `frame` (alpha included, no blending) into slot `index` and returns its x offset.
    pub fn paste(&mut self, index: u32, frame: &RgbaImage) -> u32 {
        assert!(
            index < self.frames,
            "slot {} out of {} frames",
            index,
            self.frames
        );
        assert_eq!(
            frame.dimensions(),
            (self.frame_size.x, self.frame_size.y),
            "frame not normalized"
        );

        let x = self.slot_offset(index);
        replace(&mut self.image, frame, x, 0);
        x
    }

    /// Dimensions of the whole canvas.
    pub fn dimensions(&self) -> UVec2 {
        uvec2(self.image.width(), self.image.height())
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use crate::sheet::Sheet;
    use crate::Error;
    use glam::uvec2;
    use image::{Rgba, RgbaImage};

    #[test]
    fn dimensions() {
        let sheet = Sheet::new(uvec2(64, 64), 13).unwrap();
        assert_eq!(sheet.dimensions(), uvec2(832, 64));
        assert_eq!(sheet.frames(), 13);
        assert!(sheet.image().pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn invalid() {
        assert!(matches!(
            Sheet::new(uvec2(0, 64), 3),
            Err(Error::InvalidFrameSize { .. })
        ));
        assert!(matches!(
            Sheet::new(uvec2(64, 0), 3),
            Err(Error::InvalidFrameSize { .. })
        ));
        assert!(matches!(
            Sheet::new(uvec2(u32::MAX / 2, 1), 3),
            Err(Error::SheetTooLarge { frames: 3, .. })
        ));
    }

    #[test]
    fn slots_are_disjoint_and_contiguous() {
        let size = uvec2(4, 3);
        let count = 5u32;
        let mut sheet = Sheet::new(size, count as usize).unwrap();

        for i in 0..count {
            let frame = RgbaImage::from_pixel(size.x, size.y, Rgba([i as u8 + 1, 0, 0, 255]));
            assert_eq!(sheet.paste(i, &frame), i * size.x);
        }

        // Every pixel belongs to exactly the slot its x falls in.
        let image = sheet.into_image();
        for (x, _, pixel) in image.enumerate_pixels() {
            assert_eq!(pixel.0[0], (x / size.x) as u8 + 1);
        }
    }

    #[test]
    fn keeps_source_alpha() {
        let mut sheet = Sheet::new(uvec2(2, 2), 2).unwrap();
        let translucent = Rgba([200, 100, 50, 77]);
        sheet.paste(1, &RgbaImage::from_pixel(2, 2, translucent));

        let image = sheet.into_image();
        assert_eq!(*image.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
        assert_eq!(*image.get_pixel(3, 1), translucent);
    }

    #[test]
    #[should_panic(expected = "frame not normalized")]
    fn rejects_unnormalized() {
        let mut sheet = Sheet::new(uvec2(2, 2), 1).unwrap();
        sheet.paste(0, &RgbaImage::new(3, 2));
    }
}
