// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use glam::uvec2;
use log::LevelFilter;
use sprite_strip_util::PackParams;
use std::path::PathBuf;
use structopt::StructOpt;

/// Packer options, to be specified as arguments. The defaults pack "beryl_frames" into
/// "beryl_sheet.png".
#[derive(Debug, StructOpt)]
pub struct Options {
    /// Directory of numbered frames.
    #[structopt(long, default_value = "beryl_frames", parse(from_os_str))]
    pub input: PathBuf,
    /// Sheet to write (replaced if it exists).
    #[structopt(long, default_value = "beryl_sheet.png", parse(from_os_str))]
    pub output: PathBuf,
    /// Width of one frame in the sheet.
    #[structopt(long, default_value = "64")]
    pub frame_width: u32,
    /// Height of one frame in the sheet.
    #[structopt(long, default_value = "64")]
    pub frame_height: u32,
    /// Only files ending in this are frames.
    #[structopt(long, default_value = ".png")]
    pub extension: String,
    /// Losslessly shrink the sheet with oxipng.
    #[structopt(long)]
    pub optimize: bool,
    /// Log packer progress
    #[structopt(long, default_value = "info")]
    pub debug_packer: LevelFilter,
}

impl Options {
    pub(crate) fn pack_params(&self) -> PackParams {
        PackParams {
            input: self.input.clone(),
            output: self.output.clone(),
            frame_size: uvec2(self.frame_width, self.frame_height),
            extension: self.extension.clone(),
            optimize: self.optimize,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::options::Options;
    use glam::uvec2;
    use log::LevelFilter;
    use sprite_strip_util::PackParams;
    use structopt::StructOpt;

    #[test]
    fn defaults_match_constants() {
        let options = Options::from_iter(["sprite_strip_packer"]);
        assert_eq!(options.pack_params(), PackParams::default());
        assert_eq!(options.debug_packer, LevelFilter::Info);
    }

    #[test]
    fn overrides() {
        let options = Options::from_iter([
            "sprite_strip_packer",
            "--input",
            "walk",
            "--output",
            "walk.png",
            "--frame-width",
            "32",
            "--frame-height",
            "48",
            "--optimize",
            "--debug-packer",
            "warn",
        ]);
        let params = options.pack_params();
        assert_eq!(params.input.to_str(), Some("walk"));
        assert_eq!(params.output.to_str(), Some("walk.png"));
        assert_eq!(params.frame_size, uvec2(32, 48));
        assert!(params.optimize);
        assert_eq!(options.debug_packer, LevelFilter::Warn);
    }
}
