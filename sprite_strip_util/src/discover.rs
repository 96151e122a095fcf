// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::Error;
use log::debug;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use std::{fmt, fs};

/// A frame image found by [`discover_frames`], not yet decoded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrameFile {
    /// Full path such as "beryl_frames/frame2.png".
    pub path: PathBuf,
    /// File name such as "frame2.png", lossy if it isn't utf-8.
    pub name: String,
    /// Number formed by every digit in `name`, such as 2.
    pub ordinal: Ordinal,
}

/// An unbounded non-negative integer, kept as its decimal digits without leading zeros.
///
/// Ordering by length and then by digits is the same as ordering by value.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ordinal(String);

impl Ordinal {
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl Ord for Ordinal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Ordinal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Concatenates every ASCII digit in `name`, so "walk_1_10.png" is 110.
pub fn ordinal(name: &str) -> Result<Ordinal, Error> {
    let digits: String = name.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(Error::MissingOrdinal {
            name: name.to_owned(),
        });
    }
    let trimmed = digits.trim_start_matches('0');
    Ok(Ordinal(if trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }))
}

/// Lists the files in `dir` ending in `extension`, ordered by [`ordinal`] (ties by name).
///
/// Symlinks are followed. Every candidate name is checked before returning, so a name without
/// digits fails here rather than after frames have been decoded.
pub fn discover_frames(dir: &Path, extension: &str) -> Result<Vec<FrameFile>, Error> {
    let mut frames = Vec::new();

    for entry in fs::read_dir(dir).map_err(Error::io(dir))? {
        let entry = entry.map_err(Error::io(dir))?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();

        if !name.ends_with(extension) {
            debug!("Ignoring {}.", name);
            continue;
        }

        // A dangling link fails here, just like opening it later would.
        if !fs::metadata(&path).map_err(Error::io(&path))?.is_file() {
            debug!("Ignoring {} (not a file).", name);
            continue;
        }

        frames.push(FrameFile {
            ordinal: ordinal(&name)?,
            name,
            path,
        });
    }

    frames.sort_unstable_by(|a, b| (&a.ordinal, &a.name).cmp(&(&b.ordinal, &b.name)));
    Ok(frames)
}
