// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::options::Options;

pub(crate) fn init_logger(options: &Options) {
    let mut logger = env_logger::builder();
    logger.format_timestamp(None);
    logger.filter_module("sprite_strip_packer", options.debug_packer);
    logger.filter_module("sprite_strip_util", options.debug_packer);
    logger.init();
}
