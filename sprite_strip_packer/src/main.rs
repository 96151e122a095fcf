// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

mod log;
mod options;

use crate::log::init_logger;
use crate::options::Options;
use sprite_strip_util::pack_strip;
use structopt::StructOpt;

fn main() {
    let options = Options::from_args();
    init_logger(&options);

    if let Err(e) = pack_strip(&options.pack_params()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
