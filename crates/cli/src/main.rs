// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use roadmap::Cli;

fn main() {
    let cli = Cli::parse();
    roadmap::init_logging(cli.verbose);
    if let Err(e) = roadmap::run(cli.command) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
