// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::process::ExitCode;

use clap::Parser;

use dynarr_cli::{Cli, finish, init_logging, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let mut stdout = std::io::stdout().lock();
    finish(run(&cli, &mut stdout))
}
