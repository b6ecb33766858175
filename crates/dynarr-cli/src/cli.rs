// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use clap::Parser;
use tracing::Level;

/// Exercise a capacity-doubling dynamic array of strings.
#[derive(Debug, Parser)]
#[command(name = "dynarr", version, about)]
pub struct Cli {
    /// Initial capacity of the array (must be at least 1).
    #[arg(long, default_value_t = 1)]
    pub capacity: usize,

    /// Command script to run instead of the built-in demonstration ('-' for stdin).
    #[arg(long, value_name = "PATH")]
    pub script: Option<String>,

    /// Default log level when RUST_LOG is unset.
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}
