// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::OnceLock;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the process-wide subscriber. Later calls are no-ops.
///
/// `RUST_LOG` directives take precedence over `level`. Output goes to stderr so
/// stdout carries only array renderings.
pub fn init(level: Level) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        SubscriberBuilder::default()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .init();
    });
    tracing::debug!(%level, "tracing initialised");
}
