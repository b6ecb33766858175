// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::sync::{Arc, Mutex};

use crate::{CliError, finish};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("capture lock poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().expect("capture lock poisoned");
    String::from_utf8(bytes.clone()).expect("utf-8 log output")
}

#[test]
fn test_failure_is_reported_once() {
    let logs = capture(|| {
        let _ = finish(Err(CliError::UnexpectedSuccess { line: 3 }));
    });

    let reports: Vec<&str> = logs.lines().filter(|l| l.contains("run aborted")).collect();
    assert_eq!(reports.len(), 1);
    assert!(reports[0].contains("ERROR"));
    assert!(reports[0].contains("line 3: expected failure but command succeeded"));
}

#[test]
fn test_success_reports_nothing() {
    let logs = capture(|| {
        let _ = finish(Ok(()));
    });

    assert!(logs.is_empty());
}
