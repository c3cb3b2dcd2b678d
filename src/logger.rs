// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Progress reporting, injected rather than global.
//!
//! The drivers take a [`Reporter`] so library embedders decide where (and
//! whether) progress goes. The binary uses [`StderrReporter`], which prints
//! elapsed seconds and running compression stats; tests use
//! [`NullReporter`].

use std::time::Instant;

/// Sink for driver progress and status lines.
pub trait Reporter {
    /// One free-form status line.
    fn info(&self, msg: &str);

    /// Periodic counters: lists processed, integers coded, stream bytes
    /// produced so far.
    fn progress(&self, lists: u64, ints: u64, bytes: u64);
}

/// Human-readable reporting on stderr, stamped with elapsed seconds.
pub struct StderrReporter {
    started: Instant,
}

impl StderrReporter {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for StderrReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for StderrReporter {
    fn info(&self, msg: &str) {
        eprintln!("[{:>6.1}s] {}", self.started.elapsed().as_secs_f64(), msg);
    }

    fn progress(&self, lists: u64, ints: u64, bytes: u64) {
        let bits_per_int = if ints == 0 {
            0.0
        } else {
            (bytes * 8) as f64 / ints as f64
        };
        self.info(&format!(
            "{} lists, {} ints, {:.2} bits/int",
            lists, ints, bits_per_int
        ));
    }
}

/// Discards everything. For tests and quiet embedders.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _msg: &str) {}
    fn progress(&self, _lists: u64, _ints: u64, _bytes: u64) {}
}
