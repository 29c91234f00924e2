//! Progress reporting on stderr

use linkrank_core::ProgressSink;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicU64, Ordering};

/// Percentage progress line for estimator runs.
///
/// Only draws when stderr is a terminal; the counters are atomic because
/// parallel walks report from several threads.
pub struct ProgressReporter {
    label: String,
    total: AtomicU64,
    processed: AtomicU64,
    shown_pct: AtomicU64,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            total: AtomicU64::new(0),
            processed: AtomicU64::new(0),
            shown_pct: AtomicU64::new(0),
            enabled: io::stderr().is_terminal(),
        }
    }

    fn render(&self, pct: u64) {
        eprint!("\r{:<40} {:>3}%", self.label, pct);
        io::stderr().flush().ok();
    }
}

impl ProgressSink for ProgressReporter {
    fn start(&self, total: u64) {
        self.total.store(total, Ordering::Relaxed);
        if self.enabled {
            self.render(0);
        }
    }

    fn inc(&self, delta: u64) {
        let done = self.processed.fetch_add(delta, Ordering::Relaxed) + delta;
        if !self.enabled {
            return;
        }
        let total = self.total.load(Ordering::Relaxed).max(1);
        let pct = (done * 100 / total).min(100);
        if pct > self.shown_pct.fetch_max(pct, Ordering::Relaxed) {
            self.render(pct);
        }
    }

    fn finish(&self) {
        if self.enabled {
            eprintln!(
                "\r{:<40} done ({}/{})",
                self.label,
                self.processed.load(Ordering::Relaxed),
                self.total.load(Ordering::Relaxed)
            );
        }
    }
}
