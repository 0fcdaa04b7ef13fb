//! Metrics for conversion runs.
//!
//! Counts what went in and what came out of the encoder and decoder, so a
//! run can report how many groups were produced, how many overflowed their
//! padding, and how many decoded to NaN.
//!
//! # Thread Safety
//!
//! `ConversionMetrics` is a plain struct updated by `&mut self`. For
//! multi-threaded use keep one per thread and [`merge`](ConversionMetrics::merge)
//! them at the end.

use std::time::{Duration, Instant};

use crate::decoder::Group;
use crate::encoder::natural_width;

/// Counters for one or more conversions.
#[derive(Debug, Clone)]
pub struct ConversionMetrics {
    // === Timing ===
    /// When the run started
    pub start_time: Instant,

    /// When the run ended (set on completion)
    pub end_time: Option<Instant>,

    // === Encoding ===
    /// Values handed to the encoder
    pub values_encoded: u64,

    /// Characters of binary text produced
    pub chars_produced: u64,

    /// Values whose natural width exceeded the padding
    pub wide_groups: u64,

    // === Decoding ===
    /// Characters of binary text consumed
    pub chars_consumed: u64,

    /// Groups parsed by the decoder
    pub groups_decoded: u64,

    /// Groups that held no binary digits
    pub nan_groups: u64,
}

impl ConversionMetrics {
    /// Create new metrics with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            values_encoded: 0,
            chars_produced: 0,
            wide_groups: 0,
            chars_consumed: 0,
            groups_decoded: 0,
            nan_groups: 0,
        }
    }

    /// Record one encoder call.
    pub fn record_encode(&mut self, values: &[i64], padding: usize, output: &str) {
        self.values_encoded += values.len() as u64;
        self.chars_produced += output.chars().count() as u64;
        self.wide_groups += values
            .iter()
            .filter(|&&v| v >= 0 && natural_width(v as u64) > padding)
            .count() as u64;
    }

    /// Record one decoder call.
    pub fn record_decode(&mut self, input: &str, groups: &[Group]) {
        self.chars_consumed += input.chars().count() as u64;
        self.groups_decoded += groups.len() as u64;
        self.nan_groups += groups.iter().filter(|g| g.is_nan()).count() as u64;
    }

    /// Mark the run as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Characters of text per encoded value.
    ///
    /// Returns 0.0 if nothing was encoded.
    pub fn expansion_ratio(&self) -> f64 {
        if self.values_encoded == 0 {
            0.0
        } else {
            self.chars_produced as f64 / self.values_encoded as f64
        }
    }

    /// Fraction of decoded groups that were NaN.
    pub fn nan_rate(&self) -> f64 {
        if self.groups_decoded == 0 {
            0.0
        } else {
            self.nan_groups as f64 / self.groups_decoded as f64
        }
    }

    /// Fold another set of counters into this one, keeping the earliest start.
    pub fn merge(&mut self, other: &ConversionMetrics) {
        self.start_time = self.start_time.min(other.start_time);
        self.end_time = match (self.end_time, other.end_time) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        self.values_encoded += other.values_encoded;
        self.chars_produced += other.chars_produced;
        self.wide_groups += other.wide_groups;
        self.chars_consumed += other.chars_consumed;
        self.groups_decoded += other.groups_decoded;
        self.nan_groups += other.nan_groups;
    }

    /// Print a human-readable summary to stderr.
    pub fn print_summary(&self) {
        eprintln!("\n=== Conversion Summary ===");
        eprintln!("Duration: {} ms", self.duration().as_millis());
        eprintln!();

        if self.values_encoded > 0 {
            eprintln!("=== Encoding ===");
            eprintln!("Values: {}", self.values_encoded);
            eprintln!("Characters: {}", self.chars_produced);
            eprintln!("Chars per value: {:.2}", self.expansion_ratio());
            eprintln!("Wider than padding: {}", self.wide_groups);
            eprintln!();
        }

        if self.groups_decoded > 0 || self.chars_consumed > 0 {
            eprintln!("=== Decoding ===");
            eprintln!("Characters: {}", self.chars_consumed);
            eprintln!("Groups: {}", self.groups_decoded);
            eprintln!("NaN groups: {} ({:.2}%)", self.nan_groups, self.nan_rate() * 100.0);
            eprintln!();
        }
    }

    /// Export metrics as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             values_encoded={}\n\
             chars_produced={}\n\
             wide_groups={}\n\
             chars_consumed={}\n\
             groups_decoded={}\n\
             nan_groups={}\n\
             nan_rate={:.4}\n",
            self.duration().as_millis(),
            self.values_encoded,
            self.chars_produced,
            self.wide_groups,
            self.chars_consumed,
            self.groups_decoded,
            self.nan_groups,
            self.nan_rate(),
        )
    }
}

impl Default for ConversionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
