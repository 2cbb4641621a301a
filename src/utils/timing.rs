//! Stopwatch and date stamps
//!
//! Each [`Stopwatch`] owns its start instant, so concurrent measurements
//! never clobber each other.

use std::fmt::Display;
use std::time::{Duration, Instant};

use chrono::{DateTime, TimeZone};
use tracing::debug;

/// Measures time elapsed since it was started
#[derive(Debug, Clone)]
pub struct Stopwatch {
    label: String,
    started: Instant,
}

impl Stopwatch {
    /// Start timing now
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
        }
    }

    /// Label used in log records
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Reset the start instant to now
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    /// Elapsed wall time
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }

    /// Rate implied by the elapsed time, treating it as one frame
    pub fn fps(&self) -> f32 {
        fps_from_secs(self.elapsed().as_secs_f32())
    }

    /// Log and return the elapsed milliseconds
    pub fn log_elapsed(&self) -> f32 {
        let ms = self.elapsed_ms();
        debug!(label = %self.label, elapsed_ms = ms, "period");
        ms
    }

    /// Log and return the frame rate
    pub fn log_fps(&self) -> f32 {
        let fps = self.fps();
        debug!(label = %self.label, fps, "rate");
        fps
    }
}

fn fps_from_secs(secs: f32) -> f32 {
    if secs > 0.0 { 1.0 / secs } else { f32::INFINITY }
}

/// `YYYYMMDD`
pub fn date_stamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%Y%m%d").to_string()
}

/// `YYYYMMDD{sep}HHMM`
pub fn time_stamp<Tz: TimeZone>(at: &DateTime<Tz>, sep: char) -> String
where
    Tz::Offset: Display,
{
    format!("{}{}{}", date_stamp(at), sep, at.format("%H%M"))
}
