//! Helpers around the tiler
//!
//! This module provides:
//! - Rectangle geometry (parsing, centring, margins)
//! - Fast trigonometry and polar unwrap tables
//! - 1-D signal filters and line fitting
//! - Stopwatch and date stamps
//! - Conversion to and from `image` buffers

pub mod convert;
pub mod geometry;
pub mod polar;
pub mod signal;
pub mod timing;
pub mod trig;
