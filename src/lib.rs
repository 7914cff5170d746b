//! # crestline
//!
//! Local peak detection for time series, built for epidemic case curves
//! and forecast-model output sequences but agnostic to what the numbers
//! mean. This crate provides:
//!
//! - Peak detection via sign changes of the first-difference sequence,
//!   confirmed by windowed neighbor dominance with boundary trimming
//! - A configurable right-flank rule (the historical asymmetric rule,
//!   preserved bit-for-bit, or a corrected symmetric one)
//! - An explicit missing-value policy (fail fast, or exclude NaN from
//!   differencing with index mapping back to the original series)
//! - Peak prominence and inter-peak spacing
//! - Batch detection over many series, parallel with the `parallel`
//!   feature (on by default; disable for WASM targets)
//!
//! ## Data layout
//!
//! A series is a plain `&[f64]` slice indexed `0..N-1`, one value per
//! time step (typically one per week). `f64::NAN` marks a missing
//! observation; infinities are always rejected. Detection is a pure
//! function: no I/O, no hidden state, identical inputs give identical
//! output, and independent calls may run concurrently without
//! coordination.
//!
//! ## Example
//!
//! ```
//! use crestline::find_peaks;
//!
//! // Weekly incident cases rising into a single wave
//! let weekly = [0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0];
//! assert_eq!(find_peaks(&weekly, 1).unwrap(), vec![3]);
//! ```

pub mod parallel;

pub mod detect;
pub mod error;
pub mod series;

// Re-export the public surface
pub use detect::{
    detect, detect_many, find_peaks, find_peaks_default, FlankRule, Peak, PeakConfig,
    PeakDetectionResult, DEFAULT_WINDOW,
};
pub use error::{InvalidInput, Result};
pub use series::{first_differences, MissingValues};
