//! Local peak detection over ordered numeric series.
//!
//! A peak is an index whose value dominates every neighbor within a
//! window of `m` positions on each side, located via the sign changes of
//! the first-difference sequence. The dominance windows are trimmed at
//! the series boundaries, and the historical flank rule (see
//! [`FlankRule`]) is preserved by default for compatibility with
//! previously published peak sets.

use crate::error::Result;
use crate::iter_maybe_parallel;
use crate::series::{self, MissingValues};
#[cfg(feature = "parallel")]
use rayon::iter::ParallelIterator;

/// Which neighbors a peak candidate is compared against on its right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlankRule {
    /// The reference rule: the right flank is `series[c+2..min(N-1, c+m+1)]`
    /// (exclusive end). Two quirks follow and are preserved bit-for-bit:
    /// the immediate right neighbor is never compared against the
    /// candidate, and the final element of the series is never part of
    /// any right flank.
    #[default]
    Legacy,
    /// The corrected rule: the right flank is `series[c+1..=min(N-1, c+m)]`,
    /// so the immediate right neighbor and the final element participate
    /// in the dominance check.
    Symmetric,
}

/// Peak detection parameters.
///
/// # Example
///
/// ```
/// use crestline::{detect, PeakConfig};
///
/// let weekly = [0.0, 3.0, 1.0, 4.0, 1.0, 5.0, 1.0];
/// let config = PeakConfig::default().window(2);
/// let result = detect(&weekly, &config).unwrap();
/// assert_eq!(result.indices(), vec![3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeakConfig {
    window: usize,
    flank: FlankRule,
    missing: MissingValues,
    min_prominence: Option<f64>,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            flank: FlankRule::default(),
            missing: MissingValues::default(),
            min_prominence: None,
        }
    }
}

impl PeakConfig {
    /// Set the window half-width `m`: a candidate must dominate `m`
    /// neighbors on each side (fewer near the boundaries). Larger
    /// windows yield fewer, more significant peaks.
    pub fn window(mut self, m: usize) -> Self {
        self.window = m;
        self
    }

    /// Set the right-flank comparison rule.
    pub fn flank(mut self, flank: FlankRule) -> Self {
        self.flank = flank;
        self
    }

    /// Set the missing-value policy.
    pub fn missing_values(mut self, missing: MissingValues) -> Self {
        self.missing = missing;
        self
    }

    /// Drop peaks whose prominence is below `min_prominence` (raw units).
    pub fn min_prominence(mut self, min_prominence: f64) -> Self {
        self.min_prominence = Some(min_prominence);
        self
    }
}

/// Default window half-width, matching the reference behavior.
pub const DEFAULT_WINDOW: usize = 3;

/// A detected peak in a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    /// Position in the input series (0-based).
    pub index: usize,
    /// Value at the peak.
    pub value: f64,
    /// Height above the higher of the two flanking valleys.
    pub prominence: f64,
}

/// Result of peak detection on one series.
#[derive(Debug, Clone, PartialEq)]
pub struct PeakDetectionResult {
    /// Detected peaks in ascending index order.
    pub peaks: Vec<Peak>,
    /// Index distances between consecutive peaks.
    pub spacing: Vec<usize>,
    /// Mean of `spacing`; NaN when fewer than two peaks were found.
    pub mean_spacing: f64,
}

impl PeakDetectionResult {
    /// Peak positions only, in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        self.peaks.iter().map(|p| p.index).collect()
    }
}

/// Find local peak indices in a series.
///
/// The algorithm takes first differences, reduces them to signs
/// (-1/0/1), and marks a candidate wherever the sign decreases, i.e. the
/// slope turns from non-negative to negative. Each candidate `c` is then
/// confirmed only if every value in its trimmed left window
/// `series[max(0, c-m)..c]` and its right flank (per
/// [`FlankRule::Legacy`]) is `<= series[c]`.
///
/// Identical inputs always yield identical, ascending output; there is
/// no randomness and no hidden state.
///
/// # Arguments
/// * `series` - Ordered observations; all values must be finite
/// * `m` - Window half-width (0 degenerates to the sign-change rule alone)
///
/// # Returns
/// Ascending peak indices; empty when `series.len() < 3`, when the
/// series is monotonic or flat, or when no candidate survives the
/// dominance check.
///
/// # Errors
/// [`InvalidInput`](crate::InvalidInput) when the series is empty or
/// contains a non-finite value.
///
/// # Example
///
/// ```
/// use crestline::find_peaks;
///
/// let tent = [0.0, 1.0, 2.0, 3.0, 2.0, 1.0, 0.0];
/// assert_eq!(find_peaks(&tent, 1).unwrap(), vec![3]);
/// ```
pub fn find_peaks(series: &[f64], m: usize) -> Result<Vec<usize>> {
    let result = detect(series, &PeakConfig::default().window(m))?;
    Ok(result.indices())
}

/// [`find_peaks`] with the default window ([`DEFAULT_WINDOW`]).
pub fn find_peaks_default(series: &[f64]) -> Result<Vec<usize>> {
    find_peaks(series, DEFAULT_WINDOW)
}

/// Detect peaks in a series with full configuration.
///
/// Like [`find_peaks`], but applies the configured flank rule and
/// missing-value policy, computes prominence per peak, filters by
/// minimum prominence when requested, and reports inter-peak spacing.
///
/// Under [`MissingValues::Skip`], detection runs on the defined values
/// only; reported indices refer to positions in the original series,
/// while prominence and spacing are computed over the defined values.
pub fn detect(series: &[f64], config: &PeakConfig) -> Result<PeakDetectionResult> {
    series::validate(series, config.missing)?;

    let compressed;
    let (values, index_map): (&[f64], Option<&[usize]>) = match config.missing {
        MissingValues::Reject => (series, None),
        MissingValues::Skip => {
            compressed = series::compress_defined(series);
            (&compressed.0, Some(&compressed.1))
        }
    };

    let candidates = peak_indices_dense(values, config.window, config.flank);

    let mut peaks: Vec<Peak> = candidates
        .iter()
        .map(|&idx| Peak {
            index: index_map.map_or(idx, |map| map[idx]),
            value: values[idx],
            prominence: compute_prominence(values, idx),
        })
        .collect();

    if let Some(min_prom) = config.min_prominence {
        peaks.retain(|p| p.prominence >= min_prom);
    }

    let spacing: Vec<usize> = peaks.windows(2).map(|w| w[1].index - w[0].index).collect();
    let mean_spacing = if spacing.is_empty() {
        f64::NAN
    } else {
        spacing.iter().sum::<usize>() as f64 / spacing.len() as f64
    };

    Ok(PeakDetectionResult {
        peaks,
        spacing,
        mean_spacing,
    })
}

/// Detect peaks in many series, one result per series.
///
/// Intended for per-model batches (e.g. one forecast value sequence per
/// forecasting model). A malformed series does not abort the batch: each
/// slot carries its own `Result`, in input order. With the `parallel`
/// feature the series are processed on the rayon thread pool; each
/// invocation only reads its own input, so no coordination is needed.
pub fn detect_many(
    series_list: &[Vec<f64>],
    config: &PeakConfig,
) -> Vec<Result<PeakDetectionResult>> {
    iter_maybe_parallel!(0..series_list.len())
        .map(|i| detect(&series_list[i], config))
        .collect()
}

/// Core detection over fully-defined values.
fn peak_indices_dense(values: &[f64], m: usize, flank: FlankRule) -> Vec<usize> {
    let n = values.len();
    if n < 3 {
        return Vec::new();
    }

    let signs: Vec<i8> = series::first_differences(values)
        .into_iter()
        .map(series::sign)
        .collect();

    let mut peaks = Vec::new();
    for i in 0..signs.len() - 1 {
        if signs[i + 1] < signs[i] {
            let c = i + 1;
            if dominates(values, c, m, flank) {
                peaks.push(c);
            }
        }
    }
    peaks
}

/// Dominance check: every flank value must be `<= values[c]`.
fn dominates(values: &[f64], c: usize, m: usize, flank: FlankRule) -> bool {
    let n = values.len();
    let left = &values[c.saturating_sub(m)..c];
    let right = match flank {
        FlankRule::Legacy => {
            let w = c.saturating_add(m).saturating_add(1).min(n - 1);
            if w > c + 2 {
                &values[c + 2..w]
            } else {
                &[][..]
            }
        }
        FlankRule::Symmetric => &values[c + 1..c.saturating_add(m).saturating_add(1).min(n)],
    };

    let v = values[c];
    left.iter().chain(right.iter()).all(|&x| x <= v)
}

/// Compute prominence for a peak (height above surrounding valleys).
fn compute_prominence(values: &[f64], peak_idx: usize) -> f64 {
    let n = values.len();
    let peak_val = values[peak_idx];

    // Lowest point between the peak and the boundary or a higher point
    let mut left_min = peak_val;
    for i in (0..peak_idx).rev() {
        if values[i] >= peak_val {
            break;
        }
        left_min = left_min.min(values[i]);
    }

    let mut right_min = peak_val;
    for i in (peak_idx + 1)..n {
        if values[i] >= peak_val {
            break;
        }
        right_min = right_min.min(values[i]);
    }

    peak_val - left_min.max(right_min)
}
