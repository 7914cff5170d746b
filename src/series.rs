//! Series validation and differencing primitives.
//!
//! A series is a plain `&[f64]` slice: one time-ordered signal (weekly
//! case counts, or one forecast model's values at a fixed horizon),
//! indexed by position. `f64::NAN` marks a missing observation;
//! infinities are always malformed.

use crate::error::{InvalidInput, Result};

/// How NaN entries in a series are treated.
///
/// This is an explicit contract where the reference workflow silently
/// dropped undefined values from differencing. Interpolation is
/// deliberately not offered: substituting values would move peak
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValues {
    /// Fail fast: any NaN makes the series unanalyzable.
    #[default]
    Reject,
    /// Exclude NaN entries from differencing. Detection runs on the
    /// defined values only, and peak indices refer back to positions in
    /// the original series. Gaps cannot fabricate sign changes, so
    /// leading or trailing NaN never produce spurious peaks.
    Skip,
}

/// Validate a series against the given missing-value policy.
pub(crate) fn validate(series: &[f64], missing: MissingValues) -> Result<()> {
    if series.is_empty() {
        return Err(InvalidInput::EmptySeries);
    }
    for (index, &v) in series.iter().enumerate() {
        if v.is_nan() && missing == MissingValues::Skip {
            continue;
        }
        if !v.is_finite() {
            return Err(InvalidInput::NonFinite { index });
        }
    }
    Ok(())
}

/// Compute first differences: `d[i] = series[i+1] - series[i]`.
///
/// Returns `N - 1` entries for a series of length `N`, or an empty
/// vector when `N < 2`.
pub fn first_differences(series: &[f64]) -> Vec<f64> {
    series.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Three-valued sign: -1, 0 or 1.
///
/// Exact zero maps to 0; `f64::signum` would map it to ±1 and fabricate
/// slope changes across flat segments.
pub(crate) fn sign(x: f64) -> i8 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Drop NaN entries, keeping a map from compressed to original indices.
///
/// The compressed values are what differencing sees under
/// [`MissingValues::Skip`]; the map translates detected peak positions
/// back to the caller's index space.
pub(crate) fn compress_defined(series: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let mut values = Vec::with_capacity(series.len());
    let mut index_map = Vec::with_capacity(series.len());
    for (i, &v) in series.iter().enumerate() {
        if !v.is_nan() {
            values.push(v);
            index_map.push(i);
        }
    }
    (values, index_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_differences() {
        let d = first_differences(&[1.0, 4.0, 2.0, 2.0]);
        assert_eq!(d, vec![3.0, -2.0, 0.0]);
    }

    #[test]
    fn test_first_differences_short() {
        assert!(first_differences(&[]).is_empty());
        assert!(first_differences(&[7.0]).is_empty());
    }

    #[test]
    fn test_sign_three_valued() {
        assert_eq!(sign(2.5), 1);
        assert_eq!(sign(-0.1), -1);
        assert_eq!(sign(0.0), 0);
        assert_eq!(sign(-0.0), 0);
    }

    #[test]
    fn test_validate_empty() {
        assert_eq!(
            validate(&[], MissingValues::Reject),
            Err(InvalidInput::EmptySeries)
        );
        assert_eq!(
            validate(&[], MissingValues::Skip),
            Err(InvalidInput::EmptySeries)
        );
    }

    #[test]
    fn test_validate_nan_reject() {
        let series = [1.0, f64::NAN, 3.0];
        assert_eq!(
            validate(&series, MissingValues::Reject),
            Err(InvalidInput::NonFinite { index: 1 })
        );
        assert!(validate(&series, MissingValues::Skip).is_ok());
    }

    #[test]
    fn test_validate_infinity_always_rejected() {
        let series = [1.0, 2.0, f64::INFINITY];
        assert_eq!(
            validate(&series, MissingValues::Reject),
            Err(InvalidInput::NonFinite { index: 2 })
        );
        assert_eq!(
            validate(&series, MissingValues::Skip),
            Err(InvalidInput::NonFinite { index: 2 })
        );
        assert_eq!(
            validate(&[f64::NEG_INFINITY], MissingValues::Skip),
            Err(InvalidInput::NonFinite { index: 0 })
        );
    }

    #[test]
    fn test_compress_defined() {
        let series = [f64::NAN, 2.0, f64::NAN, 4.0, 5.0];
        let (values, index_map) = compress_defined(&series);
        assert_eq!(values, vec![2.0, 4.0, 5.0]);
        assert_eq!(index_map, vec![1, 3, 4]);
    }

    #[test]
    fn test_compress_defined_all_missing() {
        let (values, index_map) = compress_defined(&[f64::NAN, f64::NAN]);
        assert!(values.is_empty());
        assert!(index_map.is_empty());
    }
}
