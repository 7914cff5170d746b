//! Error type for series validation.

use thiserror::Error;

/// Raised when a series cannot be analyzed.
///
/// Peak detection is a pure computation with no transient failure modes:
/// an operation either fully succeeds or fails immediately with this
/// error, and no partial results are returned. When analyzing a batch of
/// series (one per forecasting model), callers should treat this as
/// "cannot analyze this series" and skip it rather than abort the batch;
/// [`detect_many`](crate::detect_many) does exactly that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// The input series has no observations.
    #[error("series is empty")]
    EmptySeries,

    /// A value at the given index is not finite where finiteness is
    /// required: any NaN or infinity under [`MissingValues::Reject`],
    /// infinities under [`MissingValues::Skip`] (NaN is the missing-value
    /// marker there).
    ///
    /// [`MissingValues::Reject`]: crate::MissingValues::Reject
    /// [`MissingValues::Skip`]: crate::MissingValues::Skip
    #[error("non-finite value at index {index}")]
    NonFinite { index: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, InvalidInput>;
