//! Error types for ring buffer operations.

use thiserror::Error;

/// Errors returned when constructing or appending to a [`RingBuffer`].
///
/// Oversized and empty input are not errors: they are handled by truncation
/// and by a no-op respectively.
///
/// [`RingBuffer`]: crate::RingBuffer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingBufferError {
    /// The buffer was asked to hold zero rows.
    #[error("ring buffer: capacity must be at least 1")]
    ZeroCapacity,

    /// `capacity * channels` does not fit in `usize`.
    #[error("ring buffer: shape ({capacity}, {channels}) is too large")]
    TooLarge {
        /// Requested number of rows.
        capacity: usize,
        /// Requested number of channels.
        channels: usize,
    },

    /// An input row does not have exactly `channels` elements.
    #[error("ring buffer: row {row} has {actual} values, expected {expected}")]
    ShapeMismatch {
        /// Index of the offending row within the appended chunk.
        row: usize,
        /// Channel count of the buffer.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },

    /// A flat row-major chunk is not a whole number of rows.
    #[error("ring buffer: {len} values do not split into rows of {channels} channels")]
    Misaligned {
        /// Length of the flat input.
        len: usize,
        /// Channel count of the buffer.
        channels: usize,
    },
}
