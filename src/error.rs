//! Error types for track editing and pattern identification

use thiserror::Error;

/// Errors that can occur while editing a track or identifying patterns
#[derive(Debug, Error)]
pub enum TrackError {
    /// A position/length pair falls outside the current track bounds
    #[error("range out of bounds: pos={pos}, len={len}, track length={track_len}")]
    OutOfRange {
        /// Requested start position
        pos: usize,
        /// Requested range length
        len: usize,
        /// Track length at the time of the call
        track_len: usize,
    },

    /// Buffer growth could not be serviced; the buffer is left unchanged
    #[error("allocation of {requested} sample slots failed")]
    AllocationFailure {
        /// Capacity that could not be allocated, in samples
        requested: usize,
    },

    /// `identify` was invoked with a zero-length or zero-energy pattern
    #[error("degenerate pattern: {0}")]
    DegenerateCorrelation(&'static str),

    /// WAV encoding/decoding error
    #[error("wav codec error: {0}")]
    Codec(#[from] hound::Error),

    /// I/O error while reading or writing a WAV file
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
