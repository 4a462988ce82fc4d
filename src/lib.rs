//! # segtrack
//!
//! Offline editing of 16-bit PCM sample tracks, plus detection of a short
//! repeated pattern ("ad") inside a longer track via normalized
//! cross-correlation.
//!
//! ## Features
//!
//! - **Track editing**: bulk read/write, range deletion, cross-track
//!   splice insertion backed by a segment ownership tree (no sample
//!   copying on insert)
//! - **Pattern identification**: greedy non-overlapping scan with a direct
//!   or FFT-accelerated correlation kernel
//! - **WAV I/O**: canonical mono/8000 Hz/16-bit PCM encode, permissive
//!   decode
//!
//! ## Quick Start
//!
//! ```
//! use segtrack::{identify, IdentifyConfig, Track};
//!
//! let mut content = Track::new();
//! content.write(&[7, 8, 9, 7, 8, 9], 0)?;
//!
//! let mut jingle = Track::new();
//! jingle.write(&[100, 200, 300], 0)?;
//!
//! // splice the jingle into the content without copying samples
//! let mut source = Track::from_samples(&[100, 200, 300]);
//! content.insert(3, &mut source, 0, 3)?;
//!
//! let matches = identify(&content, &jingle, &IdentifyConfig::default())?;
//! assert_eq!((matches[0].start, matches[0].end), (3, 5));
//! # Ok::<(), segtrack::TrackError>(())
//! ```
//!
//! Tracks are single-threaded values: exclusive ownership, no internal
//! synchronization. Every fallible operation returns a `Result` and either
//! fully applies or leaves its track(s) untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod io;
pub mod matcher;
pub mod track;

// Re-export main types
pub use config::IdentifyConfig;
pub use error::TrackError;
pub use matcher::{cross_correlation, identify, AdMatch};
pub use track::Track;
