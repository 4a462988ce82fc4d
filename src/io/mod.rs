//! Audio container I/O
//!
//! WAV encode/decode around the core's raw `i16` sample sequences. The
//! editing and matching code never touches container bytes; everything goes
//! through this module.

pub mod wav;
