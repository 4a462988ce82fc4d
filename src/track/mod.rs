//! Editable track model
//!
//! A track is the user-facing handle over one exclusively-owned segment
//! tree: bulk read/write, range deletion, and cross-track splice insertion.
//! Insertion relocates subtree ownership between tracks; no sample data is
//! copied.

pub mod sample_buffer;
mod segment;

pub use sample_buffer::SampleBuffer;

use crate::error::TrackError;
use segment::Segment;

/// Editable sequence of 16-bit audio samples
///
/// # Example
///
/// ```
/// use segtrack::Track;
///
/// let mut track = Track::new();
/// track.write(&[1, 2, 3, 4], 0)?;
/// track.delete_range(1, 2)?;
/// assert_eq!(track.to_vec(), vec![1, 4]);
/// # Ok::<(), segtrack::TrackError>(())
/// ```
#[derive(Debug)]
pub struct Track {
    root: Segment,
}

impl Track {
    /// Create an empty track
    pub fn new() -> Self {
        Self {
            root: Segment::empty(),
        }
    }

    /// Create a track holding a copy of `samples`
    pub fn from_samples(samples: &[i16]) -> Self {
        Self {
            root: Segment::from_samples(samples),
        }
    }

    /// Current track length in samples
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether the track holds no samples
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Copy `[pos, pos + dest.len())` into `dest`
    ///
    /// Walks the segment tree in order, filling `dest` contiguously.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the range extends past the current length.
    pub fn read(&self, dest: &mut [i16], pos: usize) -> Result<(), TrackError> {
        if dest.len() > self.len() || pos > self.len() - dest.len() {
            return Err(TrackError::OutOfRange {
                pos,
                len: dest.len(),
                track_len: self.len(),
            });
        }
        self.root.read_into(dest, pos);
        Ok(())
    }

    /// Flatten the whole track into a contiguous vector
    pub fn to_vec(&self) -> Vec<i16> {
        self.root.to_vec()
    }

    /// Write `src` at `pos`, extending the track if the write runs past the
    /// current end
    ///
    /// The externally observable effect is the same regardless of internal
    /// structure: a single-leaf track writes into its buffer directly; a
    /// spliced track first flattens the overlapping region into a fresh
    /// leaf, applies the write there, and re-splices it. Samples between
    /// the old length and a far `pos` are unspecified.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `pos + src.len()` is not representable,
    /// `AllocationFailure` if buffer growth cannot be serviced; the track
    /// is left unchanged either way.
    pub fn write(&mut self, src: &[i16], pos: usize) -> Result<(), TrackError> {
        if src.is_empty() {
            return Ok(());
        }

        if let Some(buf) = self.root.as_leaf_mut() {
            return buf.write(pos, src);
        }

        let length = self.len();
        if pos >= length {
            // write entirely past the end: append a fresh leaf with the gap
            let mut buf = SampleBuffer::new();
            buf.write(pos - length, src)?;
            return self.root.splice_in(length, Segment::Leaf(buf));
        }

        // flatten the overlapping region, apply the write, re-splice; the
        // fallible buffer work happens before any tree mutation
        let overlap_end = (pos + src.len()).min(length);
        let mut region = vec![0i16; overlap_end - pos];
        self.root.read_into(&mut region, pos);
        let mut buf = SampleBuffer::from_samples(&region);
        buf.write(0, src)?;

        let _replaced = self.root.extract(pos, overlap_end - pos)?;
        self.root.splice_in(pos, Segment::Leaf(buf))
    }

    /// Remove `[pos, pos + len)` from the track
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the range does not lie within the current
    /// length.
    pub fn delete_range(&mut self, pos: usize, len: usize) -> Result<(), TrackError> {
        let length = self.len();
        if len > length || pos > length - len {
            return Err(TrackError::OutOfRange {
                pos,
                len,
                track_len: length,
            });
        }

        log::debug!("delete_range: pos={}, len={}, track_len={}", pos, len, length);

        // leaf fast path keeps the buffer's capacity-halving behavior
        if let Some(buf) = self.root.as_leaf_mut() {
            return buf.delete_range(pos, len);
        }

        let removed = self.root.extract(pos, len)?;
        drop(removed);
        Ok(())
    }

    /// Splice `[src_pos, src_pos + len)` of `src` into `self` at `dest_pos`
    ///
    /// The clipped range is detached from the source tree and linked into
    /// this one by ownership relocation; no sample data is copied. On
    /// return the source has shrunk by `len` and this track has grown by
    /// `len`.
    ///
    /// Inserting a track into itself is rejected at compile time by the
    /// `&mut` borrows; use [`Track::insert_within`] for that case.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `len == 0`, the source range is out of
    /// bounds, or `dest_pos > self.len()`. Neither track is modified on
    /// error.
    pub fn insert(
        &mut self,
        dest_pos: usize,
        src: &mut Track,
        src_pos: usize,
        len: usize,
    ) -> Result<(), TrackError> {
        if len == 0 || len > src.len() || src_pos > src.len() - len {
            return Err(TrackError::OutOfRange {
                pos: src_pos,
                len,
                track_len: src.len(),
            });
        }
        if dest_pos > self.len() {
            return Err(TrackError::OutOfRange {
                pos: dest_pos,
                len,
                track_len: self.len(),
            });
        }

        log::debug!(
            "insert: dest_pos={}, src_pos={}, len={}, dest_len={}, src_len={}",
            dest_pos,
            src_pos,
            len,
            self.len(),
            src.len()
        );

        let subtree = src.root.extract(src_pos, len)?;
        self.root.splice_in(dest_pos, subtree)
    }

    /// Relocate `[src_pos, src_pos + len)` within this track to `dest_pos`
    ///
    /// The range is extracted first; `dest_pos` is then interpreted against
    /// the post-extraction track, so it must satisfy
    /// `dest_pos <= len() - len`. This makes overlapping source and
    /// destination well-defined: the removed range is never part of the
    /// coordinate space the destination is resolved in.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `len == 0`, the source range is out of
    /// bounds, or `dest_pos` exceeds the post-extraction length. The track
    /// is not modified on error.
    pub fn insert_within(
        &mut self,
        dest_pos: usize,
        src_pos: usize,
        len: usize,
    ) -> Result<(), TrackError> {
        let length = self.len();
        if len == 0 || len > length || src_pos > length - len {
            return Err(TrackError::OutOfRange {
                pos: src_pos,
                len,
                track_len: length,
            });
        }
        if dest_pos > length - len {
            return Err(TrackError::OutOfRange {
                pos: dest_pos,
                len,
                track_len: length - len,
            });
        }

        let subtree = self.root.extract(src_pos, len)?;
        self.root.splice_in(dest_pos, subtree)
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}
