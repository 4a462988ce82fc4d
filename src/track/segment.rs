//! Splice structure: the ownership tree behind a track
//!
//! A segment either owns raw sample storage (leaf) or an ordered list of
//! child segments (composite). Splicing relocates subtree ownership between
//! trees instead of copying samples. Ownership is a strict tree: every child
//! has exactly one parent, no sharing, no cycles. The child-to-parent
//! back-reference of the classic design is omitted; no operation here needs
//! one.
//!
//! Callers validate bounds before invoking the consuming operations, so each
//! public mutation on this type either fully applies or (on a bounds error)
//! leaves the tree exactly as it was.

use super::sample_buffer::SampleBuffer;
use crate::error::TrackError;

/// Node in the splice ownership tree
#[derive(Debug)]
pub(crate) enum Segment {
    /// Owns raw sample storage directly
    Leaf(SampleBuffer),
    /// Owns an ordered sequence of children; insertion order is playback
    /// order
    Composite {
        children: Vec<Segment>,
        flattened_length: usize,
    },
}

impl Segment {
    /// Empty leaf segment
    pub(crate) fn empty() -> Self {
        Segment::Leaf(SampleBuffer::new())
    }

    /// Leaf segment holding a copy of `samples`
    pub(crate) fn from_samples(samples: &[i16]) -> Self {
        Segment::Leaf(SampleBuffer::from_samples(samples))
    }

    /// Flattened length: total samples under this node
    pub(crate) fn len(&self) -> usize {
        match self {
            Segment::Leaf(buf) => buf.len(),
            Segment::Composite {
                flattened_length, ..
            } => *flattened_length,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a composite from parts, dropping empty ones
    ///
    /// Collapses to the single remaining child (or an empty leaf) so
    /// degenerate one-child composites never appear in the tree.
    fn compose(parts: Vec<Segment>) -> Segment {
        let mut children: Vec<Segment> = parts.into_iter().filter(|s| !s.is_empty()).collect();
        match children.len() {
            0 => Segment::empty(),
            1 => children.pop().unwrap_or_else(Segment::empty),
            _ => {
                let flattened_length = children.iter().map(Segment::len).sum();
                Segment::Composite {
                    children,
                    flattened_length,
                }
            }
        }
    }

    /// Divide into `([0, at), [at, len))`, preserving order and ownership
    ///
    /// Splitting a composite physically splits only the one child that
    /// straddles the cut; untouched children move into the new halves by
    /// ownership relocation. Callers must ensure `at <= self.len()`.
    fn split(self, at: usize) -> (Segment, Segment) {
        debug_assert!(at <= self.len());

        if at == 0 {
            return (Segment::empty(), self);
        }
        if at == self.len() {
            return (self, Segment::empty());
        }

        match self {
            Segment::Leaf(mut buf) => {
                let tail = buf.split_off(at);
                (Segment::Leaf(buf), Segment::Leaf(tail))
            }
            Segment::Composite { children, .. } => {
                let mut left = Vec::new();
                let mut right = Vec::new();
                let mut remaining = at;
                for child in children {
                    if remaining == 0 {
                        right.push(child);
                    } else if child.len() <= remaining {
                        remaining -= child.len();
                        left.push(child);
                    } else {
                        let (head, tail) = child.split(remaining);
                        remaining = 0;
                        left.push(head);
                        right.push(tail);
                    }
                }
                (Segment::compose(left), Segment::compose(right))
            }
        }
    }

    /// Splice an owned subtree in at `pos`
    ///
    /// Replaces `self` with a composite of `[left, subtree, right]` where
    /// left/right are the halves of the old tree around `pos`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` (tree untouched) if `pos > self.len()`.
    pub(crate) fn splice_in(&mut self, pos: usize, subtree: Segment) -> Result<(), TrackError> {
        if pos > self.len() {
            return Err(TrackError::OutOfRange {
                pos,
                len: subtree.len(),
                track_len: self.len(),
            });
        }
        let current = std::mem::replace(self, Segment::empty());
        let (left, right) = current.split(pos);
        *self = Segment::compose(vec![left, subtree, right]);
        Ok(())
    }

    /// Detach `[pos, pos + len)` as an owned subtree, closing the gap
    ///
    /// The inverse building block of splice: splits at both ends of the
    /// range, hands the middle to the caller, and reassembles the remainder
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` (tree untouched) if the range extends past the
    /// flattened length.
    pub(crate) fn extract(&mut self, pos: usize, len: usize) -> Result<Segment, TrackError> {
        if len > self.len() || pos > self.len() - len {
            return Err(TrackError::OutOfRange {
                pos,
                len,
                track_len: self.len(),
            });
        }
        let current = std::mem::replace(self, Segment::empty());
        let (left, rest) = current.split(pos);
        let (middle, right) = rest.split(len);
        *self = Segment::compose(vec![left, right]);
        Ok(middle)
    }

    /// In-order walk copying `[pos, pos + dest.len())` into `dest`
    ///
    /// Callers must ensure the range lies within the flattened length.
    pub(crate) fn read_into(&self, dest: &mut [i16], pos: usize) {
        debug_assert!(pos + dest.len() <= self.len());
        match self {
            Segment::Leaf(buf) => {
                dest.copy_from_slice(&buf.as_slice()[pos..pos + dest.len()]);
            }
            Segment::Composite { children, .. } => {
                let mut skip = pos;
                let mut written = 0;
                for child in children {
                    if written == dest.len() {
                        break;
                    }
                    let child_len = child.len();
                    if skip >= child_len {
                        skip -= child_len;
                        continue;
                    }
                    let take = (child_len - skip).min(dest.len() - written);
                    child.read_into(&mut dest[written..written + take], skip);
                    written += take;
                    skip = 0;
                }
            }
        }
    }

    /// Flatten the whole subtree into a contiguous vector
    pub(crate) fn to_vec(&self) -> Vec<i16> {
        let mut out = vec![0i16; self.len()];
        self.read_into(&mut out, 0);
        out
    }

    /// Whether this node is a leaf
    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self, Segment::Leaf(_))
    }

    /// Mutable access to the leaf buffer, if this node is a leaf
    pub(crate) fn as_leaf_mut(&mut self) -> Option<&mut SampleBuffer> {
        match self {
            Segment::Leaf(buf) => Some(buf),
            Segment::Composite { .. } => None,
        }
    }
}
