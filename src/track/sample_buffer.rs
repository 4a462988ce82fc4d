//! Growable contiguous sample storage with explicit capacity management
//!
//! Capacity grows by repeated doubling on write and halves after a delete
//! leaves the buffer less than half full. Gap slots between the old length
//! and a far write position hold unspecified values; callers must not rely
//! on them.

use crate::error::TrackError;

/// Initial capacity of an empty buffer
///
/// Small but non-zero so multiplicative growth always has a starting point.
const INITIAL_CAPACITY: usize = 8;

/// Contiguous `i16` sample storage
///
/// `length` counts the live samples; the backing vector is kept at exactly
/// `capacity` slots so the resize policy stays explicit.
#[derive(Debug)]
pub struct SampleBuffer {
    data: Vec<i16>,
    length: usize,
}

impl SampleBuffer {
    /// Create an empty buffer with the default capacity
    pub fn new() -> Self {
        Self {
            data: vec![0; INITIAL_CAPACITY],
            length: 0,
        }
    }

    /// Create a buffer holding a copy of `samples`, capacity == length
    pub fn from_samples(samples: &[i16]) -> Self {
        Self {
            data: samples.to_vec(),
            length: samples.len(),
        }
    }

    /// Number of live samples
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Allocated slot count
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// View of the live sample range
    pub fn as_slice(&self) -> &[i16] {
        &self.data[..self.length]
    }

    /// Write `src` at `pos`, growing capacity by doubling as needed
    ///
    /// Writing past the current length extends the buffer; slots between
    /// the old length and `pos` are unspecified. An empty `src` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `pos + src.len()` is not representable,
    /// `AllocationFailure` if growth cannot be serviced; the buffer is left
    /// exactly as before the call either way.
    pub fn write(&mut self, pos: usize, src: &[i16]) -> Result<(), TrackError> {
        if src.is_empty() {
            return Ok(());
        }

        let required = pos
            .checked_add(src.len())
            .ok_or(TrackError::OutOfRange {
                pos,
                len: src.len(),
                track_len: self.length,
            })?;
        if required > self.capacity() {
            let mut new_capacity = self.capacity().max(1);
            while new_capacity < required {
                new_capacity = new_capacity
                    .checked_mul(2)
                    .ok_or(TrackError::AllocationFailure {
                        requested: required,
                    })?;
            }
            self.grow_to(new_capacity)?;
        }

        self.data[pos..pos + src.len()].copy_from_slice(src);
        if required > self.length {
            self.length = required;
        }
        Ok(())
    }

    /// Copy `[pos, pos + dest.len())` into `dest`
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the range extends past the current length.
    pub fn read(&self, dest: &mut [i16], pos: usize) -> Result<(), TrackError> {
        let len = dest.len();
        if len > self.length || pos > self.length - len {
            return Err(TrackError::OutOfRange {
                pos,
                len,
                track_len: self.length,
            });
        }
        dest.copy_from_slice(&self.data[pos..pos + len]);
        Ok(())
    }

    /// Remove `[pos, pos + len)`, shifting the tail left
    ///
    /// If the remaining length drops under half the capacity, capacity
    /// shrinks to `max(length, capacity / 2)`. A failed shrink allocation
    /// degrades to keeping the old capacity; the delete still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if the range does not lie within the current
    /// length.
    pub fn delete_range(&mut self, pos: usize, len: usize) -> Result<(), TrackError> {
        if len > self.length || pos > self.length - len {
            return Err(TrackError::OutOfRange {
                pos,
                len,
                track_len: self.length,
            });
        }

        self.data.copy_within(pos + len..self.length, pos);
        self.length -= len;

        if self.length < self.capacity() / 2 {
            let new_capacity = (self.capacity() / 2).max(self.length);
            if self.shrink_to(new_capacity).is_err() {
                log::warn!(
                    "shrink to {} slots failed, keeping capacity {}",
                    new_capacity,
                    self.capacity()
                );
            }
        }
        Ok(())
    }

    /// Move the tail `[at, length)` into a new buffer, truncating `self`
    pub fn split_off(&mut self, at: usize) -> SampleBuffer {
        debug_assert!(at <= self.length);
        let tail = SampleBuffer::from_samples(&self.data[at..self.length]);
        self.length = at;
        tail
    }

    fn grow_to(&mut self, new_capacity: usize) -> Result<(), TrackError> {
        let additional = new_capacity - self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|_| TrackError::AllocationFailure {
                requested: new_capacity,
            })?;
        self.data.resize(new_capacity, 0);
        Ok(())
    }

    fn shrink_to(&mut self, new_capacity: usize) -> Result<(), TrackError> {
        let mut smaller: Vec<i16> = Vec::new();
        smaller
            .try_reserve_exact(new_capacity)
            .map_err(|_| TrackError::AllocationFailure {
                requested: new_capacity,
            })?;
        smaller.extend_from_slice(&self.data[..self.length]);
        smaller.resize(new_capacity, 0);
        self.data = smaller;
        Ok(())
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new()
    }
}
