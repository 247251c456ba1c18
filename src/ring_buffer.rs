use tracing::{debug, trace};

use crate::error::RingBufferError;
use crate::frames::Frames;

/// Destination of one append, in rows.
///
/// The first `tail_len` input rows land at `start..start + tail_len`, the
/// remaining `head_len` rows wrap around to `0..head_len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    start: usize,
    tail_len: usize,
    head_len: usize,
}

/// Fixed-capacity circular buffer of multi-channel samples
///
/// - `capacity` rows of `channels` values each, stored row-major
/// - Storage is allocated once and never resized
/// - Once full, every append overwrites the oldest rows
/// - Reads always return every valid row, oldest first
///
/// `append` takes `&mut self`, so a buffer can only be mutated by its owner
/// and no read can observe a half-finished write.
#[derive(Debug, Clone)]
pub struct RingBuffer<T = f64> {
    /// Row-major samples, `capacity * channels` long
    data: Vec<T>,
    /// Number of rows retained
    capacity: usize,
    /// Values per row
    channels: usize,
    /// Row where the next write begins, always `< capacity`
    write_index: usize,
    /// Set once the buffer has wrapped; never cleared
    full: bool,
}

impl<T: Copy + Default> RingBuffer<T> {
    /// Create a ring buffer holding `capacity` rows of `channels` values
    ///
    /// Rows are zero-filled until written, so rows past the write cursor of a
    /// buffer that has not yet wrapped hold `T::default()`.
    ///
    /// # Arguments
    /// * `shape` - `(capacity, channels)`; zero channels is allowed
    ///
    /// # Returns
    /// * `Ok(RingBuffer)` on success
    /// * `Err(RingBufferError::ZeroCapacity)` if `capacity` is 0
    /// * `Err(RingBufferError::TooLarge)` if the element count overflows
    pub fn new(shape: (usize, usize)) -> Result<Self, RingBufferError> {
        let (capacity, channels) = shape;
        if capacity == 0 {
            return Err(RingBufferError::ZeroCapacity);
        }
        let len = capacity
            .checked_mul(channels)
            .ok_or(RingBufferError::TooLarge { capacity, channels })?;

        debug!(capacity, channels, "ring buffer allocated");

        Ok(RingBuffer {
            data: vec![T::default(); len],
            capacity,
            channels,
            write_index: 0,
            full: false,
        })
    }
}

impl<T: Copy> RingBuffer<T> {
    /// Append a chunk of rows, overwriting the oldest rows if necessary
    ///
    /// If the chunk holds more than `capacity` rows only its last `capacity`
    /// rows are kept. An empty chunk leaves the buffer untouched.
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RingBufferError::ShapeMismatch)` if any row is not exactly
    ///   `channels` wide; nothing is written in that case
    pub fn append<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<(), RingBufferError> {
        let channels = self.channels;
        if let Some((row, actual)) = rows
            .iter()
            .map(|r| r.as_ref().len())
            .enumerate()
            .find(|&(_, width)| width != channels)
        {
            return Err(RingBufferError::ShapeMismatch {
                row,
                expected: channels,
                actual,
            });
        }

        let rows = newest(rows, self.capacity);
        let Some(placement) = self.place(rows.len()) else {
            return Ok(());
        };

        for (i, row) in rows.iter().enumerate() {
            let dst = if i < placement.tail_len {
                placement.start + i
            } else {
                i - placement.tail_len
            };
            self.data[dst * channels..(dst + 1) * channels].copy_from_slice(row.as_ref());
        }
        Ok(())
    }

    /// Append a chunk given as one flat row-major slice
    ///
    /// Behaves like [`append`](Self::append), with the chunk split into rows
    /// of `channels` values. A zero-channel buffer only accepts an empty
    /// slice, which is a no-op.
    ///
    /// # Returns
    /// * `Ok(())` on success
    /// * `Err(RingBufferError::Misaligned)` if `data.len()` is not a multiple
    ///   of `channels`
    pub fn append_interleaved(&mut self, data: &[T]) -> Result<(), RingBufferError> {
        let channels = self.channels;
        if channels == 0 {
            if data.is_empty() {
                return Ok(());
            }
            return Err(RingBufferError::Misaligned {
                len: data.len(),
                channels,
            });
        }
        if data.len() % channels != 0 {
            return Err(RingBufferError::Misaligned {
                len: data.len(),
                channels,
            });
        }

        let num_rows = data.len() / channels;
        let kept = num_rows.min(self.capacity);
        if kept < num_rows {
            trace!(dropped = num_rows - kept, "oversized chunk truncated");
        }
        let data = &data[(num_rows - kept) * channels..];
        let Some(placement) = self.place(kept) else {
            return Ok(());
        };

        let split = placement.tail_len * channels;
        let start = placement.start * channels;
        self.data[start..start + split].copy_from_slice(&data[..split]);
        self.data[..placement.head_len * channels].copy_from_slice(&data[split..]);
        Ok(())
    }

    /// Get every valid row, oldest first
    ///
    /// The result is an independent copy of `len()` rows; later appends do
    /// not change it. Costs at most one copy of the whole storage.
    pub fn get(&self) -> Frames<T> {
        let split = self.write_index * self.channels;
        if self.full {
            let mut out = Vec::with_capacity(self.data.len());
            out.extend_from_slice(&self.data[split..]);
            out.extend_from_slice(&self.data[..split]);
            Frames::new(out, self.capacity, self.channels)
        } else {
            Frames::new(
                self.data[..split].to_vec(),
                self.write_index,
                self.channels,
            )
        }
    }

    /// Advance the cursor for a write of `n` rows and return where they land
    ///
    /// `n` must not exceed `capacity`. Returns `None` for an empty write.
    fn place(&mut self, n: usize) -> Option<Placement> {
        if n == 0 {
            return None;
        }
        debug_assert!(n <= self.capacity);

        let start = self.write_index;

        // Strict: a write ending exactly at the physical end takes the wrap
        // branch, which marks the buffer full and moves the cursor to 0.
        if start + n < self.capacity {
            self.write_index += n;
            return Some(Placement {
                start,
                tail_len: n,
                head_len: 0,
            });
        }

        let tail_len = self.capacity - start;
        let head_len = n - tail_len;
        if !self.full {
            trace!(capacity = self.capacity, "ring buffer full");
        }
        self.full = true;
        self.write_index = head_len;
        trace!(start, tail_len, head_len, "write wrapped");

        Some(Placement {
            start,
            tail_len,
            head_len,
        })
    }
}

impl<T> RingBuffer<T> {
    /// Get the capacity in rows
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of values per row
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Get the `(capacity, channels)` shape fixed at construction
    pub fn shape(&self) -> (usize, usize) {
        (self.capacity, self.channels)
    }

    /// Get the number of valid rows
    pub fn len(&self) -> usize {
        if self.full {
            self.capacity
        } else {
            self.write_index
        }
    }

    /// Check if no row has been written yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the buffer has wrapped at least once
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Get the row where the next write begins
    pub fn write_index(&self) -> usize {
        self.write_index
    }
}

/// The last `capacity` items of `items`.
fn newest<S>(items: &[S], capacity: usize) -> &[S] {
    let dropped = items.len().saturating_sub(capacity);
    if dropped > 0 {
        trace!(dropped, "oversized chunk truncated");
    }
    &items[dropped..]
}
