//! Capability trait shared by buffer implementations.

use crate::error::RingBufferError;
use crate::frames::Frames;
use crate::ring_buffer::RingBuffer;

/// A bounded store of multi-channel rows that can be appended to and read
/// back in full.
///
/// This is the only surface the profile harness needs, so alternative
/// implementations can be measured side by side. The trait is object safe:
/// chunks are passed as flat row-major slices.
pub trait SampleBuffer<T> {
    /// `(capacity, channels)`.
    fn shape(&self) -> (usize, usize);

    /// Appends a flat row-major chunk, keeping at most `capacity` rows.
    fn append(&mut self, chunk: &[T]) -> Result<(), RingBufferError>;

    /// Returns every retained row, oldest first.
    fn get(&self) -> Frames<T>;
}

impl<T: Copy> SampleBuffer<T> for RingBuffer<T> {
    fn shape(&self) -> (usize, usize) {
        RingBuffer::shape(self)
    }

    fn append(&mut self, chunk: &[T]) -> Result<(), RingBufferError> {
        self.append_interleaved(chunk)
    }

    fn get(&self) -> Frames<T> {
        RingBuffer::get(self)
    }
}
