//! Owned snapshot of buffered rows.

/// A row-major block of samples returned by [`RingBuffer::get`].
///
/// The block owns its data, so later appends to the buffer never change it.
/// The row count is tracked separately from the data so that zero-channel
/// buffers still report how many (empty) rows they hold.
///
/// [`RingBuffer::get`]: crate::RingBuffer::get
#[derive(Debug, Clone, PartialEq)]
pub struct Frames<T> {
    data: Vec<T>,
    num_rows: usize,
    channels: usize,
}

impl<T> Frames<T> {
    /// Wrap flat row-major samples as `num_rows` rows of `channels` values.
    ///
    /// # Panics
    /// Panics if `data.len() != num_rows * channels`
    pub fn new(data: Vec<T>, num_rows: usize, channels: usize) -> Self {
        assert_eq!(
            Some(data.len()),
            num_rows.checked_mul(channels),
            "{} values do not form {num_rows} rows of {channels} channels",
            data.len()
        );
        Self {
            data,
            num_rows,
            channels,
        }
    }

    /// Number of rows, oldest first.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of values per row.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns true if the block holds no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Returns row `index`, or `None` if out of range.
    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index >= self.num_rows {
            return None;
        }
        let start = index * self.channels;
        Some(&self.data[start..start + self.channels])
    }

    /// Iterates over the rows in chronological order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.num_rows).map(move |i| {
            let start = i * self.channels;
            &self.data[start..start + self.channels]
        })
    }

    /// The samples as one flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the block and returns the flat row-major samples.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Frames<T> {
    /// Copies the rows out as one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_access() {
        let frames = Frames::new(vec![1, 2, 3, 4, 5, 6], 3, 2);
        assert_eq!(frames.num_rows(), 3);
        assert_eq!(frames.channels(), 2);
        assert_eq!(frames.row(1), Some(&[3, 4][..]));
        assert_eq!(frames.row(3), None);
        assert_eq!(frames.to_rows(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    }

    #[test]
    fn test_zero_channel_rows() {
        let frames: Frames<f64> = Frames::new(Vec::new(), 4, 0);
        assert!(!frames.is_empty());
        assert_eq!(frames.rows().len(), 4);
        assert!(frames.rows().all(|row| row.is_empty()));
    }
}
