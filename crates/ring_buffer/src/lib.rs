use std::ops::RangeInclusive;

/// Fixed-length circular buffer answering range-sum queries in O(1).
///
/// - The contents are fixed at construction; only the read pointer moves.
/// - Query ranges are closed and expressed as offsets from the read pointer.
/// - Sums come from a precomputed prefix-sum array; a range wrapping the
///   physical end of the buffer resolves as tail sum plus head sum.
#[derive(Clone, Debug)]
pub struct RingBuffer {
    values: Vec<i64>,
    prefix: Vec<i64>,
    read_pos: usize,
}

impl RingBuffer {
    /// Builds a buffer over a copy of `values` with the read pointer at 0.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: &[i64]) -> Self {
        Self::with_read_pos(values, 0)
    }

    /// Builds a buffer over a copy of `values` with the read pointer at
    /// `read_pos % values.len()`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn with_read_pos(values: &[i64], read_pos: usize) -> Self {
        assert!(!values.is_empty(), "ring buffer must not be empty");
        let mut prefix = vec![0_i64; values.len() + 1];
        for (i, &v) in values.iter().enumerate() {
            prefix[i + 1] = prefix[i] + v;
        }
        Self {
            values: values.to_vec(),
            prefix,
            read_pos: read_pos % values.len(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Physical index that logical offset 0 currently maps to.
    #[inline]
    pub fn read_pos(&self) -> usize {
        self.read_pos
    }

    /// Advances the read pointer by `step`, wrapping at the buffer length.
    ///
    /// Backward movement by `k` positions is `advance(len() - k)`.
    pub fn advance(&mut self, step: usize) {
        self.read_pos = (self.read_pos + step) % self.values.len();
    }

    /// Sum of the closed logical range, both ends offsets from the read
    /// pointer.
    ///
    /// Returns `None` when the range is inverted or reaches past one full
    /// window (`end >= len()`).
    pub fn sum(&self, range: RangeInclusive<usize>) -> Option<i64> {
        let (start, end) = (*range.start(), *range.end());
        let n = self.values.len();
        if start > end || end >= n {
            return None;
        }

        let left = (self.read_pos + start) % n;
        let right = (self.read_pos + end) % n;
        if left <= right {
            Some(self.prefix[right + 1] - self.prefix[left])
        } else {
            Some(self.prefix[right + 1] + (self.prefix[n] - self.prefix[left]))
        }
    }
}
