//! Fixed-Capacity Rolling Median Reservoir
//!
//! ## Overview
//!
//! Averages are fragile: one frame from a half-reset humidity probe reading
//! 0 % or 6553.5 % drags a mean far from the truth. A median over the last
//! few dozen samples shrugs that off. This module keeps such a median over
//! `u16` samples without touching the heap.
//!
//! Unlike the accumulators, a reservoir is **never reset**. It is a rolling
//! window that spans record boundaries; reading the median does not consume
//! anything.
//!
//! ## Design
//!
//! Two views of the same samples are maintained side by side:
//!
//! ```text
//! ring (arrival order)      sorted (ascending)
//! ┌───┬───┬───┬───┬───┐     ┌───┬───┬───┬───┬───┐
//! │ 7 │ 3 │ 9 │ 1 │ 5 │     │ 1 │ 3 │ 5 │ 7 │ 9 │
//! └───┴───┴───┴───┴───┘     └───┴───┴───┴───┴───┘
//!   ↑ write_pos (oldest once full)      ↑ median = sorted[len / 2]
//! ```
//!
//! - The ring decides *which* sample to evict (the one at `write_pos` once
//!   the ring is full).
//! - The sorted mirror answers the median in O(1). Eviction and insertion
//!   each locate their slot by binary search (O(log N)) and then shift at
//!   most N elements, which for N = 30 is a few dozen bytes of `memmove`.
//!
//! ## Median Definition
//!
//! - Empty reservoir: `None`.
//! - Odd count: the middle element.
//! - Even count: the mean of the two middle elements, rounded down.
//!
//! ## Usage Example
//!
//! ```rust
//! use weatherguard_core::buffer::MedianReservoir;
//!
//! let mut humidity: MedianReservoir<5> = MedianReservoir::new();
//! for sample in [40, 41, 250, 42, 43] {
//!     humidity.add(sample);
//! }
//! // The 250 spike does not move the median
//! assert_eq!(humidity.median(), Some(42));
//! ```

use heapless::Vec;

use crate::constants::buffers::MEDIAN_WINDOW;

/// Rolling window of the last `N` samples with an O(1) median query
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N` and `sorted.len() == len`
/// - `sorted` holds exactly the multiset of live ring slots, ascending
#[derive(Clone)]
pub struct MedianReservoir<const N: usize = MEDIAN_WINDOW> {
    /// Samples in arrival order; slots past `len` are unused until filled
    data: [u16; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Number of live samples
    len: usize,

    /// The same samples, ascending
    sorted: Vec<u16, N>,
}

impl<const N: usize> MedianReservoir<N> {
    const NON_EMPTY: () = assert!(N > 0, "MedianReservoir capacity must be non-zero");

    /// Creates an empty reservoir
    ///
    /// Usable in static context.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        Self {
            data: [0; N],
            write_pos: 0,
            len: 0,
            sorted: Vec::new(),
        }
    }

    /// Adds a sample, evicting the oldest one once the reservoir is full
    pub fn add(&mut self, sample: u16) {
        if self.len == N {
            let evicted = self.data[self.write_pos];
            if let Ok(idx) = self.sorted.binary_search(&evicted) {
                self.sorted.remove(idx);
            }
        } else {
            self.len += 1;
        }

        self.data[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % N;

        let slot = match self.sorted.binary_search(&sample) {
            Ok(idx) | Err(idx) => idx,
        };
        // Cannot fail: the eviction above leaves room for one more sample.
        let _ = self.sorted.insert(slot, sample);
        debug_assert_eq!(self.sorted.len(), self.len);
    }

    /// Median of the samples currently held, `None` when empty
    pub fn median(&self) -> Option<u16> {
        let len = self.sorted.len();
        if len == 0 {
            return None;
        }

        let mid = len / 2;
        if len % 2 == 1 {
            Some(self.sorted[mid])
        } else {
            let low = u32::from(self.sorted[mid - 1]);
            let high = u32::from(self.sorted[mid]);
            // Mean of two u16 values always fits back into u16
            Some(((low + high) / 2) as u16)
        }
    }

    /// Number of samples held
    pub fn len(&self) -> usize {
        self.len
    }

    /// True before the first sample arrives
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once `N` samples have been added
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Maximum number of samples held
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Smallest sample held
    pub fn min(&self) -> Option<u16> {
        self.sorted.first().copied()
    }

    /// Largest sample held
    pub fn max(&self) -> Option<u16> {
        self.sorted.last().copied()
    }

    /// Iterate over samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        // Once full, the oldest sample sits at the write position
        let start = if self.len < N { 0 } else { self.write_pos };
        (0..self.len).map(move |offset| self.data[(start + offset) % N])
    }
}

impl<const N: usize> Default for MedianReservoir<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for MedianReservoir<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MedianReservoir")
            .field("len", &self.len)
            .field("capacity", &N)
            .field("median", &self.median())
            .finish()
    }
}
