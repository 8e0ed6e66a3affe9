//! Timestamped sensor samples and the bounded in-RAM log holding them.

use heapless::Deque;

use crate::time::TimeOfDay;

/// One raw sensor reading stamped with the RTC time it was taken at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub time: TimeOfDay,
    pub raw: u16,
}

impl Sample {
    pub const fn new(time: TimeOfDay, raw: u16) -> Self {
        Self { time, raw }
    }

    /// Writes `HH:MM:SS,<raw>` into `buf` and returns the written text.
    ///
    /// Fails if `buf` is too small for the record.
    pub fn write_csv<'a>(&self, buf: &'a mut [u8]) -> Result<&'a str, core::fmt::Error> {
        format_no_std::show(
            buf,
            format_args!(
                "{:02}:{:02}:{:02},{}",
                self.time.hour(),
                self.time.minute(),
                self.time.second(),
                self.raw
            ),
        )
    }
}

/// Fixed-capacity log of the most recent `N` samples.
///
/// When full, pushing evicts the oldest sample and bumps [`dropped`](Self::dropped).
pub struct SampleLog<const N: usize> {
    samples: Deque<Sample, N>,
    dropped: u32,
}

impl<const N: usize> SampleLog<N> {
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
            dropped: 0,
        }
    }

    pub fn push(&mut self, sample: Sample) {
        if self.samples.is_full() {
            self.samples.pop_front();
            self.dropped = self.dropped.saturating_add(1);
        }
        // cannot fail, a slot was freed above
        let _ = self.samples.push_back(sample);
    }

    /// Most recently pushed sample.
    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Samples evicted since the last [`clear`](Self::clear).
    pub fn dropped(&self) -> u32 {
        self.dropped
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.dropped = 0;
    }
}

impl<const N: usize> Default for SampleLog<N> {
    fn default() -> Self {
        Self::new()
    }
}
