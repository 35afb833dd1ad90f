//! Splits a device's port range into fixed-size pages.

use std::ops::RangeInclusive;

/// A contiguous, 1-based, inclusive run of ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub first: usize,
    pub last: usize,
}

impl Section {
    pub fn len(&self) -> usize {
        self.last + 1 - self.first
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    pub fn ports(&self) -> RangeInclusive<usize> {
        self.first..=self.last
    }

    /// The range as shown in the section title, e.g. "13-24".
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.first, self.last)
    }
}

/// Partitions ports 1..=\p port_count into sections of \p page_size. The
/// last section holds whatever is left over.
pub fn paginate(port_count: usize, page_size: usize) -> Vec<Section> {
    let page_size = page_size.max(1);
    (1..=port_count)
        .step_by(page_size)
        .map(|first| Section {
            first,
            last: (first + page_size - 1).min(port_count),
        })
        .collect()
}
