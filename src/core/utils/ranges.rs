use std::ops::Range;

/// A sorted list of non-overlapping, non-adjacent byte ranges.
///
/// Built once per file from whatever excluded regions a scanner found, then
/// queried for every candidate span.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range<usize>>,
}

impl RangeSet {
    pub fn new(mut ranges: Vec<Range<usize>>) -> Self {
        ranges.retain(|r| r.start < r.end);
        ranges.sort_by_key(|r| (r.start, r.end));

        let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match merged.last_mut() {
                Some(last) if range.start <= last.end => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
        }
        Self { ranges: merged }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Range<usize>> {
        self.ranges.iter()
    }

    /// True if `span` shares at least one byte with any range.
    pub fn overlaps(&self, span: &Range<usize>) -> bool {
        if span.start >= span.end {
            return false;
        }
        // First range that ends after the span starts
        let idx = self.ranges.partition_point(|r| r.end <= span.start);
        self.ranges
            .get(idx)
            .is_some_and(|r| r.start < span.end)
    }
}

impl FromIterator<Range<usize>> for RangeSet {
    fn from_iter<I: IntoIterator<Item = Range<usize>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
