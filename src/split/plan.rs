//! Page-range partitioning.
//!
//! Callers speak in 1-indexed split points ("page 3 starts a new document");
//! a [`SplitPlan`] turns them into 0-indexed boundaries. The boundary list
//! always starts at 0, ends at the page count and is strictly increasing, so
//! every segment holds at least one page.

use std::ops::Range;

use crate::error::{Result, SplitError};

/// Boundaries of the segments a document is split into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPlan {
    boundaries: Vec<usize>,
}

impl SplitPlan {
    /// Plan a split into two parts where `page` (1-indexed) is the first page
    /// of the second part.
    ///
    /// # Errors
    ///
    /// - [`SplitError::DegenerateSplit`] if `page <= 1`
    /// - [`SplitError::SplitPointOutOfRange`] if `page > page_count`
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfsplit::split::SplitPlan;
    ///
    /// let plan = SplitPlan::single(3, 10).unwrap();
    /// assert_eq!(plan.boundaries(), &[0, 2, 10]);
    /// ```
    pub fn single(page: u32, page_count: usize) -> Result<Self> {
        if page <= 1 {
            return Err(SplitError::DegenerateSplit { page });
        }

        let boundary = page as usize - 1;
        if boundary >= page_count {
            return Err(SplitError::SplitPointOutOfRange { page, page_count });
        }

        Ok(Self {
            boundaries: vec![0, boundary, page_count],
        })
    }

    /// Plan a split where every entry of `pages` (1-indexed) starts a new
    /// segment. Order of `pages` does not matter.
    ///
    /// # Errors
    ///
    /// - [`SplitError::NoSplitPoints`] if `pages` is empty
    /// - [`SplitError::SplitPointOutOfRange`] if an entry is `<= 1` or
    ///   `>= page_count`
    /// - [`SplitError::DuplicateSplitPoint`] if an entry appears twice
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfsplit::split::SplitPlan;
    ///
    /// let plan = SplitPlan::multi(&[10, 3, 8], 20).unwrap();
    /// assert_eq!(plan.boundaries(), &[0, 2, 7, 9, 20]);
    /// assert_eq!(plan.segment_count(), 4);
    /// ```
    pub fn multi(pages: &[u32], page_count: usize) -> Result<Self> {
        if pages.is_empty() {
            return Err(SplitError::NoSplitPoints);
        }

        if let Some(&page) = pages
            .iter()
            .find(|&&page| page <= 1 || page as usize >= page_count)
        {
            return Err(SplitError::SplitPointOutOfRange { page, page_count });
        }

        let mut sorted = pages.to_vec();
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(SplitError::DuplicateSplitPoint { page: pair[0] });
        }

        let mut boundaries = Vec::with_capacity(sorted.len() + 2);
        boundaries.push(0);
        boundaries.extend(sorted.iter().map(|&page| page as usize - 1));
        boundaries.push(page_count);

        Ok(Self { boundaries })
    }

    /// 0-indexed boundaries, starting at 0 and ending at the page count.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Number of documents this plan produces.
    pub fn segment_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Half-open page ranges, one per output document.
    pub fn segments(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.boundaries.windows(2).map(|pair| pair[0]..pair[1])
    }
}
