//! Page bookkeeping for the product table.

use std::ops::Range;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_CHOICES: [usize; 4] = [5, 10, 20, 50];

/// Pages shown on each side of the current page.
const WINDOW_RADIUS: usize = 2;

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    page_size: usize,
}

/// One pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    /// Target page (may be out of range for a disabled control)
    pub page: usize,
    pub active: bool,
    pub disabled: bool,
}

/// Previous/next controls and the window of page numbers around the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub prev: PageLink,
    pub pages: Vec<PageLink>,
    pub next: PageLink,
}

impl Pagination {
    /// Create pagination on page 1. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for `len` items: ceil(len / page_size).
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Clamp the current page into `[1, max(total_pages, 1)]`.
    pub fn clamp(&mut self, len: usize) {
        let last = self.total_pages(len).max(1);
        self.current_page = self.current_page.clamp(1, last);
    }

    /// Jump back to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Change page size and go back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.current_page = 1;
    }

    /// Move to the next entry of [`PAGE_SIZE_CHOICES`], wrapping around.
    ///
    /// A page size not in the list moves to the smallest choice above it.
    pub fn cycle_page_size(&mut self) {
        let next = PAGE_SIZE_CHOICES
            .iter()
            .copied()
            .find(|&size| size > self.page_size)
            .unwrap_or(PAGE_SIZE_CHOICES[0]);
        self.set_page_size(next);
    }

    /// Go to `page` if it exists.
    ///
    /// # Returns
    /// * `bool` - True if the page changed; out-of-range targets are a no-op
    pub fn go_to(&mut self, page: usize, len: usize) -> bool {
        if page < 1 || page > self.total_pages(len) || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self, len: usize) -> bool {
        self.go_to(self.current_page + 1, len)
    }

    pub fn prev(&mut self, len: usize) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to(page, len),
            None => false,
        }
    }

    /// Index range of the current page within a view of `len` items.
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Build the controls for a view of `len` items.
    ///
    /// # Returns
    /// * `Option<PageControls>` - None when there are no pages at all
    pub fn controls(&self, len: usize) -> Option<PageControls> {
        let total = self.total_pages(len);
        if total == 0 {
            return None;
        }
        let current = self.current_page;
        let first = current.saturating_sub(WINDOW_RADIUS).max(1);
        let last = (current + WINDOW_RADIUS).min(total);

        let pages = (first..=last)
            .map(|page| PageLink {
                page,
                active: page == current,
                disabled: false,
            })
            .collect();

        Some(PageControls {
            prev: PageLink {
                page: current.saturating_sub(1),
                active: false,
                disabled: current == 1,
            },
            pages,
            next: PageLink {
                page: current + 1,
                active: false,
                disabled: current == total,
            },
        })
    }

    /// Summary line such as "Showing 11-20 of 57 items".
    ///
    /// # Returns
    /// * `Option<String>` - None when the current page is empty
    pub fn summary(&self, len: usize) -> Option<String> {
        let range = self.range(len);
        if range.is_empty() {
            return None;
        }
        Some(format!(
            "Showing {}-{} of {} items",
            range.start + 1,
            range.end,
            len
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_numbers(controls: &PageControls) -> Vec<usize> {
        controls.pages.iter().map(|l| l.page).collect()
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(11), 2);
        assert_eq!(pagination.total_pages(57), 6);
    }

    #[test]
    fn test_navigation_out_of_bounds_is_noop() {
        let mut pagination = Pagination::new(10);
        assert!(!pagination.prev(25));
        assert_eq!(pagination.current_page(), 1);
        assert!(!pagination.go_to(0, 25));
        assert!(!pagination.go_to(4, 25));
        assert!(pagination.go_to(3, 25));
        assert!(!pagination.next(25));
        assert_eq!(pagination.current_page(), 3);
        assert!(pagination.prev(25));
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_navigation_on_empty_view() {
        let mut pagination = Pagination::new(10);
        assert!(!pagination.next(0));
        assert!(!pagination.go_to(1, 0));
        assert_eq!(pagination.current_page(), 1);
        assert!(pagination.controls(0).is_none());
        assert!(pagination.summary(0).is_none());
        assert_eq!(pagination.range(0), 0..0);
    }

    #[test]
    fn test_range_and_summary() {
        let mut pagination = Pagination::new(10);
        pagination.go_to(6, 57);
        assert_eq!(pagination.range(57), 50..57);
        assert_eq!(
            pagination.summary(57).as_deref(),
            Some("Showing 51-57 of 57 items")
        );
    }

    #[test]
    fn test_clamp_after_view_shrinks() {
        let mut pagination = Pagination::new(10);
        pagination.go_to(5, 50);
        pagination.clamp(12);
        assert_eq!(pagination.current_page(), 2);
        pagination.clamp(0);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pagination = Pagination::new(10);
        pagination.go_to(3, 50);
        pagination.set_page_size(20);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.page_size(), 20);
        pagination.set_page_size(0);
        assert_eq!(pagination.page_size(), 1);
    }

    #[test]
    fn test_cycle_page_size_wraps() {
        let mut pagination = Pagination::new(10);
        pagination.cycle_page_size();
        assert_eq!(pagination.page_size(), 20);
        pagination.cycle_page_size();
        assert_eq!(pagination.page_size(), 50);
        pagination.cycle_page_size();
        assert_eq!(pagination.page_size(), 5);
        let mut odd = Pagination::new(7);
        odd.cycle_page_size();
        assert_eq!(odd.page_size(), 10);
    }

    #[test]
    fn test_controls_window_radius_two() {
        let mut pagination = Pagination::new(10);
        let controls = pagination.controls(100).unwrap();
        assert_eq!(page_numbers(&controls), vec![1, 2, 3]);
        assert!(controls.prev.disabled);
        assert!(!controls.next.disabled);
        assert!(controls.pages[0].active);

        pagination.go_to(5, 100);
        let controls = pagination.controls(100).unwrap();
        assert_eq!(page_numbers(&controls), vec![3, 4, 5, 6, 7]);
        assert!(!controls.prev.disabled);
        assert_eq!(controls.prev.page, 4);
        assert_eq!(controls.next.page, 6);

        pagination.go_to(10, 100);
        let controls = pagination.controls(100).unwrap();
        assert_eq!(page_numbers(&controls), vec![8, 9, 10]);
        assert!(controls.next.disabled);
    }

    #[test]
    fn test_single_page_disables_both() {
        let pagination = Pagination::new(10);
        let controls = pagination.controls(4).unwrap();
        assert_eq!(page_numbers(&controls), vec![1]);
        assert!(controls.prev.disabled);
        assert!(controls.next.disabled);
    }
}
