use std::ops::Range;

use bulk_model::DEFAULT_PER_PAGE;

/// 1-based page selection over a fixed number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    per_page: usize,
    item_count: usize,
}

impl Pager {
    pub fn new(item_count: usize, per_page: usize) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            item_count,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of pages; an empty list still has one (empty) page.
    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.per_page).max(1)
    }

    /// Select a page, clamped to `1..=page_count()`.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    /// Change the page size and go back to the first page.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    /// Index range of the current page.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.per_page).min(self.item_count);
        let end = (start + self.per_page).min(self.item_count);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(0, DEFAULT_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_split_input_order() {
        let items: Vec<u32> = (0..23).collect();
        let mut pager = Pager::new(items.len(), 10);

        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.slice(&items), &items[0..10]);

        pager.set_page(3);
        assert_eq!(pager.slice(&items), &items[20..23]);
    }

    #[test]
    fn set_page_clamps() {
        let mut pager = Pager::new(5, 2);
        pager.set_page(0);
        assert_eq!(pager.page(), 1);
        pager.set_page(99);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn set_per_page_resets_to_first_page() {
        let mut pager = Pager::new(30, 5);
        pager.set_page(4);
        pager.set_per_page(20);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.range(), 0..20);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let pager = Pager::new(0, 10);
        assert_eq!(pager.page_count(), 1);
        assert!(pager.range().is_empty());
    }
}
