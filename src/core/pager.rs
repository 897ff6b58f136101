//! Client-side paging over an in-memory list.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current: usize,
    page_size: usize,
    total_pages: usize,
}

impl Pager {
    /// A page size of 0 is treated as 1.
    pub fn new(count: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            current: 1,
            page_size,
            total_pages: pages_for(count, page_size),
        }
    }

    /// One pager driving several independent lists: the page count is the
    /// largest across them.
    pub fn for_lists(counts: &[usize], page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = counts
            .iter()
            .map(|c| pages_for(*c, page_size))
            .max()
            .unwrap_or(1);
        Self {
            current: 1,
            page_size,
            total_pages,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.has_prev() {
            self.current -= 1;
        }
    }

    /// Jump to `page`, clamped to `[1, total_pages]`.
    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.total_pages);
    }

    /// Index range of the current page (may run past the end of a short list).
    pub fn window(&self) -> Range<usize> {
        let start = (self.current - 1) * self.page_size;
        start..start + self.page_size
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let w = self.window();
        let start = w.start.min(items.len());
        let end = w.end.min(items.len());
        &items[start..end]
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current, self.total_pages)
    }
}

fn pages_for(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}
