use std::ops::Range;

use vashantor_types::{Direction, PageRow, PageView, Record};

/// Records per page
pub const PAGE_SIZE: usize = 5;

/// Current page over a list of `total_items` records.
///
/// `current_page` is 1-based and stays within `1..=total_pages()` whenever
/// there is at least one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    total_items: usize,
}

impl Pagination {
    pub fn new(total_items: usize) -> Self {
        Self {
            current_page: 1,
            total_items,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Zero for an empty list
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(PAGE_SIZE)
    }

    /// Index range of the visible records
    pub fn window(&self) -> Range<usize> {
        let start = self.start_index().min(self.total_items);
        let end = (start + PAGE_SIZE).min(self.total_items);
        start..end
    }

    /// 1-based number of the first visible item
    pub fn start_item(&self) -> usize {
        self.start_index() + 1
    }

    /// 1-based number of the last visible item
    pub fn end_item(&self) -> usize {
        self.current_page
            .saturating_mul(PAGE_SIZE)
            .min(self.total_items)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Move one page back or forward.
    ///
    /// Returns `false` and leaves the page untouched when the move would
    /// leave `1..=total_pages()`.
    pub fn change_page(&mut self, direction: Direction) -> bool {
        let Some(new_page) = self.current_page.checked_add_signed(direction.offset()) else {
            return false;
        };

        if new_page >= 1 && new_page <= self.total_pages() {
            self.current_page = new_page;
            true
        } else {
            false
        }
    }

    /// Snapshot of the visible page of `records`
    pub fn view(&self, label: &str, records: &[Record]) -> PageView {
        let window = self.window();
        let rows = records
            .get(window.clone())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(offset, record)| PageRow {
                index: window.start + offset + 1,
                record: record.clone(),
            })
            .collect();

        PageView {
            label: label.to_string(),
            rows,
            start_item: self.start_item(),
            end_item: self.end_item(),
            total_items: self.total_items,
            current_page: self.current_page,
            total_pages: self.total_pages(),
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    fn start_index(&self) -> usize {
        (self.current_page - 1).saturating_mul(PAGE_SIZE)
    }
}
