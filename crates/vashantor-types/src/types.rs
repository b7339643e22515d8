#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Load the file for `dialect` and show the window selected by `split`
    Load {
        dialect: Option<String>,
        split: usize,
    },
    ChangePage(Direction),
    ListDialects,
    Quit,
    Loading {
        label: String,
    },
    ShowPage(PageView),
    ShowError(String),
    ShowDialects(Vec<String>),
    /// Informational line for the user, not an error
    Notice(String),
    BackendReady,
}

/// One parsed data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Reference-language text
    pub standard: String,
    /// Dialect-rendered text
    pub dialect: String,
    /// Human-readable dialect label
    pub dialect_name: String,
}

impl Record {
    pub fn new(
        standard: impl Into<String>,
        dialect: impl Into<String>,
        dialect_name: impl Into<String>,
    ) -> Self {
        Self {
            standard: standard.into(),
            dialect: dialect.into(),
            dialect_name: dialect_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    /// 1-based position inside the active split
    pub index: usize,
    pub record: Record,
}

/// Everything the UI needs to draw one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub label: String,
    pub rows: Vec<PageRow>,
    pub start_item: usize,
    pub end_item: usize,
    pub total_items: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageView {
    /// `Showing 1-5 of 12`
    pub fn range_text(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.start_item, self.end_item, self.total_items
        )
    }

    /// `Page 1 of 3`
    pub fn page_text(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}
