use vashantor_types::{Direction, PageView};

use crate::dataset::Dataset;
use crate::pagination::Pagination;

/// View state owned by the controller.
///
/// Every load request gets a generation number. Only the completion carrying
/// the latest generation may replace the state; older ones are stale.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    active: Option<Active>,
    generation: u64,
    loading: bool,
}

#[derive(Debug, Clone)]
struct Active {
    dataset: Dataset,
    pagination: Pagination,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request and hide the current data
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.active = None;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Snapshot showing page 1 of `dataset`, `None` if `generation` is stale
    pub fn with_dataset(&self, generation: u64, dataset: Dataset) -> Option<ViewState> {
        if !self.is_current(generation) {
            return None;
        }

        let pagination = Pagination::new(dataset.len());
        Some(ViewState {
            active: Some(Active {
                dataset,
                pagination,
            }),
            generation,
            loading: false,
        })
    }

    /// Record a failed request. Returns `false` for a stale generation.
    pub fn fail_load(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }

        self.loading = false;
        self.active = None;
        true
    }

    /// Returns `true` when the page moved and needs re-rendering
    pub fn change_page(&mut self, direction: Direction) -> bool {
        match self.active.as_mut() {
            Some(active) => active.pagination.change_page(direction),
            None => false,
        }
    }

    pub fn page_view(&self) -> Option<PageView> {
        self.active.as_ref().map(|active| {
            active
                .pagination
                .view(&active.dataset.label(), &active.dataset.records)
        })
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.active.as_ref().map(|active| &active.dataset)
    }

    pub fn current_page(&self) -> Option<usize> {
        self.active
            .as_ref()
            .map(|active| active.pagination.current_page())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
