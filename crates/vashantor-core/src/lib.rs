pub mod dataset;
pub mod error;
pub mod pagination;
pub mod parser;
pub mod render;
pub mod split;
pub mod state;
pub mod tokenizer;

pub use dataset::Dataset;
pub use error::LoadError;
pub use pagination::{PAGE_SIZE, Pagination};
pub use parser::{ParseOutcome, parse_records};
pub use split::{SPLIT_SIZE, split_window};
pub use state::ViewState;
