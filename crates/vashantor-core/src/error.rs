#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Please select a dialect")]
    MissingDialect,

    #[error("Failed to load file: {0}")]
    FetchStatus(u16),

    #[error("Failed to load file: {0}")]
    Fetch(String),

    #[error("No data available for this split")]
    EmptySplit,
}

impl LoadError {
    /// Text shown to the user when a load fails
    pub fn user_message(&self) -> String {
        match self {
            LoadError::MissingDialect => self.to_string(),
            _ => format!("Error loading data: {self}"),
        }
    }
}
