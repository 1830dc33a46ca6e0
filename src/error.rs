use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("failed to fetch tickets: {0}")]
    FetchFailure(String),
    #[error("ticket source returned no tickets")]
    EmptySourceData,
    #[error("invalid grouping option '{0}' (expected status, user or priority)")]
    InvalidGroupingOption(String),
    #[error("invalid sort option '{0}' (expected priority or title)")]
    InvalidSortOption(String),
    #[error("persisted view state is malformed: {0}")]
    PersistedStateMalformed(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
