use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to create the temporary upload directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
