//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed
//! by the request handlers. The state is initialized once during startup and then
//! cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use super::service::file_storage::FileStorageService;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `FileStorageService` wraps the upload directory in an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Local storage for uploaded files.
    ///
    /// Files written here are served under `/uploads` by the router.
    pub storage: FileStorageService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage` - File storage rooted at the upload directory
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, storage: FileStorageService) -> Self {
        Self { db, storage }
    }
}
