//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM active
//! models, bypassing the repositories under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let moodboard = factory::create_moodboard(&db).await?;
//!     let image = factory::create_image(&db, moodboard.id).await?;
//!
//!     // Create a moodboard owning several images
//!     let (moodboard, images) = factory::helpers::create_moodboard_with_images(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let moodboard = factory::moodboard::MoodboardFactory::new(&db)
//!     .title("Noir")
//!     .description(Some("dark tones"))
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod image;
pub mod moodboard;

// Re-export commonly used factory functions for concise usage
pub use image::create_image;
pub use moodboard::create_moodboard;
