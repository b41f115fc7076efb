//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a moodboard owning `count` images.
///
/// Images are inserted in order, so the returned vector is sorted by ascending ID.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of images to create for the moodboard
///
/// # Returns
/// - `Ok((moodboard, images))` - The created moodboard and its images
/// - `Err(DbErr)` - Database error during creation
pub async fn create_moodboard_with_images(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::moodboard::Model, Vec<entity::image::Model>), DbErr> {
    let moodboard = crate::factory::moodboard::create_moodboard(db).await?;

    let mut images = Vec::with_capacity(count);
    for _ in 0..count {
        images.push(crate::factory::image::create_image(db, moodboard.id).await?);
    }

    Ok((moodboard, images))
}
