//! Image factory for creating test image entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test images owned by a moodboard.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::image::ImageFactory;
///
/// let image = ImageFactory::new(&db, moodboard.id)
///     .image_url("/uploads/custom.png")
///     .build()
///     .await?;
/// ```
pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    moodboard_id: i32,
    image_url: String,
}

impl<'a> ImageFactory<'a> {
    /// Creates a new ImageFactory with default values.
    ///
    /// Defaults:
    /// - image_url: `"/uploads/image-{id}.jpg"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `moodboard_id` - ID of the owning moodboard
    ///
    /// # Returns
    /// - `ImageFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, moodboard_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            moodboard_id,
            image_url: format!("/uploads/image-{}.jpg", id),
        }
    }

    /// Sets the image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Builds and inserts the image entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created image entity
    /// - `Err(DbErr)` - Database error during insertion, including a foreign key
    ///   violation when the moodboard does not exist
    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        entity::image::ActiveModel {
            image_url: ActiveValue::Set(self.image_url),
            moodboard_id: ActiveValue::Set(self.moodboard_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image with default values for the given moodboard.
///
/// # Arguments
/// - `db` - Database connection
/// - `moodboard_id` - ID of the owning moodboard
///
/// # Returns
/// - `Ok(Model)` - The created image entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_image(
    db: &DatabaseConnection,
    moodboard_id: i32,
) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db, moodboard_id).build().await
}
