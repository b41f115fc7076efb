//! Image data repository for database operations
//!
//! Provides the `ImageRepository` for inserting and listing the images owned by a
//! moodboard. Deleting images is owned by `MoodboardRepository`, which enforces the
//! cascade and orphan removal rules.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::image::{CreateImageParam, Image};

/// Repository providing database operations for images.
pub struct ImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageRepository<'a> {
    /// Creates a new ImageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ImageRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an image owned by the given moodboard.
    ///
    /// # Arguments
    /// - `param` - Owning moodboard ID and the public URL of the stored file
    ///
    /// # Returns
    /// - `Ok(Image)` - The created image with generated ID
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the
    ///   moodboard does not exist
    pub async fn create(&self, param: CreateImageParam) -> Result<Image, DbErr> {
        let entity = entity::image::ActiveModel {
            image_url: ActiveValue::Set(param.image_url),
            moodboard_id: ActiveValue::Set(param.moodboard_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Image::from_entity(entity))
    }

    /// Gets all images owned by a moodboard in insertion order.
    ///
    /// # Arguments
    /// - `moodboard_id` - ID of the owning moodboard
    ///
    /// # Returns
    /// - `Ok(Vec<Image>)` - Images ordered by ascending ID, empty if none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_moodboard_id(&self, moodboard_id: i32) -> Result<Vec<Image>, DbErr> {
        let entities = entity::prelude::Image::find()
            .filter(entity::image::Column::MoodboardId.eq(moodboard_id))
            .order_by_asc(entity::image::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Image::from_entity).collect())
    }
}
