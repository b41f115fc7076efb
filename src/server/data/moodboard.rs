//! Moodboard data repository for database operations
//!
//! Provides the `MoodboardRepository` for managing moodboards in the database. A
//! moodboard exclusively owns its images: reads load them with a query filtered on the
//! foreign key, and deletes remove them explicitly in the same transaction rather than
//! relying only on the schema's `ON DELETE CASCADE`.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    data::image::ImageRepository,
    model::{
        image::Image,
        moodboard::{CreateMoodboardParam, Moodboard},
    },
};

/// Repository providing database operations for moodboard management.
pub struct MoodboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MoodboardRepository<'a> {
    /// Creates a new MoodboardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `MoodboardRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new moodboard without images or cover.
    ///
    /// # Arguments
    /// - `param` - Title and optional description
    ///
    /// # Returns
    /// - `Ok(Moodboard)` - The created moodboard with generated ID and no images
    /// - `Err(DbErr)` - Database error during insert operation
    pub async fn create(&self, param: CreateMoodboardParam) -> Result<Moodboard, DbErr> {
        let entity = entity::moodboard::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            cover_image_url: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Moodboard::from_entity(entity, Vec::new()))
    }

    /// Gets every moodboard with its images.
    ///
    /// Loads all moodboards ordered by ID, then all of their images with a single
    /// query and groups them by owner.
    ///
    /// # Returns
    /// - `Ok(Vec<Moodboard>)` - Moodboards ordered by ascending ID, images by ascending ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Moodboard>, DbErr> {
        let moodboards = entity::prelude::Moodboard::find()
            .order_by_asc(entity::moodboard::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = moodboards.iter().map(|m| m.id).collect();

        let mut images_by_moodboard: HashMap<i32, Vec<Image>> = HashMap::new();
        if !ids.is_empty() {
            let images = entity::prelude::Image::find()
                .filter(entity::image::Column::MoodboardId.is_in(ids))
                .order_by_asc(entity::image::Column::Id)
                .all(self.db)
                .await?;

            for image in images {
                images_by_moodboard
                    .entry(image.moodboard_id)
                    .or_default()
                    .push(Image::from_entity(image));
            }
        }

        Ok(moodboards
            .into_iter()
            .map(|moodboard| {
                let images = images_by_moodboard.remove(&moodboard.id).unwrap_or_default();
                Moodboard::from_entity(moodboard, images)
            })
            .collect())
    }

    /// Finds a moodboard by ID together with its images.
    ///
    /// # Arguments
    /// - `id` - ID of the moodboard to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(Moodboard))` - The moodboard and its images if found
    /// - `Ok(None)` - No moodboard exists with the specified ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Moodboard>, DbErr> {
        let Some(entity) = entity::prelude::Moodboard::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let images = ImageRepository::new(self.db).get_by_moodboard_id(id).await?;

        Ok(Some(Moodboard::from_entity(entity, images)))
    }

    /// Checks whether a moodboard exists.
    ///
    /// # Arguments
    /// - `id` - ID of the moodboard to check
    ///
    /// # Returns
    /// - `Ok(true)` - Moodboard exists
    /// - `Ok(false)` - No moodboard with this ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Moodboard::find()
            .filter(entity::moodboard::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Saves the moodboard's own columns, inserting the row if it does not exist.
    ///
    /// Writes title, description and cover image URL. The image collection is not
    /// touched; images are created through `ImageRepository` and removed through
    /// `remove_image` or `delete`. The images of the returned moodboard are reloaded
    /// from the database.
    ///
    /// # Arguments
    /// - `moodboard` - The moodboard state to persist
    ///
    /// # Returns
    /// - `Ok(Moodboard)` - The persisted moodboard with its current images
    /// - `Err(DbErr)` - Database error during insert or update operation
    pub async fn save(&self, moodboard: Moodboard) -> Result<Moodboard, DbErr> {
        let existing = entity::prelude::Moodboard::find_by_id(moodboard.id)
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active_model: entity::moodboard::ActiveModel = existing.into();
                active_model.title = ActiveValue::Set(moodboard.title);
                active_model.description = ActiveValue::Set(moodboard.description);
                active_model.cover_image_url = ActiveValue::Set(moodboard.cover_image_url);

                active_model.update(self.db).await?
            }
            None => {
                entity::moodboard::ActiveModel {
                    id: ActiveValue::Set(moodboard.id),
                    title: ActiveValue::Set(moodboard.title),
                    description: ActiveValue::Set(moodboard.description),
                    cover_image_url: ActiveValue::Set(moodboard.cover_image_url),
                }
                .insert(self.db)
                .await?
            }
        };

        let images = ImageRepository::new(self.db)
            .get_by_moodboard_id(entity.id)
            .await?;

        Ok(Moodboard::from_entity(entity, images))
    }

    /// Deletes a moodboard and every image it owns.
    ///
    /// Images are deleted before the moodboard within a single transaction so no image
    /// row can be left pointing at a missing moodboard.
    ///
    /// # Arguments
    /// - `id` - ID of the moodboard to delete
    ///
    /// # Returns
    /// - `Ok(true)` - The moodboard was deleted
    /// - `Ok(false)` - No moodboard existed with this ID
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Image::delete_many()
            .filter(entity::image::Column::MoodboardId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Moodboard::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes an image from a moodboard's collection.
    ///
    /// Images cannot exist without their moodboard, so removal deletes the image row.
    /// An image belonging to a different moodboard is left untouched.
    ///
    /// # Arguments
    /// - `moodboard_id` - ID of the owning moodboard
    /// - `image_id` - ID of the image to remove
    ///
    /// # Returns
    /// - `Ok(true)` - The image was removed
    /// - `Ok(false)` - The moodboard owns no image with this ID
    /// - `Err(DbErr)` - Database error during delete operation
    pub async fn remove_image(&self, moodboard_id: i32, image_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Image::delete_many()
            .filter(entity::image::Column::Id.eq(image_id))
            .filter(entity::image::Column::MoodboardId.eq(moodboard_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
