//! Moodboard factory for creating test moodboard entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test moodboards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::moodboard::MoodboardFactory;
///
/// let moodboard = MoodboardFactory::new(&db)
///     .title("Noir")
///     .cover_image_url(Some("/uploads/cover.jpg"))
///     .build()
///     .await?;
/// ```
pub struct MoodboardFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
    cover_image_url: Option<String>,
}

impl<'a> MoodboardFactory<'a> {
    /// Creates a new MoodboardFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Moodboard {id}"` where id is auto-incremented
    /// - description: `None`
    /// - cover_image_url: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MoodboardFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Moodboard {}", id),
            description: None,
            cover_image_url: None,
        }
    }

    /// Sets the moodboard title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the moodboard description.
    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = description.map(Into::into);
        self
    }

    /// Sets the cover image URL.
    pub fn cover_image_url(mut self, cover_image_url: Option<impl Into<String>>) -> Self {
        self.cover_image_url = cover_image_url.map(Into::into);
        self
    }

    /// Builds and inserts the moodboard entity into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created moodboard entity
    /// - `Err(DbErr)` - Database error during insertion
    pub async fn build(self) -> Result<entity::moodboard::Model, DbErr> {
        entity::moodboard::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            cover_image_url: ActiveValue::Set(self.cover_image_url),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a moodboard with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created moodboard entity
/// - `Err(DbErr)` - Database error during insertion
pub async fn create_moodboard(db: &DatabaseConnection) -> Result<entity::moodboard::Model, DbErr> {
    MoodboardFactory::new(db).build().await
}
