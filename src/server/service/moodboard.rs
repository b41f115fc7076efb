use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{image::ImageRepository, moodboard::MoodboardRepository},
    error::AppError,
    model::{
        image::{CreateImageParam, Image},
        moodboard::{CreateMoodboardParam, Moodboard},
        upload::FileUpload,
    },
    service::file_storage::FileStorageService,
};

pub struct MoodboardService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a FileStorageService,
}

impl<'a> MoodboardService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a FileStorageService) -> Self {
        Self { db, storage }
    }

    /// Gets all moodboards with their images
    pub async fn get_all(&self) -> Result<Vec<Moodboard>, AppError> {
        let moodboards = MoodboardRepository::new(self.db).get_all().await?;

        Ok(moodboards)
    }

    /// Gets a moodboard with its images, None if it doesn't exist
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Moodboard>, AppError> {
        let moodboard = MoodboardRepository::new(self.db).get_by_id(id).await?;

        Ok(moodboard)
    }

    /// Creates a new moodboard
    ///
    /// Rejects a blank title before anything is written.
    pub async fn create(&self, param: CreateMoodboardParam) -> Result<Moodboard, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title must not be empty".to_string()));
        }

        let moodboard = MoodboardRepository::new(self.db).create(param).await?;

        tracing::info!("Created moodboard {}", moodboard.id);

        Ok(moodboard)
    }

    /// Stores a new cover image and points the moodboard at it
    ///
    /// Returns None if the moodboard doesn't exist, in which case nothing is stored.
    /// The moodboard is read, modified and saved without locking, so concurrent cover
    /// uploads for the same moodboard resolve to whichever save lands last.
    pub async fn upload_cover_image(
        &self,
        id: i32,
        upload: FileUpload,
    ) -> Result<Option<Moodboard>, AppError> {
        let repo = MoodboardRepository::new(self.db);

        let Some(mut moodboard) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let file_name = self
            .storage
            .store_file(&upload.bytes, &upload.file_name)
            .await?;

        moodboard.cover_image_url = Some(FileStorageService::public_url(&file_name));

        let moodboard = repo.save(moodboard).await?;

        Ok(Some(moodboard))
    }

    /// Stores an uploaded image and adds it to the moodboard
    ///
    /// Returns None if the moodboard doesn't exist, in which case nothing is stored.
    /// If inserting the image row fails the stored file stays on disk.
    pub async fn add_image(&self, id: i32, upload: FileUpload) -> Result<Option<Image>, AppError> {
        if !MoodboardRepository::new(self.db).exists(id).await? {
            return Ok(None);
        }

        let file_name = self
            .storage
            .store_file(&upload.bytes, &upload.file_name)
            .await?;

        let image = ImageRepository::new(self.db)
            .create(CreateImageParam {
                moodboard_id: id,
                image_url: FileStorageService::public_url(&file_name),
            })
            .await?;

        Ok(Some(image))
    }
}
