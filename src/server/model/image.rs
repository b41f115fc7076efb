//! Domain & parameter models for image operations

use crate::model::moodboard::ImageDto;

/// The image domain model
///
/// A single uploaded picture owned by exactly one moodboard. The owner is kept as a
/// plain foreign key value and is not part of the DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: i32,
    pub image_url: String,
    pub moodboard_id: i32,
}

impl Image {
    /// Converts an entity model to the image domain model
    pub fn from_entity(entity: entity::image::Model) -> Self {
        Self {
            id: entity.id,
            image_url: entity.image_url,
            moodboard_id: entity.moodboard_id,
        }
    }

    /// Converts the domain model into a DTO, dropping the owner reference
    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            id: self.id,
            image_url: self.image_url,
        }
    }
}

/// Parameters for creating a new image
#[derive(Debug, Clone)]
pub struct CreateImageParam {
    pub moodboard_id: i32,
    /// Public URL of the stored file, e.g. `/uploads/<name>`.
    pub image_url: String,
}
