//! Domain & parameter models for moodboard operations
//!
//! Defines the moodboard domain model, the moodboard parameter models,
//! and provides methods to convert the domain model from entity and into DTOs.

use crate::{
    model::moodboard::{CreateMoodboardDto, MoodboardDto},
    server::model::image::Image,
};

/// The moodboard domain model
///
/// A titled collection of images. `images` holds every image owned by the moodboard,
/// in insertion order. Images reference their moodboard only by ID, so the model
/// graph is a tree and serializes without cycles.
#[derive(Debug, Clone, PartialEq)]
pub struct Moodboard {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub images: Vec<Image>,
}

impl Moodboard {
    /// Converts an entity model and its loaded images to the moodboard domain model
    ///
    /// # Arguments
    /// - `entity` - The moodboard entity model from the database
    /// - `images` - Images owned by the moodboard, already ordered
    ///
    /// # Returns
    /// - `Moodboard` - The converted domain model
    pub fn from_entity(entity: entity::moodboard::Model, images: Vec<Image>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            cover_image_url: entity.cover_image_url,
            images,
        }
    }

    /// Converts the domain model into a DTO for API responses, images included
    pub fn into_dto(self) -> MoodboardDto {
        MoodboardDto {
            id: self.id,
            title: self.title,
            description: self.description,
            cover_image_url: self.cover_image_url,
            images: self.images.into_iter().map(Image::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new moodboard
///
/// An empty title is rejected by the service before anything is inserted.
#[derive(Debug, Clone)]
pub struct CreateMoodboardParam {
    pub title: String,
    pub description: Option<String>,
}

impl From<CreateMoodboardDto> for CreateMoodboardParam {
    fn from(dto: CreateMoodboardDto) -> Self {
        Self {
            title: dto.title.unwrap_or_default(),
            description: dto.description,
        }
    }
}
