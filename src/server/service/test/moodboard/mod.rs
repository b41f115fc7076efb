use crate::server::{
    error::AppError,
    model::{moodboard::CreateMoodboardParam, upload::FileUpload},
    service::{file_storage::FileStorageService, moodboard::MoodboardService},
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_image;
mod upload_cover_image;

fn jpeg_upload(file_name: &str) -> FileUpload {
    FileUpload {
        file_name: file_name.to_string(),
        bytes: vec![0xff, 0xd8, 0xff, 0xe0],
    }
}

/// Counts the files currently in the upload directory
fn stored_file_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
