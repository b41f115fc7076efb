use super::*;

/// Tests uploading a cover image.
///
/// Verifies that the file is written to the upload directory and that only the cover
/// image URL changes on the moodboard.
///
/// Expected: Ok(Some) with cover image URL pointing at the stored file
#[tokio::test]
async fn sets_cover_image_url() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_moodboard_tables()
        .with_upload_dir()
        .build()
        .await
        .unwrap();
    let (db, dir) = test.db_and_upload_dir().await.unwrap();
    let storage = FileStorageService::new(dir);

    let (moodboard, images) = factory::helpers::create_moodboard_with_images(db, 1).await?;

    let service = MoodboardService::new(db, &storage);
    let updated = service
        .upload_cover_image(moodboard.id, jpeg_upload("cover.JPG"))
        .await?
        .unwrap();

    let cover = updated.cover_image_url.clone().unwrap();
    assert!(cover.starts_with("/uploads/"));
    assert!(cover.ends_with(".jpg"));

    let file_name = cover.trim_start_matches("/uploads/");
    assert!(dir.join(file_name).is_file());

    assert_eq!(updated.id, moodboard.id);
    assert_eq!(updated.title, moodboard.title);
    assert_eq!(updated.description, moodboard.description);
    assert_eq!(updated.images.len(), 1);
    assert_eq!(updated.images[0].id, images[0].id);

    // Verify the change is persisted
    let db_moodboard = Moodboard::find_by_id(moodboard.id).one(db).await?.unwrap();
    assert_eq!(db_moodboard.cover_image_url, Some(cover));

    Ok(())
}

/// Tests that a second cover upload replaces the first.
///
/// Expected: Ok with the latest URL stored
#[tokio::test]
async fn replaces_existing_cover_image() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_moodboard_tables()
        .with_upload_dir()
        .build()
        .await
        .unwrap();
    let (db, dir) = test.db_and_upload_dir().await.unwrap();
    let storage = FileStorageService::new(dir);

    let moodboard = factory::moodboard::MoodboardFactory::new(db)
        .cover_image_url(Some("/uploads/old.png"))
        .build()
        .await?;

    let service = MoodboardService::new(db, &storage);
    let updated = service
        .upload_cover_image(moodboard.id, jpeg_upload("new.png"))
        .await?
        .unwrap();

    let cover = updated.cover_image_url.unwrap();
    assert_ne!(cover, "/uploads/old.png");
    assert!(cover.ends_with(".png"));

    Ok(())
}

/// Tests uploading a cover image for a moodboard that doesn't exist.
///
/// Expected: Ok(None) and no file written
#[tokio::test]
async fn returns_none_for_missing_moodboard() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_moodboard_tables()
        .with_upload_dir()
        .build()
        .await
        .unwrap();
    let (db, dir) = test.db_and_upload_dir().await.unwrap();
    let storage = FileStorageService::new(dir);

    let service = MoodboardService::new(db, &storage);
    let result = service
        .upload_cover_image(999, jpeg_upload("cover.jpg"))
        .await?;

    assert!(result.is_none());
    assert_eq!(stored_file_count(dir), 0);

    Ok(())
}
