use super::*;

/// Tests adding an image to a moodboard.
///
/// Verifies that the returned image URL names the stored file and that the moodboard
/// lists the new image afterwards.
///
/// Expected: Ok(Some) with image created
#[tokio::test]
async fn adds_image_to_moodboard() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_moodboard_tables()
        .with_upload_dir()
        .build()
        .await
        .unwrap();
    let (db, dir) = test.db_and_upload_dir().await.unwrap();
    let storage = FileStorageService::new(dir);

    let moodboard = factory::create_moodboard(db).await?;

    let service = MoodboardService::new(db, &storage);
    let image = service
        .add_image(moodboard.id, jpeg_upload("a.jpg"))
        .await?
        .unwrap();

    assert_eq!(image.moodboard_id, moodboard.id);
    assert!(image.image_url.starts_with("/uploads/"));
    assert!(image.image_url.ends_with(".jpg"));

    let file_name = image.image_url.trim_start_matches("/uploads/");
    let stored = tokio::fs::read(dir.join(file_name)).await?;
    assert_eq!(stored, vec![0xff, 0xd8, 0xff, 0xe0]);

    let reloaded = service.get_by_id(moodboard.id).await?.unwrap();
    assert_eq!(reloaded.images.len(), 1);
    assert_eq!(reloaded.images[0].image_url, image.image_url);

    Ok(())
}

/// Tests that repeated uploads of the same file name produce distinct images.
///
/// Expected: Ok with two images and two files on disk
#[tokio::test]
async fn stores_each_upload_separately() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_moodboard_tables()
        .with_upload_dir()
        .build()
        .await
        .unwrap();
    let (db, dir) = test.db_and_upload_dir().await.unwrap();
    let storage = FileStorageService::new(dir);

    let moodboard = factory::create_moodboard(db).await?;

    let service = MoodboardService::new(db, &storage);
    let first = service
        .add_image(moodboard.id, jpeg_upload("a.jpg"))
        .await?
        .unwrap();
    let second = service
        .add_image(moodboard.id, jpeg_upload("a.jpg"))
        .await?
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.image_url, second.image_url);
    assert_eq!(stored_file_count(dir), 2);
    assert_eq!(Image::find().count(db).await?, 2);

    Ok(())
}

/// Tests adding an image to a moodboard that doesn't exist.
///
/// Expected: Ok(None) with no file written and no image row
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
    let result = service.add_image(42, jpeg_upload("a.jpg")).await?;

    assert!(result.is_none());
    assert_eq!(stored_file_count(dir), 0);
    assert_eq!(Image::find().count(db).await?, 0);

    Ok(())
}
