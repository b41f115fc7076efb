use super::*;

/// Tests listing the images of a moodboard.
///
/// Expected: Ok with the moodboard's images in insertion order
#[tokio::test]
async fn returns_images_in_insertion_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (moodboard, images) = factory::helpers::create_moodboard_with_images(db, 3).await?;
    factory::helpers::create_moodboard_with_images(db, 2).await?;

    let repo = ImageRepository::new(db);
    let result = repo.get_by_moodboard_id(moodboard.id).await?;

    let ids: Vec<i32> = result.iter().map(|i| i.id).collect();
    assert_eq!(ids, images.iter().map(|i| i.id).collect::<Vec<_>>());

    Ok(())
}

/// Tests listing images of a moodboard without any.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_for_moodboard_without_images() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moodboard = factory::create_moodboard(db).await?;

    let repo = ImageRepository::new(db);
    let result = repo.get_by_moodboard_id(moodboard.id).await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that stored image URLs are returned unchanged.
///
/// Expected: Ok with the URL as inserted
#[tokio::test]
async fn returns_stored_image_url() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moodboard = factory::create_moodboard(db).await?;
    factory::image::ImageFactory::new(db, moodboard.id)
        .image_url("/uploads/0123abcd.webp")
        .build()
        .await?;

    let repo = ImageRepository::new(db);
    let result = repo.get_by_moodboard_id(moodboard.id).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].image_url, "/uploads/0123abcd.webp");
    assert_eq!(result[0].moodboard_id, moodboard.id);

    Ok(())
}
