use super::*;

/// Tests removing an image from its moodboard.
///
/// Removing an image from the collection deletes the image row.
///
/// Expected: Ok(true) with the image deleted and siblings kept
#[tokio::test]
async fn deletes_removed_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (moodboard, images) = factory::helpers::create_moodboard_with_images(db, 2).await?;

    let repo = MoodboardRepository::new(db);
    let removed = repo.remove_image(moodboard.id, images[0].id).await?;

    assert!(removed);
    assert!(Image::find_by_id(images[0].id).one(db).await?.is_none());

    let remaining = repo.get_by_id(moodboard.id).await?.unwrap();
    assert_eq!(remaining.images.len(), 1);
    assert_eq!(remaining.images[0].id, images[1].id);

    Ok(())
}

/// Tests that an image owned by another moodboard is not removed.
///
/// Expected: Ok(false) with the image untouched
#[tokio::test]
async fn ignores_image_of_other_moodboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moodboard = factory::create_moodboard(db).await?;
    let (_other, other_images) = factory::helpers::create_moodboard_with_images(db, 1).await?;

    let repo = MoodboardRepository::new(db);
    let removed = repo.remove_image(moodboard.id, other_images[0].id).await?;

    assert!(!removed);
    assert!(Image::find_by_id(other_images[0].id).one(db).await?.is_some());

    Ok(())
}
