use super::*;

/// Tests deleting a moodboard.
///
/// Expected: Ok(true) with moodboard deleted
#[tokio::test]
async fn deletes_moodboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moodboard = factory::create_moodboard(db).await?;

    let repo = MoodboardRepository::new(db);
    let deleted = repo.delete(moodboard.id).await?;

    assert!(deleted);

    let check = Moodboard::find_by_id(moodboard.id).one(db).await?;
    assert!(check.is_none());

    Ok(())
}

/// Tests deleting a moodboard cascades to its images.
///
/// Verifies that every image owned by the deleted moodboard is removed while images
/// owned by other moodboards survive.
///
/// Expected: Ok with no image left referencing the deleted moodboard
#[tokio::test]
async fn cascades_to_images() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (moodboard, _images) = factory::helpers::create_moodboard_with_images(db, 3).await?;
    let (other, _other_images) = factory::helpers::create_moodboard_with_images(db, 2).await?;

    let image_count = Image::find()
        .filter(entity::image::Column::MoodboardId.eq(moodboard.id))
        .count(db)
        .await?;
    assert_eq!(image_count, 3);

    let repo = MoodboardRepository::new(db);
    repo.delete(moodboard.id).await?;

    let image_count = Image::find()
        .filter(entity::image::Column::MoodboardId.eq(moodboard.id))
        .count(db)
        .await?;
    assert_eq!(image_count, 0);

    let other_count = Image::find()
        .filter(entity::image::Column::MoodboardId.eq(other.id))
        .count(db)
        .await?;
    assert_eq!(other_count, 2);

    Ok(())
}

/// Tests deleting a non-existent moodboard.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_moodboard() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MoodboardRepository::new(db);
    let deleted = repo.delete(999999).await?;

    assert!(!deleted);

    Ok(())
}
