use super::*;

/// Tests creating an image for an existing moodboard.
///
/// Expected: Ok with image created and linked to the moodboard
#[tokio::test]
async fn creates_image() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moodboard = factory::create_moodboard(db).await?;

    let repo = ImageRepository::new(db);
    let image = repo
        .create(CreateImageParam {
            moodboard_id: moodboard.id,
            image_url: "/uploads/a.jpg".to_string(),
        })
        .await?;

    assert!(image.id > 0);
    assert_eq!(image.image_url, "/uploads/a.jpg");
    assert_eq!(image.moodboard_id, moodboard.id);

    let db_image = Image::find_by_id(image.id).one(db).await?.unwrap();
    assert_eq!(db_image.moodboard_id, moodboard.id);

    Ok(())
}

/// Tests creating an image for a non-existent moodboard.
///
/// The foreign key forbids images without a parent moodboard.
///
/// Expected: Err(DbErr) with no image row persisted
#[tokio::test]
async fn fails_for_nonexistent_moodboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ImageRepository::new(db);
    let result = repo
        .create(CreateImageParam {
            moodboard_id: 999999,
            image_url: "/uploads/a.jpg".to_string(),
        })
        .await;

    assert!(result.is_err());

    let count = Image::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
