use super::*;

/// Tests listing moodboards on an empty database.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MoodboardRepository::new(db);
    let moodboards = repo.get_all().await?;

    assert!(moodboards.is_empty());

    Ok(())
}

/// Tests listing moodboards with their images.
///
/// Verifies that moodboards are ordered by ID and that each one carries only its own
/// images, in insertion order.
///
/// Expected: Ok with nested images grouped by owner
#[tokio::test]
async fn returns_moodboards_with_their_images() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, first_images) = factory::helpers::create_moodboard_with_images(db, 2).await?;
    let empty = factory::create_moodboard(db).await?;
    let (third, third_images) = factory::helpers::create_moodboard_with_images(db, 1).await?;

    let repo = MoodboardRepository::new(db);
    let moodboards = repo.get_all().await?;

    assert_eq!(moodboards.len(), 3);
    assert_eq!(moodboards[0].id, first.id);
    assert_eq!(moodboards[1].id, empty.id);
    assert_eq!(moodboards[2].id, third.id);

    let first_ids: Vec<i32> = moodboards[0].images.iter().map(|i| i.id).collect();
    assert_eq!(first_ids, first_images.iter().map(|i| i.id).collect::<Vec<_>>());
    assert!(moodboards[1].images.is_empty());
    assert_eq!(moodboards[2].images.len(), 1);
    assert_eq!(moodboards[2].images[0].image_url, third_images[0].image_url);
    assert!(moodboards
        .iter()
        .all(|m| m.images.iter().all(|i| i.moodboard_id == m.id)));

    Ok(())
}
